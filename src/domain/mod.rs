pub mod bridge;
pub mod models;
pub mod store;
