pub mod entries;
pub mod filter;
pub mod navigation;
pub mod store;
pub mod ui;
