pub mod error;
pub mod executable;
pub mod pass_adapter;

pub use error::StoreError;
pub use pass_adapter::PassAdapter;
