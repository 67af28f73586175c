use anyhow::Result;
use async_trait::async_trait;

/// The named operations the external credential store exposes.
///
/// Implementations only move data in and out of the backend; filtering,
/// sorting and wrapping names into entries is done by [`crate::domain::bridge`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PassBackend: Send + Sync {
    // `list_pass_entries`: every entry name in the store, unordered
    async fn list_pass_entries(&self) -> Result<Vec<String>>;

    // `get_entry`: decrypted content of one entry
    async fn get_entry(&self, entry_name: &str) -> Result<String>;

    // `edit_entry`: overwrite an entry with new content
    async fn edit_entry(&self, entry_name: &str, entry_contents: &str) -> Result<()>;

    // `remove_entry`: delete an entry from the store
    async fn remove_entry(&self, entry_name: &str) -> Result<()>;

    // Host queries about the backend binary itself
    async fn executable_path(&self) -> Result<String>;
    async fn executable_version(&self) -> Result<String>;

    fn store_dir(&self) -> std::path::PathBuf;
}
