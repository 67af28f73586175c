//! Command bridge between UI intents and the backend.
//!
//! Every call is issued exactly once; failures are handed back to the caller
//! untouched.

use crate::domain::models::PassEntry;
use crate::domain::store::PassBackend;
use anyhow::Result;
use regex::RegexBuilder;

/// Fetch every entry name and keep the ones matching `filter`, sorted by name.
pub async fn list_entries(
    backend: &dyn PassBackend,
    filter: Option<&str>,
) -> Result<Vec<PassEntry>> {
    let names = backend.list_pass_entries().await?;
    let mut names = match filter {
        Some(f) if !f.is_empty() => filter_names(names, f),
        _ => names,
    };
    names.sort();
    names.dedup();
    Ok(names.into_iter().map(PassEntry::new).collect())
}

pub async fn get_entry(backend: &dyn PassBackend, name: &str) -> Result<String> {
    backend.get_entry(name).await
}

pub async fn edit_entry(backend: &dyn PassBackend, name: &str, content: &str) -> Result<()> {
    backend.edit_entry(name, content).await
}

pub async fn remove_entry(backend: &dyn PassBackend, name: &str) -> Result<()> {
    backend.remove_entry(name).await
}

/// Case-insensitive match of `filter` against each name. The filter is read as
/// a regular expression; anything that fails to compile is matched literally.
pub fn filter_names(names: Vec<String>, filter: &str) -> Vec<String> {
    match RegexBuilder::new(filter).case_insensitive(true).build() {
        Ok(re) => names.into_iter().filter(|n| re.is_match(n)).collect(),
        Err(_) => {
            let needle = filter.to_lowercase();
            names
                .into_iter()
                .filter(|n| n.to_lowercase().contains(&needle))
                .collect()
        }
    }
}
