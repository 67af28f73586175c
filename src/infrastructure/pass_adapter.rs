use super::error::StoreError;
use super::executable;
use crate::domain::store::PassBackend;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use walkdir::WalkDir;

const ENTRY_SUFFIX: &str = ".gpg";

/// Backend that shells out to `pass` for anything touching ciphertext and
/// walks the store directory itself for listing.
pub struct PassAdapter {
    program: String,
    store_dir: PathBuf,
}

impl PassAdapter {
    pub fn new(program: impl Into<String>, store_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            store_dir: store_dir.into(),
        }
    }

    async fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<Vec<u8>, StoreError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .env("PASSWORD_STORE_DIR", &self.store_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = cmd.spawn()?;
        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            pipe.write_all(input.as_bytes()).await?;
            // Closing stdin ends `pass insert --multiline`
            drop(pipe);
        }

        let output = child.wait_with_output().await?;
        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(StoreError::CommandFailed {
                program: self.program.clone(),
                args: args.join(" "),
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl PassBackend for PassAdapter {
    async fn list_pass_entries(&self) -> Result<Vec<String>> {
        let root = self.store_dir.clone();
        let names = tokio::task::spawn_blocking(move || walk_store(&root)).await??;
        Ok(names)
    }

    async fn get_entry(&self, entry_name: &str) -> Result<String> {
        validate_name(entry_name)?;
        let stdout = self.run(&["show", entry_name], None).await?;
        let content = String::from_utf8(stdout)
            .map_err(|_| StoreError::NonUtf8Output(format!("{} show", self.program)))?;
        Ok(content)
    }

    async fn edit_entry(&self, entry_name: &str, entry_contents: &str) -> Result<()> {
        validate_name(entry_name)?;
        self.run(
            &["insert", "--multiline", "--force", entry_name],
            Some(entry_contents),
        )
        .await?;
        Ok(())
    }

    async fn remove_entry(&self, entry_name: &str) -> Result<()> {
        validate_name(entry_name)?;
        self.run(&["rm", "--force", entry_name], None).await?;
        Ok(())
    }

    async fn executable_path(&self) -> Result<String> {
        executable::query_path(&self.program).await
    }

    async fn executable_version(&self) -> Result<String> {
        executable::query_version(&self.program).await
    }

    fn store_dir(&self) -> PathBuf {
        self.store_dir.clone()
    }
}

/// Entry names of every `*.gpg` file below `root`, relative to it and without
/// the suffix. Hidden files and directories (`.git`, `.gpg-id`) are skipped.
pub fn walk_store(root: &Path) -> Result<Vec<String>, StoreError> {
    if !root.is_dir() {
        return Err(StoreError::StoreMissing(root.display().to_string()));
    }

    let mut names = Vec::new();
    let walker = WalkDir::new(root).follow_links(true).into_iter();
    for entry in walker.filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name())) {
        // Dangling links, link loops and unreadable directories only cost
        // their own entries
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable store entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative.to_string_lossy();
        if let Some(name) = relative.strip_suffix(ENTRY_SUFFIX) {
            names.push(name.replace(std::path::MAIN_SEPARATOR, "/"));
        }
    }
    Ok(names)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(true)
}

/// Reject names that would escape the store or be read as flags by `pass`.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.trim().is_empty()
        || name.starts_with('-')
        || Path::new(name)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
    if invalid {
        Err(StoreError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}
