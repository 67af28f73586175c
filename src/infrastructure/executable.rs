use super::error::StoreError;
use anyhow::Result;
use tokio::process::Command;

/// First non-empty line of `which <program>`.
pub async fn query_path(program: &str) -> Result<String> {
    let stdout = spawn_for_stdout("which", &[program]).await?;
    parse_path(&stdout).ok_or_else(|| {
        StoreError::CommandFailed {
            program: "which".to_string(),
            args: program.to_string(),
            stderr: "no path reported".to_string(),
        }
        .into()
    })
}

/// Version string out of `<program> version`.
pub async fn query_version(program: &str) -> Result<String> {
    let stdout = spawn_for_stdout(program, &["version"]).await?;
    parse_version(&stdout).ok_or_else(|| {
        StoreError::CommandFailed {
            program: program.to_string(),
            args: "version".to_string(),
            stderr: "no version line in output".to_string(),
        }
        .into()
    })
}

async fn spawn_for_stdout(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output().await?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StoreError::CommandFailed {
            program: program.to_string(),
            args: args.join(" "),
            stderr: stderr.trim().to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn parse_path(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// `pass version` prints a boxed banner; the version sits on the line that
/// contains a `v`, padded with spaces and `=`. The last such line wins.
pub fn parse_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .filter(|l| l.contains('v'))
        .map(|l| l.replace(['v', ' ', '='], ""))
        .filter(|v| !v.is_empty())
        .last()
}
