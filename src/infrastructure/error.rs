use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{program} {args} failed: {stderr}")]
    CommandFailed {
        program: String,
        args: String,
        stderr: String,
    },
    #[error("invalid entry name '{0}'")]
    InvalidName(String),
    #[error("{0} produced output that is not valid UTF-8")]
    NonUtf8Output(String),
    #[error("password store {0} does not exist")]
    StoreMissing(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
