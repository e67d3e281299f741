use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunAllError {
    #[error("Invalid directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Command execution failed: {0}")]
    Command(String),

    #[error("Command(s) must be provided using the --command flag.")]
    MissingCommand,

    #[error("User cancelled")]
    UserCancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunAllError>;
