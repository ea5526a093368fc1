use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScmError {
    #[error("No usable '{0}' executable found")]
    NotFound(String),

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, ScmError>;
