use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {var} is not valid ({reason})")]
    ConfigInvalid { var: &'static str, reason: String },

    #[error("Log file could not be opened")]
    LogFile(#[source] std::io::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
