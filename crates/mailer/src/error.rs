#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("{0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("send task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Failure reported by a non-SMTP backend
    #[error("{0}")]
    Provider(String),
}
