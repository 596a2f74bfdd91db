use crate::domain::product::errors::ValidationError;

use super::entry::LocalKey;

/// Failures of the remote catalog as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("catalog.transport: {0}")]
    Transport(String),
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.rejected: {status} {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("transfer.invalid_json")]
    InvalidJson,
    #[error("transfer.not_an_array")]
    NotAnArray,
    #[error("transfer.serialization_failed")]
    SerializationFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error("catalog.unknown_entry: {0}")]
    UnknownEntry(LocalKey),
}
