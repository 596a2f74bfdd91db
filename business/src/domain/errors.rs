/// Failures of the Product Record Store.
///
/// Messages are code-style identifiers so clients can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No document has the requested id.
    #[error("repository.not_found")]
    NotFound,
    /// The store could not be reached or rejected the statement.
    #[error("repository.database_error")]
    DatabaseError,
}
