/// Logging port used by use cases and the catalog session.
///
/// Implementations live in the infrastructure layer (see the `logger` crate).
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
