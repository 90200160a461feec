/// Shared infrastructure concerns
///
/// Infrastructure used by every bounded context: the Postgres connection
/// pool and the embedded schema migrations.
pub mod database;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool};
