// Shared kernel: cross-cutting concerns used by every bounded context

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool, migrations)
pub mod utils; // Logging and input validation

// Re-exports for convenience
pub use config::Config;
pub use infrastructure::database::Database;
