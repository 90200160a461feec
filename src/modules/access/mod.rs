// Access gate for mutating HTTP operations

pub mod authorizer;
pub mod middleware;

pub use authorizer::{Authorizer, SharedSecretAuthorizer};
pub use middleware::require_bearer;
