pub mod extract;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
