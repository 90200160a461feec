pub mod actor_ref;

pub use actor_ref::{ActorRef, IdResolution};
