/// Reactive primitives shared by services
pub mod common;
/// Media session service
pub mod media;

pub use media::{MediaSessionService, PlayerRegistry};
