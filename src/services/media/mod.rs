/// Transport intents and player action routing
pub mod commands;
/// Media error types
pub mod error;
/// Player snapshot sources
pub mod feed;
/// Active player filtering
pub mod filter;
/// Presentation state and surface
pub mod presentation;
/// Current player resolution
pub mod resolver;
/// Player selection state
pub mod selection;
/// Media session service
pub mod service;
mod sync;
/// Player and queue types
pub mod types;

#[cfg(test)]
mod tests;

pub use commands::{CustomAction, PlayerActionDispatcher, TransportIntent};
pub use error::*;
pub use feed::{PlayerFeed, PlayerRegistry};
pub use filter::active_players;
pub use presentation::{PresentationState, PresentationSurface};
pub use resolver::resolve_current;
pub use selection::{PlayerSelection, next_index};
pub use service::MediaSessionService;
pub use types::*;
