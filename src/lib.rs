//! nowplaying - keeps a single "now playing" surface in sync with a set of media players.
//!
//! The session service watches a feed of player snapshots, keeps the players
//! that are engaged in playback, selects one of them as current and pushes
//! every change to an external presentation surface (session state plus a
//! persistent notification). Transport intents from that surface are routed
//! back to the current player or switch the selection.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use nowplaying::config::Config;
//! use nowplaying::services::media::{
//!     MediaError, MediaSessionService, PlayerAction, PlayerActionDispatcher, PlayerId,
//!     PlayerRegistry, PlayerSnapshot, PresentationState, PresentationSurface, TransportIntent,
//! };
//!
//! struct Dispatcher;
//!
//! #[async_trait]
//! impl PlayerActionDispatcher for Dispatcher {
//!     async fn dispatch(&self, player: &PlayerId, action: PlayerAction) -> Result<(), MediaError> {
//!         println!("{player}: {action:?}");
//!         Ok(())
//!     }
//! }
//!
//! struct Surface;
//!
//! #[async_trait]
//! impl PresentationSurface for Surface {
//!     async fn update_playback_state(&self, state: &PresentationState) -> Result<(), MediaError> {
//!         println!("{state:?}");
//!         Ok(())
//!     }
//!
//!     async fn publish_notification(
//!         &self,
//!         _player: Option<&PlayerSnapshot>,
//!     ) -> Result<(), MediaError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_default()?;
//! nowplaying::tracing_config::init(&config.general)?;
//! let registry = Arc::new(PlayerRegistry::new());
//! let service = MediaSessionService::start(
//!     config.media,
//!     registry.clone(),
//!     Arc::new(Dispatcher),
//!     Arc::new(Surface),
//! );
//!
//! service
//!     .handle_intent(TransportIntent::Custom("ACTION_SWITCH_PLAYER".to_string()))
//!     .await;
//! service.stop().await;
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{NowPlayingError, Result};
