use std::fmt;
use std::time::Duration;

/// Unique identifier for a media player
///
/// Stable across state updates: a player keeps its id while its
/// snapshot is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from the identifier reported by the player registry
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is not doing anything
    #[default]
    Idle,
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            _ => Self::Idle,
        }
    }
}

/// Repeat mode of a player queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// No repetition
    #[default]
    Off,

    /// Repeat the current item
    One,

    /// Repeat the whole queue
    All,
}

impl RepeatMode {
    /// The mode a repeat toggle moves to from this one.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::One,
            Self::One => Self::All,
            Self::All => Self::Off,
        }
    }
}

impl From<&str> for RepeatMode {
    fn from(mode: &str) -> Self {
        match mode {
            "one" => Self::One,
            "all" => Self::All,
            _ => Self::Off,
        }
    }
}

impl From<RepeatMode> for &'static str {
    fn from(mode: RepeatMode) -> Self {
        match mode {
            RepeatMode::Off => "off",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

/// An item of a player queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    /// Queue item identifier
    pub id: String,
    /// Track title
    pub title: String,
    /// Track artist, if known
    pub artist: Option<String>,
    /// Track length, if known
    pub duration: Option<Duration>,
}

impl QueueItem {
    /// Create a queue item with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            duration: None,
        }
    }
}

/// Queue state reported alongside a player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueInfo {
    /// Item being played, `None` when the queue is empty
    pub current_item: Option<QueueItem>,
    /// Whether shuffle is enabled
    pub shuffle_enabled: bool,
    /// Current repeat mode
    pub repeat_mode: RepeatMode,
}

impl QueueInfo {
    /// Create a queue positioned on `item`.
    pub fn playing(item: QueueItem) -> Self {
        Self {
            current_item: Some(item),
            ..Self::default()
        }
    }
}

/// One player's reported state at a point in time.
///
/// Snapshots are immutable values; the registry replaces them wholesale
/// whenever the player reports a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Stable player identity
    pub id: PlayerId,
    /// Human-readable player name
    pub name: String,
    /// Current playback state
    pub playback_state: PlaybackState,
    /// Queue state, absent when the player has no queue
    pub queue: Option<QueueInfo>,
}

impl PlayerSnapshot {
    /// Create an idle snapshot without a queue.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            playback_state: PlaybackState::Idle,
            queue: None,
        }
    }

    /// Replace the playback state.
    pub fn with_playback_state(mut self, state: PlaybackState) -> Self {
        self.playback_state = state;
        self
    }

    /// Replace the queue.
    pub fn with_queue(mut self, queue: QueueInfo) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Whether the player is engaged in playback of a queue.
    ///
    /// True when the queue exists and has a current item.
    pub fn is_active(&self) -> bool {
        self.queue
            .as_ref()
            .is_some_and(|queue| queue.current_item.is_some())
    }
}

/// Command sent to a player through the action dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Toggle between playing and paused
    TogglePlayPause,

    /// Skip to the next item
    Next,

    /// Skip to the previous item
    Previous,

    /// Toggle shuffle; the receiver sets `!current`
    ToggleShuffle {
        /// Shuffle flag at the time the toggle was requested
        current: bool,
    },

    /// Toggle repeat; the receiver sets `current.next()`
    ToggleRepeatMode {
        /// Repeat mode at the time the toggle was requested
        current: RepeatMode,
    },
}
