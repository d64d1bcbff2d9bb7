use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Media session configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct MediaConfig {
    /// Player id patterns to drop from the feed before active players are selected
    pub ignored_players: Vec<String>,
}
