/// Sequencing modes shared by configuration and the playback store
use serde::{Deserialize, Serialize};

/// Repeat mode, applied when a track finishes on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Advance through the play order and stop at its end
    #[default]
    Off,
    /// Advance and wrap to the first track
    All,
    /// Replay the current track
    One,
}

impl RepeatMode {
    /// Next mode in the player button cycle: off, all, one
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::All => "all",
            Self::One => "one",
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shuffle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Library order
    #[default]
    Off,
    /// Random permutation of the library, fixed until the library changes
    Random,
}

impl ShuffleMode {
    /// Check if shuffling is enabled
    pub fn is_on(self) -> bool {
        self != Self::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_cycle_visits_every_mode() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn modes_deserialize_lowercase() {
        let mode: RepeatMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(mode, RepeatMode::All);
        let shuffle: ShuffleMode = serde_json::from_str("\"random\"").unwrap();
        assert!(shuffle.is_on());
    }
}
