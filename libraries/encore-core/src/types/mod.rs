mod ids;
mod modes;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId};
pub use modes::{RepeatMode, ShuffleMode};
pub use playlist::Playlist;
pub use track::{extension_of, Track};
