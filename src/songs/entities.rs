use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A song as exposed by the quiz backend.
///
/// The record is immutable: every field is set by [`SongRecord::new`] (or by
/// deserialization) and only read afterwards. Equality and hashing are
/// field-wise. Serialized keys are `id`, `title`, `artist`, `audioUrl` and
/// `imageUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(description = "Song data")]
pub struct SongRecord {
    /// Unique identifier of the song
    #[schema(example = "1")]
    id: String,
    /// Title of the song
    #[schema(example = "Bohemian Rhapsody")]
    title: String,
    /// Name of the artist or band
    #[schema(example = "Queen")]
    artist: String,
    /// URL of the audio file
    #[schema(example = "https://ejemplo.com/audio/bohemian.mp3")]
    audio_url: String,
    /// URL of the cover image or thumbnail
    #[schema(example = "https://ejemplo.com/imagenes/queen.jpg")]
    image_url: String,
}

impl SongRecord {
    /// Serialized keys, in constructor order.
    pub const FIELDS: [&'static str; 5] = ["id", "title", "artist", "audioUrl", "imageUrl"];

    /// Builds a record from its five values. Empty strings are accepted.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        SongRecord {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            audio_url: audio_url.into(),
            image_url: image_url.into(),
        }
    }

    /// The record used as example in the API documentation.
    #[must_use]
    pub fn example() -> Self {
        SongRecord::new(
            "1",
            "Bohemian Rhapsody",
            "Queen",
            "https://ejemplo.com/audio/bohemian.mp3",
            "https://ejemplo.com/imagenes/queen.jpg",
        )
    }

    /// Unique identifier of the song.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Song title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Performing artist or band.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Location of the playable audio.
    #[must_use]
    pub fn audio_url(&self) -> &str {
        &self.audio_url
    }

    /// Location of the cover art.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl fmt::Display for SongRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.artist, self.title, self.id)
    }
}
