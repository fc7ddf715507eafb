/// JSON decoding with classified errors, and encoding
pub mod codec;
/// The song record
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// OpenAPI document for the song schema
pub mod openapi;

pub use entities::SongRecord;
pub use errors::{Error, Result};
