//! Quiz songs - the song record served by the quiz backend
//!
//! This library provides the immutable [`SongRecord`](songs::SongRecord)
//! exchanged as JSON with quiz clients, its OpenAPI schema, and the
//! configuration used when rendering either.

/// Environment driven settings
pub mod config;
/// Song record, JSON codec and API documentation
pub mod songs;
