use std::{io::Read, path::Path};

use log::debug;
use serde_json::{Map, Value};

use crate::songs::{
    entities::SongRecord,
    errors::{Error, Result},
};

// JSON type name used in mismatch reports
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn take_string(map: &mut Map<String, Value>, field: &'static str) -> Result<String> {
    match map.remove(field) {
        None => Err(Error::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::TypeMismatch {
            field,
            found: kind_of(&other),
        }),
    }
}

/// Decode a song from an already parsed JSON value.
///
/// Fields are checked in [`SongRecord::FIELDS`] order and the first failing
/// one is reported. Extra keys are ignored. Duplicate keys are resolved by
/// the JSON parser before this point, so the last occurrence wins.
pub fn from_json_value(value: Value) -> Result<SongRecord> {
    let Value::Object(mut map) = value else {
        return Err(Error::UnexpectedShape("a JSON object"));
    };
    let [id, title, artist, audio_url, image_url] = SongRecord::FIELDS;
    Ok(SongRecord::new(
        take_string(&mut map, id)?,
        take_string(&mut map, title)?,
        take_string(&mut map, artist)?,
        take_string(&mut map, audio_url)?,
        take_string(&mut map, image_url)?,
    ))
}

/// Decode a single song from JSON text.
pub fn from_json_str(input: &str) -> Result<SongRecord> {
    let value: Value = serde_json::from_str(input)?;
    from_json_value(value)
}

/// Decode either one song object or an array of song objects.
pub fn many_from_json_str(input: &str) -> Result<Vec<SongRecord>> {
    let value: Value = serde_json::from_str(input)?;
    let songs = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                from_json_value(item).map_err(|e| Error::InvalidRecord {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Value::Object(_) => vec![from_json_value(value)?],
        _ => {
            return Err(Error::UnexpectedShape(
                "a JSON object or an array of objects",
            ));
        }
    };
    debug!("Decoded {} song records", songs.len());
    Ok(songs)
}

/// Encode a song as a JSON object value.
pub fn to_json_value(song: &SongRecord) -> Result<Value> {
    Ok(serde_json::to_value(song)?)
}

/// Encode a song as JSON text.
pub fn to_json_string(song: &SongRecord, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(song)?
    } else {
        serde_json::to_string(song)?
    };
    Ok(out)
}

/// Encode a list of songs as a JSON array.
pub fn many_to_json_string(songs: &[SongRecord], pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(songs)?
    } else {
        serde_json::to_string(songs)?
    };
    Ok(out)
}

/// Read and decode songs from `path`, or from `stdin` when `path` is `None` or `-`.
pub fn read_songs<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<Vec<SongRecord>> {
    let input = match path {
        Some(p) if p != Path::new("-") => {
            debug!("Reading songs from {p:?}");
            std::fs::read_to_string(p)?
        }
        _ => {
            debug!("Reading songs from stdin");
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    many_from_json_str(&input)
}

/// Decode songs like [`read_songs`] and encode them back as a JSON array.
pub fn decode_to_json<R: Read>(path: Option<&Path>, stdin: R, pretty: bool) -> Result<String> {
    let songs = read_songs(path, stdin)?;
    many_to_json_string(&songs, pretty)
}
