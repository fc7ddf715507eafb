use log::debug;
use utoipa::OpenApi;

use crate::{
    config::Config,
    songs::{entities::SongRecord, errors::Result},
};

/// OpenAPI components published by the song endpoints.
#[derive(OpenApi)]
#[openapi(components(schemas(SongRecord)))]
pub struct ApiDoc;

/// The API document with title and version taken from `config`.
#[must_use]
pub fn document(config: &Config) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title.clone_from(&config.api_title);
    doc.info.version.clone_from(&config.api_version);
    doc
}

/// Render the API document as JSON text.
pub fn render(config: &Config) -> Result<String> {
    let doc = document(config);
    debug!(
        "Rendering OpenAPI document {} {}",
        doc.info.title, doc.info.version
    );
    let out = if config.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    Ok(out)
}
