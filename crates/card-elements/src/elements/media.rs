use super::{DEFAULT_IS_VISIBLE, DEFAULT_SEPARATOR};
use crate::enums::{Height, Spacing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSourceParams {
    pub mime_type: String,
    pub url: String,
}

/// One playable source of a Media element. Has no `type` discriminant in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub mime_type: String,
    pub url: String,
}

pub fn media_source(params: MediaSourceParams) -> MediaSource {
    MediaSource {
        mime_type: params.mime_type,
        url: params.url,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaParams {
    pub sources: Vec<MediaSourceParams>,
    pub poster: Option<String>,
    pub alt_text: Option<String>,
    pub height: Option<Height>,
    pub separator: Option<bool>,
    pub spacing: Option<Spacing>,
    pub id: Option<String>,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Media", rename_all = "camelCase")]
pub struct Media {
    pub sources: Vec<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    pub separator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub is_visible: bool,
}

pub fn media(params: MediaParams) -> Media {
    Media {
        sources: params.sources.into_iter().map(media_source).collect(),
        poster: params.poster,
        alt_text: params.alt_text,
        height: params.height,
        separator: params.separator.unwrap_or(DEFAULT_SEPARATOR),
        spacing: params.spacing,
        id: params.id,
        is_visible: params.is_visible.unwrap_or(DEFAULT_IS_VISIBLE),
    }
}
