use super::{
    DEFAULT_HORIZONTAL_ALIGNMENT, DEFAULT_IMAGE_ALT_TEXT, DEFAULT_IS_VISIBLE, DEFAULT_SEPARATOR,
};
use crate::enums::{HorizontalAlignment, ImageSize, ImageStyle, Spacing};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageParams {
    pub url: String,
    pub alt_text: Option<String>,
    pub background_color: Option<String>,
    /// `auto`, `stretch` or a pixel value such as `50px`.
    pub height: Option<String>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub select_action: Option<Value>,
    pub size: Option<ImageSize>,
    pub style: Option<ImageStyle>,
    pub width: Option<String>,
    pub separator: Option<bool>,
    pub spacing: Option<Spacing>,
    pub id: Option<String>,
    pub is_visible: Option<bool>,
    /// Lets Teams clients open the image in a zoomable viewer.
    pub allow_zoom: Option<bool>,
}

/// Teams-specific extension block, always emitted on images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsTeams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_expand: Option<bool>,
}

impl MsTeams {
    fn for_zoom(allow_zoom: bool) -> Self {
        if allow_zoom {
            Self {
                allow_expand: Some(true),
            }
        } else {
            Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Image", rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    pub horizontal_alignment: HorizontalAlignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    pub separator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub is_visible: bool,
    #[serde(rename = "msTeams")]
    pub ms_teams: MsTeams,
}

pub fn image(params: ImageParams) -> Image {
    let allow_zoom = params.allow_zoom.unwrap_or(false);
    let mut image = Image {
        url: params.url,
        alt_text: params
            .alt_text
            .unwrap_or_else(|| DEFAULT_IMAGE_ALT_TEXT.to_string()),
        background_color: params.background_color,
        height: params.height,
        horizontal_alignment: params
            .horizontal_alignment
            .unwrap_or(DEFAULT_HORIZONTAL_ALIGNMENT),
        select_action: params.select_action,
        size: params.size,
        style: params.style,
        width: params.width,
        separator: params.separator.unwrap_or(DEFAULT_SEPARATOR),
        spacing: params.spacing,
        id: params.id,
        is_visible: params.is_visible.unwrap_or(DEFAULT_IS_VISIBLE),
        ms_teams: MsTeams::default(),
    };
    // derived from allow_zoom after the declared fields are resolved
    image.ms_teams = MsTeams::for_zoom(allow_zoom);
    image
}
