//! Element parameter structs, output types and their builders.

pub mod image;
pub mod media;
pub mod rich_text;
pub mod text_block;

pub use image::{Image, ImageParams, MsTeams, image};
pub use media::{Media, MediaParams, MediaSource, MediaSourceParams, media, media_source};
pub use rich_text::{
    Inline, InlineParams, RichTextBlock, RichTextBlockParams, TextRun, TextRunParams,
    rich_text_block, text_run,
};
pub use text_block::{TextBlock, TextBlockParams, text_block};

use crate::enums::{HorizontalAlignment, TextStyle};
use crate::people::PeopleIcon;
use serde::Serialize;

pub const DEFAULT_HORIZONTAL_ALIGNMENT: HorizontalAlignment = HorizontalAlignment::Left;
pub const DEFAULT_WRAP: bool = true;
pub const DEFAULT_TEXT_STYLE: TextStyle = TextStyle::Default;
pub const DEFAULT_IS_SUBTLE: bool = false;
pub const DEFAULT_SEPARATOR: bool = false;
pub const DEFAULT_IS_VISIBLE: bool = true;
pub const DEFAULT_IMAGE_ALT_TEXT: &str = "image";
/// Default for `highlight`, `italic`, `strikethrough` and `underline` on a TextRun.
pub const DEFAULT_RUN_DECORATION: bool = false;

/// Any element produced by this crate.
///
/// Untagged: each variant already serializes its own `type` discriminant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CardElement {
    TextBlock(TextBlock),
    Image(Image),
    Media(Media),
    MediaSource(MediaSource),
    RichTextBlock(RichTextBlock),
    TextRun(TextRun),
    PeopleIcon(PeopleIcon),
}

impl CardElement {
    /// Schema type name. `MediaSource` carries no discriminant in JSON but is named here.
    pub fn type_name(&self) -> &'static str {
        match self {
            CardElement::TextBlock(_) => "TextBlock",
            CardElement::Image(_) => "Image",
            CardElement::Media(_) => "Media",
            CardElement::MediaSource(_) => "MediaSource",
            CardElement::RichTextBlock(_) => "RichTextBlock",
            CardElement::TextRun(_) => "TextRun",
            CardElement::PeopleIcon(_) => "Component",
        }
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for CardElement {
                fn from(value: $variant) -> Self {
                    CardElement::$variant(value)
                }
            }
        )+
    };
}

impl_from_element!(TextBlock, Image, Media, MediaSource, RichTextBlock, TextRun, PeopleIcon);
