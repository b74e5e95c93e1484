//! Builders for Adaptive Card element descriptors.
//!
//! Each builder takes a parameter struct, fills the documented defaults, runs free text through
//! the mention/emoji pipeline and returns a value that serializes to the card schema JSON.
//! [`ElementBuilder::build_value`] is the validating entry point for untyped JSON parameters.

pub mod builder;
pub mod config;
pub mod elements;
pub mod emoji;
pub mod enums;
pub mod errors;
pub mod people;
pub mod preprocess;
pub mod validate;

pub use builder::{ElementBuilder, build_element};
pub use config::{ElementsConfig, ElementsConfigError, TextConfig, UnknownFieldPolicy};
pub use elements::{
    CardElement, Image, ImageParams, Inline, InlineParams, Media, MediaParams, MediaSource,
    MediaSourceParams, MsTeams, RichTextBlock, RichTextBlockParams, TextBlock, TextBlockParams,
    TextRun, TextRunParams, image, media, media_source, rich_text_block, text_block, text_run,
};
pub use emoji::{EmojiConverter, NoopEmojiConverter, ShortcodeEmojiConverter};
pub use enums::{
    EnumRegistry, Height, HorizontalAlignment, ImageSize, ImageStyle, Spacing, TextColor,
    TextFontType, TextSize, TextStyle, TextWeight,
};
pub use errors::ElementError;
pub use people::{GraphUser, PeopleIcon, PeopleIconProperties, UserIdentity, user_icon, user_icon_set};
pub use preprocess::{
    AtMentionRewriter, MentionRewriter, NoopMentionRewriter, TextPreprocessor, preprocess,
};
pub use validate::ElementKind;
