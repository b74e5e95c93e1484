use super::{
    DEFAULT_HORIZONTAL_ALIGNMENT, DEFAULT_IS_SUBTLE, DEFAULT_IS_VISIBLE, DEFAULT_SEPARATOR,
    DEFAULT_TEXT_STYLE, DEFAULT_WRAP,
};
use crate::enums::{
    Height, HorizontalAlignment, Spacing, TextColor, TextFontType, TextSize, TextStyle, TextWeight,
};
use crate::preprocess::{TextPreprocessor, default_preprocessor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlockParams {
    pub text: String,
    pub color: Option<TextColor>,
    pub font_type: Option<TextFontType>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub is_subtle: Option<bool>,
    pub max_lines: Option<u32>,
    pub size: Option<TextSize>,
    pub weight: Option<TextWeight>,
    pub wrap: Option<bool>,
    pub style: Option<TextStyle>,
    pub height: Option<Height>,
    pub separator: Option<bool>,
    pub spacing: Option<Spacing>,
    pub id: Option<String>,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TextBlock", rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<TextFontType>,
    pub horizontal_alignment: HorizontalAlignment,
    pub is_subtle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
    pub wrap: bool,
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    pub separator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub is_visible: bool,
}

/// Builds a TextBlock with the default text pipeline.
pub fn text_block(params: TextBlockParams) -> TextBlock {
    build(params, default_preprocessor())
}

pub(crate) fn build(params: TextBlockParams, preprocessor: &TextPreprocessor) -> TextBlock {
    TextBlock {
        text: preprocessor.preprocess(&params.text),
        color: params.color,
        font_type: params.font_type,
        horizontal_alignment: params
            .horizontal_alignment
            .unwrap_or(DEFAULT_HORIZONTAL_ALIGNMENT),
        is_subtle: params.is_subtle.unwrap_or(DEFAULT_IS_SUBTLE),
        max_lines: params.max_lines,
        size: params.size,
        weight: params.weight,
        wrap: params.wrap.unwrap_or(DEFAULT_WRAP),
        style: params.style.unwrap_or(DEFAULT_TEXT_STYLE),
        height: params.height,
        separator: params.separator.unwrap_or(DEFAULT_SEPARATOR),
        spacing: params.spacing,
        id: params.id,
        is_visible: params.is_visible.unwrap_or(DEFAULT_IS_VISIBLE),
    }
}
