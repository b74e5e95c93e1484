use super::{
    DEFAULT_HORIZONTAL_ALIGNMENT, DEFAULT_IS_SUBTLE, DEFAULT_IS_VISIBLE, DEFAULT_RUN_DECORATION,
    DEFAULT_SEPARATOR,
};
use crate::enums::{
    Height, HorizontalAlignment, Spacing, TextColor, TextFontType, TextSize, TextWeight,
};
use crate::preprocess::{TextPreprocessor, default_preprocessor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRunParams {
    pub text: String,
    pub color: Option<TextColor>,
    pub font_type: Option<TextFontType>,
    pub highlight: Option<bool>,
    pub is_subtle: Option<bool>,
    pub italic: Option<bool>,
    pub select_action: Option<Value>,
    pub strikethrough: Option<bool>,
    pub underline: Option<bool>,
    pub size: Option<TextSize>,
    pub weight: Option<TextWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TextRun", rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<TextFontType>,
    pub highlight: bool,
    pub is_subtle: bool,
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Value>,
    pub strikethrough: bool,
    pub underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
}

pub fn text_run(params: TextRunParams) -> TextRun {
    build_run(params, default_preprocessor())
}

pub(crate) fn build_run(params: TextRunParams, preprocessor: &TextPreprocessor) -> TextRun {
    TextRun {
        text: preprocessor.preprocess(&params.text),
        color: params.color,
        font_type: params.font_type,
        highlight: params.highlight.unwrap_or(DEFAULT_RUN_DECORATION),
        is_subtle: params.is_subtle.unwrap_or(DEFAULT_IS_SUBTLE),
        italic: params.italic.unwrap_or(DEFAULT_RUN_DECORATION),
        select_action: params.select_action,
        strikethrough: params.strikethrough.unwrap_or(DEFAULT_RUN_DECORATION),
        underline: params.underline.unwrap_or(DEFAULT_RUN_DECORATION),
        size: params.size,
        weight: params.weight,
    }
}

/// An inline is either a bare string or a TextRun.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InlineParams {
    Text(String),
    Run(TextRunParams),
}

impl From<&str> for InlineParams {
    fn from(value: &str) -> Self {
        InlineParams::Text(value.to_string())
    }
}

impl From<TextRunParams> for InlineParams {
    fn from(value: TextRunParams) -> Self {
        InlineParams::Run(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inline {
    /// Bare strings are embedded verbatim.
    Text(String),
    Run(TextRun),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextBlockParams {
    pub inlines: Vec<InlineParams>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub height: Option<Height>,
    pub separator: Option<bool>,
    pub spacing: Option<Spacing>,
    pub id: Option<String>,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RichTextBlock", rename_all = "camelCase")]
pub struct RichTextBlock {
    pub inlines: Vec<Inline>,
    pub horizontal_alignment: HorizontalAlignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    pub separator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub is_visible: bool,
}

pub fn rich_text_block(params: RichTextBlockParams) -> RichTextBlock {
    build_block(params, default_preprocessor())
}

pub(crate) fn build_block(
    params: RichTextBlockParams,
    preprocessor: &TextPreprocessor,
) -> RichTextBlock {
    let inlines = params
        .inlines
        .into_iter()
        .map(|inline| match inline {
            InlineParams::Text(text) => Inline::Text(text),
            InlineParams::Run(run) => Inline::Run(build_run(run, preprocessor)),
        })
        .collect();
    RichTextBlock {
        inlines,
        horizontal_alignment: params
            .horizontal_alignment
            .unwrap_or(DEFAULT_HORIZONTAL_ALIGNMENT),
        height: params.height,
        separator: params.separator.unwrap_or(DEFAULT_SEPARATOR),
        spacing: params.spacing,
        id: params.id,
        is_visible: params.is_visible.unwrap_or(DEFAULT_IS_VISIBLE),
    }
}
