use crate::config::{ElementsConfig, UnknownFieldPolicy};
use crate::elements::{
    CardElement, Image, ImageParams, Media, MediaParams, MediaSource, MediaSourceParams,
    RichTextBlock, RichTextBlockParams, TextBlock, TextBlockParams, TextRun, TextRunParams, image,
    media, rich_text, text_block,
};
use crate::emoji::{EmojiConverter, NoopEmojiConverter, ShortcodeEmojiConverter};
use crate::errors::ElementError;
use crate::people::{self, PeopleIcon, UserIdentity};
use crate::preprocess::{AtMentionRewriter, MentionRewriter, NoopMentionRewriter, TextPreprocessor};
use crate::validate::{ElementKind, check_params};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Builds card elements with a configurable text pipeline and JSON boundary policy.
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    preprocessor: TextPreprocessor,
    unknown_fields: UnknownFieldPolicy,
}

impl ElementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ElementsConfig) -> Self {
        let mentions: Arc<dyn MentionRewriter> = if config.text.rewrite_mentions {
            Arc::new(AtMentionRewriter)
        } else {
            Arc::new(NoopMentionRewriter)
        };
        let emoji: Arc<dyn EmojiConverter> = if config.text.convert_emoji {
            Arc::new(ShortcodeEmojiConverter)
        } else {
            Arc::new(NoopEmojiConverter)
        };
        Self {
            preprocessor: TextPreprocessor::new(mentions, emoji),
            unknown_fields: config.unknown_fields,
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: TextPreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn preprocessor(&self) -> &TextPreprocessor {
        &self.preprocessor
    }

    pub fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    pub fn text_block(&self, params: TextBlockParams) -> TextBlock {
        debug!(element = "TextBlock", "building card element");
        text_block::build(params, &self.preprocessor)
    }

    pub fn image(&self, params: ImageParams) -> Image {
        debug!(element = "Image", "building card element");
        image::image(params)
    }

    pub fn media(&self, params: MediaParams) -> Media {
        debug!(element = "Media", sources = params.sources.len(), "building card element");
        media::media(params)
    }

    pub fn media_source(&self, params: MediaSourceParams) -> MediaSource {
        media::media_source(params)
    }

    pub fn rich_text_block(&self, params: RichTextBlockParams) -> RichTextBlock {
        debug!(element = "RichTextBlock", inlines = params.inlines.len(), "building card element");
        rich_text::build_block(params, &self.preprocessor)
    }

    pub fn text_run(&self, params: TextRunParams) -> TextRun {
        rich_text::build_run(params, &self.preprocessor)
    }

    pub fn user_icon(&self, user: UserIdentity) -> PeopleIcon {
        debug!(element = "Component", component = people::PEOPLE_ICON_USER, "building card element");
        people::user_icon(user)
    }

    pub fn user_icon_set(&self, users: Vec<UserIdentity>) -> PeopleIcon {
        debug!(
            element = "Component",
            component = people::PEOPLE_ICON_USERS,
            users = users.len(),
            "building card element"
        );
        people::user_icon_set(users)
    }

    /// Validates an untyped parameter object and builds the element it describes.
    ///
    /// Fails with [`ElementError::InvalidEnumValue`] or [`ElementError::InvalidShape`] before
    /// anything is constructed.
    pub fn build_value(&self, kind: ElementKind, params: &Value) -> Result<CardElement, ElementError> {
        if let Err(err) = check_params(kind, params, self.unknown_fields) {
            debug!(kind = %kind, error = %err, "rejected element parameters");
            return Err(err);
        }
        let element: CardElement = match kind {
            ElementKind::TextBlock => self.text_block(decode(params)?).into(),
            ElementKind::Image => self.image(decode(params)?).into(),
            ElementKind::Media => self.media(decode(params)?).into(),
            ElementKind::MediaSource => self.media_source(decode(params)?).into(),
            ElementKind::RichTextBlock => self.rich_text_block(decode(params)?).into(),
            ElementKind::TextRun => self.text_run(decode(params)?).into(),
            ElementKind::UserIcon => self.user_icon(decode(params)?).into(),
            ElementKind::UserIconSet => {
                let set: UserSetParams = decode(params)?;
                self.user_icon_set(set.users).into()
            }
        };
        Ok(element)
    }
}

#[derive(serde::Deserialize)]
struct UserSetParams {
    users: Vec<UserIdentity>,
}

fn decode<T: DeserializeOwned>(params: &Value) -> Result<T, ElementError> {
    serde_json::from_value(params.clone())
        .map_err(|err| ElementError::invalid_shape("params", err.to_string()))
}

/// Builds an element from JSON parameters with the default builder.
pub fn build_element(kind: ElementKind, params: &Value) -> Result<CardElement, ElementError> {
    ElementBuilder::default().build_value(kind, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextConfig;
    use serde_json::json;

    #[test]
    fn build_value_text_block_defaults() {
        let element = build_element(ElementKind::TextBlock, &json!({"text": "@<Jane Doe> hi"}))
            .expect("element");
        let value = serde_json::to_value(&element).expect("serialize");
        assert_eq!(value["type"], json!("TextBlock"));
        assert_eq!(value["text"], json!("<at>Jane Doe</at> hi"));
        assert_eq!(value["wrap"], json!(true));
        assert_eq!(value["horizontalAlignment"], json!("left"));
    }

    #[test]
    fn build_value_rejects_before_constructing() {
        let err = build_element(ElementKind::Image, &json!({"url": "u", "size": "huge"})).unwrap_err();
        assert!(matches!(err, ElementError::InvalidEnumValue { ref field, ref value, .. } if field == "size" && value == "huge"));
    }

    #[test]
    fn build_value_image_zoom() {
        let element = build_element(
            ElementKind::Image,
            &json!({"url": "https://example.com/a.png", "allowZoom": true}),
        )
        .expect("element");
        let value = serde_json::to_value(&element).expect("serialize");
        assert_eq!(value["msTeams"], json!({"allowExpand": true}));
    }

    #[test]
    fn build_value_user_icon_set() {
        let element = build_element(
            ElementKind::UserIconSet,
            &json!({"users": [
                {"id": "1", "name": "A", "email": "a@x.com"},
                {"id": "2", "name": "B", "email": "b@x.com"}
            ]}),
        )
        .expect("element");
        assert_eq!(element.type_name(), "Component");
        let value = serde_json::to_value(&element).expect("serialize");
        assert_eq!(
            value["properties"]["users"][1],
            json!({"id": "2", "displayName": "B", "userPrincipalName": "b@x.com"})
        );
    }

    #[test]
    fn config_disables_stages() {
        let config = ElementsConfig {
            text: TextConfig {
                rewrite_mentions: false,
                convert_emoji: true,
            },
            ..ElementsConfig::default()
        };
        let builder = ElementBuilder::from_config(&config);
        let block = builder.text_block(TextBlockParams {
            text: "@<Jane> :tada:".into(),
            ..Default::default()
        });
        assert_eq!(block.text, "@<Jane> \u{1F389}");
    }

    #[test]
    fn ignore_policy_builds_with_unknown_fields() {
        let builder = ElementBuilder::new().with_unknown_fields(UnknownFieldPolicy::Ignore);
        assert_eq!(builder.unknown_fields(), UnknownFieldPolicy::Ignore);
        let element = builder
            .build_value(ElementKind::MediaSource, &json!({"mimeType": "video/mp4", "url": "u", "codec": "h264"}))
            .expect("element");
        assert_eq!(
            serde_json::to_value(&element).expect("serialize"),
            json!({"mimeType": "video/mp4", "url": "u"})
        );
    }

    #[test]
    fn custom_preprocessor_is_used_for_runs() {
        let builder = ElementBuilder::new().with_preprocessor(TextPreprocessor::raw());
        let run = builder.text_run(TextRunParams {
            text: "@<Jane>".into(),
            ..Default::default()
        });
        assert_eq!(run.text, "@<Jane>");
        assert_eq!(builder.preprocessor().preprocess(":tada:"), ":tada:");
    }
}
