//! Validation of untyped JSON parameter objects before they reach a typed builder.
//!
//! Each element kind has a field table naming the JSON kind (and enum value set) of every
//! parameter it accepts. A parameter object either passes completely or the first offending
//! field is reported; nothing is built from a partially valid object.

use crate::config::UnknownFieldPolicy;
use crate::enums::{
    Height, HorizontalAlignment, ImageSize, ImageStyle, Spacing, TextColor, TextFontType,
    TextSize, TextStyle, TextWeight,
};
use crate::errors::ElementError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

/// Element kinds that can be built from a JSON parameter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    TextBlock,
    Image,
    Media,
    MediaSource,
    RichTextBlock,
    TextRun,
    UserIcon,
    UserIconSet,
}

impl ElementKind {
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::TextBlock,
        ElementKind::Image,
        ElementKind::Media,
        ElementKind::MediaSource,
        ElementKind::RichTextBlock,
        ElementKind::TextRun,
        ElementKind::UserIcon,
        ElementKind::UserIconSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::TextBlock => "textBlock",
            ElementKind::Image => "image",
            ElementKind::Media => "media",
            ElementKind::MediaSource => "mediaSource",
            ElementKind::RichTextBlock => "richTextBlock",
            ElementKind::TextRun => "textRun",
            ElementKind::UserIcon => "userIcon",
            ElementKind::UserIconSet => "userIconSet",
        }
    }

    /// Accepts camelCase, kebab-case and snake_case spellings, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    Bool,
    Count,
    Enum(&'static [&'static str]),
    /// `auto`, `stretch` or `<digits>px`.
    Dimension,
    Object,
    Sources,
    Inlines,
    Users,
}

#[derive(Debug, Clone, Copy)]
struct Field {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

const fn optional(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        required: false,
    }
}

const fn required(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        required: true,
    }
}

const TEXT_BLOCK_FIELDS: &[Field] = &[
    required("text", FieldKind::Text),
    optional("color", FieldKind::Enum(TextColor::VALUES)),
    optional("fontType", FieldKind::Enum(TextFontType::VALUES)),
    optional("horizontalAlignment", FieldKind::Enum(HorizontalAlignment::VALUES)),
    optional("isSubtle", FieldKind::Bool),
    optional("maxLines", FieldKind::Count),
    optional("size", FieldKind::Enum(TextSize::VALUES)),
    optional("weight", FieldKind::Enum(TextWeight::VALUES)),
    optional("wrap", FieldKind::Bool),
    optional("style", FieldKind::Enum(TextStyle::VALUES)),
    optional("height", FieldKind::Enum(Height::VALUES)),
    optional("separator", FieldKind::Bool),
    optional("spacing", FieldKind::Enum(Spacing::VALUES)),
    optional("id", FieldKind::Text),
    optional("isVisible", FieldKind::Bool),
];

const IMAGE_FIELDS: &[Field] = &[
    required("url", FieldKind::Text),
    optional("altText", FieldKind::Text),
    optional("backgroundColor", FieldKind::Text),
    optional("height", FieldKind::Dimension),
    optional("horizontalAlignment", FieldKind::Enum(HorizontalAlignment::VALUES)),
    optional("selectAction", FieldKind::Object),
    optional("size", FieldKind::Enum(ImageSize::VALUES)),
    optional("style", FieldKind::Enum(ImageStyle::VALUES)),
    optional("width", FieldKind::Dimension),
    optional("separator", FieldKind::Bool),
    optional("spacing", FieldKind::Enum(Spacing::VALUES)),
    optional("id", FieldKind::Text),
    optional("isVisible", FieldKind::Bool),
    optional("allowZoom", FieldKind::Bool),
];

const MEDIA_FIELDS: &[Field] = &[
    required("sources", FieldKind::Sources),
    optional("poster", FieldKind::Text),
    optional("altText", FieldKind::Text),
    optional("height", FieldKind::Enum(Height::VALUES)),
    optional("separator", FieldKind::Bool),
    optional("spacing", FieldKind::Enum(Spacing::VALUES)),
    optional("id", FieldKind::Text),
    optional("isVisible", FieldKind::Bool),
];

const MEDIA_SOURCE_FIELDS: &[Field] = &[
    required("mimeType", FieldKind::Text),
    required("url", FieldKind::Text),
];

const RICH_TEXT_BLOCK_FIELDS: &[Field] = &[
    required("inlines", FieldKind::Inlines),
    optional("horizontalAlignment", FieldKind::Enum(HorizontalAlignment::VALUES)),
    optional("height", FieldKind::Enum(Height::VALUES)),
    optional("separator", FieldKind::Bool),
    optional("spacing", FieldKind::Enum(Spacing::VALUES)),
    optional("id", FieldKind::Text),
    optional("isVisible", FieldKind::Bool),
];

const TEXT_RUN_FIELDS: &[Field] = &[
    required("text", FieldKind::Text),
    optional("color", FieldKind::Enum(TextColor::VALUES)),
    optional("fontType", FieldKind::Enum(TextFontType::VALUES)),
    optional("highlight", FieldKind::Bool),
    optional("isSubtle", FieldKind::Bool),
    optional("italic", FieldKind::Bool),
    optional("selectAction", FieldKind::Object),
    optional("strikethrough", FieldKind::Bool),
    optional("underline", FieldKind::Bool),
    optional("size", FieldKind::Enum(TextSize::VALUES)),
    optional("weight", FieldKind::Enum(TextWeight::VALUES)),
];

const USER_FIELDS: &[Field] = &[
    optional("id", FieldKind::Text),
    optional("name", FieldKind::Text),
    optional("email", FieldKind::Text),
];

const USER_SET_FIELDS: &[Field] = &[required("users", FieldKind::Users)];

static DIMENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(auto|stretch|[0-9]+px)$").expect("dimension pattern"));

fn fields_for(kind: ElementKind) -> &'static [Field] {
    match kind {
        ElementKind::TextBlock => TEXT_BLOCK_FIELDS,
        ElementKind::Image => IMAGE_FIELDS,
        ElementKind::Media => MEDIA_FIELDS,
        ElementKind::MediaSource => MEDIA_SOURCE_FIELDS,
        ElementKind::RichTextBlock => RICH_TEXT_BLOCK_FIELDS,
        ElementKind::TextRun => TEXT_RUN_FIELDS,
        ElementKind::UserIcon => USER_FIELDS,
        ElementKind::UserIconSet => USER_SET_FIELDS,
    }
}

/// Names of the parameters accepted for `kind`, in table order.
pub fn parameter_names(kind: ElementKind) -> impl Iterator<Item = &'static str> {
    fields_for(kind).iter().map(|field| field.name)
}

/// Checks a parameter object for `kind`. Explicit `null` counts as "not supplied".
pub fn check_params(
    kind: ElementKind,
    params: &Value,
    unknown_fields: UnknownFieldPolicy,
) -> Result<(), ElementError> {
    let object = params
        .as_object()
        .ok_or_else(|| ElementError::invalid_shape("params", "expected a JSON object"))?;
    check_object(object, fields_for(kind), unknown_fields, &[])
}

fn check_object(
    object: &Map<String, Value>,
    fields: &[Field],
    unknown_fields: UnknownFieldPolicy,
    skip: &[&str],
) -> Result<(), ElementError> {
    for field in fields {
        match object.get(field.name) {
            None | Some(Value::Null) if field.required => {
                return Err(ElementError::invalid_shape(
                    field.name,
                    "missing required field",
                ));
            }
            None | Some(Value::Null) => {}
            Some(value) => check_field(field, value, unknown_fields)?,
        }
    }
    for key in object.keys() {
        if skip.iter().any(|name| *name == key.as_str())
            || fields.iter().any(|field| field.name == key.as_str())
        {
            continue;
        }
        match unknown_fields {
            UnknownFieldPolicy::Reject => {
                return Err(ElementError::invalid_shape(key.as_str(), "unknown field"));
            }
            UnknownFieldPolicy::Ignore => {
                tracing::warn!(field = %key, "ignoring unknown element parameter");
            }
        }
    }
    Ok(())
}

fn check_field(
    field: &Field,
    value: &Value,
    unknown_fields: UnknownFieldPolicy,
) -> Result<(), ElementError> {
    let name = field.name;
    match field.kind {
        FieldKind::Text => expect_str(name, value).map(|_| ()),
        FieldKind::Bool => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(ElementError::invalid_shape(name, "expected a boolean"))
            }
        }
        FieldKind::Count => match value.as_u64() {
            Some(count) if count <= u64::from(u32::MAX) => Ok(()),
            _ => Err(ElementError::invalid_shape(
                name,
                "expected a non-negative integer",
            )),
        },
        FieldKind::Enum(allowed) => {
            let literal = expect_str(name, value)?;
            if allowed.iter().any(|candidate| *candidate == literal) {
                Ok(())
            } else {
                Err(ElementError::invalid_enum(name, literal, allowed))
            }
        }
        FieldKind::Dimension => {
            let literal = expect_str(name, value)?;
            if DIMENSION.is_match(literal) {
                Ok(())
            } else {
                Err(ElementError::invalid_shape(
                    name,
                    format!("`{literal}` is not `auto`, `stretch` or a pixel value like `50px`"),
                ))
            }
        }
        FieldKind::Object => {
            if value.is_object() {
                Ok(())
            } else {
                Err(ElementError::invalid_shape(name, "expected an object"))
            }
        }
        FieldKind::Sources => {
            let items = expect_array(name, value)?;
            if items.is_empty() {
                return Err(ElementError::invalid_shape(
                    name,
                    "at least one media source is required",
                ));
            }
            for (index, item) in items.iter().enumerate() {
                let path = format!("{name}[{index}]");
                let object = item
                    .as_object()
                    .ok_or_else(|| ElementError::invalid_shape(path.as_str(), "expected an object"))?;
                check_object(object, MEDIA_SOURCE_FIELDS, unknown_fields, &[])
                    .map_err(|err| err.nested(&path))?;
            }
            Ok(())
        }
        FieldKind::Inlines => {
            let items = expect_array(name, value)?;
            for (index, item) in items.iter().enumerate() {
                let path = format!("{name}[{index}]");
                match item {
                    Value::String(_) => {}
                    Value::Object(object) => {
                        check_inline_type(object).map_err(|err| err.nested(&path))?;
                        check_object(object, TEXT_RUN_FIELDS, unknown_fields, &["type"])
                            .map_err(|err| err.nested(&path))?;
                    }
                    _ => {
                        return Err(ElementError::invalid_shape(
                            path,
                            "expected a string or a TextRun object",
                        ));
                    }
                }
            }
            Ok(())
        }
        FieldKind::Users => {
            let items = expect_array(name, value)?;
            for (index, item) in items.iter().enumerate() {
                let path = format!("{name}[{index}]");
                let object = item
                    .as_object()
                    .ok_or_else(|| ElementError::invalid_shape(path.as_str(), "expected an object"))?;
                check_object(object, USER_FIELDS, unknown_fields, &[])
                    .map_err(|err| err.nested(&path))?;
            }
            Ok(())
        }
    }
}

/// Inline objects may repeat their discriminant, which must then be `TextRun`.
fn check_inline_type(object: &Map<String, Value>) -> Result<(), ElementError> {
    match object.get("type") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(kind)) if kind == "TextRun" => Ok(()),
        Some(Value::String(kind)) => Err(ElementError::invalid_enum("type", kind.as_str(), &["TextRun"])),
        Some(_) => Err(ElementError::invalid_shape("type", "expected a string")),
    }
}

fn expect_str<'a>(name: &str, value: &'a Value) -> Result<&'a str, ElementError> {
    value
        .as_str()
        .ok_or_else(|| ElementError::invalid_shape(name, "expected a string"))
}

fn expect_array<'a>(name: &str, value: &'a Value) -> Result<&'a Vec<Value>, ElementError> {
    value
        .as_array()
        .ok_or_else(|| ElementError::invalid_shape(name, "expected an array"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(kind: ElementKind, params: Value) -> Result<(), ElementError> {
        check_params(kind, &params, UnknownFieldPolicy::Reject)
    }

    #[test]
    fn kind_parse_accepts_spellings() {
        assert_eq!(ElementKind::parse("textBlock"), Some(ElementKind::TextBlock));
        assert_eq!(ElementKind::parse("text-block"), Some(ElementKind::TextBlock));
        assert_eq!(ElementKind::parse("USER_ICON_SET"), Some(ElementKind::UserIconSet));
        assert_eq!(ElementKind::parse("carousel"), None);
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::parse(&kind.to_string()), Some(*kind));
        }
    }

    #[test]
    fn params_must_be_an_object() {
        let err = check(ElementKind::TextBlock, json!("hello")).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("params", "expected a JSON object"));
    }

    #[test]
    fn out_of_set_enum_value() {
        let err = check(ElementKind::TextBlock, json!({"text": "x", "color": "purple"})).unwrap_err();
        assert_eq!(
            err,
            ElementError::invalid_enum("color", "purple", TextColor::VALUES)
        );
    }

    #[test]
    fn enum_values_are_case_sensitive() {
        let err = check(ElementKind::TextBlock, json!({"text": "x", "size": "ExtraLarge"})).unwrap_err();
        assert!(matches!(err, ElementError::InvalidEnumValue { ref field, .. } if field == "size"));
        check(ElementKind::TextBlock, json!({"text": "x", "size": "extraLarge"})).expect("valid");
    }

    #[test]
    fn missing_and_mistyped_required_fields() {
        let err = check(ElementKind::Image, json!({"altText": "a"})).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("url", "missing required field"));
        let err = check(ElementKind::Image, json!({"url": 42})).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("url", "expected a string"));
        let err = check(ElementKind::TextBlock, json!({"text": null})).unwrap_err();
        assert_eq!(err.field(), "text");
    }

    #[test]
    fn null_optional_counts_as_absent() {
        check(ElementKind::TextBlock, json!({"text": "x", "color": null})).expect("valid");
    }

    #[test]
    fn max_lines_must_be_non_negative_integer() {
        assert!(check(ElementKind::TextBlock, json!({"text": "x", "maxLines": -1})).is_err());
        assert!(check(ElementKind::TextBlock, json!({"text": "x", "maxLines": 1.5})).is_err());
        check(ElementKind::TextBlock, json!({"text": "x", "maxLines": 4})).expect("valid");
    }

    #[test]
    fn image_dimensions() {
        check(ElementKind::Image, json!({"url": "u", "width": "40px", "height": "auto"})).expect("valid");
        let err = check(ElementKind::Image, json!({"url": "u", "width": "40"})).unwrap_err();
        assert_eq!(err.field(), "width");
    }

    #[test]
    fn media_sources_are_checked() {
        let err = check(ElementKind::Media, json!({"sources": []})).unwrap_err();
        assert_eq!(err.field(), "sources");
        let err = check(ElementKind::Media, json!({"sources": "x.mp4"})).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("sources", "expected an array"));
        let err = check(
            ElementKind::Media,
            json!({"sources": [{"mimeType": "video/mp4", "url": "a"}, {"mimeType": "video/mp4"}]}),
        )
        .unwrap_err();
        assert_eq!(err.field(), "sources[1].url");
    }

    #[test]
    fn inlines_accept_strings_and_runs() {
        check(
            ElementKind::RichTextBlock,
            json!({"inlines": ["a", {"type": "TextRun", "text": "b", "italic": true}]}),
        )
        .expect("valid");
        let err = check(ElementKind::RichTextBlock, json!({"inlines": [{"type": "Image", "text": "b"}]})).unwrap_err();
        assert_eq!(err.field(), "inlines[0].type");
        let err = check(ElementKind::RichTextBlock, json!({"inlines": [{"text": "b", "color": "red"}]})).unwrap_err();
        assert_eq!(err.field(), "inlines[0].color");
        let err = check(ElementKind::RichTextBlock, json!({"inlines": [7]})).unwrap_err();
        assert_eq!(err.field(), "inlines[0]");
    }

    #[test]
    fn type_key_is_unknown_on_top_level_run() {
        let err = check(ElementKind::TextRun, json!({"type": "TextRun", "text": "b"})).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("type", "unknown field"));
    }

    #[test]
    fn unknown_fields_follow_policy() {
        let params = json!({"text": "x", "colour": "dark"});
        let err = check(ElementKind::TextBlock, params.clone()).unwrap_err();
        assert_eq!(err, ElementError::invalid_shape("colour", "unknown field"));
        check_params(ElementKind::TextBlock, &params, UnknownFieldPolicy::Ignore).expect("ignored");
    }

    #[test]
    fn users_entries_are_objects() {
        check(ElementKind::UserIconSet, json!({"users": [{"id": "1"}, {}]})).expect("valid");
        let err = check(ElementKind::UserIconSet, json!({"users": ["jane"]})).unwrap_err();
        assert_eq!(err.field(), "users[0]");
        let err = check(ElementKind::UserIcon, json!({"email": 5})).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn parameter_names_follow_table() {
        let names: Vec<_> = parameter_names(ElementKind::MediaSource).collect();
        assert_eq!(names, vec!["mimeType", "url"]);
    }
}
