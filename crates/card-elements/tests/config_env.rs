use card_elements::{ElementBuilder, ElementKind, ElementsConfig, UnknownFieldPolicy};
use serde_json::json;

#[test]
fn unknown_field_policy_from_env() {
    unsafe { std::env::set_var("CARD_ELEMENTS_UNKNOWN_FIELDS", "Ignore") };
    let config = ElementsConfig::default().with_env_overrides();
    assert_eq!(config.unknown_fields, UnknownFieldPolicy::Ignore);

    let builder = ElementBuilder::from_config(&config);
    builder
        .build_value(ElementKind::TextBlock, &json!({"text": "x", "colour": "dark"}))
        .expect("unknown field ignored");

    unsafe { std::env::set_var("CARD_ELEMENTS_UNKNOWN_FIELDS", "sometimes") };
    let config = ElementsConfig::default().with_env_overrides();
    assert_eq!(config.unknown_fields, UnknownFieldPolicy::Reject);

    unsafe { std::env::remove_var("CARD_ELEMENTS_UNKNOWN_FIELDS") };
    assert_eq!(UnknownFieldPolicy::from_env(), None);
}

#[test]
fn config_file_drives_text_pipeline() {
    let config = ElementsConfig::from_json_str(
        r#"{"schema_version": 1, "text": {"rewrite_mentions": true, "convert_emoji": false}}"#,
    )
    .expect("config");
    let builder = ElementBuilder::from_config(&config);
    let element = builder
        .build_value(ElementKind::TextRun, &json!({"text": "@<Jane> :tada:"}))
        .expect("element");
    let value = serde_json::to_value(&element).expect("serialize");
    assert_eq!(value["text"], json!("<at>Jane</at> :tada:"));
}
