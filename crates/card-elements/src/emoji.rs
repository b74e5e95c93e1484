//! Shortcode emoji conversion (`:smile:` -> 😄).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Converts shorthand emoji notation into Unicode. Implementations must be pure and total.
pub trait EmojiConverter: Send + Sync {
    fn to_unicode(&self, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEmojiConverter;

impl EmojiConverter for NoopEmojiConverter {
    fn to_unicode(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Replaces `:name:` shortcodes found in a built-in table. Unknown names are left as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortcodeEmojiConverter;

static SHORTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([a-z0-9_+\-]+):").expect("shortcode pattern"));

static SHORTCODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("smile", "\u{1F604}"),
        ("smiley", "\u{1F603}"),
        ("grin", "\u{1F601}"),
        ("grinning", "\u{1F600}"),
        ("joy", "\u{1F602}"),
        ("laughing", "\u{1F606}"),
        ("wink", "\u{1F609}"),
        ("blush", "\u{1F60A}"),
        ("heart_eyes", "\u{1F60D}"),
        ("thinking", "\u{1F914}"),
        ("neutral_face", "\u{1F610}"),
        ("cry", "\u{1F622}"),
        ("sob", "\u{1F62D}"),
        ("angry", "\u{1F620}"),
        ("scream", "\u{1F631}"),
        ("sunglasses", "\u{1F60E}"),
        ("heart", "\u{2764}\u{FE0F}"),
        ("broken_heart", "\u{1F494}"),
        ("+1", "\u{1F44D}"),
        ("thumbsup", "\u{1F44D}"),
        ("-1", "\u{1F44E}"),
        ("thumbsdown", "\u{1F44E}"),
        ("clap", "\u{1F44F}"),
        ("wave", "\u{1F44B}"),
        ("pray", "\u{1F64F}"),
        ("ok_hand", "\u{1F44C}"),
        ("muscle", "\u{1F4AA}"),
        ("eyes", "\u{1F440}"),
        ("fire", "\u{1F525}"),
        ("star", "\u{2B50}"),
        ("sparkles", "\u{2728}"),
        ("tada", "\u{1F389}"),
        ("rocket", "\u{1F680}"),
        ("warning", "\u{26A0}\u{FE0F}"),
        ("x", "\u{274C}"),
        ("white_check_mark", "\u{2705}"),
        ("heavy_check_mark", "\u{2714}\u{FE0F}"),
        ("question", "\u{2753}"),
        ("exclamation", "\u{2757}"),
        ("bulb", "\u{1F4A1}"),
        ("memo", "\u{1F4DD}"),
        ("calendar", "\u{1F4C5}"),
        ("bell", "\u{1F514}"),
        ("lock", "\u{1F512}"),
        ("coffee", "\u{2615}"),
        ("sunny", "\u{2600}\u{FE0F}"),
        ("cloud", "\u{2601}\u{FE0F}"),
        ("100", "\u{1F4AF}"),
    ]
    .into_iter()
    .collect()
});

impl ShortcodeEmojiConverter {
    /// Unicode for a single shortcode name, without the surrounding colons.
    pub fn lookup(name: &str) -> Option<&'static str> {
        SHORTCODES.get(name).copied()
    }
}

impl EmojiConverter for ShortcodeEmojiConverter {
    fn to_unicode(&self, text: &str) -> String {
        if !text.contains(':') {
            return text.to_string();
        }
        SHORTCODE
            .replace_all(text, |caps: &Captures<'_>| match Self::lookup(&caps[1]) {
                Some(emoji) => emoji.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
