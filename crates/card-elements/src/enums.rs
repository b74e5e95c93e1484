//! Closed value sets used by card element fields.
//!
//! Every enum maps a semantic key (the variant name, e.g. `ExtraLarge`) to the literal value the
//! card schema expects (e.g. `"extraLarge"`). The tables are `'static` and have no mutation path.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! card_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $registry:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Registry name, as exposed by [`registries`].
            pub const NAME: &'static str = $registry;
            /// `(semantic key, literal value)` pairs in declaration order.
            pub const ENTRIES: &'static [(&'static str, &'static str)] =
                &[$((stringify!($variant), $value)),+];
            /// Literal values accepted by the card schema.
            pub const VALUES: &'static [&'static str] = &[$($value),+];
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Literal value emitted into card JSON.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// Parses a literal schema value. Matching is exact: the renderer compares literally.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|item| item.key() == key)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

card_enum! {
    /// Foreground color of text.
    TextColor as "TextColors" {
        Default => "default",
        Dark => "dark",
        Light => "light",
        Accent => "accent",
        Good => "good",
        Warning => "warning",
        Attention => "attention",
    }
}

card_enum! {
    TextFontType as "TextFontTypes" {
        Default => "default",
        Monospace => "monospace",
    }
}

card_enum! {
    TextSize as "TextSizes" {
        Small => "small",
        Default => "default",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
    }
}

card_enum! {
    TextWeight as "TextWeights" {
        Lighter => "lighter",
        Default => "default",
        Bolder => "bolder",
    }
}

card_enum! {
    TextStyle as "TextStyles" {
        Default => "default",
        Heading => "heading",
    }
}

card_enum! {
    ImageSize as "ImageSizes" {
        Auto => "auto",
        Stretch => "stretch",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

card_enum! {
    /// `Person` crops the image to a circle.
    ImageStyle as "ImageStyles" {
        Default => "default",
        Person => "person",
    }
}

card_enum! {
    HorizontalAlignment as "HorizontalAlignments" {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

card_enum! {
    /// Space between an element and the one preceding it.
    Spacing as "Spacings" {
        None => "none",
        Small => "small",
        Default => "default",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

card_enum! {
    Height as "Heights" {
        Auto => "auto",
        Stretch => "stretch",
    }
}

/// Read-only view over one enum's key/value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumRegistry {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

impl EnumRegistry {
    pub fn value_of(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| *value)
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.iter().any(|(_, entry)| *entry == value)
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }
}

macro_rules! registry_of {
    ($ty:ty) => {
        EnumRegistry {
            name: <$ty>::NAME,
            entries: <$ty>::ENTRIES,
        }
    };
}

static REGISTRIES: [EnumRegistry; 10] = [
    registry_of!(TextColor),
    registry_of!(TextFontType),
    registry_of!(TextSize),
    registry_of!(TextWeight),
    registry_of!(TextStyle),
    registry_of!(ImageSize),
    registry_of!(ImageStyle),
    registry_of!(HorizontalAlignment),
    registry_of!(Spacing),
    registry_of!(Height),
];

/// All registries, in a stable order.
pub fn registries() -> &'static [EnumRegistry] {
    &REGISTRIES
}

/// Looks a registry up by name (`"TextColors"`, `"Spacings"`, ...), ignoring ASCII case.
pub fn registry(name: &str) -> Option<&'static EnumRegistry> {
    REGISTRIES
        .iter()
        .find(|registry| registry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_values_match_schema_spelling() {
        assert_eq!(TextSize::ExtraLarge.as_str(), "extraLarge");
        assert_eq!(Spacing::ExtraLarge.as_str(), "extraLarge");
        assert_eq!(TextColor::Dark.as_str(), "dark");
        assert_eq!(ImageStyle::Person.to_string(), "person");
    }

    #[test]
    fn serde_uses_literal_values() {
        let json = serde_json::to_value(TextWeight::Bolder).expect("serialize");
        assert_eq!(json, serde_json::json!("bolder"));
        let parsed: HorizontalAlignment = serde_json::from_str("\"center\"").expect("parse");
        assert_eq!(parsed, HorizontalAlignment::Center);
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(TextColor::parse("attention"), Some(TextColor::Attention));
        assert_eq!(TextColor::parse("Attention"), None);
        assert_eq!(TextSize::parse("extralarge"), None);
    }

    #[test]
    fn keys_and_values_are_a_bijection() {
        for registry in registries() {
            for (key, value) in registry.entries {
                assert_eq!(registry.value_of(key), Some(*value));
                let same_value = registry.values().filter(|v| v == value).count();
                assert_eq!(same_value, 1, "{} has duplicate value {value}", registry.name);
            }
        }
        assert_eq!(TextSize::from_key("ExtraLarge"), Some(TextSize::ExtraLarge));
        assert_eq!(TextSize::ExtraLarge.key(), "ExtraLarge");
    }

    #[test]
    fn registry_lookup_by_name() {
        let colors = registry("textcolors").expect("registry");
        assert_eq!(colors.name, "TextColors");
        assert!(colors.contains_value("accent"));
        assert!(!colors.contains_value("purple"));
        assert!(registry("Colors").is_none());
    }

    #[test]
    fn mutating_a_copy_leaves_registry_untouched() {
        let mut copy = TextColor::ENTRIES.to_vec();
        copy[0].1 = "purple";
        copy.push(("Purple", "purple"));
        assert_eq!(TextColor::ENTRIES[0], ("Default", "default"));
        assert_eq!(TextColor::ENTRIES.len(), 7);
        assert_eq!(registry("TextColors").expect("registry").value_of("Default"), Some("default"));
    }
}
