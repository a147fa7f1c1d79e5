//! Lookup-key case styles.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};

/// Naming style applied when a lookup key is derived from a field name.
///
/// Explicitly tagged keys are never transformed; a case style only governs
/// keys derived from field names. Each source has its own style - see
/// [`ExtractOptions`](crate::ExtractOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `ANY_KIND_OF_STRING`
    ScreamingSnake,
    /// `any_kind_of_string`
    Snake,
    /// `any-kind-of-string`
    Kebab,
    /// `ANY-KIND-OF-STRING`
    ScreamingKebab,
    /// `AnyKindOfString`
    Camel,
    /// `anyKindOfString`
    LowerCamel,
}

impl CaseStyle {
    /// Transform `input` into this style.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::ScreamingSnake => input.to_shouty_snake_case(),
            Self::Snake => input.to_snake_case(),
            Self::Kebab => input.to_kebab_case(),
            Self::ScreamingKebab => input.to_shouty_kebab_case(),
            Self::Camel => input.to_upper_camel_case(),
            Self::LowerCamel => input.to_lower_camel_case(),
        }
    }
}
