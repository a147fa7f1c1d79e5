//! Lookup-key derivation.

use crate::case::CaseStyle;
use crate::field::Field;

/// Compute the lookup key for `field` under `style`.
///
/// Tagged fields use `prefix + tag` verbatim, untouched by any case style.
/// Untagged fields transform the prefixed field name; the result is `None`
/// when untagged fields are omitted. A non-empty prefix is joined to the
/// field name with an underscore so it stays a separate word under every
/// style.
pub(crate) fn lookup_key(
    field: &Field<'_>,
    prefix: &str,
    style: CaseStyle,
    omit_untagged: bool,
) -> Option<String> {
    match field.key() {
        Some(tag) => Some(format!("{prefix}{tag}")),
        None if omit_untagged => None,
        None => {
            let name = field.name();
            let prefixed = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}_{name}")
            };
            Some(style.apply(&prefixed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_key_ignores_case_style() {
        let field = Field::ignored("grpc_port").with_key("GRPC_PORT");
        for style in [
            CaseStyle::ScreamingSnake,
            CaseStyle::Snake,
            CaseStyle::Kebab,
            CaseStyle::ScreamingKebab,
            CaseStyle::Camel,
            CaseStyle::LowerCamel,
        ] {
            assert_eq!(
                lookup_key(&field, "", style, false).as_deref(),
                Some("GRPC_PORT")
            );
        }
    }

    #[test]
    fn test_tagged_key_is_prefixed_verbatim() {
        let field = Field::ignored("secure_connection").with_key("SECURE_CONNECTION");
        assert_eq!(
            lookup_key(&field, "REDIS", CaseStyle::ScreamingSnake, false).as_deref(),
            Some("REDISSECURE_CONNECTION")
        );
    }

    #[test]
    fn test_untagged_key_uses_style() {
        let field = Field::ignored("http_port");
        assert_eq!(
            lookup_key(&field, "", CaseStyle::ScreamingSnake, false).as_deref(),
            Some("HTTP_PORT")
        );
        assert_eq!(
            lookup_key(&field, "", CaseStyle::Snake, false).as_deref(),
            Some("http_port")
        );
        assert_eq!(
            lookup_key(&field, "", CaseStyle::Kebab, false).as_deref(),
            Some("http-port")
        );
    }

    #[test]
    fn test_untagged_key_with_prefix() {
        let field = Field::ignored("host");
        assert_eq!(
            lookup_key(&field, "REDIS", CaseStyle::ScreamingSnake, false).as_deref(),
            Some("REDIS_HOST")
        );
        assert_eq!(
            lookup_key(&field, "MONGO", CaseStyle::Snake, false).as_deref(),
            Some("mongo_host")
        );
    }

    #[test]
    fn test_untagged_omitted() {
        let field = Field::ignored("host");
        assert_eq!(lookup_key(&field, "", CaseStyle::Snake, true), None);
    }

    #[test]
    fn test_tagged_survives_omit_untagged() {
        let field = Field::ignored("host").with_key("HOST");
        assert_eq!(
            lookup_key(&field, "", CaseStyle::Snake, true).as_deref(),
            Some("HOST")
        );
    }
}
