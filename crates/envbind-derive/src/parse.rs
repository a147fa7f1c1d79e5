//! Parsing of `#[env(...)]` field attributes and field classification.

use syn::{Attribute, LitStr, Type};

/// Parsed `#[env(...)]` attribute values for one field.
#[derive(Debug, Default)]
pub struct EnvAttrs {
    /// Explicit lookup key from `#[env(name = "KEY")]`.
    pub name: Option<String>,
    /// Force text storage (`#[env(text)]`).
    pub text: bool,
    /// Never bind this field (`#[env(skip)]`).
    pub skip: bool,
}

impl EnvAttrs {
    /// Collect `#[env(...)]` metadata from a field's attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.name = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("text") {
                    parsed.text = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown env attribute; expected `name`, `text`, or `skip`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Storage classification for a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive integer of any width.
    Integer,
    /// `String` or a string-backed type.
    Text,
    /// `bool`.
    Boolean,
    /// A type the extractor leaves untouched.
    Ignored,
}

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Classify a field's declared type syntactically.
///
/// Only the last path segment is inspected, so fully qualified spellings
/// like `std::string::String` classify the same as the bare name.
pub fn classify(ty: &Type) -> FieldKind {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            let ident = segment.ident.to_string();
            if INTEGER_TYPES.contains(&ident.as_str()) {
                return FieldKind::Integer;
            }
            if ident == "bool" {
                return FieldKind::Boolean;
            }
            if ident == "String" {
                return FieldKind::Text;
            }
        }
    }
    FieldKind::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&parse_quote!(u16)), FieldKind::Integer);
        assert_eq!(classify(&parse_quote!(i64)), FieldKind::Integer);
        assert_eq!(classify(&parse_quote!(usize)), FieldKind::Integer);
        assert_eq!(classify(&parse_quote!(bool)), FieldKind::Boolean);
        assert_eq!(classify(&parse_quote!(String)), FieldKind::Text);
        assert_eq!(
            classify(&parse_quote!(std::string::String)),
            FieldKind::Text
        );
    }

    #[test]
    fn test_classify_other_types_ignored() {
        assert_eq!(classify(&parse_quote!(Vec<String>)), FieldKind::Ignored);
        assert_eq!(classify(&parse_quote!(f64)), FieldKind::Ignored);
        assert_eq!(classify(&parse_quote!(Option<u16>)), FieldKind::Ignored);
        assert_eq!(classify(&parse_quote!(EnvName)), FieldKind::Ignored);
    }

    #[test]
    fn test_parse_name_attr() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(name = "GRPC_PORT")])];
        let parsed = EnvAttrs::from_attrs(&attrs).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("GRPC_PORT"));
        assert!(!parsed.text);
        assert!(!parsed.skip);
    }

    #[test]
    fn test_parse_flags() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(text)])];
        let parsed = EnvAttrs::from_attrs(&attrs).unwrap();
        assert!(parsed.text);

        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(skip)])];
        let parsed = EnvAttrs::from_attrs(&attrs).unwrap();
        assert!(parsed.skip);
    }

    #[test]
    fn test_parse_combined_attr() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(name = "ENVIRONMENT", text)])];
        let parsed = EnvAttrs::from_attrs(&attrs).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("ENVIRONMENT"));
        assert!(parsed.text);
    }

    #[test]
    fn test_unknown_attr_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(rename = "X")])];
        assert!(EnvAttrs::from_attrs(&attrs).is_err());
    }

    #[test]
    fn test_unrelated_attrs_ignored() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename = "x")])];
        let parsed = EnvAttrs::from_attrs(&attrs).unwrap();
        assert!(parsed.name.is_none());
    }
}
