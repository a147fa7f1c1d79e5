//! Raw-value coercion into field storage.
//!
//! Values arrive as strings from whichever source won the precedence race;
//! this module converts them into the destination field's type. Key names
//! are only used for error reporting - no transform is ever applied to the
//! values themselves.

use crate::error::BindError;
use crate::field::{IntegerField, TextField};

/// Parse `raw` as a base-10 signed integer and narrow it into `slot`.
pub(crate) fn store_integer(
    slot: &mut dyn IntegerField,
    key: &str,
    raw: &str,
) -> Result<(), BindError> {
    let parsed = raw
        .parse::<i64>()
        .map_err(|_| BindError::coercion(key, raw, "integer"))?;
    if slot.store(parsed) {
        Ok(())
    } else {
        Err(BindError::coercion(key, raw, "integer in range"))
    }
}

/// Assign `raw` to `slot` verbatim.
pub(crate) fn store_text(slot: &mut dyn TextField, raw: String) {
    slot.store(raw);
}

/// Parse `raw` as a boolean and assign it to `slot`.
pub(crate) fn store_boolean(slot: &mut bool, key: &str, raw: &str) -> Result<(), BindError> {
    match parse_bool(raw) {
        Some(value) => {
            *slot = value;
            Ok(())
        }
        None => Err(BindError::coercion(key, raw, "boolean")),
    }
}

/// Parse standard truthy and falsy forms.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "t" => Some(true),
        "false" | "0" | "f" => Some(false),
        _ => None,
    }
}
