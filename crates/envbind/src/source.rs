//! Configuration value sources.
//!
//! Two sources are supported: the OS environment table and the process
//! argument list. The environment is read through the [`EnvLookup`] trait
//! so unit tests can substitute an in-memory table for the live process
//! state.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a configuration source consulted during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The OS environment-variable table.
    Env,
    /// The command-line argument list.
    Args,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => f.write_str("environment"),
            Self::Args => f.write_str("command-line"),
        }
    }
}

/// Read access to an environment-variable table.
pub trait EnvLookup {
    /// The value for `key`, or `None` when unset.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEnv;

impl EnvLookup for OsEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment table, mainly useful as a test double.
impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Value substituted for bare flags such as `-verbose`.
pub(crate) const FLAG_DEFAULT: &str = "true";

/// Scan `args` for a token matching `key`.
///
/// Recognized token shapes:
/// - `-key`, `--key`, or a bare `key`: yields the flag default `"true"`;
/// - `[-|--]key=value`: yields `value` with one layer of surrounding
///   single or double quotes stripped.
///
/// Tokens whose first character (after dash stripping) is not
/// alphanumeric or `_` are skipped. Matching is exact on the full key.
pub(crate) fn arg_value(key: &str, args: &[String]) -> Option<String> {
    for raw in args {
        let mut token = raw.as_str();
        if let Some(stripped) = token.strip_prefix('-') {
            token = stripped;
        }
        if let Some(stripped) = token.strip_prefix('-') {
            token = stripped;
        }

        let Some(first) = token.chars().next() else {
            continue;
        };
        if !(first.is_alphanumeric() || first == '_') {
            continue;
        }

        if token == key {
            return Some(FLAG_DEFAULT.to_string());
        }
        if let Some((name, value)) = token.split_once('=') {
            if name == key {
                return Some(strip_quotes(value).to_string());
            }
        }
    }
    None
}

/// Strip one layer of surrounding quotes, each end independently.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return value;
    }
    let start = usize::from(bytes[0] == b'\'' || bytes[0] == b'"');
    let mut end = bytes.len();
    if end > 1 && (bytes[end - 1] == b'\'' || bytes[end - 1] == b'"') {
        end -= 1;
    }
    &value[start.min(end)..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_bare_flag_forms() {
        let args = args(&["-active", "--verbose", "plain"]);
        assert_eq!(arg_value("active", &args).as_deref(), Some(FLAG_DEFAULT));
        assert_eq!(arg_value("verbose", &args).as_deref(), Some(FLAG_DEFAULT));
        assert_eq!(arg_value("plain", &args).as_deref(), Some(FLAG_DEFAULT));
    }

    #[test]
    fn test_key_value_forms() {
        let args = args(&["-param=123", "--other=abc"]);
        assert_eq!(arg_value("param", &args).as_deref(), Some("123"));
        assert_eq!(arg_value("other", &args).as_deref(), Some("abc"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        // Only the first '=' splits the token.
        let args = args(&["--with_quotes=\"base64==\""]);
        assert_eq!(arg_value("with_quotes", &args).as_deref(), Some("base64=="));
    }

    #[test]
    fn test_no_match() {
        let args = args(&["--param=123"]);
        assert_eq!(arg_value("missing", &args), None);
        assert_eq!(arg_value("param", &[]), None);
    }

    #[test]
    fn test_exact_match_only() {
        let args = args(&["--parameter=123"]);
        assert_eq!(arg_value("param", &args), None);
    }

    #[test]
    fn test_malformed_tokens_skipped() {
        let args = args(&["--", "---", "--=5", "--@weird", "--ok=1"]);
        assert_eq!(arg_value("ok", &args).as_deref(), Some("1"));
        assert_eq!(arg_value("", &args), None);
        assert_eq!(arg_value("@weird", &args), None);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"value\""), "value");
        assert_eq!(strip_quotes("'value'"), "value");
        assert_eq!(strip_quotes("value"), "value");
        assert_eq!(strip_quotes("\"value"), "value");
        assert_eq!(strip_quotes("value\""), "value");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_map_lookup() {
        let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
        assert_eq!(env.lookup("PORT").as_deref(), Some("8080"));
        assert_eq!(env.lookup("MISSING"), None);
    }
}
