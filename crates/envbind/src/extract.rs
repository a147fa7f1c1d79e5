//! The extraction orchestrator.
//!
//! [`Extractor`] ties the other pieces together: it resolves options to
//! their defaults, optionally loads a `.env` file into the process
//! environment, and walks every bound target field by field - deriving the
//! lookup key, querying sources in precedence order, and coercing the first
//! non-empty raw value into the field.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::case::CaseStyle;
use crate::coerce;
use crate::error::BindError;
use crate::field::{Bindable, Slot};
use crate::key::lookup_key;
use crate::options::ExtractOptions;
use crate::source::{arg_value, EnvLookup, OsEnv, Source};

/// Multi-source configuration extractor.
///
/// Targets are registered with [`bind`](Self::bind) together with a
/// per-target prefix; [`extract`](Self::extract) then fills them in
/// registration order. Extraction is synchronous and deterministic: the
/// same environment table, argument list, env-file contents, and targets
/// always produce the same result.
///
/// By default the extractor reads the live process environment and the
/// process argument list; both can be replaced for tests with
/// [`with_env`](Self::with_env) and [`with_args`](Self::with_args).
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use envbind::{Bindable, Extractor, Source};
///
/// #[derive(Bindable, Default)]
/// struct Config {
///     #[env(name = "PORT")]
///     port: u16,
/// }
///
/// # fn main() -> Result<(), envbind::BindError> {
/// let mut config = Config::default();
/// Extractor::new()
///     .with_env(HashMap::from([("PORT".to_string(), "8080".to_string())]))
///     .with_args(Vec::<String>::new())
///     .with_precedence([Source::Env, Source::Args])
///     .bind(&mut config, "")
///     .extract()?;
///
/// assert_eq!(config.port, 8080);
/// # Ok(())
/// # }
/// ```
pub struct Extractor<'a> {
    options: ExtractOptions,
    env: Box<dyn EnvLookup + 'a>,
    args: Option<Vec<String>>,
    bindings: Vec<Binding<'a>>,
}

struct Binding<'a> {
    target: &'a mut dyn Bindable,
    prefix: String,
}

impl Default for Extractor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extractor<'a> {
    /// Create a new extractor reading the live process environment and
    /// argument list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            env: Box::new(OsEnv),
            args: None,
            bindings: Vec::new(),
        }
    }

    /// Replace the full option set.
    #[must_use]
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Load a `.env`-style file into the process environment before any
    /// lookups.
    ///
    /// The file must exist; extraction fails with
    /// [`BindError::EnvFileNotFound`] otherwise. Loaded variables stay in
    /// the process environment for its remaining lifetime.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Skip fields that carry no explicit key instead of deriving one from
    /// the field name.
    #[must_use]
    pub fn omit_untagged(mut self, omit: bool) -> Self {
        self.options.omit_untagged = omit;
        self
    }

    /// Case style for keys derived for environment lookups.
    #[must_use]
    pub fn with_env_key_style(mut self, style: CaseStyle) -> Self {
        self.options.env_key_style = Some(style);
        self
    }

    /// Case style for keys derived for command-line lookups.
    #[must_use]
    pub fn with_args_key_style(mut self, style: CaseStyle) -> Self {
        self.options.args_key_style = Some(style);
        self
    }

    /// Sources in the order they are consulted; the first one yielding a
    /// non-empty value wins.
    #[must_use]
    pub fn with_precedence(mut self, precedence: impl IntoIterator<Item = Source>) -> Self {
        self.options.precedence = precedence.into_iter().collect();
        self
    }

    /// Replace the environment table, e.g. with an in-memory map in tests.
    #[must_use]
    pub fn with_env<E: EnvLookup + 'a>(mut self, env: E) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Replace the command-line token list.
    ///
    /// Without this the extractor snapshots `std::env::args()` (minus the
    /// program name) when `extract` runs.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Register a binding target with its key prefix.
    ///
    /// Targets are processed in registration order. The prefix applies to
    /// every key derived for this target only; pass `""` for none.
    #[must_use]
    pub fn bind(mut self, target: &'a mut dyn Bindable, prefix: &str) -> Self {
        self.bindings.push(Binding {
            target,
            prefix: prefix.to_string(),
        });
        self
    }

    /// Run the extraction.
    ///
    /// Fields for which no source yields a value keep their prior value;
    /// that is not an error. The first coercion failure aborts the whole
    /// extraction, and targets mutated by earlier bindings are not rolled
    /// back.
    ///
    /// # Errors
    ///
    /// Returns [`BindError`] if the configured env file is missing or fails
    /// to load, or if a raw value cannot be coerced into its field.
    pub fn extract(self) -> Result<(), BindError> {
        let Self {
            options,
            env,
            args,
            mut bindings,
        } = self;

        let resolved = options.resolved();

        if let Some(path) = options.env_file.as_deref() {
            load_env_file(path)?;
        }

        let args = args.unwrap_or_else(|| std::env::args().skip(1).collect());

        for binding in &mut bindings {
            let Binding { target, prefix } = binding;
            for field in target.fields() {
                if matches!(field.slot, Slot::Ignored) {
                    continue;
                }

                let mut hit: Option<(String, Source, String)> = None;
                for &source in resolved.precedence() {
                    let style = resolved.key_style(source);
                    let Some(key) = lookup_key(&field, prefix, style, resolved.omit_untagged)
                    else {
                        break;
                    };
                    let raw = match source {
                        Source::Env => env.lookup(&key),
                        Source::Args => arg_value(&key, &args),
                    };
                    if let Some(value) = raw {
                        if !value.is_empty() {
                            hit = Some((key, source, value));
                            break;
                        }
                    }
                }

                let Some((key, source, raw)) = hit else {
                    continue;
                };

                let name = field.name();
                match field.slot {
                    Slot::Integer(slot) => coerce::store_integer(slot, &key, &raw)?,
                    Slot::Text(slot) => coerce::store_text(slot, raw),
                    Slot::Boolean(slot) => coerce::store_boolean(slot, &key, &raw)?,
                    Slot::Ignored => {}
                }
                debug!(field = name, key = %key, source = %source, "bound configuration field");
            }
        }

        Ok(())
    }
}

fn load_env_file(path: &Path) -> Result<(), BindError> {
    if !path.exists() {
        return Err(BindError::env_file_not_found(path));
    }
    dotenvy::from_path(path).map_err(|source| BindError::env_file_load(path, source))?;
    debug!(path = %path.display(), "loaded env file");
    Ok(())
}
