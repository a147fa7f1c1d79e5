//! Extraction options and their defaults.

use std::path::PathBuf;

use crate::case::CaseStyle;
use crate::source::Source;

/// Default case style for keys derived for environment lookups.
pub const DEFAULT_ENV_KEY_STYLE: CaseStyle = CaseStyle::ScreamingSnake;

/// Default case style for keys derived for command-line lookups.
pub const DEFAULT_ARGS_KEY_STYLE: CaseStyle = CaseStyle::Snake;

/// Options controlling one extraction run.
///
/// Unset fields fall back to fixed defaults when the extractor resolves the
/// options - see [`ExtractOptions::resolved`].
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Optional `.env`-style file loaded into the process environment
    /// before any lookups. The file must exist.
    pub env_file: Option<PathBuf>,

    /// Skip fields that carry no explicit key instead of deriving one from
    /// the field name.
    pub omit_untagged: bool,

    /// Case style for keys derived for environment lookups.
    /// Defaults to [`CaseStyle::ScreamingSnake`].
    pub env_key_style: Option<CaseStyle>,

    /// Case style for keys derived for command-line lookups.
    /// Defaults to [`CaseStyle::Snake`].
    pub args_key_style: Option<CaseStyle>,

    /// Sources in the order they are consulted; the first one yielding a
    /// non-empty value wins. An empty list defaults to environment before
    /// command line.
    pub precedence: Vec<Source>,
}

impl ExtractOptions {
    /// Fill any unset option with its fixed default.
    ///
    /// Pure and total: never fails and never touches process state.
    #[must_use]
    pub fn resolved(&self) -> ResolvedOptions {
        ResolvedOptions {
            omit_untagged: self.omit_untagged,
            env_key_style: self.env_key_style.unwrap_or(DEFAULT_ENV_KEY_STYLE),
            args_key_style: self.args_key_style.unwrap_or(DEFAULT_ARGS_KEY_STYLE),
            precedence: if self.precedence.is_empty() {
                vec![Source::Env, Source::Args]
            } else {
                self.precedence.clone()
            },
        }
    }
}

/// Options with every default applied.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub(crate) omit_untagged: bool,
    pub(crate) env_key_style: CaseStyle,
    pub(crate) args_key_style: CaseStyle,
    pub(crate) precedence: Vec<Source>,
}

impl ResolvedOptions {
    /// The case style used for keys derived for `source`.
    #[must_use]
    pub fn key_style(&self, source: Source) -> CaseStyle {
        match source {
            Source::Env => self.env_key_style,
            Source::Args => self.args_key_style,
        }
    }

    /// The resolved source-precedence list, always non-empty.
    #[must_use]
    pub fn precedence(&self) -> &[Source] {
        &self.precedence
    }
}
