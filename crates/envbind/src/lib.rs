//! Typed multi-source configuration binding.
//!
//! This crate fills caller-owned configuration structs from environment-like
//! sources, with support for:
//! - OS environment variables
//! - command-line argument tokens (`-flag`, `--key=value`)
//! - an optional `.env` file loaded into the process environment
//! - per-field lookup keys, either explicit or derived from the field name
//!   under a configurable case style
//! - a deterministic source-precedence rule when several sources carry the
//!   same logical setting
//!
//! # Overview
//!
//! The system is built around two pieces:
//!
//! - [`Bindable`] - a registry of the fields of one configuration struct.
//!   Derive it with `#[derive(Bindable)]` or implement it by hand with the
//!   [`Field`] constructors.
//! - [`Extractor`] - the orchestrator. It resolves [`ExtractOptions`] to
//!   defaults, optionally loads a `.env` file, and walks every bound target
//!   field by field: derive the lookup key, query sources in precedence
//!   order, coerce the first non-empty raw value into the field.
//!
//! Fields for which no source yields a value keep whatever value the caller
//! put there - defaults belong to the caller, not to this crate.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use envbind::{Bindable, Extractor};
//!
//! #[derive(Bindable, Default)]
//! struct ServerConfig {
//!     #[env(name = "GRPC_PORT")]
//!     grpc_port: u16,
//!     // Untagged: looked up as HTTP_PORT (environment) or http_port (args).
//!     http_port: u16,
//!     run_http_proxy: bool,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let mut config = ServerConfig::default();
//! Extractor::new()
//!     .with_env(HashMap::from([("GRPC_PORT".to_string(), "5000".to_string())]))
//!     .with_args(["--run_http_proxy"])
//!     .bind(&mut config, "")
//!     .extract()?;
//!
//! assert_eq!(config.grpc_port, 5000);
//! assert!(config.run_http_proxy);
//! # Ok(())
//! # }
//! ```
//!
//! # Key derivation
//!
//! An explicitly tagged field (`#[env(name = "KEY")]`) is looked up as
//! `prefix + KEY` in every source, untouched by case styles. An untagged
//! field is looked up under the per-source case style - screaming-snake for
//! the environment and snake for command-line arguments by default - so the
//! same field can map to `HTTP_PORT` in one source and `http_port` in the
//! other.
//!
//! # Prefixes
//!
//! Each bound target carries its own prefix, applied to every key derived
//! for that target. Two structs with the same field names stay apart:
//!
//! ```
//! use std::collections::HashMap;
//! use envbind::{Bindable, Extractor};
//!
//! #[derive(Bindable, Default)]
//! struct StoreConfig {
//!     host: String,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let env = HashMap::from([
//!     ("REDIS_HOST".to_string(), "127.0.0.1".to_string()),
//!     ("MONGO_HOST".to_string(), "10.0.0.1".to_string()),
//! ]);
//!
//! let mut redis = StoreConfig::default();
//! let mut mongo = StoreConfig::default();
//! Extractor::new()
//!     .with_env(env)
//!     .with_args(Vec::<String>::new())
//!     .bind(&mut redis, "REDIS")
//!     .bind(&mut mongo, "MONGO")
//!     .extract()?;
//!
//! assert_eq!(redis.host, "127.0.0.1");
//! assert_eq!(mongo.host, "10.0.0.1");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod case;
mod coerce;
mod error;
mod extract;
mod field;
mod key;
mod options;
mod source;

pub use case::CaseStyle;
pub use error::BindError;
pub use extract::Extractor;
pub use field::{Bindable, Field, IntegerField, Slot, TextField};
pub use options::{ExtractOptions, ResolvedOptions, DEFAULT_ARGS_KEY_STYLE, DEFAULT_ENV_KEY_STYLE};
pub use source::{EnvLookup, OsEnv, Source};

pub use envbind_derive::Bindable;
