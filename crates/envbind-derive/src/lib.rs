//! Procedural macros for envbind binding targets.
//!
//! This crate provides the `#[derive(Bindable)]` macro, which generates the
//! field registry the envbind extractor walks when filling a configuration
//! struct. The generated code lists every struct field in declaration
//! order, classified by its declared type.
//!
//! # Overview
//!
//! The derive inspects each named field:
//!
//! 1. Primitive integer types, `String`, and `bool` are classified
//!    automatically.
//! 2. `#[env(...)]` attributes refine the classification or attach an
//!    explicit lookup key.
//! 3. Every other type is listed as ignored - the extractor never touches
//!    such fields, so structs may freely mix configuration and
//!    non-configuration fields.

mod expand;
mod parse;

use proc_macro::TokenStream;

/// Derives `envbind::Bindable` for a struct with named fields.
///
/// # Field attributes
///
/// - `#[env(name = "KEY")]` - explicit lookup key for this field. Explicit
///   keys are prefixed but never case-transformed.
/// - `#[env(text)]` - treat a string-backed type (one implementing
///   `From<String>`) as text storage. Needed for newtype aliases the
///   type-based classification cannot see through.
/// - `#[env(skip)]` - never bind this field, whatever its type.
///
/// # Example
///
/// ```rust,ignore
/// use envbind::Bindable;
///
/// #[derive(Bindable, Default)]
/// struct ServerConfig {
///     #[env(name = "GRPC_PORT")]
///     grpc_port: u16,
///     http_port: u16,
///     run_http_proxy: bool,
///     #[env(text)]
///     environment: EnvName,
///     #[env(skip)]
///     peers: Vec<String>,
/// }
/// ```
///
/// # Generated Code
///
/// The macro generates approximately:
///
/// ```rust,ignore
/// impl envbind::Bindable for ServerConfig {
///     fn fields(&mut self) -> Vec<envbind::Field<'_>> {
///         vec![
///             envbind::Field::integer("grpc_port", &mut self.grpc_port)
///                 .with_key("GRPC_PORT"),
///             envbind::Field::integer("http_port", &mut self.http_port),
///             envbind::Field::boolean("run_http_proxy", &mut self.run_http_proxy),
///             envbind::Field::text("environment", &mut self.environment),
///             envbind::Field::ignored("peers"),
///         ]
///     }
/// }
/// ```
#[proc_macro_derive(Bindable, attributes(env))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    expand::expand_bindable(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
