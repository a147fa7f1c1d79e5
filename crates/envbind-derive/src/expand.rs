//! `Bindable` derive expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields};

use crate::parse::{classify, EnvAttrs, FieldKind};

/// Expand the `Bindable` derive for a named-field struct.
///
/// The generated `fields` implementation yields one `envbind::Field` per
/// struct field, in declaration order, so the extractor sees the struct
/// exactly as it is written.
pub fn expand_bindable(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Bindable requires a struct with named fields",
            ))
        }
    };

    let mut entries = Vec::new();
    for field in fields {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let name = field_ident.to_string();
        let attrs = EnvAttrs::from_attrs(&field.attrs)?;

        let kind = if attrs.skip {
            FieldKind::Ignored
        } else if attrs.text {
            FieldKind::Text
        } else {
            classify(&field.ty)
        };

        let constructor = match kind {
            FieldKind::Integer => quote! {
                ::envbind::Field::integer(#name, &mut self.#field_ident)
            },
            FieldKind::Text => quote! {
                ::envbind::Field::text(#name, &mut self.#field_ident)
            },
            FieldKind::Boolean => quote! {
                ::envbind::Field::boolean(#name, &mut self.#field_ident)
            },
            FieldKind::Ignored => quote! {
                ::envbind::Field::ignored(#name)
            },
        };

        let entry = match &attrs.name {
            Some(key) => quote! { #constructor.with_key(#key) },
            None => constructor,
        };
        entries.push(entry);
    }

    Ok(quote! {
        impl #impl_generics ::envbind::Bindable for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envbind::Field<'_>> {
                ::std::vec![
                    #(#entries),*
                ]
            }
        }
    })
}
