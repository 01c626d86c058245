//! Proc-macros for vitrine.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field of a configuration struct.
//!
//! The field's own doc comment is copied onto its builder method.
//!
//! ### Example
//! ```ignore
//! use vitrine_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, Default, WithBuilders)]
//! pub struct AutoplayConfig {
//!     /// Interval between automatic advances
//!     pub delay_ms: u64,
//! }
//!
//! let config = AutoplayConfig::default().with_delay_ms(6000);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style), return `Self` and
/// carry `#[must_use]`.
#[proc_macro_derive(WithBuilders)]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let methods = fields_named.named.iter().filter_map(|field| {
        let field_ident = field.ident.as_ref()?;
        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);
        let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc"));

        Some(quote! {
            #(#docs)*
            #[inline]
            #[must_use]
            pub fn #method_ident(mut self, value: #field_ty) -> Self {
                self.#field_ident = value;
                self
            }
        })
    });

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}
