//! Implementation of the `#[derive(NamedElement)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, Generics, Ident, parse_macro_input};

/// Main implementation of the `NamedElement` derive macro.
pub fn derive_named_element_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_named_element(name, generics, named_fields)
                .unwrap_or_else(syn::Error::into_compile_error),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "NamedElement can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "NamedElement cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => {
            syn::Error::new_spanned(name, "NamedElement can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(name, "NamedElement cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the trait implementation for a struct with named fields.
fn generate_named_element(
    name: &Ident,
    generics: &Generics,
    fields: &FieldsNamed,
) -> syn::Result<TokenStream2> {
    let field = select_name_field(name, fields)?;
    let field_name = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "named field without an identifier"))?;
    let field_type = &field.ty;

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::named_values::NamedElement for #name #type_generics #where_clause {
            type Name = #field_type;

            #[inline]
            fn name(&self) -> &Self::Name {
                &self.#field_name
            }

            #[inline]
            fn set_name(&mut self, name: Self::Name) {
                self.#field_name = name;
            }
        }
    })
}

/// Picks the field marked `#[name]`, falling back to the field called `name`.
fn select_name_field<'a>(name: &Ident, fields: &'a FieldsNamed) -> syn::Result<&'a Field> {
    let mut marked = fields
        .named
        .iter()
        .filter(|field| field.attrs.iter().any(|attribute| attribute.path().is_ident("name")));

    if let Some(field) = marked.next() {
        if let Some(duplicate) = marked.next() {
            return Err(syn::Error::new_spanned(
                duplicate,
                "only one field may be marked #[name]",
            ));
        }
        return Ok(field);
    }

    fields
        .named
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "name"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "NamedElement requires a field called `name` or a field marked #[name].",
            )
        })
}
