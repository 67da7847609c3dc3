//! Derive macro for named-value records.
//!
//! This crate provides `#[derive(NamedElement)]`, which implements
//! `named_values::NamedElement` for a struct by pointing it at the struct's
//! name field.
//!
//! # Example
//!
//! ```rust,ignore
//! use named_values::{NamedElement, NamedValueArray};
//!
//! #[derive(Clone, Debug, Default, NamedElement)]
//! struct Weight {
//!     name: String,
//!     value: f32,
//! }
//!
//! let mut weights = NamedValueArray::new();
//! weights.add(Weight { name: "jaw".to_string(), value: 0.5 });
//! assert!(weights.has_element("jaw"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod named_element;

use proc_macro::TokenStream;

/// Derive macro implementing `NamedElement` for a struct.
///
/// The name field is the field marked `#[name]`, or else the field called
/// `name`. Its type becomes `NamedElement::Name` and must implement
/// `Ord + Clone`.
///
/// # Requirements
///
/// - The type must be a struct with named fields
/// - At most one field may be marked `#[name]`
///
/// # Generated Code
///
/// ```rust,ignore
/// impl NamedElement for StructName {
///     type Name = FieldType;
///     fn name(&self) -> &FieldType { &self.field }
///     fn set_name(&mut self, name: FieldType) { self.field = name; }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use named_values::NamedElement;
///
/// #[derive(Default, NamedElement)]
/// struct Attribute {
///     #[name]
///     key: u32,
///     payload: Vec<u8>,
/// }
///
/// let attribute = Attribute::from_name(7);
/// assert_eq!(*attribute.name(), 7);
/// ```
#[proc_macro_derive(NamedElement, attributes(name))]
pub fn derive_named_element(input: TokenStream) -> TokenStream {
    named_element::derive_named_element_impl(input)
}
