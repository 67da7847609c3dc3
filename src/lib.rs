//! # named-values
//!
//! Lazily sorted named-value arrays and the linear-time merge algorithms
//! that operate on them.
//!
//! ## Overview
//!
//! A *named value* is any record that carries an orderable name plus an
//! arbitrary payload, such as an animation curve weight or an attribute.
//! This library provides:
//!
//! - **[`NamedValueArray`]**: a growable array of named records that defers
//!   sorting until the first name lookup
//! - **Merge algorithms**: tape-merge union, intersection and filtered
//!   removal over one or two arrays (see [`named_value`])
//! - **[`Name`]**: an interned, `Copy` symbol suitable as a record key
//! - **Curves**: float curve records and blending helpers built on the merge
//!   algorithms (see [`curve`])
//!
//! ## Feature Flags
//!
//! - `name`: the interned [`Name`] type
//! - `curve`: curve records and blending helpers
//! - `derive`: `#[derive(NamedElement)]`
//! - `sorting-checks`: verify sortedness after every lazy sort (debug builds only)
//! - `duplicate-checks`: verify name uniqueness after every append (debug builds
//!   only, off by default; always on for this crate's own unit tests)
//! - `tracing`: emit `trace!` events for sorts and merges
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use named_values::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Weight {
//!     name: &'static str,
//!     value: f32,
//! }
//!
//! impl NamedElement for Weight {
//!     type Name = &'static str;
//!
//!     fn name(&self) -> &Self::Name {
//!         &self.name
//!     }
//!
//!     fn set_name(&mut self, name: Self::Name) {
//!         self.name = name;
//!     }
//! }
//!
//! let mut pose: NamedValueArray<Weight> = NamedValueArray::new();
//! pose.add(Weight { name: "y", value: 2.0 });
//! pose.add(Weight { name: "x", value: 1.0 });
//!
//! let mut delta: NamedValueArray<Weight> = NamedValueArray::new();
//! delta.add(Weight { name: "y", value: 20.0 });
//! delta.add(Weight { name: "z", value: 30.0 });
//!
//! union_in_place(&mut pose, &delta, |target, source, _flags| {
//!     target.value += source.value;
//! });
//!
//! assert_eq!(pose.find(&"y").map(|weight| weight.value), Some(22.0));
//! assert_eq!(pose.find(&"z").map(|weight| weight.value), Some(30.0));
//! assert_eq!(pose.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the element trait and the merge algorithms.
///
/// # Usage
///
/// ```rust
/// use named_values::prelude::*;
/// ```
pub mod prelude {
    pub use crate::named_value::*;

    #[cfg(feature = "name")]
    pub use crate::name::Name;

    #[cfg(feature = "curve")]
    pub use crate::curve::*;
}

pub mod named_value;

#[cfg(feature = "name")]
pub mod name;

#[cfg(feature = "curve")]
pub mod curve;

pub use named_value::{InvariantViolation, NamedElement, NamedValueArray, UnionFlags};

#[cfg(feature = "name")]
pub use name::Name;

#[cfg(feature = "derive")]
pub use named_values_derive::NamedElement;
