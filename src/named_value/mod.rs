//! Named-value arrays and the algorithms that merge them.
//!
//! This module provides:
//!
//! - [`NamedElement`]: the contract a record type fulfils to be stored in a
//!   named-value array
//! - [`NamedValueArray`]: a lazily sorted, name-indexed array of records
//! - Tape-merge algorithms over one or two arrays:
//!   - [`union_in_place`] / [`union_in_place_copy`]: merge B into A
//!   - [`union_into`]: merge A and B into a third array
//!   - [`union_for_each`]: enumerate the union of A and B without writing
//!   - [`intersection`]: enumerate the names present in both A and B
//!   - [`remove_by_predicate`]: remove A's elements that match B
//!
//! # Lazy Sorting
//!
//! Appending never sorts. The first operation that needs name order (a lookup
//! or any merge) sorts the array once and records that it is sorted, so
//! repeated lookups pay nothing extra until the next append.
//!
//! # Examples
//!
//! ```rust
//! use named_values::named_value::{intersection, NamedElement, NamedValueArray};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Attribute {
//!     name: u32,
//!     value: i64,
//! }
//!
//! impl NamedElement for Attribute {
//!     type Name = u32;
//!
//!     fn name(&self) -> &u32 {
//!         &self.name
//!     }
//!
//!     fn set_name(&mut self, name: u32) {
//!         self.name = name;
//!     }
//! }
//!
//! let left: NamedValueArray<Attribute> = [
//!     Attribute { name: 3, value: 30 },
//!     Attribute { name: 1, value: 10 },
//! ]
//! .into_iter()
//! .collect();
//! let right: NamedValueArray<Attribute> = [Attribute { name: 3, value: 7 }].into_iter().collect();
//!
//! let mut products = Vec::new();
//! intersection(&left, &right, |a, b| products.push(a.value * b.value));
//! assert_eq!(products, vec![210]);
//! ```

mod array;
mod element;
mod error;
mod flags;
mod merge;

pub use array::NamedValueArray;
pub use element::NamedElement;
pub use error::InvariantViolation;
pub use flags::UnionFlags;
pub use merge::intersection;
pub use merge::remove_by_predicate;
pub use merge::union_for_each;
pub use merge::union_in_place;
pub use merge::union_in_place_copy;
pub use merge::union_into;
