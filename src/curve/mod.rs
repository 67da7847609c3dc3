//! Float curves built on named-value arrays.
//!
//! A [`Curve`] is a [`NamedValueArray`](crate::NamedValueArray) of
//! [`CurveElement`]s: one weight per interned [`Name`](crate::Name), plus a
//! few flags describing where the weight is consumed. The helpers in this
//! module are the typical per-frame operations of an animation pipeline, each
//! expressed as a single tape merge:
//!
//! - [`blend`]: linear interpolation between two curves (`union_into`)
//! - [`accumulate`]: additive layering (`union_in_place`)
//! - [`override_by`]: replace weights (`union_in_place_copy`)
//! - [`approx_eq`]: tolerance comparison (`union_for_each`)
//! - [`CurveFilter`]: remove or keep named weights (`remove_by_predicate`,
//!   `intersection`)
//!
//! A name missing from a curve is treated as a weight of `0.0`.
//!
//! # Examples
//!
//! ```rust
//! use named_values::curve::{blend, Curve};
//! use named_values::Name;
//!
//! let mut idle = Curve::new();
//! idle.set(Name::new("doc_blink"), 1.0);
//!
//! let mut talk = Curve::new();
//! talk.set(Name::new("doc_jaw"), 0.8);
//!
//! let mut pose = Curve::new();
//! blend(&mut pose, &idle, &talk, 0.5);
//!
//! assert_eq!(pose.get(Name::new("doc_blink")), Some(0.5));
//! assert_eq!(pose.get(Name::new("doc_jaw")), Some(0.4));
//! ```

mod blend;
mod element;
mod filter;

pub use blend::accumulate;
pub use blend::approx_eq;
pub use blend::blend;
pub use blend::override_by;
pub use element::Curve;
pub use element::CurveElement;
pub use element::CurveElementFlags;
pub use filter::CurveFilter;
pub use filter::CurveFilterElement;
pub use filter::CurveFilterMode;
