//! Per-frame curve blending operations.

use super::element::{Curve, CurveElement};
use crate::named_value::{union_for_each, union_in_place, union_in_place_copy, union_into};

/// Writes the linear blend of `from` and `to` at `alpha` into `result`.
///
/// Every name of either input appears once in `result`. A name missing from
/// one side blends against `0.0`; flags of both sides are combined.
///
/// # Examples
///
/// ```rust
/// use named_values::curve::{blend, Curve};
/// use named_values::Name;
///
/// let mut from = Curve::new();
/// from.set(Name::new("blend_doc_smile"), 1.0);
/// let mut to = Curve::new();
/// to.set(Name::new("blend_doc_smile"), 0.0);
///
/// let mut result = Curve::new();
/// blend(&mut result, &from, &to, 0.25);
/// assert_eq!(result.get(Name::new("blend_doc_smile")), Some(0.75));
/// ```
pub fn blend(result: &mut Curve, from: &Curve, to: &Curve, alpha: f32) {
    if std::ptr::eq(from, to) {
        result.clone_from(from);
        return;
    }

    union_into(
        result,
        from,
        to,
        |element: &mut CurveElement, from_element, to_element, _| {
            element.value = (to_element.value - from_element.value).mul_add(alpha, from_element.value);
            element.flags = from_element.flags | to_element.flags;
        },
    );
}

/// Adds the weights of `source` onto `target`.
///
/// Names only in `source` are added to `target` with the source weight.
pub fn accumulate(target: &mut Curve, source: &Curve) {
    union_in_place(target, source, |element, source_element, _| {
        element.value += source_element.value;
        element.flags |= source_element.flags;
    });
}

/// Replaces the weights of `target` with those of `source` wherever `source` has them.
pub fn override_by(target: &mut Curve, source: &Curve) {
    union_in_place_copy(target, source);
}

/// Returns `true` if every weight of either curve is within `tolerance` of the other.
///
/// A name missing from one curve compares against `0.0`.
///
/// # Examples
///
/// ```rust
/// use named_values::curve::{approx_eq, Curve};
/// use named_values::Name;
///
/// let mut left = Curve::new();
/// left.set(Name::new("approx_doc_brow"), 0.001);
/// let right = Curve::new();
///
/// assert!(approx_eq(&left, &right, 0.01));
/// assert!(!approx_eq(&left, &right, 0.0001));
/// ```
#[must_use]
pub fn approx_eq(left: &Curve, right: &Curve, tolerance: f32) -> bool {
    if std::ptr::eq(left, right) {
        return true;
    }

    let mut within = true;
    union_for_each(left, right, |left_element, right_element, _| {
        within &= (left_element.value - right_element.value).abs() <= tolerance;
    });
    within
}
