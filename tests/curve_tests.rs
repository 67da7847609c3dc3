#![cfg(feature = "curve")]
//! Integration tests for curves and curve filters.
//!
//! Names are interned process-wide, so each test uses its own prefix.

use named_values::Name;
use named_values::curve::{
    Curve, CurveElement, CurveElementFlags, CurveFilter, CurveFilterMode, accumulate, approx_eq,
    blend, override_by,
};
use rstest::rstest;

fn curve(entries: &[(&str, f32)]) -> Curve {
    let mut curve = Curve::new();
    for &(name, value) in entries {
        curve.set(Name::new(name), value);
    }
    curve
}

fn weight(curve: &Curve, name: &str) -> Option<f32> {
    curve.get(Name::new(name))
}

// =============================================================================
// Blend
// =============================================================================

#[rstest]
fn test_blend_covers_names_of_both_sides() {
    let from = curve(&[("it_blend_jaw", 1.0), ("it_blend_brow", 0.5)]);
    let to = curve(&[("it_blend_jaw", 0.0), ("it_blend_lid", 1.0)]);

    let mut result = Curve::new();
    blend(&mut result, &from, &to, 0.5);

    assert_eq!(result.len(), 3);
    assert_eq!(weight(&result, "it_blend_jaw"), Some(0.5));
    assert_eq!(weight(&result, "it_blend_brow"), Some(0.25));
    assert_eq!(weight(&result, "it_blend_lid"), Some(0.5));
    assert!(result.is_sorted());
}

#[rstest]
fn test_blend_replaces_previous_result() {
    let from = curve(&[("it_blend_reuse_a", 1.0)]);
    let to = curve(&[("it_blend_reuse_a", 1.0)]);

    let mut result = curve(&[("it_blend_reuse_stale", 7.0)]);
    blend(&mut result, &from, &to, 0.3);

    assert_eq!(weight(&result, "it_blend_reuse_stale"), None);
    assert_eq!(weight(&result, "it_blend_reuse_a"), Some(1.0));
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
fn test_blend_endpoints(#[case] alpha: f32) {
    let from = curve(&[("it_blend_end", 2.0)]);
    let to = curve(&[("it_blend_end", 6.0)]);

    let mut result = Curve::new();
    blend(&mut result, &from, &to, alpha);

    let expected = if alpha == 0.0 { 2.0 } else { 6.0 };
    assert_eq!(weight(&result, "it_blend_end"), Some(expected));
}

// =============================================================================
// Accumulate and Override
// =============================================================================

#[rstest]
fn test_accumulate_merges_flags() {
    let name = Name::new("it_accumulate_flags");
    let mut target = Curve::new();
    target.add(CurveElement::new(name, 0.5).with_flags(CurveElementFlags::MORPH_TARGET));
    let mut source = Curve::new();
    source.add(CurveElement::new(name, 0.25).with_flags(CurveElementFlags::MATERIAL));

    accumulate(&mut target, &source);

    let element = target.find(&name).map(|element| *element);
    assert_eq!(
        element,
        Some(
            CurveElement::new(name, 0.75)
                .with_flags(CurveElementFlags::MORPH_TARGET | CurveElementFlags::MATERIAL)
        )
    );
}

#[rstest]
fn test_override_into_empty_copies_source() {
    let source = curve(&[("it_override_a", 1.0), ("it_override_b", 2.0)]);
    let mut target = Curve::new();
    override_by(&mut target, &source);
    assert_eq!(target, source);
}

// =============================================================================
// Approximate Equality
// =============================================================================

#[rstest]
#[case(0.05, true)]
#[case(0.01, false)]
fn test_approx_eq_uses_tolerance(#[case] tolerance: f32, #[case] expected: bool) {
    let left = curve(&[("it_approx_a", 1.0), ("it_approx_b", 0.5)]);
    let right = curve(&[("it_approx_a", 1.02), ("it_approx_b", 0.5)]);
    assert_eq!(approx_eq(&left, &right, tolerance), expected);
}

#[rstest]
fn test_approx_eq_missing_name_compares_to_zero() {
    let left = curve(&[("it_approx_missing", 0.5)]);
    let right = Curve::new();
    assert!(!approx_eq(&left, &right, 0.1));
    assert!(approx_eq(&left, &right, 0.5));
}

// =============================================================================
// Filters
// =============================================================================

#[rstest]
fn test_filter_default_allows_everything() {
    let mut target = curve(&[("it_filter_default", 1.0)]);
    let filter = CurveFilter::default();
    filter.apply(&mut target);
    assert_eq!(filter.mode(), CurveFilterMode::AllowAll);
    assert_eq!(target.len(), 1);
}

#[rstest]
fn test_allow_only_filtered_keeps_values() {
    let mut target = curve(&[
        ("it_filter_keep", 0.4),
        ("it_filter_drop", 0.6),
    ]);
    let mut filter = CurveFilter::new(CurveFilterMode::AllowOnlyFiltered);
    filter.append_names([Name::new("it_filter_keep")]);

    filter.apply(&mut target);

    assert_eq!(weight(&target, "it_filter_keep"), Some(0.4));
    assert_eq!(weight(&target, "it_filter_drop"), None);
    assert!(target.is_sorted());
}

#[rstest]
fn test_disallow_filtered_with_empty_list_keeps_all() {
    let mut target = curve(&[("it_filter_empty_a", 1.0), ("it_filter_empty_b", 2.0)]);
    CurveFilter::new(CurveFilterMode::DisallowFiltered).apply(&mut target);
    assert_eq!(target.len(), 2);
}
