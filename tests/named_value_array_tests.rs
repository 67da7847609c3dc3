//! Unit tests for NamedValueArray.
//!
//! These tests cover appending, lazy sorting, lookup and the debug-only
//! invariant checks.

use named_values::{InvariantViolation, NamedElement, NamedValueArray};
use rstest::rstest;

// =============================================================================
// Test Records
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
struct Weight {
    name: String,
    value: f32,
}

impl NamedElement for Weight {
    type Name = String;

    fn name(&self) -> &String {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

fn weight(name: &str, value: f32) -> Weight {
    Weight {
        name: name.to_string(),
        value,
    }
}

fn names(array: &NamedValueArray<Weight>) -> Vec<String> {
    array
        .sorted_elements()
        .iter()
        .map(|element| element.name.clone())
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_array() {
    let array: NamedValueArray<Weight> = NamedValueArray::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
}

#[rstest]
fn test_with_capacity_reserves() {
    let array: NamedValueArray<Weight> = NamedValueArray::with_capacity(16);
    assert!(array.capacity() >= 16);
    assert!(array.is_empty());
}

#[rstest]
fn test_reserve_and_shrink_keep_contents() {
    let mut array: NamedValueArray<Weight> = [weight("b", 1.0), weight("a", 2.0)].into_iter().collect();
    array.reserve(100);
    assert!(array.capacity() >= 102);
    array.shrink_to_fit();
    assert_eq!(names(&array), vec!["a", "b"]);
}

#[rstest]
fn test_collect_and_extend_append() {
    let mut array: NamedValueArray<Weight> = [weight("c", 3.0)].into_iter().collect();
    array.extend([weight("a", 1.0), weight("b", 2.0)]);
    assert_eq!(array.len(), 3);
    assert!(!array.is_sorted());
    assert_eq!(names(&array), vec!["a", "b", "c"]);
}

// =============================================================================
// Appending
// =============================================================================

#[rstest]
fn test_append_names_builds_name_only_elements() {
    let mut array: NamedValueArray<Weight> = NamedValueArray::new();
    array.append_names(["spine".to_string(), "head".to_string()]);

    assert_eq!(array.len(), 2);
    assert_eq!(array.find("spine").map(|element| element.value), Some(0.0));
    assert_eq!(names(&array), vec!["head", "spine"]);
}

#[rstest]
fn test_append_names_from_slice_and_fixed_list_agree() {
    let source = ["x".to_string(), "y".to_string()];

    let mut from_slice: NamedValueArray<Weight> = NamedValueArray::new();
    from_slice.append_names(source.iter().cloned());

    let mut from_list: NamedValueArray<Weight> = NamedValueArray::new();
    from_list.append_names(["x".to_string(), "y".to_string()]);

    assert_eq!(from_slice, from_list);
}

#[rstest]
fn test_append_names_marks_unsorted() {
    let mut array: NamedValueArray<Weight> = [weight("m", 0.0)].into_iter().collect();
    array.sort_elements_if_required();
    array.append_names(["a".to_string()]);
    assert!(!array.is_sorted());
}

#[rstest]
#[cfg_attr(
    all(debug_assertions, feature = "duplicate-checks"),
    should_panic(expected = "duplicates the name")
)]
fn test_duplicate_add_is_only_caught_by_debug_checks() {
    let mut array = NamedValueArray::new();
    array.add(weight("dup", 1.0));
    array.add(weight("dup", 2.0));

    // Without the debug checks the duplicate is stored and reported by validate.
    assert_eq!(array.len(), 2);
    assert_eq!(
        array.validate(),
        Err(InvariantViolation::DuplicateName { index: 1 })
    );
}

// =============================================================================
// Lookup and Lazy Sorting
// =============================================================================

#[rstest]
#[case("a", Some(1.0))]
#[case("m", Some(13.0))]
#[case("z", Some(26.0))]
#[case("q", None)]
fn test_find_after_unsorted_appends(#[case] name: &str, #[case] expected: Option<f32>) {
    let array: NamedValueArray<Weight> = [weight("z", 26.0), weight("a", 1.0), weight("m", 13.0)]
        .into_iter()
        .collect();

    assert_eq!(array.find(name).map(|element| element.value), expected);
    assert_eq!(array.has_element(name), expected.is_some());
}

#[rstest]
fn test_index_of_uses_name_order() {
    let array: NamedValueArray<Weight> = [weight("c", 0.0), weight("a", 0.0), weight("b", 0.0)]
        .into_iter()
        .collect();
    assert_eq!(array.index_of("a"), Some(0));
    assert_eq!(array.index_of("c"), Some(2));
    assert_eq!(array.index_of("d"), None);
}

#[rstest]
fn test_query_on_shared_reference_sorts_once() {
    let array: NamedValueArray<Weight> = [weight("b", 0.0), weight("a", 0.0)].into_iter().collect();
    let view: &NamedValueArray<Weight> = &array;

    assert!(!view.is_sorted());
    assert!(view.has_element("a"));
    assert!(view.is_sorted());

    let first = names(view);
    assert!(view.has_element("b"));
    assert_eq!(names(view), first);
}

#[rstest]
fn test_find_mut_then_add_resorts() {
    let mut array: NamedValueArray<Weight> = [weight("b", 0.0)].into_iter().collect();
    if let Some(element) = array.find_mut("b") {
        element.value = 5.0;
    }
    array.add(weight("a", 1.0));

    assert!(!array.is_sorted());
    assert_eq!(names(&array), vec!["a", "b"]);
    assert_eq!(array.find("b").map(|element| element.value), Some(5.0));
}

#[rstest]
fn test_for_each_element_visits_insertion_order_without_sorting() {
    let array: NamedValueArray<Weight> = [weight("z", 0.0), weight("a", 0.0)].into_iter().collect();
    let mut visited = Vec::new();
    array.for_each_element(|element| visited.push(element.name.clone()));

    assert_eq!(visited, vec!["z", "a"]);
    assert!(!array.is_sorted());
}

#[rstest]
fn test_clear_empties_array() {
    let mut array: NamedValueArray<Weight> = [weight("a", 0.0)].into_iter().collect();
    array.clear();
    assert!(array.is_empty());
    assert!(!array.has_element("a"));
}

#[rstest]
fn test_into_sorted_vec_returns_name_order() {
    let array: NamedValueArray<Weight> = [weight("b", 2.0), weight("a", 1.0)].into_iter().collect();
    assert_eq!(array.into_sorted_vec(), vec![weight("a", 1.0), weight("b", 2.0)]);
}

#[rstest]
fn test_validate_accepts_unique_names() {
    let array: NamedValueArray<Weight> = [weight("b", 0.0), weight("a", 0.0)].into_iter().collect();
    assert_eq!(array.validate(), Ok(()));
}

#[rstest]
fn test_equality_ignores_insertion_order() {
    let left: NamedValueArray<Weight> = [weight("a", 1.0), weight("b", 2.0)].into_iter().collect();
    let right: NamedValueArray<Weight> = [weight("b", 2.0), weight("a", 1.0)].into_iter().collect();
    assert_eq!(left, right);
}

#[rstest]
fn test_debug_lists_elements() {
    let array: NamedValueArray<Weight> = [weight("a", 1.0)].into_iter().collect();
    let text = format!("{array:?}");
    assert!(text.starts_with("NamedValueArray"));
    assert!(text.contains("sorted: false"));
}
