//! Tape-merge algorithms over named-value arrays.
//!
//! Every algorithm first brings its array arguments into the sorted state,
//! then walks both inputs with independent cursors, advancing whichever side
//! has the smaller name (or both on a match).
//!
//! # Time Complexity
//!
//! | Algorithm              | Complexity after sorting |
//! |------------------------|--------------------------|
//! | `union_in_place`       | O(n + m)                 |
//! | `union_in_place_copy`  | O(n + m)                 |
//! | `union_into`           | O(n + m)                 |
//! | `union_for_each`       | O(n + m)                 |
//! | `intersection`         | O(n + m)                 |
//! | `remove_by_predicate`  | O(n + m)                 |
//!
//! # Aliasing
//!
//! Passing the same array as both inputs of a two-input algorithm is a
//! contract violation, checked with `debug_assert!`. Pass a clone instead.

use super::array::NamedValueArray;
use super::element::NamedElement;
use super::flags::UnionFlags;
use std::cmp::Ordering;
use std::iter::Peekable;

const ALIASED_INPUTS_PANIC_MESSAGE: &str =
    "named value merge requires distinct input arrays; pass a clone to merge an array with itself";

/// Merges `source` into `target`, calling `predicate` on every affected element of `target`.
///
/// - Names in both: `predicate(target_element, source_element, BothArgsValid)`.
/// - Names only in `source`: a new `A::from_name(name)` is inserted into
///   `target` at its sorted position, then
///   `predicate(new_element, source_element, ValidArg1)` is called.
/// - Names only in `target`: left untouched, `predicate` is not called.
///
/// `target` is the accumulator and `source` the applied delta, which is why
/// the treatment is asymmetric. Use [`union_into`] or [`union_for_each`] to
/// observe every name of both inputs.
///
/// `target` stays sorted.
///
/// # Examples
///
/// ```rust
/// use named_values::named_value::union_in_place;
/// use named_values::{NamedElement, NamedValueArray, UnionFlags};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter {
///     name: &'static str,
///     hits: u32,
/// }
///
/// impl NamedElement for Counter {
///     type Name = &'static str;
///
///     fn name(&self) -> &Self::Name {
///         &self.name
///     }
///
///     fn set_name(&mut self, name: Self::Name) {
///         self.name = name;
///     }
/// }
///
/// let mut totals: NamedValueArray<Counter> = [Counter { name: "a", hits: 1 }].into_iter().collect();
/// let frame: NamedValueArray<Counter> = [
///     Counter { name: "a", hits: 2 },
///     Counter { name: "b", hits: 5 },
/// ]
/// .into_iter()
/// .collect();
///
/// let mut fresh = Vec::new();
/// union_in_place(&mut totals, &frame, |total, delta, flags| {
///     if flags == UnionFlags::ValidArg1 {
///         fresh.push(delta.name);
///     }
///     total.hits += delta.hits;
/// });
///
/// assert_eq!(totals.find(&"a").map(|counter| counter.hits), Some(3));
/// assert_eq!(totals.find(&"b").map(|counter| counter.hits), Some(5));
/// assert_eq!(fresh, vec!["b"]);
/// ```
pub fn union_in_place<A, B, F>(
    target: &mut NamedValueArray<A>,
    source: &NamedValueArray<B>,
    mut predicate: F,
) where
    A: NamedElement + Default,
    B: NamedElement<Name = A::Name>,
    F: FnMut(&mut A, &B, UnionFlags),
{
    let source_elements = source.sorted_elements();
    let target_elements = target.sorted_elements_mut();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target_len = target_elements.len(),
        source_len = source_elements.len(),
        "union in place"
    );

    let mut merge = InPlaceMerge::new(target_elements, source_elements.len());
    let mut source_index = 0;

    while source_index < source_elements.len() {
        let source_element = &source_elements[source_index];
        let Some(target_element) = merge.existing.peek_mut() else {
            break;
        };

        match target_element.name().cmp(source_element.name()) {
            Ordering::Less => {
                merge.merged.extend(merge.existing.next());
            }
            Ordering::Equal => {
                predicate(target_element, source_element, UnionFlags::BothArgsValid);
                merge.merged.extend(merge.existing.next());
                source_index += 1;
            }
            Ordering::Greater => {
                let mut inserted = A::from_name(source_element.name().clone());
                predicate(&mut inserted, source_element, UnionFlags::ValidArg1);
                merge.merged.push(inserted);
                source_index += 1;
            }
        }
    }

    merge.merged.extend(merge.existing.by_ref());

    // Names past the end of target are appended in bulk.
    for source_element in &source_elements[source_index..] {
        let mut appended = A::from_name(source_element.name().clone());
        predicate(&mut appended, source_element, UnionFlags::ValidArg1);
        merge.merged.push(appended);
    }

    drop(merge);
    drop(source_elements);
    target.check_merged_order();
}

/// Output and pending input of an in-place union.
///
/// Dropping it writes the merged prefix followed by the unvisited target
/// elements back into the target, including when a predicate panics. Both
/// parts are in name order and every merged name sorts before every pending
/// one, so the target stays sorted and keeps all of its elements.
struct InPlaceMerge<'a, A> {
    target: &'a mut Vec<A>,
    merged: Vec<A>,
    existing: Peekable<std::vec::IntoIter<A>>,
}

impl<'a, A> InPlaceMerge<'a, A> {
    fn new(target: &'a mut Vec<A>, additional: usize) -> Self {
        let existing = std::mem::take(target);
        Self {
            merged: Vec::with_capacity(existing.len() + additional),
            existing: existing.into_iter().peekable(),
            target,
        }
    }
}

impl<A> Drop for InPlaceMerge<'_, A> {
    fn drop(&mut self) {
        self.merged.extend(self.existing.by_ref());
        std::mem::swap(self.target, &mut self.merged);
    }
}

/// Merges `source` into `target`, overwriting with clones of `source`'s elements.
///
/// After the call, every name in `source` maps to an exact clone of the
/// corresponding `source` element; names only in `target` are untouched.
/// If `target` starts empty it simply becomes a clone of `source`.
pub fn union_in_place_copy<T>(target: &mut NamedValueArray<T>, source: &NamedValueArray<T>)
where
    T: NamedElement + Default + Clone,
{
    if target.is_empty() {
        target.assign_sorted(source.sorted_elements().to_vec());
        return;
    }

    union_in_place(target, source, |target_element, source_element, _| {
        target_element.clone_from(source_element);
    });
}

/// Builds `result` as the union of `first` and `second`, one record per name.
///
/// `result` is cleared first. For every name in either input a new
/// `R::from_name(name)` is created and passed to
/// `predicate(result_element, first_element, second_element, flags)`. The side
/// that lacks the name is represented by a stub, a fresh `from_name(name)`
/// element built for that call only, and `flags` says which side is real.
///
/// `result` is left sorted.
///
/// # Panics
///
/// In debug builds, panics if `first` and `second` are the same array.
///
/// # Examples
///
/// ```rust
/// use named_values::named_value::union_into;
/// use named_values::{NamedElement, NamedValueArray};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Channel {
///     name: &'static str,
///     value: i32,
/// }
///
/// impl NamedElement for Channel {
///     type Name = &'static str;
///
///     fn name(&self) -> &Self::Name {
///         &self.name
///     }
///
///     fn set_name(&mut self, name: Self::Name) {
///         self.name = name;
///     }
/// }
///
/// let first: NamedValueArray<Channel> = [
///     Channel { name: "x", value: 1 },
///     Channel { name: "y", value: 2 },
/// ]
/// .into_iter()
/// .collect();
/// let second: NamedValueArray<Channel> = [
///     Channel { name: "y", value: 20 },
///     Channel { name: "z", value: 30 },
/// ]
/// .into_iter()
/// .collect();
///
/// let mut result = NamedValueArray::new();
/// union_into(&mut result, &first, &second, |out: &mut Channel, a, b, _flags| {
///     out.value = a.value + b.value;
/// });
///
/// let values: Vec<i32> = result.sorted_elements().iter().map(|channel| channel.value).collect();
/// assert_eq!(values, vec![1, 22, 30]);
/// ```
pub fn union_into<R, A, B, F>(
    result: &mut NamedValueArray<R>,
    first: &NamedValueArray<A>,
    second: &NamedValueArray<B>,
    mut predicate: F,
) where
    R: NamedElement + Default,
    A: NamedElement<Name = R::Name> + Default,
    B: NamedElement<Name = R::Name> + Default,
    F: FnMut(&mut R, &A, &B, UnionFlags),
{
    debug_assert!(
        !std::ptr::addr_eq(first, second),
        "{}",
        ALIASED_INPUTS_PANIC_MESSAGE
    );

    let first_elements = first.sorted_elements();
    let second_elements = second.sorted_elements();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        first_len = first_elements.len(),
        second_len = second_elements.len(),
        "union into"
    );

    let reserve = first_elements.len().max(second_elements.len()) * 3 / 2;
    let mut merged = Vec::with_capacity(reserve);

    walk_union(&first_elements, &second_elements, |first_element, second_element| {
        let (name, flags) = match (first_element, second_element) {
            (Some(first_element), Some(_)) => {
                (first_element.name().clone(), UnionFlags::BothArgsValid)
            }
            (Some(first_element), None) => (first_element.name().clone(), UnionFlags::ValidArg0),
            (None, Some(second_element)) => {
                (second_element.name().clone(), UnionFlags::ValidArg1)
            }
            (None, None) => return,
        };

        let first_stub;
        let first_element = match first_element {
            Some(first_element) => first_element,
            None => {
                first_stub = A::from_name(name.clone());
                &first_stub
            }
        };
        let second_stub;
        let second_element = match second_element {
            Some(second_element) => second_element,
            None => {
                second_stub = B::from_name(name.clone());
                &second_stub
            }
        };

        let mut element = R::from_name(name);
        predicate(&mut element, first_element, second_element, flags);
        merged.push(element);
    });

    drop(first_elements);
    drop(second_elements);
    result.assign_sorted(merged);
}

/// Calls `predicate` once for every name in the union of `first` and `second`.
///
/// Nothing is written. The side that lacks a name is represented by a fresh
/// `from_name(name)` stub and `flags` says which side is real.
///
/// # Panics
///
/// In debug builds, panics if `first` and `second` are the same array.
pub fn union_for_each<A, B, F>(
    first: &NamedValueArray<A>,
    second: &NamedValueArray<B>,
    mut predicate: F,
) where
    A: NamedElement + Default,
    B: NamedElement<Name = A::Name> + Default,
    F: FnMut(&A, &B, UnionFlags),
{
    debug_assert!(
        !std::ptr::addr_eq(first, second),
        "{}",
        ALIASED_INPUTS_PANIC_MESSAGE
    );

    let first_elements = first.sorted_elements();
    let second_elements = second.sorted_elements();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        first_len = first_elements.len(),
        second_len = second_elements.len(),
        "union for each"
    );

    walk_union(
        &first_elements,
        &second_elements,
        |first_element, second_element| match (first_element, second_element) {
            (Some(first_element), Some(second_element)) => {
                predicate(first_element, second_element, UnionFlags::BothArgsValid);
            }
            (Some(first_element), None) => {
                let second_stub = B::from_name(first_element.name().clone());
                predicate(first_element, &second_stub, UnionFlags::ValidArg0);
            }
            (None, Some(second_element)) => {
                let first_stub = A::from_name(second_element.name().clone());
                predicate(&first_stub, second_element, UnionFlags::ValidArg1);
            }
            (None, None) => {}
        },
    );
}

/// Calls `predicate` once for every name present in both `first` and `second`.
///
/// Names present in only one input are skipped.
///
/// # Panics
///
/// In debug builds, panics if `first` and `second` are the same array.
pub fn intersection<A, B, F>(
    first: &NamedValueArray<A>,
    second: &NamedValueArray<B>,
    mut predicate: F,
) where
    A: NamedElement,
    B: NamedElement<Name = A::Name>,
    F: FnMut(&A, &B),
{
    debug_assert!(
        !std::ptr::addr_eq(first, second),
        "{}",
        ALIASED_INPUTS_PANIC_MESSAGE
    );

    let first_elements = first.sorted_elements();
    let second_elements = second.sorted_elements();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        first_len = first_elements.len(),
        second_len = second_elements.len(),
        "intersection"
    );

    let mut first_index = 0;
    let mut second_index = 0;

    while first_index < first_elements.len() && second_index < second_elements.len() {
        let first_element = &first_elements[first_index];
        let second_element = &second_elements[second_index];

        match first_element.name().cmp(second_element.name()) {
            Ordering::Less => first_index += 1,
            Ordering::Greater => second_index += 1,
            Ordering::Equal => {
                predicate(first_element, second_element);
                first_index += 1;
                second_index += 1;
            }
        }
    }
}

/// Removes elements of `target` whose name is in `filter` and for which `predicate` returns `true`.
///
/// `predicate(target_element, filter_element)` is called once per name present
/// in both arrays. Names present in only one array are neither visited nor
/// removed. Removal preserves order, so `target` stays sorted.
///
/// # Examples
///
/// ```rust
/// use named_values::named_value::remove_by_predicate;
/// use named_values::{NamedElement, NamedValueArray};
///
/// #[derive(Clone, Debug, Default)]
/// struct Entry {
///     name: u16,
///     value: i32,
/// }
///
/// impl NamedElement for Entry {
///     type Name = u16;
///
///     fn name(&self) -> &u16 {
///         &self.name
///     }
///
///     fn set_name(&mut self, name: u16) {
///         self.name = name;
///     }
/// }
///
/// let mut entries: NamedValueArray<Entry> = [
///     Entry { name: 1, value: 10 },
///     Entry { name: 2, value: -5 },
///     Entry { name: 3, value: -1 },
/// ]
/// .into_iter()
/// .collect();
/// let mask: NamedValueArray<Entry> = [Entry { name: 2, value: 0 }, Entry { name: 3, value: 0 }]
///     .into_iter()
///     .collect();
///
/// remove_by_predicate(&mut entries, &mask, |entry, _| entry.value < -2);
///
/// assert!(entries.has_element(&1));
/// assert!(!entries.has_element(&2));
/// assert!(entries.has_element(&3));
/// ```
pub fn remove_by_predicate<A, B, F>(
    target: &mut NamedValueArray<A>,
    filter: &NamedValueArray<B>,
    mut predicate: F,
) where
    A: NamedElement,
    B: NamedElement<Name = A::Name>,
    F: FnMut(&A, &B) -> bool,
{
    let filter_elements = filter.sorted_elements();
    let target_elements = target.sorted_elements_mut();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target_len = target_elements.len(),
        filter_len = filter_elements.len(),
        "remove by predicate"
    );

    let mut filter_index = 0;

    target_elements.retain(|target_element| {
        while filter_index < filter_elements.len()
            && filter_elements[filter_index].name() < target_element.name()
        {
            filter_index += 1;
        }

        match filter_elements.get(filter_index) {
            Some(filter_element) if filter_element.name() == target_element.name() => {
                filter_index += 1;
                !predicate(target_element, filter_element)
            }
            _ => true,
        }
    });
}

/// Walks two sorted slices in name order, reporting each union name once.
///
/// `visit` receives `Some` for every side that holds the name.
fn walk_union<A, B, V>(first: &[A], second: &[B], mut visit: V)
where
    A: NamedElement,
    B: NamedElement<Name = A::Name>,
    V: FnMut(Option<&A>, Option<&B>),
{
    let mut first_iter = first.iter().peekable();
    let mut second_iter = second.iter().peekable();

    loop {
        let ordering = match (first_iter.peek(), second_iter.peek()) {
            (Some(first_element), Some(second_element)) => {
                first_element.name().cmp(second_element.name())
            }
            _ => break,
        };

        match ordering {
            Ordering::Less => visit(first_iter.next(), None),
            Ordering::Greater => visit(None, second_iter.next()),
            Ordering::Equal => visit(first_iter.next(), second_iter.next()),
        }
    }

    // Whichever side runs longer is finished in one pass.
    for first_element in first_iter {
        visit(Some(first_element), None);
    }
    for second_element in second_iter {
        visit(None, Some(second_element));
    }
}
