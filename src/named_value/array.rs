//! Lazily sorted array of named records.
//!
//! This module provides [`NamedValueArray`], a growable array of records that
//! are kept in insertion order until a name-based query needs them sorted.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity                          |
//! |----------------------|-------------------------------------|
//! | `add`                | O(1) amortized                      |
//! | `append_names`       | O(k) for k names                    |
//! | `find` / `index_of`  | O(log n), plus O(n log n) if unsorted |
//! | `for_each_element`   | O(n), never sorts                   |
//! | `len` / `is_empty`   | O(1)                                |
//!
//! The debug-only duplicate check is off by default. With the
//! `duplicate-checks` feature in a build with `debug_assertions`, a single
//! `add` costs an extra O(log n) if the array was sorted and O(n) otherwise;
//! bulk appends cost an extra O(n log n).
//!
//! # Interior Mutability
//!
//! Lookups take `&self` but may need to sort first. The backing `Vec` lives in
//! a [`RefCell`] and the sorted flag in a [`Cell`], so a shared reference is
//! enough to trigger the one-time sort. The array is therefore not `Sync`.

use super::element::NamedElement;
use super::error::InvariantViolation;
use std::borrow::Borrow;
use std::cell::{Cell, Ref, RefCell};

/// Sortedness is verified after every lazy sort.
const SORTING_CHECKS: bool = cfg!(all(debug_assertions, feature = "sorting-checks"));

/// Name uniqueness is verified after every append.
const DUPLICATE_CHECKS: bool = cfg!(all(
    debug_assertions,
    any(test, feature = "duplicate-checks")
));

/// A growable array of named records, sorted by name on demand.
///
/// While the array is marked sorted its elements are in ascending name order
/// and no two elements share a name. Appending clears the mark; the next
/// name-based query sorts again.
///
/// Duplicate names are a caller contract violation. They are not rejected;
/// with the `duplicate-checks` feature in a debug build they panic at the
/// offending append.
///
/// # Type Parameters
///
/// * `T` - The record type. Must implement [`NamedElement`] for any
///   name-based operation.
///
/// # Examples
///
/// ```rust
/// use named_values::{NamedElement, NamedValueArray};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Slot {
///     name: u32,
///     value: f64,
/// }
///
/// impl NamedElement for Slot {
///     type Name = u32;
///
///     fn name(&self) -> &u32 {
///         &self.name
///     }
///
///     fn set_name(&mut self, name: u32) {
///         self.name = name;
///     }
/// }
///
/// let mut array = NamedValueArray::new();
/// array.add(Slot { name: 7, value: 0.5 });
/// array.append_names([3, 5]);
/// assert!(!array.is_sorted());
///
/// assert_eq!(array.find(&7).map(|slot| slot.value), Some(0.5));
/// assert!(array.is_sorted());
/// assert_eq!(array.index_of(&5), Some(1));
/// ```
pub struct NamedValueArray<T> {
    elements: RefCell<Vec<T>>,
    sorted: Cell<bool>,
}

impl<T> NamedValueArray<T> {
    /// Creates a new empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use named_values::NamedValueArray;
    ///
    /// let array: NamedValueArray<(u8, u8)> = NamedValueArray::new();
    /// assert!(array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            sorted: Cell::new(false),
        }
    }

    /// Creates a new empty array with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: RefCell::new(Vec::with_capacity(capacity)),
            sorted: Cell::new(false),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Returns the number of elements the array can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.borrow().capacity()
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// A capacity hint only; contents and sortedness are unaffected.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.elements.get_mut().reserve(additional);
    }

    /// Shrinks the capacity to fit the current length.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.elements.get_mut().shrink_to_fit();
    }

    /// Removes every element and marks the array unsorted.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.get_mut().clear();
        self.sorted.set(false);
    }

    /// Returns `true` if the array is currently marked sorted.
    ///
    /// A freshly created or cleared array is not marked sorted even though it
    /// is trivially in order.
    #[inline]
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted.get()
    }

    /// Calls `function` for every element in the current order.
    ///
    /// Never sorts, so this is the cheapest way to visit every element when
    /// name order does not matter.
    ///
    /// # Panics
    ///
    /// Calling a name-based query on this same array from inside `function`
    /// panics if the array is not yet sorted, because the sort would need
    /// exclusive access to the elements being iterated.
    pub fn for_each_element<F>(&self, mut function: F)
    where
        F: FnMut(&T),
    {
        for element in self.elements.borrow().iter() {
            function(element);
        }
    }

    /// Replaces the contents with `elements`, which are already sorted and unique.
    pub(crate) fn assign_sorted(&mut self, elements: Vec<T>)
    where
        T: NamedElement,
    {
        *self.elements.get_mut() = elements;
        self.sorted.set(true);
        self.check_merged_order();
    }

    /// Verifies the result of a merge that wrote the elements in place.
    pub(crate) fn check_merged_order(&mut self)
    where
        T: NamedElement,
    {
        if SORTING_CHECKS {
            if let Err(violation) = check_strictly_sorted(self.elements.get_mut().as_slice()) {
                panic!("{violation}");
            }
        }
    }
}

impl<T: NamedElement> NamedValueArray<T> {
    /// Appends an element and marks the array unsorted.
    ///
    /// The caller must not add a name that is already present.
    ///
    /// # Panics
    ///
    /// With the `duplicate-checks` feature in a debug build, panics if the
    /// array now holds two elements with the same name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use named_values::{NamedElement, NamedValueArray};
    ///
    /// #[derive(Default)]
    /// struct Flag {
    ///     name: char,
    /// }
    ///
    /// impl NamedElement for Flag {
    ///     type Name = char;
    ///
    ///     fn name(&self) -> &char {
    ///         &self.name
    ///     }
    ///
    ///     fn set_name(&mut self, name: char) {
    ///         self.name = name;
    ///     }
    /// }
    ///
    /// let mut flags = NamedValueArray::new();
    /// flags.add(Flag { name: 'b' });
    /// flags.add(Flag { name: 'a' });
    /// assert!(flags.has_element(&'a'));
    /// assert_eq!(flags.len(), 2);
    /// ```
    pub fn add(&mut self, element: T) {
        let first_appended = self.elements.get_mut().len();
        let prefix_sorted = self.sorted.replace(false);
        self.elements.get_mut().push(element);
        self.check_for_duplicates(first_appended, prefix_sorted);
    }

    /// Appends one name-only element per name and marks the array unsorted.
    ///
    /// Accepts anything iterable over names: a fixed list such as `[a, b]`, a
    /// `Vec`, or an iterator over cloned names from a slice.
    ///
    /// # Panics
    ///
    /// With the `duplicate-checks` feature in a debug build, panics if the
    /// array now holds two elements with the same name.
    pub fn append_names<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = T::Name>,
        T: Default,
    {
        self.extend(names.into_iter().map(T::from_name));
    }

    /// Sorts the elements by name unless the array is already marked sorted.
    ///
    /// Idempotent: a second call does no work until the array is mutated.
    ///
    /// # Panics
    ///
    /// Panics if the array is unsorted while a [`Ref`] to its elements is
    /// alive (for example from inside [`for_each_element`](Self::for_each_element)).
    /// With the `sorting-checks` feature in a debug build, also panics if the
    /// sort did not leave the elements in order.
    pub fn sort_elements_if_required(&self) {
        if self.sorted.get() {
            return;
        }

        let mut elements = self.elements.borrow_mut();
        elements.sort_by(|left, right| left.name().cmp(right.name()));

        #[cfg(feature = "tracing")]
        tracing::trace!(len = elements.len(), "sorted named value array");

        if SORTING_CHECKS {
            if let Err(violation) = check_sorted(elements.as_slice()) {
                panic!("{violation}");
            }
        }

        self.sorted.set(true);
    }

    /// Returns the position of the element called `name` in name order.
    ///
    /// Sorts first if required.
    #[must_use]
    pub fn index_of<Q>(&self, name: &Q) -> Option<usize>
    where
        T::Name: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.sort_elements_if_required();
        self.elements
            .borrow()
            .binary_search_by(|element| element.name().borrow().cmp(name))
            .ok()
    }

    /// Returns the element called `name`, sorting first if required.
    ///
    /// The returned [`Ref`] keeps the elements borrowed; drop it before
    /// mutating the array.
    #[must_use]
    pub fn find<Q>(&self, name: &Q) -> Option<Ref<'_, T>>
    where
        T::Name: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.index_of(name)?;
        Some(Ref::map(self.elements.borrow(), |elements| &elements[index]))
    }

    /// Returns the element called `name` mutably, sorting first if required.
    ///
    /// The caller must not change the element's name through this reference.
    #[must_use]
    pub fn find_mut<Q>(&mut self, name: &Q) -> Option<&mut T>
    where
        T::Name: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let elements = self.sorted_elements_mut();
        elements
            .binary_search_by(|element| element.name().borrow().cmp(name))
            .ok()
            .map(|index| &mut elements[index])
    }

    /// Returns `true` if an element called `name` is present.
    #[inline]
    #[must_use]
    pub fn has_element<Q>(&self, name: &Q) -> bool
    where
        T::Name: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of(name).is_some()
    }

    /// Returns the elements in name order, sorting first if required.
    #[must_use]
    pub fn sorted_elements(&self) -> Ref<'_, [T]> {
        self.sort_elements_if_required();
        Ref::map(self.elements.borrow(), Vec::as_slice)
    }

    /// Consumes the array and returns its elements in name order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.sort_elements_if_required();
        self.elements.into_inner()
    }

    /// Checks the ordering and uniqueness invariants, sorting first if required.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found in name order.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.sort_elements_if_required();
        check_strictly_sorted(self.elements.borrow().as_slice())
    }

    /// Sorts if required and exposes the backing `Vec` without a runtime borrow.
    pub(crate) fn sorted_elements_mut(&mut self) -> &mut Vec<T> {
        self.sort_elements_if_required();
        self.elements.get_mut()
    }

    /// Checks the elements appended from `first_appended` on.
    ///
    /// The elements before `first_appended` already passed this check.
    fn check_for_duplicates(&mut self, first_appended: usize, prefix_sorted: bool) {
        if !DUPLICATE_CHECKS {
            return;
        }

        let elements = self.elements.get_mut().as_slice();
        let duplicate = match elements.len() - first_appended {
            0 => None,
            1 => find_appended_duplicate(elements, prefix_sorted),
            _ => find_duplicate(elements),
        };

        if let Some(index) = duplicate {
            panic!("{}", InvariantViolation::DuplicateName { index });
        }
    }
}

impl<T> Default for NamedValueArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for NamedValueArray<T> {
    fn clone(&self) -> Self {
        Self {
            elements: RefCell::new(self.elements.borrow().clone()),
            sorted: Cell::new(self.sorted.get()),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for NamedValueArray<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NamedValueArray")
            .field("elements", &self.elements.borrow())
            .field("sorted", &self.sorted.get())
            .finish()
    }
}

/// Arrays are equal when they hold equal elements in name order.
impl<T: NamedElement + PartialEq> PartialEq for NamedValueArray<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.sorted_elements() == *other.sorted_elements()
    }
}

impl<T: NamedElement> FromIterator<T> for NamedValueArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: NamedElement> Extend<T> for NamedValueArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let first_appended = self.elements.get_mut().len();
        let prefix_sorted = self.sorted.replace(false);
        self.elements.get_mut().extend(iter);
        self.check_for_duplicates(first_appended, prefix_sorted);
    }
}

/// Returns the position of an element whose name appears earlier in `elements`.
fn find_duplicate<T: NamedElement>(elements: &[T]) -> Option<usize> {
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by(|&left, &right| {
        elements[left]
            .name()
            .cmp(elements[right].name())
            .then(left.cmp(&right))
    });
    order
        .windows(2)
        .find(|window| elements[window[0]].name() == elements[window[1]].name())
        .map(|window| window[1])
}

/// Checks the last element of `elements` against the ones before it.
///
/// `prefix_sorted` says the elements before the last are in name order.
fn find_appended_duplicate<T: NamedElement>(elements: &[T], prefix_sorted: bool) -> Option<usize> {
    let (appended, existing) = elements.split_last()?;
    let name = appended.name();
    let found = if prefix_sorted {
        existing
            .binary_search_by(|element| element.name().cmp(name))
            .is_ok()
    } else {
        existing.iter().any(|element| element.name() == name)
    };
    found.then_some(existing.len())
}

fn check_sorted<T: NamedElement>(elements: &[T]) -> Result<(), InvariantViolation> {
    elements
        .windows(2)
        .position(|window| window[0].name() > window[1].name())
        .map_or(Ok(()), |position| {
            Err(InvariantViolation::Unsorted {
                index: position + 1,
            })
        })
}

fn check_strictly_sorted<T: NamedElement>(elements: &[T]) -> Result<(), InvariantViolation> {
    check_sorted(elements)?;
    elements
        .windows(2)
        .position(|window| window[0].name() == window[1].name())
        .map_or(Ok(()), |position| {
            Err(InvariantViolation::DuplicateName {
                index: position + 1,
            })
        })
}
