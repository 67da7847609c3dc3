//! Name filters for curves.

use super::element::Curve;
use crate::name::Name;
use crate::named_value::{NamedElement, NamedValueArray, intersection, remove_by_predicate};

/// How a [`CurveFilter`] treats the names it lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveFilterMode {
    /// Every weight passes; the listed names are ignored.
    #[default]
    AllowAll,
    /// No weight passes.
    DisallowAll,
    /// Listed names are removed, everything else passes.
    DisallowFiltered,
    /// Only listed names pass.
    AllowOnlyFiltered,
}

/// A name listed in a [`CurveFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurveFilterElement {
    /// The filtered name.
    pub name: Name,
}

impl NamedElement for CurveFilterElement {
    type Name = Name;

    #[inline]
    fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    #[inline]
    fn from_name(name: Name) -> Self {
        Self { name }
    }
}

/// Removes or keeps curve weights by name.
///
/// # Examples
///
/// ```rust
/// use named_values::curve::{Curve, CurveFilter, CurveFilterMode};
/// use named_values::Name;
///
/// let mut curve = Curve::new();
/// curve.set(Name::new("filter_doc_eye"), 1.0);
/// curve.set(Name::new("filter_doc_lip"), 1.0);
///
/// let mut filter = CurveFilter::new(CurveFilterMode::DisallowFiltered);
/// filter.append_names([Name::new("filter_doc_lip")]);
/// filter.apply(&mut curve);
///
/// assert!(curve.has_element(&Name::new("filter_doc_eye")));
/// assert!(!curve.has_element(&Name::new("filter_doc_lip")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CurveFilter {
    mode: CurveFilterMode,
    names: NamedValueArray<CurveFilterElement>,
}

impl CurveFilter {
    /// Creates an empty filter with the given mode.
    #[must_use]
    pub const fn new(mode: CurveFilterMode) -> Self {
        Self {
            mode,
            names: NamedValueArray::new(),
        }
    }

    /// Returns the filter mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CurveFilterMode {
        self.mode
    }

    /// Lists additional names.
    pub fn append_names<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = Name>,
    {
        self.names.append_names(names);
    }

    /// Returns `true` if `name` is listed.
    #[must_use]
    pub fn contains(&self, name: Name) -> bool {
        self.names.has_element(&name)
    }

    /// Removes the weights of `curve` this filter does not let through.
    pub fn apply(&self, curve: &mut Curve) {
        match self.mode {
            CurveFilterMode::AllowAll => {}
            CurveFilterMode::DisallowAll => curve.clear(),
            CurveFilterMode::DisallowFiltered => {
                remove_by_predicate(curve, &self.names, |_, _| true);
            }
            CurveFilterMode::AllowOnlyFiltered => {
                let mut kept = Vec::with_capacity(curve.len().min(self.names.len()));
                intersection(curve, &self.names, |element, _| kept.push(*element));
                curve.assign_sorted(kept);
            }
        }
    }
}
