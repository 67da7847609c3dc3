//! Curve records.

use crate::name::Name;
use crate::named_value::{NamedElement, NamedValueArray};

/// Where a curve weight is consumed.
///
/// # Examples
///
/// ```rust
/// use named_values::curve::CurveElementFlags;
///
/// let flags = CurveElementFlags::MORPH_TARGET | CurveElementFlags::MATERIAL;
/// assert!(flags.contains(CurveElementFlags::MATERIAL));
/// assert!(!CurveElementFlags::NONE.contains(CurveElementFlags::MATERIAL));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CurveElementFlags(u8);

impl CurveElementFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Drives a morph target.
    pub const MORPH_TARGET: Self = Self(0b01);
    /// Drives a material parameter.
    pub const MATERIAL: Self = Self(0b10);

    /// Returns `true` if every flag in `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for CurveElementFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CurveElementFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A single named curve weight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurveElement {
    /// The curve name.
    pub name: Name,
    /// The weight.
    pub value: f32,
    /// Consumers of the weight.
    pub flags: CurveElementFlags,
}

impl CurveElement {
    /// Creates an element without flags.
    #[inline]
    #[must_use]
    pub const fn new(name: Name, value: f32) -> Self {
        Self {
            name,
            value,
            flags: CurveElementFlags::NONE,
        }
    }

    /// Returns the element with `flags` set.
    #[inline]
    #[must_use]
    pub const fn with_flags(mut self, flags: CurveElementFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl NamedElement for CurveElement {
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
        Self::new(name, 0.0)
    }
}

/// A set of named float weights.
pub type Curve = NamedValueArray<CurveElement>;

impl NamedValueArray<CurveElement> {
    /// Sets the weight of `name`, adding it if absent.
    ///
    /// Existing flags are kept.
    pub fn set(&mut self, name: Name, value: f32) {
        match self.find_mut(&name) {
            Some(element) => element.value = value,
            None => self.add(CurveElement::new(name, value)),
        }
    }

    /// Returns the weight of `name`, or `None` if the curve does not hold it.
    #[must_use]
    pub fn get(&self, name: Name) -> Option<f32> {
        self.find(&name).map(|element| element.value)
    }
}
