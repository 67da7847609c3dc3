//! Argument validity flags passed to union predicates.

/// Tells a union predicate which of its inputs actually hold the name.
///
/// The side that does not hold the name is represented by a stub element,
/// a default record carrying only the name.
///
/// # Examples
///
/// ```rust
/// use named_values::UnionFlags;
///
/// assert!(UnionFlags::BothArgsValid.has_arg0());
/// assert!(UnionFlags::BothArgsValid.has_arg1());
/// assert!(!UnionFlags::ValidArg1.has_arg0());
/// assert_eq!(UnionFlags::ValidArg0.bits() | UnionFlags::ValidArg1.bits(), UnionFlags::BothArgsValid.bits());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnionFlags {
    /// Only the first input holds the name.
    ValidArg0,
    /// Only the second input holds the name.
    ValidArg1,
    /// Both inputs hold the name.
    BothArgsValid,
}

impl UnionFlags {
    /// Returns `true` if the first input holds the name.
    #[inline]
    #[must_use]
    pub const fn has_arg0(self) -> bool {
        matches!(self, Self::ValidArg0 | Self::BothArgsValid)
    }

    /// Returns `true` if the second input holds the name.
    #[inline]
    #[must_use]
    pub const fn has_arg1(self) -> bool {
        matches!(self, Self::ValidArg1 | Self::BothArgsValid)
    }

    /// Bit representation: bit 0 for the first input, bit 1 for the second.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::ValidArg0 => 0b01,
            Self::ValidArg1 => 0b10,
            Self::BothArgsValid => 0b11,
        }
    }
}
