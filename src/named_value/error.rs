//! Invariant violations detected in named-value arrays.
//!
//! None of the array operations return errors. These values are produced by
//! [`NamedValueArray::validate`](super::NamedValueArray::validate) and by the
//! debug-only checks, which panic with their `Display` text.

/// A broken ordering or uniqueness invariant in a named-value array.
///
/// # Examples
///
/// ```rust
/// use named_values::InvariantViolation;
///
/// let violation = InvariantViolation::DuplicateName { index: 4 };
/// assert_eq!(
///     format!("{violation}"),
///     "named value array: element 4 duplicates the name of another element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The element at `index` is not ordered after its predecessor.
    Unsorted {
        /// Position of the out-of-order element.
        index: usize,
    },
    /// The element at `index` shares its name with another element.
    DuplicateName {
        /// Position of the duplicate in name order.
        index: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsorted { index } => write!(
                formatter,
                "named value array: element {index} is not sorted after its predecessor"
            ),
            Self::DuplicateName { index } => write!(
                formatter,
                "named value array: element {index} duplicates the name of another element"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
