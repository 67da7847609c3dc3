//! Interned names for named-value records.
//!
//! [`Name`] is a 4-byte handle into a process-wide string table. Handles are
//! `Copy`, compare in O(1) and hash cheaply, which makes them a good key for
//! arrays that are merged every frame.
//!
//! # Ordering
//!
//! `Name` orders by interning index, not lexically: the first string ever
//! interned sorts first. The order is total and stable for the lifetime of the
//! process, which is all the merge algorithms need. Use [`Name::lexical_cmp`]
//! when alphabetical order matters, for example in user-facing output.
//!
//! # Examples
//!
//! ```rust
//! use named_values::Name;
//!
//! let jaw = Name::new("jaw_open");
//! assert_eq!(jaw, Name::new("jaw_open"));
//! assert_eq!(jaw.as_str(), "jaw_open");
//! assert!(Name::default().is_none());
//! ```

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use static_assertions::{assert_impl_all, const_assert_eq};
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Text of the reserved empty name.
const NONE_TEXT: &str = "None";

/// An interned string handle.
///
/// See the [module documentation](self) for ordering semantics.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(u32);

assert_impl_all!(Name: Copy, Send, Sync, Ord, std::hash::Hash);
const_assert_eq!(std::mem::size_of::<Name>(), 4);

/// Interned strings, indexed by handle. Entries are never freed.
struct NameTable {
    lookup: FxHashMap<&'static str, u32>,
    entries: Vec<&'static str>,
}

impl NameTable {
    fn new() -> Self {
        let mut lookup = FxHashMap::default();
        lookup.insert(NONE_TEXT, 0);
        Self {
            lookup,
            entries: vec![NONE_TEXT],
        }
    }

    fn intern(&mut self, text: &str) -> u32 {
        if let Some(&index) = self.lookup.get(text) {
            return index;
        }

        let index = u32::try_from(self.entries.len()).unwrap_or_else(|_| {
            panic!("name table overflow: more than {} names interned", u32::MAX)
        });
        let stored: &'static str = Box::leak(text.to_owned().into_boxed_str());
        self.entries.push(stored);
        self.lookup.insert(stored, index);
        index
    }
}

static NAME_TABLE: LazyLock<RwLock<NameTable>> = LazyLock::new(|| RwLock::new(NameTable::new()));

impl Name {
    /// The reserved empty name, `"None"`.
    pub const NONE: Self = Self(0);

    /// Interns `text` and returns its handle.
    ///
    /// Interning the same text again returns an equal handle.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are interned.
    #[must_use]
    pub fn new(text: &str) -> Self {
        if let Some(&index) = NAME_TABLE.read().lookup.get(text) {
            return Self(index);
        }
        Self(NAME_TABLE.write().intern(text))
    }

    /// Returns the interned text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        NAME_TABLE.read().entries[self.0 as usize]
    }

    /// Returns `true` for [`Name::NONE`].
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Compares the interned text alphabetically.
    #[must_use]
    pub fn lexical_cmp(self, other: Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        self.as_str().cmp(other.as_str())
    }
}

impl Default for Name {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Name {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Name({:?})", self.as_str())
    }
}
