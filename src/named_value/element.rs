//! The record contract for named-value arrays.

/// A record identified by an orderable name.
///
/// Implementors expose their name for ordering and lookup, and allow it to be
/// reassigned so the merge algorithms can build new elements and stub
/// elements (a default record carrying only a name).
///
/// The ordering of [`Self::Name`] is the ordering the arrays are sorted by.
/// It does not need to be lexical; any total order consistent with `Eq` works.
///
/// # Examples
///
/// ```rust
/// use named_values::NamedElement;
///
/// #[derive(Default)]
/// struct Bone {
///     name: String,
///     weight: f32,
/// }
///
/// impl NamedElement for Bone {
///     type Name = String;
///
///     fn name(&self) -> &String {
///         &self.name
///     }
///
///     fn set_name(&mut self, name: String) {
///         self.name = name;
///     }
/// }
///
/// let bone = Bone::from_name("spine_01".to_string());
/// assert_eq!(bone.name(), "spine_01");
/// assert_eq!(bone.weight, 0.0);
/// ```
pub trait NamedElement {
    /// The key type records are ordered and looked up by.
    type Name: Ord + Clone;

    /// Returns the name of this record.
    fn name(&self) -> &Self::Name;

    /// Replaces the name of this record.
    fn set_name(&mut self, name: Self::Name);

    /// Builds a record that carries only `name`.
    ///
    /// The default implementation default-constructs the record and assigns
    /// the name. Override it when a record type has a cheaper constructor.
    #[must_use]
    fn from_name(name: Self::Name) -> Self
    where
        Self: Sized + Default,
    {
        let mut element = Self::default();
        element.set_name(name);
        element
    }
}
