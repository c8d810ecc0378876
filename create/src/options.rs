//! Deferred builder mutations.
//!
//! An option is applied exactly once to exactly one builder. It cannot fail:
//! anything that needs checking is left for `Builder::build`.

use std::fmt;

/// One deferred mutation of a builder of type `B`.
///
/// Every `FnOnce(&mut B)` is an option, so plain closures and boxed closures
/// both work.
pub trait BuilderOption<B> {
    fn apply(self, builder: &mut B);
}

impl<B, F> BuilderOption<B> for F
where
    F: FnOnce(&mut B),
{
    fn apply(self, builder: &mut B) {
        self(builder);
    }
}

/// Type-erased option, used where options of different origins share a list.
pub type BoxOption<B> = Box<dyn FnOnce(&mut B)>;

/// Ordered list of options for builder `B`.
///
/// Insertion order is application order. Appending one list to another
/// therefore lets the appended options override the earlier ones.
pub struct Options<B> {
    items: Vec<BoxOption<B>>,
}

impl<B> Options<B> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push<F>(&mut self, option: F)
    where
        F: FnOnce(&mut B) + 'static,
    {
        self.items.push(Box::new(option));
    }

    /// Chaining form of [`Options::push`].
    pub fn with<F>(mut self, option: F) -> Self
    where
        F: FnOnce(&mut B) + 'static,
    {
        self.push(option);
        self
    }

    /// Move every option of `other` to the end of this list.
    pub fn append(&mut self, other: Options<B>) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<B> Default for Options<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for Options<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("len", &self.items.len())
            .finish()
    }
}

impl<B> Extend<BoxOption<B>> for Options<B> {
    fn extend<I: IntoIterator<Item = BoxOption<B>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<B> FromIterator<BoxOption<B>> for Options<B> {
    fn from_iter<I: IntoIterator<Item = BoxOption<B>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<B> IntoIterator for Options<B> {
    type Item = BoxOption<B>;
    type IntoIter = std::vec::IntoIter<BoxOption<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
