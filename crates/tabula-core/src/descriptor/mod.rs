//! Static type descriptors.
//!
//! A [`TypeDescriptor`] is everything the metadata layer may know about an
//! entity type: its path, its declared fields, its parent, and its table
//! marker. Descriptors are built once at compile time by `#[derive(Entity)]`
//! and never change, which is what makes the metadata caches safe to keep
//! for the life of the process.

pub mod field;
pub mod marker;

pub use field::{CanonicalType, FieldDescriptor, FieldScope, FieldType};
pub use marker::{
    ColumnMarker, DescriptorFn, FieldMarkers, FinderMarker, ForeignMarker, TableMarker,
};

use std::{fmt, iter::FusedIterator};

///
/// TypeDescriptor
///

pub struct TypeDescriptor {
    /// Fully-qualified Rust path; the cache identity key.
    pub path: &'static str,
    /// `None` is the universal root: the chain ends here.
    pub parent: Option<&'static Self>,
    /// Fields declared directly on this type, in declaration order.
    pub fields: &'static [FieldDescriptor],
    pub table: Option<TableMarker>,
}

impl TypeDescriptor {
    #[must_use]
    pub const fn new(path: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            path,
            parent: None,
            fields,
            table: None,
        }
    }

    #[must_use]
    pub const fn with_parent(mut self, parent: &'static Self) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub const fn with_table(mut self, table: TableMarker) -> Self {
        self.table = Some(table);
        self
    }

    /// This type followed by its ancestors, most-derived first.
    #[must_use]
    pub const fn lineage(&'static self) -> Lineage {
        Lineage { next: Some(self) }
    }

    /// Last path segment.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.path.rsplit("::").next().unwrap_or(self.path)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("path", &self.path)
            .field("parent", &self.parent.map(|p| p.path))
            .field("fields", &self.fields.iter().map(|f| f.name).collect::<Vec<_>>())
            .field("table", &self.table)
            .finish()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for TypeDescriptor {}

///
/// Lineage
///

#[derive(Clone, Debug)]
pub struct Lineage {
    next: Option<&'static TypeDescriptor>,
}

impl Iterator for Lineage {
    type Item = &'static TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;

        Some(current)
    }
}

impl FusedIterator for Lineage {}

///
/// EntityType
///
/// Implemented by `#[derive(Entity)]`; binds a Rust type to its descriptor.
///

pub trait EntityType: 'static {
    const DESCRIPTOR: &'static TypeDescriptor;

    #[must_use]
    fn descriptor() -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{ADMIN, PERSON, SUPER_ADMIN};

    #[test]
    fn lineage_walks_most_derived_first() {
        let paths: Vec<_> = SUPER_ADMIN.lineage().map(|d| d.path).collect();

        assert_eq!(
            paths,
            ["fixtures::SuperAdmin", "fixtures::Admin", "fixtures::Person"]
        );
    }

    #[test]
    fn lineage_of_root_level_type_is_itself() {
        assert_eq!(PERSON.lineage().count(), 1);
        assert_eq!(ADMIN.lineage().count(), 2);
    }

    #[test]
    fn name_is_last_path_segment() {
        assert_eq!(SUPER_ADMIN.name(), "SuperAdmin");
    }
}
