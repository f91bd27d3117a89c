//! Persistence markers attached to entity types and their fields.
//!
//! Markers are plain data produced by `#[derive(Entity)]` (or written by hand
//! for descriptors registered without the derive). They state intent only;
//! interpreting them is the job of `schema`.

use crate::descriptor::TypeDescriptor;

/// Deferred descriptor lookup, so that entities may reference each other.
pub type DescriptorFn = fn() -> &'static TypeDescriptor;

///
/// FieldMarkers
///

#[derive(Clone, Copy, Debug)]
pub struct FieldMarkers {
    /// Explicit primary key marker.
    pub id: bool,
    pub column: Option<ColumnMarker>,
    /// Excluded from persistence.
    pub transient: bool,
    pub foreign: Option<ForeignMarker>,
    pub finder: Option<FinderMarker>,
}

impl FieldMarkers {
    pub const NONE: Self = Self {
        id: false,
        column: None,
        transient: false,
        foreign: None,
        finder: None,
    };

    #[must_use]
    pub const fn id() -> Self {
        Self {
            id: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn transient() -> Self {
        Self {
            transient: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn foreign(marker: ForeignMarker) -> Self {
        Self {
            foreign: Some(marker),
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn finder(marker: FinderMarker) -> Self {
        Self {
            finder: Some(marker),
            ..Self::NONE
        }
    }
}

///
/// ColumnMarker
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ColumnMarker {
    /// Storage column name override.
    pub name: Option<&'static str>,
    /// Default value literal handed to DDL generation.
    pub default_value: Option<&'static str>,
}

impl ColumnMarker {
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            default_value: None,
        }
    }
}

///
/// ForeignMarker
/// Reference to a row of another entity by its key.
///

#[derive(Clone, Copy, Debug)]
pub struct ForeignMarker {
    pub entity: DescriptorFn,
    /// Local storage column holding the referenced key.
    pub column: &'static str,
    /// Referenced column on `entity`; `None` means its primary key.
    pub references: Option<&'static str>,
}

///
/// FinderMarker
/// Derived relation: rows of `entity` whose `target_column` equals this
/// row's `value_column`.
///

#[derive(Clone, Copy, Debug)]
pub struct FinderMarker {
    pub entity: DescriptorFn,
    /// `None` means this entity's primary key column.
    pub value_column: Option<&'static str>,
    pub target_column: &'static str,
}

///
/// TableMarker
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TableMarker {
    pub name: Option<&'static str>,
    /// Statement run once after the table is created.
    pub after_create: Option<&'static str>,
}
