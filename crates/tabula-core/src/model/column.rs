use crate::{
    convert::ColumnConverter,
    descriptor::{DescriptorFn, FieldDescriptor, FinderMarker, ForeignMarker, TypeDescriptor},
    model::id::Id,
};
use derive_more::Deref;
use std::{collections::HashMap, sync::Arc};

///
/// Column
/// One persisted attribute of an entity.
///

#[derive(Clone, Debug)]
pub struct Column {
    declaring: &'static TypeDescriptor,
    field: &'static FieldDescriptor,
    name: &'static str,
    kind: ColumnKind,
}

impl Column {
    #[must_use]
    pub fn plain(
        declaring: &'static TypeDescriptor,
        field: &'static FieldDescriptor,
        converter: Arc<dyn ColumnConverter>,
    ) -> Self {
        Self::with_kind(declaring, field, ColumnKind::Plain { converter })
    }

    #[must_use]
    pub fn foreign(
        declaring: &'static TypeDescriptor,
        field: &'static FieldDescriptor,
        marker: ForeignMarker,
    ) -> Self {
        Self::with_kind(declaring, field, ColumnKind::Foreign(ForeignColumn(marker)))
    }

    #[must_use]
    pub fn finder(
        declaring: &'static TypeDescriptor,
        field: &'static FieldDescriptor,
        marker: FinderMarker,
    ) -> Self {
        Self::with_kind(declaring, field, ColumnKind::Finder(FinderColumn(marker)))
    }

    fn with_kind(
        declaring: &'static TypeDescriptor,
        field: &'static FieldDescriptor,
        kind: ColumnKind,
    ) -> Self {
        Self {
            declaring,
            field,
            name: field.column_name(),
            kind,
        }
    }

    /// Type on which the underlying field is declared.
    #[must_use]
    pub const fn declaring(&self) -> &'static TypeDescriptor {
        self.declaring
    }

    #[must_use]
    pub const fn field(&self) -> &'static FieldDescriptor {
        self.field
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&'static str> {
        self.field.markers.column.and_then(|c| c.default_value)
    }

    /// Converter for plain columns; relation columns have none.
    #[must_use]
    pub const fn converter(&self) -> Option<&Arc<dyn ColumnConverter>> {
        match &self.kind {
            ColumnKind::Plain { converter } => Some(converter),
            ColumnKind::Foreign(_) | ColumnKind::Finder(_) => None,
        }
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self.kind, ColumnKind::Plain { .. })
    }

    #[must_use]
    pub const fn as_foreign(&self) -> Option<&ForeignColumn> {
        match &self.kind {
            ColumnKind::Foreign(foreign) => Some(foreign),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_finder(&self) -> Option<&FinderColumn> {
        match &self.kind {
            ColumnKind::Finder(finder) => Some(finder),
            _ => None,
        }
    }
}

///
/// ColumnKind
///

#[derive(Clone, Debug)]
pub enum ColumnKind {
    Plain { converter: Arc<dyn ColumnConverter> },
    Foreign(ForeignColumn),
    Finder(FinderColumn),
}

///
/// ForeignColumn
///

#[derive(Clone, Copy, Debug)]
pub struct ForeignColumn(ForeignMarker);

impl ForeignColumn {
    /// Referenced entity type.
    #[must_use]
    pub fn entity(&self) -> &'static TypeDescriptor {
        (self.0.entity)()
    }

    /// Referenced column; `None` means the referenced entity's primary key.
    #[must_use]
    pub const fn references(&self) -> Option<&'static str> {
        self.0.references
    }

    #[must_use]
    pub const fn entity_fn(&self) -> DescriptorFn {
        self.0.entity
    }
}

///
/// FinderColumn
///
/// Recorded for the query layer; a finder is never stored, only looked up.
///

#[derive(Clone, Copy, Debug)]
pub struct FinderColumn(FinderMarker);

impl FinderColumn {
    /// Entity type searched by the lookup.
    #[must_use]
    pub fn entity(&self) -> &'static TypeDescriptor {
        (self.0.entity)()
    }

    /// Column on the owning entity whose value is matched; `None` means its
    /// primary key.
    #[must_use]
    pub const fn value_column(&self) -> Option<&'static str> {
        self.0.value_column
    }

    #[must_use]
    pub const fn target_column(&self) -> &'static str {
        self.0.target_column
    }
}

///
/// ColumnMap
/// Column name to column for one entity. Immutable once cached.
///

#[derive(Clone, Debug, Default, Deref)]
pub struct ColumnMap(HashMap<&'static str, Column>);

impl ColumnMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the name is already taken; returns whether it was added.
    pub(crate) fn insert_if_absent(&mut self, column: Column) -> bool {
        use std::collections::hash_map::Entry;

        match self.0.entry(column.name()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(column);
                true
            }
        }
    }

    /// Column names, sorted for deterministic output.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.0.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

///
/// ColumnOrId
///

#[derive(Clone, Debug)]
pub enum ColumnOrId {
    Id(Arc<Id>),
    Column(Column),
}

impl ColumnOrId {
    #[must_use]
    pub fn column(&self) -> &Column {
        match self {
            Self::Id(id) => id.column(),
            Self::Column(column) => column,
        }
    }

    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}
