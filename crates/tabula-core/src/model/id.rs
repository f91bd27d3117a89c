use crate::{
    convert::ColumnConverter,
    descriptor::{FieldDescriptor, TypeDescriptor},
    model::column::Column,
};
use std::sync::Arc;

///
/// Id
/// Primary key column of an entity, possibly inherited from an ancestor.
///

#[derive(Clone, Debug)]
pub struct Id {
    column: Column,
    auto_increment: bool,
}

impl Id {
    #[must_use]
    pub fn new(
        declaring: &'static TypeDescriptor,
        field: &'static FieldDescriptor,
        converter: Arc<dyn ColumnConverter>,
    ) -> Self {
        let auto_increment = field.ty.canonical().is_integer();

        Self {
            column: Column::plain(declaring, field, converter),
            auto_increment,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &Column {
        &self.column
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.column.name()
    }

    /// Field the key was derived from.
    #[must_use]
    pub const fn field(&self) -> &'static FieldDescriptor {
        self.column.field()
    }

    #[must_use]
    pub const fn declaring(&self) -> &'static TypeDescriptor {
        self.column.declaring()
    }

    /// Integer keys are assigned by the store on insert.
    #[must_use]
    pub const fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }
}
