use crate::{
    convert::ConverterRegistry,
    descriptor::{FieldDescriptor, FinderMarker, ForeignMarker},
};

///
/// FieldClass
///
/// Exactly one class per field. `Unmatched` fields are not persisted; the
/// configured policy decides whether that is silent or an error.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldClass {
    Ignored,
    Simple,
    Foreign(ForeignMarker),
    Finder(FinderMarker),
    Unmatched,
}

impl FieldClass {
    #[must_use]
    pub const fn is_column(&self) -> bool {
        matches!(self, Self::Simple | Self::Foreign(_) | Self::Finder(_))
    }
}

/// Classify one field. Priority is fixed:
/// transient or type-scoped, then simple, then foreign, then finder.
#[must_use]
pub fn classify(field: &FieldDescriptor, converters: &dyn ConverterRegistry) -> FieldClass {
    if field.markers.transient || field.is_type_scoped() {
        return FieldClass::Ignored;
    }

    if converters.is_supported(&field.ty) {
        return FieldClass::Simple;
    }

    if let Some(foreign) = field.markers.foreign {
        return FieldClass::Foreign(foreign);
    }

    if let Some(finder) = field.markers.finder {
        return FieldClass::Finder(finder);
    }

    FieldClass::Unmatched
}
