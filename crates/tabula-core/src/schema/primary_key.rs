use crate::{
    config::MetadataConfig,
    convert::ConverterRegistry,
    descriptor::{FieldDescriptor, TypeDescriptor},
    error::{FieldError, MetadataError},
    model::Id,
};

/// Resolve the primary key of `entity`, searching its own fields first and
/// then each ancestor in turn.
pub fn resolve_id(
    entity: &'static TypeDescriptor,
    config: &MetadataConfig,
    converters: &dyn ConverterRegistry,
) -> Result<Id, MetadataError> {
    let (declaring, field) = find_primary_key(entity, config)
        .ok_or(MetadataError::MissingPrimaryKey { entity: entity.path })?;

    let converter = converters.converter(&field.ty).ok_or_else(|| {
        let source = if converters.is_supported(&field.ty) {
            FieldError::ConverterMissing {
                field: field.name,
                ty: field.ty.name(),
            }
        } else {
            FieldError::Unconvertible {
                field: field.name,
                ty: field.ty.name(),
            }
        };

        MetadataError::PrimaryKey {
            entity: entity.path,
            source,
        }
    })?;

    Ok(Id::new(declaring, field, converter))
}

/// Locate the key field and the type declaring it.
///
/// Each level is searched on its own: an explicit marker, then a
/// conventional name. Only when both miss does the search move to the
/// parent, so a derived type's conventional `id` beats an ancestor's marker.
#[must_use]
pub fn find_primary_key(
    entity: &'static TypeDescriptor,
    config: &MetadataConfig,
) -> Option<(&'static TypeDescriptor, &'static FieldDescriptor)> {
    entity
        .lineage()
        .find_map(|level| declared_primary_key(level, config).map(|field| (level, field)))
}

fn declared_primary_key(
    level: &'static TypeDescriptor,
    config: &MetadataConfig,
) -> Option<&'static FieldDescriptor> {
    level
        .fields
        .iter()
        .find(|f| f.markers.id)
        .or_else(|| level.fields.iter().find(|f| config.is_id_field_name(f.name)))
}
