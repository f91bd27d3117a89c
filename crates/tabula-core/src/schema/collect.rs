use crate::{
    config::{MetadataConfig, UnclassifiedFieldPolicy},
    convert::ConverterRegistry,
    descriptor::{FieldDescriptor, TypeDescriptor},
    error::{FieldError, MetadataError},
    model::{Column, ColumnMap},
    schema::classify::{FieldClass, classify},
};

/// Collect the persisted columns of `entity` and its ancestors.
///
/// Levels are visited most-derived first and a column name is only taken
/// the first time it is seen, so derived fields shadow inherited ones. The
/// primary key field is skipped at every level. Any field error aborts the
/// whole collection.
pub fn collect_columns(
    entity: &'static TypeDescriptor,
    primary_key_field: &str,
    config: &MetadataConfig,
    converters: &dyn ConverterRegistry,
) -> Result<ColumnMap, MetadataError> {
    let mut columns = ColumnMap::new();

    for level in entity.lineage() {
        for field in level.fields {
            if field.name == primary_key_field {
                continue;
            }

            let column = build_column(level, field, config, converters)
                .map_err(|source| MetadataError::Columns {
                    entity: entity.path,
                    source,
                })?;

            if let Some(column) = column
                && !columns.insert_if_absent(column)
            {
                tracing::trace!(
                    entity = entity.path,
                    level = level.path,
                    field = field.name,
                    "column shadowed by a derived field"
                );
            }
        }
    }

    Ok(columns)
}

fn build_column(
    level: &'static TypeDescriptor,
    field: &'static FieldDescriptor,
    config: &MetadataConfig,
    converters: &dyn ConverterRegistry,
) -> Result<Option<Column>, FieldError> {
    let column = match classify(field, converters) {
        FieldClass::Ignored => return Ok(None),
        FieldClass::Simple => {
            let converter =
                converters
                    .converter(&field.ty)
                    .ok_or(FieldError::ConverterMissing {
                        field: field.name,
                        ty: field.ty.name(),
                    })?;

            Column::plain(level, field, converter)
        }
        FieldClass::Foreign(marker) => Column::foreign(level, field, marker),
        FieldClass::Finder(marker) => Column::finder(level, field, marker),
        FieldClass::Unmatched => match config.unclassified_fields {
            UnclassifiedFieldPolicy::Ignore => {
                tracing::trace!(
                    level = level.path,
                    field = field.name,
                    ty = field.ty.name(),
                    "dropping unclassified field"
                );
                return Ok(None);
            }
            UnclassifiedFieldPolicy::Reject => {
                return Err(FieldError::Unclassified { field: field.name });
            }
        },
    };

    Ok(Some(column))
}
