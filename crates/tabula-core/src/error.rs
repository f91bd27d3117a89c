use std::fmt;
use thiserror::Error as ThisError;

///
/// MetadataError
///
/// Failure to derive table metadata for one entity type.
/// Every variant is a non-retryable configuration error; nothing is cached
/// when one is returned, so a later call recomputes from scratch.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum MetadataError {
    #[error("failed to collect columns for entity '{entity}': {source}")]
    Columns {
        entity: &'static str,
        #[source]
        source: FieldError,
    },

    #[error("entity '{entity}' has no primary key field in its inheritance chain")]
    MissingPrimaryKey { entity: &'static str },

    #[error("invalid primary key on entity '{entity}': {source}")]
    PrimaryKey {
        entity: &'static str,
        #[source]
        source: FieldError,
    },
}

impl MetadataError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Columns { .. } | Self::MissingPrimaryKey { .. } | Self::PrimaryKey { .. } => {
                ErrorClass::Configuration
            }
        }
    }

    /// Path of the entity whose resolution failed.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        match self {
            Self::Columns { entity, .. }
            | Self::MissingPrimaryKey { entity }
            | Self::PrimaryKey { entity, .. } => *entity,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// FieldError
///
/// Per-field introspection failure, always wrapped in a [`MetadataError`].
///

#[remain::sorted]
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("field '{field}' has type '{ty}' which is supported but has no converter")]
    ConverterMissing {
        field: &'static str,
        ty: &'static str,
    },

    #[error("field '{field}' is not transient and matches no column kind")]
    Unclassified { field: &'static str },

    #[error("field '{field}' has type '{ty}' which has no column converter")]
    Unconvertible {
        field: &'static str,
        ty: &'static str,
    },
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Configuration,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "configuration",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn columns_error_keeps_field_cause() {
        let err = MetadataError::Columns {
            entity: "app::User",
            source: FieldError::Unclassified { field: "extra" },
        };

        let source = err.source().expect("source attached");
        assert_eq!(
            source.to_string(),
            "field 'extra' is not transient and matches no column kind"
        );
        assert_eq!(err.entity(), "app::User");
        assert_eq!(err.class(), ErrorClass::Configuration);
    }

    #[test]
    fn display_with_class_prefixes_label() {
        let err = MetadataError::MissingPrimaryKey { entity: "app::Note" };

        assert_eq!(
            err.display_with_class(),
            "configuration: entity 'app::Note' has no primary key field in its inheritance chain"
        );
    }
}
