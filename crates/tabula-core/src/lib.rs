//! Core runtime for Tabula: entity descriptors, field classification,
//! primary key resolution, column collection, and the metadata caches.

// public exports are one module level down
pub mod cache;
pub mod config;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod model;
pub mod obs;
pub mod schema;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No caches, registries, or config are re-exported here.
///

pub mod prelude {
    pub use crate::{
        descriptor::{EntityType, TypeDescriptor},
        error::MetadataError,
        metadata::Metadata,
        model::{Column, ColumnKind, ColumnMap, ColumnOrId, Id},
    };
}
