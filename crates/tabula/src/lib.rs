//! ## Crate layout
//! - `descriptor`: static entity descriptors and field markers.
//! - `schema`: field classification, primary key lookup, column collection.
//! - `model`: resolved columns and primary keys.
//! - `metadata`: the caching facade over `schema`.
//! - `config`, `convert`, `error`, `obs`: ambient runtime surface.
//!
//! Entities are registered with `#[derive(Entity)]`, which emits the
//! `EntityType` descriptor the rest of the crate reads.

pub use tabula_core::{
    cache, config, convert, descriptor, error, metadata, model, obs, schema,
};

// export so derived code resolves inside this crate too
extern crate self as tabula;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use tabula_derive::Entity;

//
// Re-exports
//

pub use tabula_core::{
    descriptor::EntityType,
    error::MetadataError,
    metadata::{Metadata, after_create_hook, column_map, column_or_id, id, table_name},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::Entity;
    pub use tabula_core::prelude::*;
}
