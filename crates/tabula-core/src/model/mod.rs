//! Derived table metadata.
//!
//! Everything here is produced by `schema` and owned by the metadata caches;
//! callers only ever see shared, immutable values.

pub mod column;
pub mod id;

pub use column::{Column, ColumnKind, ColumnMap, ColumnOrId, FinderColumn, ForeignColumn};
pub use id::Id;
