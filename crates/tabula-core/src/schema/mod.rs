//! Metadata derivation from type descriptors.
//!
//! These functions are pure: they read static descriptors and never touch
//! the caches. `Metadata` layers caching on top.

pub mod classify;
pub mod collect;
pub mod primary_key;
pub mod table;

pub use classify::{FieldClass, classify};
pub use collect::collect_columns;
pub use primary_key::{find_primary_key, resolve_id};
pub use table::{after_create_hook, table_name};
