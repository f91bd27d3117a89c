//! Column converters.
//!
//! The metadata layer only asks two questions of a converter registry: is a
//! field type a simple storable value, and which converter stores it. Value
//! encoding itself belongs to the execution layer.

use crate::descriptor::FieldType;
use derive_more::Display;
use std::{collections::HashMap, fmt::Debug, sync::Arc};

///
/// ColumnDbType
/// Storage affinity of a simple column.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ColumnDbType {
    #[display("BLOB")]
    Blob,
    #[display("INTEGER")]
    Integer,
    #[display("REAL")]
    Real,
    #[display("TEXT")]
    Text,
}

///
/// ColumnConverter
///

pub trait ColumnConverter: Debug + Send + Sync {
    /// Canonical Rust type this converter stores.
    fn type_name(&self) -> &'static str;

    fn db_type(&self) -> ColumnDbType;
}

///
/// ConverterRegistry
///
/// `is_supported` and `converter` must agree; a registry that supports a type
/// but returns no converter for it is treated as a configuration error.
///

pub trait ConverterRegistry: Send + Sync {
    fn is_supported(&self, ty: &FieldType) -> bool;

    fn converter(&self, ty: &FieldType) -> Option<Arc<dyn ColumnConverter>>;
}

///
/// SimpleConverter
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SimpleConverter {
    type_name: &'static str,
    db_type: ColumnDbType,
}

impl SimpleConverter {
    #[must_use]
    pub const fn new(type_name: &'static str, db_type: ColumnDbType) -> Self {
        Self { type_name, db_type }
    }
}

impl ColumnConverter for SimpleConverter {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn db_type(&self) -> ColumnDbType {
        self.db_type
    }
}

// Built-in simple types; `Option<T>` of each is accepted as a nullable column.
const BUILTIN_TYPES: &[(&str, ColumnDbType)] = &[
    ("bool", ColumnDbType::Integer),
    ("char", ColumnDbType::Text),
    ("i8", ColumnDbType::Integer),
    ("i16", ColumnDbType::Integer),
    ("i32", ColumnDbType::Integer),
    ("i64", ColumnDbType::Integer),
    ("isize", ColumnDbType::Integer),
    ("u8", ColumnDbType::Integer),
    ("u16", ColumnDbType::Integer),
    ("u32", ColumnDbType::Integer),
    ("u64", ColumnDbType::Integer),
    ("usize", ColumnDbType::Integer),
    ("f32", ColumnDbType::Real),
    ("f64", ColumnDbType::Real),
    ("String", ColumnDbType::Text),
    ("Vec<u8>", ColumnDbType::Blob),
];

///
/// BuiltinConverters
///

#[derive(Debug)]
pub struct BuiltinConverters {
    converters: HashMap<&'static str, Arc<dyn ColumnConverter>>,
}

impl BuiltinConverters {
    #[must_use]
    pub fn new() -> Self {
        let converters = BUILTIN_TYPES
            .iter()
            .map(|&(name, db_type)| {
                let converter: Arc<dyn ColumnConverter> =
                    Arc::new(SimpleConverter::new(name, db_type));
                (name, converter)
            })
            .collect();

        Self { converters }
    }

    /// Register or replace the converter for a canonical type name.
    pub fn register(&mut self, converter: Arc<dyn ColumnConverter>) {
        self.converters.insert(converter.type_name(), converter);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for BuiltinConverters {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry for BuiltinConverters {
    fn is_supported(&self, ty: &FieldType) -> bool {
        self.converters.contains_key(ty.canonical().base.as_str())
    }

    fn converter(&self, ty: &FieldType) -> Option<Arc<dyn ColumnConverter>> {
        self.converters.get(ty.canonical().base.as_str()).cloned()
    }
}
