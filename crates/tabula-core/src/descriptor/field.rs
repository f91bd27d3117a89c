use crate::descriptor::marker::FieldMarkers;

///
/// FieldDescriptor
/// One declared field of an entity, in declaration order.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    /// Rust field identifier.
    pub name: &'static str,
    /// Declared type as written in source.
    pub ty: FieldType,
    pub scope: FieldScope,
    pub markers: FieldMarkers,
}

impl FieldDescriptor {
    /// Instance-scoped field with no markers.
    #[must_use]
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::new(ty),
            scope: FieldScope::Instance,
            markers: FieldMarkers::NONE,
        }
    }

    #[must_use]
    pub const fn with_markers(mut self, markers: FieldMarkers) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub const fn with_scope(mut self, scope: FieldScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub const fn is_type_scoped(&self) -> bool {
        matches!(self.scope, FieldScope::Type)
    }

    /// Storage column name: explicit column name, then foreign column, then
    /// the field name. Blank marker values count as absent.
    #[must_use]
    pub fn column_name(&self) -> &'static str {
        if let Some(name) = self.markers.column.and_then(|c| c.name)
            && !is_blank(name)
        {
            return name;
        }

        if let Some(foreign) = self.markers.foreign
            && !is_blank(foreign.column)
        {
            return foreign.column;
        }

        self.name
    }
}

///
/// FieldScope
///
/// `Type` marks type-level (associated) data. Such fields describe the type
/// rather than a row and are never persisted.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldScope {
    #[default]
    Instance,
    Type,
}

///
/// FieldType
/// Declared field type, kept as source text for converter lookup.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldType {
    name: &'static str,
}

impl FieldType {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Normalise the source text: whitespace removed, the outer module path
    /// stripped, and one layer of `Option<_>` unwrapped into `nullable`.
    #[must_use]
    pub fn canonical(&self) -> CanonicalType {
        let compact: String = self.name.chars().filter(|c| !c.is_whitespace()).collect();
        let outer = strip_module_path(&compact);

        match outer
            .strip_prefix("Option<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(inner) => CanonicalType {
                base: strip_module_path(inner).to_string(),
                nullable: true,
            },
            None => CanonicalType {
                base: outer.to_string(),
                nullable: false,
            },
        }
    }
}

///
/// CanonicalType
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanonicalType {
    pub base: String,
    pub nullable: bool,
}

impl CanonicalType {
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self.base.as_str(),
            "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize"
        )
    }
}

// `std::string::String` -> `String`, leaving generic arguments untouched.
fn strip_module_path(ty: &str) -> &str {
    let head_end = ty.find('<').unwrap_or(ty.len());
    let start = ty[..head_end].rfind("::").map_or(0, |i| i + 2);

    &ty[start..]
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
