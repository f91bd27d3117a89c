//! Hand-registered descriptors shared by unit tests.
//!
//! These are written out the way `#[derive(Entity)]` would emit them, so the
//! core can be tested without the proc-macro crate.

use crate::descriptor::{
    ColumnMarker, FieldDescriptor, FieldMarkers, FieldScope, FinderMarker, ForeignMarker,
    TableMarker, TypeDescriptor,
};

pub fn group_descriptor() -> &'static TypeDescriptor {
    &GROUP
}

pub fn note_descriptor() -> &'static TypeDescriptor {
    &NOTE
}

pub static PERSON: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Person",
    parent: None,
    fields: &[
        FieldDescriptor::new("id", "i64"),
        FieldDescriptor::new("name", "String"),
        FieldDescriptor::new("nickname", "Option<String>").with_markers(FieldMarkers {
            column: Some(ColumnMarker {
                name: Some("nick"),
                default_value: Some("anon"),
            }),
            ..FieldMarkers::NONE
        }),
        FieldDescriptor::new("cache", "Vec<u8>").with_markers(FieldMarkers::transient()),
        FieldDescriptor::new("COUNT", "u32").with_scope(FieldScope::Type),
        FieldDescriptor::new("notes", "Vec<Note>").with_markers(FieldMarkers::finder(
            FinderMarker {
                entity: note_descriptor,
                value_column: None,
                target_column: "person_id",
            },
        )),
        FieldDescriptor::new("tag", "Tag"),
    ],
    table: None,
};

pub static ADMIN: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Admin",
    parent: Some(&PERSON),
    fields: &[
        FieldDescriptor::new("name", "String"),
        FieldDescriptor::new("level", "i32"),
        FieldDescriptor::new("group", "Option<Group>").with_markers(FieldMarkers::foreign(
            ForeignMarker {
                entity: group_descriptor,
                column: "group_id",
                references: None,
            },
        )),
    ],
    table: None,
};

pub static SUPER_ADMIN: TypeDescriptor = TypeDescriptor {
    path: "fixtures::SuperAdmin",
    parent: Some(&ADMIN),
    fields: &[
        FieldDescriptor::new("realm", "String"),
        FieldDescriptor::new("level", "i64"),
    ],
    table: None,
};

pub static GROUP: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Group",
    parent: None,
    fields: &[
        FieldDescriptor::new("id", "String"),
        FieldDescriptor::new("gid", "u32").with_markers(FieldMarkers::id()),
        FieldDescriptor::new("title", "String"),
    ],
    table: Some(TableMarker {
        name: Some("groups"),
        after_create: Some("CREATE INDEX groups_title ON groups(title)"),
    }),
};

pub static NOTE: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Note",
    parent: None,
    fields: &[
        FieldDescriptor::new("_id", "i64"),
        FieldDescriptor::new("person_id", "i64"),
        FieldDescriptor::new("body", "String"),
    ],
    table: Some(TableMarker {
        name: Some("  "),
        after_create: None,
    }),
};

pub static ORPHAN: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Orphan",
    parent: None,
    fields: &[FieldDescriptor::new("label", "String")],
    table: None,
};

pub static ORPHAN_CHILD: TypeDescriptor = TypeDescriptor {
    path: "fixtures::OrphanChild",
    parent: Some(&ORPHAN),
    fields: &[FieldDescriptor::new("extra", "i32")],
    table: None,
};

pub static NAMED_BASE: TypeDescriptor = TypeDescriptor {
    path: "fixtures::NamedBase",
    parent: None,
    fields: &[
        FieldDescriptor::new("_id", "i64"),
        FieldDescriptor::new("created", "u64"),
    ],
    table: None,
};

pub static KEYED_MEMBER: TypeDescriptor = TypeDescriptor {
    path: "fixtures::KeyedMember",
    parent: Some(&NAMED_BASE),
    fields: &[
        FieldDescriptor::new("member_key", "i64").with_markers(FieldMarkers::id()),
        FieldDescriptor::new("role", "String"),
    ],
    table: None,
};

pub static AMBIGUOUS: TypeDescriptor = TypeDescriptor {
    path: "fixtures::Ambiguous",
    parent: None,
    fields: &[
        FieldDescriptor::new("id", "u64"),
        FieldDescriptor::new("owner_id", "i64").with_markers(FieldMarkers::foreign(
            ForeignMarker {
                entity: group_descriptor,
                column: "owner",
                references: None,
            },
        )),
        FieldDescriptor::new("owner", "Group").with_markers(FieldMarkers {
            foreign: Some(ForeignMarker {
                entity: group_descriptor,
                column: "owner_ref",
                references: Some("gid"),
            }),
            finder: Some(FinderMarker {
                entity: group_descriptor,
                value_column: None,
                target_column: "gid",
            }),
            ..FieldMarkers::NONE
        }),
        FieldDescriptor::new("secret", "i64").with_markers(FieldMarkers {
            transient: true,
            foreign: Some(ForeignMarker {
                entity: group_descriptor,
                column: "secret_ref",
                references: None,
            }),
            ..FieldMarkers::NONE
        }),
    ],
    table: None,
};

pub static BAD_KEY: TypeDescriptor = TypeDescriptor {
    path: "fixtures::BadKey",
    parent: None,
    fields: &[
        FieldDescriptor::new("tags", "Vec<String>").with_markers(FieldMarkers::id()),
        FieldDescriptor::new("label", "String"),
    ],
    table: None,
};
