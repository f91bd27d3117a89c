use crate::descriptor::{TypeDescriptor, field::is_blank};

/// Storage table name: the table marker's name when non-blank, otherwise the
/// type path with every separator replaced by `_`.
#[must_use]
pub fn table_name(entity: &TypeDescriptor) -> String {
    match entity.table.and_then(|t| t.name) {
        Some(name) if !is_blank(name) => name.to_string(),
        _ => entity.path.replace("::", "_").replace('.', "_"),
    }
}

/// Statement to run once after the table is created, read verbatim.
#[must_use]
pub fn after_create_hook(entity: &TypeDescriptor) -> Option<&'static str> {
    entity.table.and_then(|t| t.after_create)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        descriptor::TableMarker,
        test_fixtures::{GROUP, NOTE, SUPER_ADMIN},
    };
    use proptest::prelude::*;

    #[test]
    fn marker_name_wins() {
        assert_eq!(table_name(&GROUP), "groups");
        assert_eq!(
            after_create_hook(&GROUP),
            Some("CREATE INDEX groups_title ON groups(title)")
        );
    }

    #[test]
    fn blank_marker_name_falls_back_to_path() {
        assert_eq!(table_name(&NOTE), "fixtures_Note");
        assert_eq!(after_create_hook(&NOTE), None);
    }

    #[test]
    fn unmarked_type_uses_path() {
        assert_eq!(table_name(&SUPER_ADMIN), "fixtures_SuperAdmin");
        assert_eq!(after_create_hook(&SUPER_ADMIN), None);
    }

    #[test]
    fn dotted_path_is_underscored() {
        let entity = TypeDescriptor::new("pkg.Sub.User", &[]);

        assert_eq!(table_name(&entity), "pkg_Sub_User");
    }

    #[test]
    fn hook_without_name_is_still_read() {
        let entity = TypeDescriptor::new("app::Audit", &[]).with_table(TableMarker {
            name: None,
            after_create: Some("INSERT INTO app_Audit DEFAULT VALUES"),
        });

        assert_eq!(table_name(&entity), "app_Audit");
        assert_eq!(
            after_create_hook(&entity),
            Some("INSERT INTO app_Audit DEFAULT VALUES")
        );
    }

    proptest! {
        #[test]
        fn derived_names_contain_no_separators(
            segments in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,8}", 1..5)
        ) {
            let path: &'static str = Box::leak(segments.join("::").into_boxed_str());
            let entity = TypeDescriptor::new(path, &[]);
            let name = table_name(&entity);

            prop_assert!(!name.contains(':'));
            prop_assert_eq!(name, segments.join("_"));
        }
    }
}
