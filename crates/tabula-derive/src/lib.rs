use proc_macro::TokenStream;

mod entity;
mod util;

/// Derive `tabula::EntityType`, emitting the entity's static descriptor.
///
/// Struct attribute: `#[entity(table = "...", after_create = "...")]`.
/// Field attribute: `#[column(...)]` with `id`, `name = "..."`,
/// `default = "..."`, `transient`, `foreign(column = "...", references = "...",
/// entity = "Path")`, `finder(target = "...", value = "...", entity = "Path")`,
/// or `extends` to inherit from the field's entity type.
#[proc_macro_derive(Entity, attributes(entity, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}
