use crate::util::{quote_option_str, relation_target};
use darling::{Error as DarlingError, FromDeriveInput, FromField, FromMeta, ast};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Path, Type, ext::IdentExt};

///
/// EntityInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityInput {
    ident: Ident,
    generics: Generics,
    data: ast::Data<(), ColumnInput>,

    #[darling(default)]
    table: Option<String>,

    #[darling(default)]
    after_create: Option<String>,
}

///
/// ColumnInput
///

#[derive(Debug, FromField)]
#[darling(attributes(column))]
struct ColumnInput {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    id: bool,

    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    default: Option<String>,

    #[darling(default)]
    transient: bool,

    #[darling(default)]
    foreign: Option<ForeignInput>,

    #[darling(default)]
    finder: Option<FinderInput>,

    #[darling(default)]
    extends: bool,
}

impl ColumnInput {
    const fn has_markers(&self) -> bool {
        self.id
            || self.name.is_some()
            || self.default.is_some()
            || self.transient
            || self.foreign.is_some()
            || self.finder.is_some()
    }
}

///
/// ForeignInput
///

#[derive(Debug, FromMeta)]
struct ForeignInput {
    column: String,

    #[darling(default)]
    references: Option<String>,

    #[darling(default)]
    entity: Option<Path>,
}

///
/// FinderInput
///

#[derive(Debug, FromMeta)]
struct FinderInput {
    target: String,

    #[darling(default)]
    value: Option<String>,

    #[darling(default)]
    entity: Option<Path>,
}

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match EntityInput::from_derive_input(&input).and_then(|entity| expand(&entity)) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(entity: &EntityInput) -> Result<TokenStream, DarlingError> {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let columns = entity
        .data
        .as_ref()
        .take_struct()
        .ok_or_else(|| DarlingError::unsupported_shape("enum").with_span(ident))?
        .fields;

    let mut errors = DarlingError::accumulator();
    let mut parent: Option<&Type> = None;
    let mut fields = Vec::new();

    for column in columns {
        let Some(field_ident) = column.ident.as_ref() else {
            continue;
        };

        if column.extends {
            if column.has_markers() {
                errors.push(
                    DarlingError::custom("`extends` cannot be combined with other column markers")
                        .with_span(field_ident),
                );
            } else if parent.is_some() {
                errors.push(
                    DarlingError::custom("an entity can extend only one parent")
                        .with_span(field_ident),
                );
            } else {
                parent = Some(&column.ty);
            }
            continue;
        }

        fields.push(field_descriptor(field_ident, column));
    }
    errors.finish()?;

    let parent = match parent {
        Some(ty) => quote! {
            ::core::option::Option::Some(<#ty as ::tabula::EntityType>::DESCRIPTOR)
        },
        None => quote!(::core::option::Option::None),
    };
    let table = table_marker(entity);

    Ok(quote! {
        impl #impl_generics ::tabula::EntityType for #ident #ty_generics #where_clause {
            const DESCRIPTOR: &'static ::tabula::descriptor::TypeDescriptor =
                &::tabula::descriptor::TypeDescriptor {
                    path: ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)),
                    parent: #parent,
                    fields: &[#(#fields),*],
                    table: #table,
                };
        }
    })
}

fn field_descriptor(ident: &Ident, column: &ColumnInput) -> TokenStream {
    let name = ident.unraw().to_string();
    let ty = &column.ty;
    let ty_name = quote!(#ty).to_string();
    let id = column.id;
    let transient = column.transient;

    let column_marker = if column.name.is_some() || column.default.is_some() {
        let col_name = quote_option_str(column.name.as_deref());
        let default_value = quote_option_str(column.default.as_deref());

        quote! {
            ::core::option::Option::Some(::tabula::descriptor::ColumnMarker {
                name: #col_name,
                default_value: #default_value,
            })
        }
    } else {
        quote!(::core::option::Option::None)
    };

    let foreign = column.foreign.as_ref().map_or_else(
        || quote!(::core::option::Option::None),
        |foreign| {
            let entity = descriptor_fn(foreign.entity.as_ref(), ty);
            let col = &foreign.column;
            let references = quote_option_str(foreign.references.as_deref());

            quote! {
                ::core::option::Option::Some(::tabula::descriptor::ForeignMarker {
                    entity: #entity,
                    column: #col,
                    references: #references,
                })
            }
        },
    );

    let finder = column.finder.as_ref().map_or_else(
        || quote!(::core::option::Option::None),
        |finder| {
            let entity = descriptor_fn(finder.entity.as_ref(), ty);
            let target = &finder.target;
            let value = quote_option_str(finder.value.as_deref());

            quote! {
                ::core::option::Option::Some(::tabula::descriptor::FinderMarker {
                    entity: #entity,
                    value_column: #value,
                    target_column: #target,
                })
            }
        },
    );

    quote! {
        ::tabula::descriptor::FieldDescriptor {
            name: #name,
            ty: ::tabula::descriptor::FieldType::new(#ty_name),
            scope: ::tabula::descriptor::FieldScope::Instance,
            markers: ::tabula::descriptor::FieldMarkers {
                id: #id,
                column: #column_marker,
                transient: #transient,
                foreign: #foreign,
                finder: #finder,
            },
        }
    }
}

// Relations reference the target through its descriptor function so that
// entities pointing at each other do not form a const cycle.
fn descriptor_fn(explicit: Option<&Path>, field_ty: &Type) -> TokenStream {
    match explicit {
        Some(path) => quote!(<#path as ::tabula::EntityType>::descriptor),
        None => {
            let target = relation_target(field_ty);
            quote!(<#target as ::tabula::EntityType>::descriptor)
        }
    }
}

fn table_marker(entity: &EntityInput) -> TokenStream {
    if entity.table.is_none() && entity.after_create.is_none() {
        return quote!(::core::option::Option::None);
    }

    let name = quote_option_str(entity.table.as_deref());
    let after_create = quote_option_str(entity.after_create.as_deref());

    quote! {
        ::core::option::Option::Some(::tabula::descriptor::TableMarker {
            name: #name,
            after_create: #after_create,
        })
    }
}
