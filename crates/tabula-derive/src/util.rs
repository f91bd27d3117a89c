use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

// Wrappers looked through when inferring a relation's target entity.
const WRAPPERS: [&str; 5] = ["Option", "Vec", "Box", "Arc", "Rc"];

pub fn quote_option_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(s) => quote!(::core::option::Option::Some(#s)),
        None => quote!(::core::option::Option::None),
    }
}

/// `Option<Vec<Post>>` -> `Post`.
pub fn relation_target(ty: &Type) -> &Type {
    let Type::Path(path) = ty else {
        return ty;
    };
    let Some(segment) = path.path.segments.last() else {
        return ty;
    };
    if !WRAPPERS.iter().any(|w| segment.ident == w) {
        return ty;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return ty;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });

    match (types.next(), types.next()) {
        (Some(inner), None) => relation_target(inner),
        _ => ty,
    }
}
