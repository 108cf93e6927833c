use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

/// Field categories, mirroring `postgen::example::FieldKind`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Text,
    Int64,
    Int32,
    Bool,
    Float64,
    Other,
}

impl Kind {
    fn variant(self) -> syn::Ident {
        let name = match self {
            Kind::Text => "Text",
            Kind::Int64 => "Int64",
            Kind::Int32 => "Int32",
            Kind::Bool => "Bool",
            Kind::Float64 => "Float64",
            Kind::Other => "Other",
        };
        format_ident!("{}", name)
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.unraw().to_string();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        },
        _ => {
            return Err(syn::Error::new_spanned(name, "Example can only be derived for structs"));
        }
    };

    let calls = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let field_name = ident.unraw().to_string();
        let kind = classify(&field.ty).variant();
        Some(quote! {
            .field(#field_name, ::postgen::example::FieldKind::#kind)
        })
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::postgen::example::Example for #name #ty_generics #where_clause {
            fn descriptor() -> ::postgen::example::TypeDescriptor {
                ::postgen::example::TypeDescriptor::new(#type_name)
                    #(#calls)*
            }
        }
    })
}

/// Classifies a declared field type by name. `Option<T>` counts as `T`.
fn classify(ty: &Type) -> Kind {
    match ty {
        Type::Reference(reference) => classify(&reference.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Group(group) => classify(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let Some(segment) = type_path.path.segments.last() else {
                return Kind::Other;
            };

            if segment.ident == "Option" {
                return match &segment.arguments {
                    PathArguments::AngleBracketed(args) => match args.args.first() {
                        Some(GenericArgument::Type(inner)) => classify(inner),
                        _ => Kind::Other,
                    },
                    _ => Kind::Other,
                };
            }

            if !matches!(segment.arguments, PathArguments::None) {
                return Kind::Other;
            }

            match segment.ident.to_string().as_str() {
                "String" | "str" => Kind::Text,
                "i64" | "u64" => Kind::Int64,
                "i32" | "u32" => Kind::Int32,
                "bool" => Kind::Bool,
                "f64" => Kind::Float64,
                _ => Kind::Other,
            }
        }
        _ => Kind::Other,
    }
}
