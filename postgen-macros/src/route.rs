use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    Attribute, FnArg, GenericArgument, Ident, ItemFn, LitStr, Pat, PathArguments, Token, Type,
    bracketed,
};

const METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "TRACE",
];

pub struct RouteArgs {
    pub methods: Vec<String>,
    pub paths: Vec<LitStr>,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut methods = Vec::new();
        let mut paths = Vec::new();

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let content;
            bracketed!(content in input);

            match key.to_string().as_str() {
                "methods" => {
                    for ident in Punctuated::<Ident, Token![,]>::parse_terminated(&content)? {
                        let name = ident.to_string().to_ascii_uppercase();
                        if !METHODS.contains(&name.as_str()) {
                            return Err(syn::Error::new(
                                ident.span(),
                                format!("unknown HTTP method `{ident}`"),
                            ));
                        }
                        methods.push(name);
                    }
                }
                "paths" => {
                    paths.extend(Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?);
                }
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "expected `methods = [..]` or `paths = [..]`",
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            } else {
                break;
            }
        }

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after route arguments"));
        }

        Ok(RouteArgs { methods, paths })
    }
}

/// How a handler argument was marked.
#[derive(Debug, PartialEq)]
enum Marker {
    Body,
    Query(Option<String>),
    Path,
    None,
}

/// Emits the handler unchanged (minus parameter markers) plus an
/// `inventory` registration describing it.
pub fn expand(args: RouteArgs, mut func: ItemFn) -> syn::Result<TokenStream> {
    let handler_name = func.sig.ident.unraw().to_string();
    let params_fn = format_ident!("__postgen_parameters_{}", handler_name);

    let mut parameters = Vec::new();
    for (index, arg) in func.sig.inputs.iter_mut().enumerate() {
        let pat_type = match arg {
            FnArg::Typed(pat_type) => pat_type,
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "route handlers must be free functions",
                ));
            }
        };

        let marker = take_marker(&mut pat_type.attrs)?;
        let name = param_name(&pat_type.pat).unwrap_or_else(|| format!("arg{index}"));
        parameters.push(parameter_tokens(&name, &marker, &pat_type.ty));
    }

    let methods = &args.methods;
    let paths = &args.paths;

    Ok(quote! {
        #func

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #params_fn() -> ::std::vec::Vec<::postgen::introspection::ParameterDescriptor> {
            ::std::vec![#(#parameters),*]
        }

        ::postgen::inventory::submit! {
            ::postgen::discovery::RouteDescriptor {
                methods: &[#(#methods),*],
                patterns: &[#(#paths),*],
                handler_name: #handler_name,
                parameters: #params_fn,
            }
        }
    })
}

/// Removes `#[body]`, `#[query]`, `#[query("key")]` and `#[path]` from a
/// parameter. When several are present, body beats query beats path.
fn take_marker(attrs: &mut Vec<Attribute>) -> syn::Result<Marker> {
    let mut body = false;
    let mut query = None;
    let mut path = false;
    let mut error = None;

    attrs.retain(|attr| {
        if attr.path().is_ident("body") {
            body = true;
        } else if attr.path().is_ident("query") {
            let key = match &attr.meta {
                syn::Meta::List(_) => match attr.parse_args::<LitStr>() {
                    Ok(lit) => Some(lit.value()),
                    Err(e) => {
                        error.get_or_insert(e);
                        None
                    }
                },
                _ => None,
            };
            query = Some(key);
        } else if attr.path().is_ident("path") {
            path = true;
        } else {
            return true;
        }
        false
    });

    if let Some(e) = error {
        return Err(e);
    }

    Ok(if body {
        Marker::Body
    } else if let Some(key) = query {
        Marker::Query(key)
    } else if path {
        Marker::Path
    } else {
        Marker::None
    })
}

fn param_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.ident.unraw().to_string()),
        // Json(payload), Path(id)
        Pat::TupleStruct(tuple) if tuple.elems.len() == 1 => match &tuple.elems[0] {
            Pat::Ident(ident) => Some(ident.ident.unraw().to_string()),
            _ => None,
        },
        _ => None,
    }
}

fn parameter_tokens(name: &str, marker: &Marker, ty: &Type) -> TokenStream {
    let descriptor = quote!(::postgen::introspection::ParameterDescriptor);
    let type_name = type_name(ty);

    match marker {
        Marker::Body => {
            let inner = body_type(ty);
            quote! {
                #descriptor::body(#name, <#inner as ::postgen::example::Example>::descriptor())
            }
        }
        Marker::Query(Some(key)) => quote!(#descriptor::query(#name, #type_name).with_key(#key)),
        Marker::Query(None) => quote!(#descriptor::query(#name, #type_name)),
        Marker::Path => quote!(#descriptor::path(#name, #type_name)),
        Marker::None => quote!(#descriptor::other(#name, #type_name)),
    }
}

/// The payload type of a body parameter: `Json<T>` and `&T` unwrap to `T`.
fn body_type(ty: &Type) -> &Type {
    match ty {
        Type::Reference(reference) => body_type(&reference.elem),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return ty;
            };
            if segment.ident != "Json" {
                return ty;
            }
            match &segment.arguments {
                PathArguments::AngleBracketed(args) if args.args.len() == 1 => {
                    match args.args.first() {
                        Some(GenericArgument::Type(inner)) => inner,
                        _ => ty,
                    }
                }
                _ => ty,
            }
        }
        _ => ty,
    }
}

fn type_name(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}
