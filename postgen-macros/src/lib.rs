use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, ItemFn, LitStr, Token, parse_macro_input};

mod example;
mod route;

use route::RouteArgs;

#[proc_macro_attribute]
pub fn get(attr: TokenStream, item: TokenStream) -> TokenStream {
    method_macro("GET", attr, item)
}

#[proc_macro_attribute]
pub fn post(attr: TokenStream, item: TokenStream) -> TokenStream {
    method_macro("POST", attr, item)
}

#[proc_macro_attribute]
pub fn put(attr: TokenStream, item: TokenStream) -> TokenStream {
    method_macro("PUT", attr, item)
}

#[proc_macro_attribute]
pub fn patch(attr: TokenStream, item: TokenStream) -> TokenStream {
    method_macro("PATCH", attr, item)
}

#[proc_macro_attribute]
pub fn delete(attr: TokenStream, item: TokenStream) -> TokenStream {
    method_macro("DELETE", attr, item)
}

/// Registers a handler with several methods and/or patterns:
/// `#[route(methods = [GET, POST], paths = ["/a", "/b"])]`.
#[proc_macro_attribute]
pub fn route(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RouteArgs);
    let func = parse_macro_input!(item as ItemFn);

    route::expand(args, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(Example)]
pub fn derive_example(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    example::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn method_macro(method: &str, attr: TokenStream, item: TokenStream) -> TokenStream {
    let paths = parse_macro_input!(attr with Punctuated::<LitStr, Token![,]>::parse_terminated);
    let func = parse_macro_input!(item as ItemFn);

    let args = RouteArgs {
        methods: vec![method.to_string()],
        paths: paths.into_iter().collect(),
    };

    route::expand(args, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
