#![deny(warnings)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

use proc_macro::TokenStream;
use syn::parse_macro_input;

use crate::target::TargetCallable;

mod expand;
mod shape;
mod target;

/// Tags a callable with its shape so it converts into an `any_func` wrapper.
///
/// Expands to `::any_func::shape::Async(..)` for a closure declared `async`
/// or one whose body ends in an `async` block, and to
/// `::any_func::shape::Sync(..)` for any other closure. Paths and other
/// expressions are sync unless written `async path`; `sync path` is accepted
/// too. Declaring an async-shaped closure `sync` is an error.
///
/// An `async` closure only implements `Fn` while it captures nothing, so
/// `async move |..| ..` is rejected. Capture state with
/// `move |..| async move { .. }` instead, cloning what the future needs.
///
/// A leading `sync` is always read as the prefix: `any_func!(sync(handler))`
/// tags `(handler)` as sync rather than calling a function named `sync`.
#[proc_macro]
pub fn any_func(input: TokenStream) -> TokenStream {
    let target = parse_macro_input!(input as TargetCallable);

    expand::expand(target)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
