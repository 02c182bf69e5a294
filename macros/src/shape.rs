use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Sync,
    Async,
}

impl ToTokens for Shape {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        tokens.extend(match self {
            Self::Sync => quote!(::any_func::shape::Sync),
            Self::Async => quote!(::any_func::shape::Async),
        });
    }
}
