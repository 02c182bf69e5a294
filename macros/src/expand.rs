use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::target::TargetCallable;

pub fn expand(target: TargetCallable) -> syn::Result<TokenStream2> {
    let shape = target.shape()?;
    let expr = target.expr;

    Ok(quote! {
        #shape(#expr)
    })
}
