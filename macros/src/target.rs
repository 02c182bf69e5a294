use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::ToTokens;
use syn::{
    parse::{discouraged::Speculative, Parse, ParseStream},
    Error, Expr, ExprClosure, Stmt, Token,
};

use crate::shape::Shape;

pub mod kw {
    use syn::custom_keyword;

    custom_keyword!(sync);
}

/// Shape written out by the caller in front of the callable.
pub enum Declared {
    Sync(kw::sync),
    Async(Token![async]),
}

impl ToTokens for Declared {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        match self {
            Self::Sync(sync) => sync.to_tokens(tokens),
            Self::Async(r#async) => r#async.to_tokens(tokens),
        }
    }
}

pub struct TargetCallable {
    pub declared: Option<Declared>,
    pub expr: Expr,
}

impl TargetCallable {
    /// The declared prefix decides unless it contradicts what the syntax
    /// proves. Without a prefix, anything the syntax cannot prove async is
    /// sync.
    pub fn shape(&self) -> syn::Result<Shape> {
        match (&self.declared, infer_shape(&self.expr)?) {
            (Some(declared @ Declared::Sync(_)), Some(Shape::Async)) => Err(Error::new_spanned(
                declared,
                "callable is declared `sync` but its shape is async",
            )),
            (Some(Declared::Sync(_)), _) => Ok(Shape::Sync),
            (Some(Declared::Async(_)), _) => Ok(Shape::Async),
            (None, inferred) => Ok(inferred.unwrap_or(Shape::Sync)),
        }
    }

    fn parse_bare(input: ParseStream) -> syn::Result<Self> {
        let expr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the callable"));
        }

        Ok(Self {
            declared: None,
            expr,
        })
    }

    fn parse_declared(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        let declared = if lookahead.peek(Token![async]) {
            Declared::Async(input.parse()?)
        } else if lookahead.peek(kw::sync) {
            Declared::Sync(input.parse()?)
        } else {
            return Err(lookahead.error());
        };

        Self::parse_bare(input).map(|target| Self {
            declared: Some(declared),
            ..target
        })
    }
}

impl Parse for TargetCallable {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // `sync || ..` also parses as a boolean expression, so the prefix wins.
        if input.peek(kw::sync) {
            let fork = input.fork();
            if let Ok(target) = Self::parse_declared(&fork) {
                input.advance_to(&fork);
                return Ok(target);
            }
        }

        let fork = input.fork();
        Self::parse_bare(&fork)
            .inspect(|_| input.advance_to(&fork))
            .or_else(|err1| {
                let fork = input.fork();
                Self::parse_declared(&fork)
                    .inspect(|_| input.advance_to(&fork))
                    .map_err(|err2| {
                        let mut err = Error::new(
                            Span::call_site(),
                            "any_func! expects a closure or a function, optionally prefixed with `sync` or `async`",
                        );
                        err.extend([err1, err2]);
                        err
                    })
            })
    }
}

/// `Some` when the syntax alone proves the shape.
fn infer_shape(expr: &Expr) -> syn::Result<Option<Shape>> {
    match expr {
        Expr::Async(block) => Err(Error::new(
            block.async_token.span,
            "an async block is a future, not a callable; wrap it in a closure: `|| async { .. }`",
        )),
        Expr::Paren(paren) => infer_shape(&paren.expr),
        Expr::Group(group) => infer_shape(&group.expr),
        // A capturing async closure is not `Fn`; without captures `move` is a no-op.
        Expr::Closure(ExprClosure {
            asyncness: Some(_),
            capture: Some(capture),
            ..
        }) => Err(Error::new(
            capture.span,
            "an `async move` closure is not `Fn` once it captures state; write `move |..| async move { .. }` instead",
        )),
        Expr::Closure(closure) => Ok(Some(closure_shape(closure))),
        _ => Ok(None),
    }
}

fn closure_shape(closure: &ExprClosure) -> Shape {
    if closure.asyncness.is_some() || returns_async_block(&closure.body) {
        Shape::Async
    } else {
        Shape::Sync
    }
}

fn returns_async_block(body: &Expr) -> bool {
    match body {
        Expr::Async(_) => true,
        Expr::Paren(paren) => returns_async_block(&paren.expr),
        Expr::Group(group) => returns_async_block(&group.expr),
        Expr::Block(block) => matches!(
            block.block.stmts.last(),
            Some(Stmt::Expr(tail, None)) if returns_async_block(tail)
        ),
        _ => false,
    }
}
