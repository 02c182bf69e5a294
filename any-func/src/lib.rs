//! Accept a callback that is either synchronous or asynchronous through one
//! type, and invoke it without paying for async machinery when it turns out to
//! be synchronous.
//!
//! ```
//! use any_func::{AnyFunc, AnyFunc1};
//!
//! # async_std::task::block_on(async {
//! let sync = AnyFunc::from_sync(|| 42);
//! let deferred = AnyFunc::from_async(|| async { 42 });
//! let double = AnyFunc1::from_sync(|x: i32| x * 2);
//!
//! assert_eq!(sync.invoke_async().await, 42);
//! assert_eq!(deferred.invoke_async().await, 42);
//! assert_eq!(double.invoke_async(21).await, 42);
//! # });
//! ```
//!
//! A synchronous callback runs inside `invoke_async` itself; the returned
//! [`Invocation`] is already complete and never allocates.
//!
//! ```
//! use any_func::AnyFunc;
//!
//! let invocation = AnyFunc::from_sync(|| "done").invoke_async();
//! assert!(invocation.is_ready());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate self as any_func;

mod func;
mod invocation;
pub mod shape;

pub use crate::{
    func::{AnyCallback, AnyFunc, AnyFunc1, AnyFunc2, AnyFunc3, Mode},
    invocation::Invocation,
};

/// Tags a callable as synchronous or asynchronous by looking at its shape.
///
/// A closure declared `async`, or one whose body is an `async` block, is
/// tagged [`shape::Async`]; any other closure is tagged [`shape::Sync`].
/// Paths and other opaque expressions are synchronous unless prefixed with
/// `async`. The tagged value converts into any arity type with [`Into`].
///
/// ```
/// use any_func::{any_func, AnyFunc, AnyFunc1};
///
/// async fn fetch(id: u32) -> String {
///     format!("item-{id}")
/// }
///
/// let answer: AnyFunc<i32> = any_func!(|| 42).into();
/// let later: AnyFunc<i32> = any_func!(|| async { 42 }).into();
/// let lookup: AnyFunc1<u32, String> = any_func!(async fetch).into();
///
/// assert!(answer.is_sync());
/// assert!(later.is_async());
/// assert!(lookup.is_async());
/// ```
#[cfg(feature = "macros")]
pub use any_func_macros::any_func;
