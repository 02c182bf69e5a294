use std::{fmt, future::Future, sync::Arc};

use futures::future::BoxFuture;
use log::trace;

use crate::{invocation::Invocation, shape};

/// Which kind of callback a wrapper holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Empty,
    Sync,
    Async,
}

enum Slot<S: ?Sized, A: ?Sized> {
    Empty,
    Sync(Arc<S>),
    Async(Arc<A>),
}

impl<S: ?Sized, A: ?Sized> Slot<S, A> {
    const fn mode(&self) -> Mode {
        match self {
            Self::Empty => Mode::Empty,
            Self::Sync(_) => Mode::Sync,
            Self::Async(_) => Mode::Async,
        }
    }
}

impl<S: ?Sized, A: ?Sized> Clone for Slot<S, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Sync(callback) => Self::Sync(Arc::clone(callback)),
            Self::Async(callback) => Self::Async(Arc::clone(callback)),
        }
    }
}

macro_rules! any_func_family {
    ($(
        $(#[$attr:meta])*
        $name:ident($($param:ident: $arg:ident),*) -> $out:ident;
    )*) => {$(
        $(#[$attr])*
        pub struct $name<$($arg,)* $out> {
            slot: Slot<
                dyn Fn($($arg),*) -> $out + Send + Sync + 'static,
                dyn Fn($($arg),*) -> BoxFuture<'static, $out> + Send + Sync + 'static,
            >,
        }

        impl<$($arg,)* $out> $name<$($arg,)* $out> {
            /// A wrapper holding no callback.
            pub const fn empty() -> Self {
                Self { slot: Slot::Empty }
            }

            /// Wraps a callback that returns its result directly.
            pub fn from_sync<F>(callback: F) -> Self
            where
                F: Fn($($arg),*) -> $out + Send + Sync + 'static,
            {
                Self {
                    slot: Slot::Sync(Arc::new(callback)),
                }
            }

            /// Wraps a callback that returns a future of its result.
            pub fn from_async<F, Fut>(callback: F) -> Self
            where
                F: Fn($($arg),*) -> Fut + Send + Sync + 'static,
                Fut: Future<Output = $out> + Send + 'static,
            {
                Self {
                    slot: Slot::Async(Arc::new(
                        move |$($param: $arg),*| -> BoxFuture<'static, $out> {
                            Box::pin(callback($($param),*))
                        },
                    )),
                }
            }

            pub const fn mode(&self) -> Mode {
                self.slot.mode()
            }

            pub const fn is_empty(&self) -> bool {
                matches!(self.slot, Slot::Empty)
            }

            pub const fn is_sync(&self) -> bool {
                matches!(self.slot, Slot::Sync(_))
            }

            pub const fn is_async(&self) -> bool {
                matches!(self.slot, Slot::Async(_))
            }

            /// Invokes the callback once with the given arguments.
            ///
            /// An async callback is awaited by the returned [`Invocation`]. A
            /// sync callback runs before this returns and the invocation is
            /// already complete. With no callback the result is
            #[doc = concat!("`", stringify!($out), "::default()`.")]
            ///
            /// Whatever the callback returns, including an `Err`, is passed
            /// through untouched; a panic unwinds to the caller.
            ///
            /// Result types without a `Default`, such as `Result<_, _>`, go
            /// through [`try_invoke_async`](Self::try_invoke_async) instead.
            pub fn invoke_async(&self, $($param: $arg),*) -> Invocation<$out>
            where
                $out: Default,
            {
                match self.try_invoke_async($($param),*) {
                    Some(invocation) => invocation,
                    None => {
                        trace!("{}: empty, returning default", stringify!($name));
                        Invocation::ready(<$out>::default())
                    }
                }
            }

            /// Like `invoke_async`, but returns `None` instead of a default
            /// value when no callback is held.
            pub fn try_invoke_async(&self, $($param: $arg),*) -> Option<Invocation<$out>> {
                match &self.slot {
                    Slot::Async(callback) => {
                        trace!("{}: dispatching to async callback", stringify!($name));
                        Some(Invocation::pending(callback($($param),*)))
                    }
                    Slot::Sync(callback) => {
                        trace!("{}: dispatching to sync callback", stringify!($name));
                        Some(Invocation::ready(callback($($param),*)))
                    }
                    Slot::Empty => None,
                }
            }
        }

        impl<$($arg,)* $out> Default for $name<$($arg,)* $out> {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl<$($arg,)* $out> Clone for $name<$($arg,)* $out> {
            fn clone(&self) -> Self {
                Self {
                    slot: self.slot.clone(),
                }
            }
        }

        impl<$($arg,)* $out> fmt::Debug for $name<$($arg,)* $out> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("mode", &self.mode())
                    .finish()
            }
        }

        impl<F, $($arg,)* $out> From<shape::Sync<F>> for $name<$($arg,)* $out>
        where
            F: Fn($($arg),*) -> $out + Send + Sync + 'static,
        {
            fn from(shape::Sync(callback): shape::Sync<F>) -> Self {
                Self::from_sync(callback)
            }
        }

        impl<F, Fut, $($arg,)* $out> From<shape::Async<F>> for $name<$($arg,)* $out>
        where
            F: Fn($($arg),*) -> Fut + Send + Sync + 'static,
            Fut: Future<Output = $out> + Send + 'static,
        {
            fn from(shape::Async(callback): shape::Async<F>) -> Self {
                Self::from_async(callback)
            }
        }
    )*};
}

any_func_family! {
    /// A zero-argument callback producing a `T`, sync or async.
    ///
    /// Same contract as [`AnyFunc`]; kept as its own type for call sites that
    /// model event callbacks rather than value producers.
    AnyCallback() -> T;

    /// A zero-argument function producing an `R`, sync or async.
    AnyFunc() -> R;

    /// A one-argument function producing an `R`, sync or async.
    AnyFunc1(arg: T) -> R;

    /// A two-argument function producing an `R`, sync or async.
    AnyFunc2(arg0: T0, arg1: T1) -> R;

    /// A three-argument function producing an `R`, sync or async.
    AnyFunc3(arg0: T0, arg1: T1, arg2: T2) -> R;
}
