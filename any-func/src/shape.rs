//! Tags that record which of the two callback shapes a function has.
//!
//! Every arity type implements `From<Sync<F>>` and `From<Async<F>>`, so a
//! tagged function converts into the wrapper wherever an `Into` bound or a
//! type annotation is present.

/// A function returning its result directly.
#[derive(Clone, Copy, Debug)]
pub struct Sync<F>(pub F);

/// A function returning a future of its result.
#[derive(Clone, Copy, Debug)]
pub struct Async<F>(pub F);

impl<F> Sync<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> Async<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}
