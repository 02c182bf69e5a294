use core::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::future::{BoxFuture, FusedFuture};

/// The future returned by `invoke_async`.
///
/// When the wrapped callback was synchronous (or absent) the value is already
/// computed and the first poll returns it. Otherwise the invocation drives the
/// callback's future.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Invocation<R> {
    state: State<R>,
}

enum State<R> {
    Ready(Option<R>),
    Pending(BoxFuture<'static, R>),
    Done,
}

impl<R> Invocation<R> {
    pub(crate) const fn ready(value: R) -> Self {
        Self {
            state: State::Ready(Some(value)),
        }
    }

    pub(crate) fn pending(future: BoxFuture<'static, R>) -> Self {
        Self {
            state: State::Pending(future),
        }
    }

    /// Whether the result was produced without suspending.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(Some(_)))
    }

    /// Takes the result out if it was produced synchronously, or hands the
    /// invocation back otherwise.
    pub fn into_ready(self) -> Result<R, Self> {
        match self.state {
            State::Ready(Some(value)) => Ok(value),
            state => Err(Self { state }),
        }
    }
}

// The result is moved out, never pinned, and the boxed future is already pinned.
impl<R> Unpin for Invocation<R> {}

impl<R> Future for Invocation<R> {
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<R> {
        let this = self.get_mut();
        match &mut this.state {
            State::Ready(value) => {
                let value = value
                    .take()
                    .expect("`Invocation` polled after completion");
                this.state = State::Done;
                Poll::Ready(value)
            }
            State::Pending(future) => {
                let value = futures::ready!(future.as_mut().poll(cx));
                this.state = State::Done;
                Poll::Ready(value)
            }
            State::Done => panic!("`Invocation` polled after completion"),
        }
    }
}

impl<R> FusedFuture for Invocation<R> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

impl<R> fmt::Debug for Invocation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Ready(_) => "Ready",
            State::Pending(_) => "Pending",
            State::Done => "Done",
        };
        f.debug_struct("Invocation").field("state", &state).finish()
    }
}
