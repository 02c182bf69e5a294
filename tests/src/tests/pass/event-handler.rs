use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use any_func::{any_func, AnyCallback};

struct Button {
    on_click: AnyCallback<()>,
}

impl Button {
    fn new(on_click: impl Into<AnyCallback<()>>) -> Self {
        Self {
            on_click: on_click.into(),
        }
    }

    async fn click(&self) {
        self.on_click.invoke_async().await
    }
}

#[async_std::main]
async fn main() {
    let clicks = Arc::new(AtomicUsize::new(0));

    let counting = {
        let clicks = Arc::clone(&clicks);
        Button::new(any_func!(move || {
            clicks.fetch_add(1, Ordering::SeqCst);
        }))
    };
    let deferred = {
        let clicks = Arc::clone(&clicks);
        Button::new(any_func!(move || {
            let clicks = Arc::clone(&clicks);
            async move {
                async_std::task::yield_now().await;
                clicks.fetch_add(10, Ordering::SeqCst);
            }
        }))
    };
    let inert = Button {
        on_click: AnyCallback::default(),
    };

    counting.click().await;
    counting.click().await;
    deferred.click().await;
    inert.click().await;

    assert_eq!(clicks.load(Ordering::SeqCst), 12);
}
