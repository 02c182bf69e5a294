use any_func::{any_func, AnyFunc, AnyFunc1};

#[derive(Debug, PartialEq)]
struct Boom(&'static str);

#[async_std::main]
async fn main() {
    let sync: AnyFunc<Result<u8, Boom>> = any_func!(|| Err(Boom("boom"))).into();
    let deferred: AnyFunc1<u8, Result<u8, Boom>> = any_func!(|x: u8| async move {
        if x > 1 {
            Err(Boom("boom"))
        } else {
            Ok(x)
        }
    })
    .into();

    let sync = sync.try_invoke_async().expect("callback is set");
    assert_eq!(sync.await, Err(Boom("boom")));

    assert_eq!(deferred.try_invoke_async(1).unwrap().await, Ok(1));
    assert_eq!(deferred.try_invoke_async(2).unwrap().await, Err(Boom("boom")));

    let panicked = std::panic::catch_unwind(|| {
        let exploding: AnyFunc<u8> = any_func!(|| -> u8 { panic!("boom") }).into();
        let _ = exploding.invoke_async();
    });
    let payload = panicked.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
}
