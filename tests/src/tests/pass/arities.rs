use any_func::{AnyFunc, AnyFunc1, AnyFunc2, AnyFunc3, Mode};
use futures::FutureExt;

#[async_std::main]
async fn main() {
    let zero = AnyFunc::from_sync(|| "zero");
    let one = AnyFunc1::from_async(|a: u8| async move { a });
    let two = AnyFunc2::from_sync(|a: u8, b: u8| (a, b));
    let three = AnyFunc3::from_async(|a: u8, b: u8, c: u8| async move { [a, b, c] });

    assert_eq!(zero.invoke_async().now_or_never(), Some("zero"));
    assert_eq!(one.invoke_async(1).await, 1);
    assert_eq!(two.invoke_async(1, 2).now_or_never(), Some((1, 2)));
    assert_eq!(three.invoke_async(1, 2, 3).await, [1, 2, 3]);

    let empty = AnyFunc3::<u8, u8, u8, Option<u8>>::empty();
    assert_eq!(empty.mode(), Mode::Empty);
    assert_eq!(empty.invoke_async(1, 2, 3).now_or_never(), Some(None));
    assert!(empty.try_invoke_async(1, 2, 3).is_none());
}
