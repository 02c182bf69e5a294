use any_func::any_func;

fn main() {
    let _ = any_func!(async move || 1);
}
