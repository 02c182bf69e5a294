use any_func::any_func;

fn main() {
    let _ = any_func!(sync || async { 1 });
}
