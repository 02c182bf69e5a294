#[test]
fn tests() {
    let t = trybuild::TestCases::new();
    t.pass("src/tests/pass/macro-closures.rs");
    t.pass("src/tests/pass/macro-paths.rs");
    t.pass("src/tests/pass/async-closures.rs");
    t.pass("src/tests/pass/arities.rs");
    t.pass("src/tests/pass/event-handler.rs");
    t.pass("src/tests/pass/errors-pass-through.rs");

    t.compile_fail("src/tests/fail/async-move-closure.rs");
    t.compile_fail("src/tests/fail/sync-declared-async-closure.rs");
    t.compile_fail("src/tests/fail/bare-async-block.rs");
}
