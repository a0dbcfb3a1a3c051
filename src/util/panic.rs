/// Asserts that running `$run` panics, optionally with a message containing `$expected`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {:?} doesn't contain {:?}",
                    message,
                    $expected
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
