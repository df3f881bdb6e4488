/// Generate a `#[test]` running one named vector from this package's
/// `vectors/` directory.
#[macro_export]
macro_rules! test_scenario {
    ($name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<scenario_ $name>]() {
                let path = ::std::path::Path::new(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/vectors/",
                    stringify!($name),
                    ".yaml"
                ));
                let outcome = $crate::run_scenario_file(path)
                    .expect("scenario must evaluate cleanly");
                assert_eq!(
                    outcome.head, outcome.expected,
                    "scenario '{}' selected head {} but expected {}",
                    stringify!($name), outcome.head, outcome.expected,
                );
            }
        }
    };
}
