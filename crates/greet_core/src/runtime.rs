/* # Why read the toolchain version from a build-time env var?

A compiled binary has no runtime to interrogate, so the closest equivalent of
a runtime version query is the rustc version the binary was built with. The
build script captures it via `rustc_version` and bakes it in as
`GREET_RUSTC_VERSION`, which keeps this function infallible and allocation-free.
*/

/// Returns the version identifier of the toolchain this binary was built
/// with, e.g. `rustc1.85.0`. Callers treat it as an opaque token.
pub fn version() -> &'static str {
    env!("GREET_RUSTC_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_has_expected_shape() {
        let v = version();
        assert!(v.starts_with("rustc"));
        // There is a version number after the prefix
        assert!(v.len() > "rustc".len());
    }

    #[test]
    fn test_version_is_stable_across_calls() {
        assert_eq!(version(), version());
    }
}
