/// Returns the greeting subject token.
///
/// Lives in its own module to keep the subject independent from the
/// greeting itself; same purity and determinism guarantees as
/// [`crate::hello::hello`].
pub fn world() -> &'static str {
    "World"
}
