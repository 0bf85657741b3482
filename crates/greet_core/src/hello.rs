/// Returns the greeting token.
///
/// Zero-argument and pure: the same constant is returned on every call
/// within a process lifetime.
pub fn hello() -> &'static str {
    "Hello"
}
