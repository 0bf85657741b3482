/* # Why a dedicated compose module?

Composition is split from the providers so each concern stays independently
testable:
- **Token production** (hello.rs, world.rs): constant, pure values
- **Version lookup** (runtime.rs): build-time toolchain identifier
- **Line assembly and output** (compose.rs): formatting and the single write

The formatting is a pure function over three strings; the write is the only
fallible operation in the whole program.
*/

use std::io::Write;

use tracing::{debug, instrument};

use greet_base::{ErrorKind, GreetError, GreetResult, ResultExt};

use crate::{hello, runtime, world};

/// Formats one greeting line from its three parts.
///
/// The layout is fixed: `"<hello> <world> (<version>)\n"`. Empty tokens are
/// passed through unchanged, so spacing and parentheses are preserved even
/// when a provider yields an empty string.
pub fn compose_line(hello: &str, world: &str, version: &str) -> String {
    format!("{hello} {world} ({version})\n")
}

/// Composes the greeting from the providers and writes it to `out`.
///
/// The fully formatted line is emitted as a single write followed by a
/// flush, so the output can never be interleaved partially. The only
/// failure mode is the underlying write; it is propagated to the caller
/// with context attached.
#[instrument(skip(out))]
pub fn write_greeting<W: Write>(out: &mut W) -> GreetResult<()> {
    let line = compose_line(hello::hello(), world::world(), runtime::version());
    debug!(len = line.len(), "composed greeting line");

    out.write_all(line.as_bytes())
        .map_err(|source| Box::new(GreetError::new(ErrorKind::Write { source })))
        .context("failed to write greeting")?;
    out.flush()
        .map_err(|source| Box::new(GreetError::new(ErrorKind::Write { source })))
        .context("failed to flush greeting")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use std::io;

    #[test]
    fn test_compose_line() {
        assert_eq!(
            compose_line("Hello", "World", "rustc1.85.0"),
            "Hello World (rustc1.85.0)\n"
        );
    }

    #[test]
    fn test_compose_line_empty_hello_keeps_layout() {
        assert_eq!(
            compose_line("", "World", "rustc1.85.0"),
            " World (rustc1.85.0)\n"
        );
    }

    #[test]
    fn test_compose_line_empty_world_keeps_layout() {
        assert_eq!(
            compose_line("Hello", "", "rustc1.85.0"),
            "Hello  (rustc1.85.0)\n"
        );
    }

    #[test]
    fn test_write_greeting_emits_composed_line() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();

        let expected = compose_line(hello::hello(), world::world(), runtime::version());
        assert_eq!(out, expected.as_bytes());
    }

    #[test]
    fn test_write_greeting_line_shape() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("Hello World (rustc"));
        assert!(line.ends_with(")\n"));
        // Exactly one line is written
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_write_greeting_is_idempotent() {
        let mut first = Vec::new();
        write_greeting(&mut first).unwrap();
        let mut second = Vec::new();
        write_greeting(&mut second).unwrap();
        assert_eq!(first, second);
    }

    /// Writer that fails every write with a broken pipe.
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_greeting_propagates_write_failure() {
        let mut out = FailingWriter;
        let err = write_greeting(&mut out).unwrap_err();

        match err.kind() {
            ErrorKind::Write { source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            _ => panic!("Expected Write variant"),
        }
        expect!["failed to write greeting: Failed to write output: pipe closed"]
            .assert_eq(&err.to_string());
    }
}
