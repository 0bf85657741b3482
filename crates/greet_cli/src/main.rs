/* # Why is the CLI minimal and hardcoded?

The CLI takes no arguments, flags, or environment variables. It exists to
demonstrate cross-crate composition: the binary orchestrates two pure token
providers and the build-time toolchain version, then performs exactly one
write to stdout.

The workflow is straightforward:
1. Run `greet`
2. One line is printed: `Hello World (rustc<version>)`

Exit codes:
- 0: Success (greeting written)
- 1: Error (writing to stdout failed)
*/

use std::io;
use std::process;

use greet_base::tracing::init_tracing;
use greet_core::write_greeting;

fn main() {
    init_tracing().unwrap();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_greeting(&mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
