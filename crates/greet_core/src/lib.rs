pub mod compose;
pub mod hello;
pub mod runtime;
pub mod world;

pub use compose::{compose_line, write_greeting};
pub use hello::hello;
pub use runtime::version;
pub use world::world;
