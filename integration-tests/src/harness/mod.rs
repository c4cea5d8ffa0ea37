pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogDir, access_line, at};
pub use self::tracing::{CapturedEvent, init_test_tracing};
