pub mod time;

pub use time::{Delay, TokioDelay, sleep_with_jitter};
