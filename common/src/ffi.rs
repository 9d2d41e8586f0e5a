use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::error;

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<non-string panic payload>"
    }
}

/// Runs `body` on behalf of a foreign caller.
///
/// Unwinding into a non-Rust frame is undefined behavior, so a panic is
/// caught here, logged, and replaced with `fallback`.
pub fn guard<T>(entry: &str, fallback: T, body: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(payload) => {
            error!("panic in `{entry}`: {}", panic_message(payload.as_ref()));
            fallback
        }
    }
}
