use std::thread::{self, ThreadId};

pub fn tid() -> ThreadId {
    thread::current().id()
}

#[macro_export]
#[allow(clippy::crate_in_macro_def)]
macro_rules! info {
    ($fmt: literal $( ,$args: expr )*) => {
        log::info!(concat!("[{:?}] ", $fmt), crate::logs::tid(), $( $args ),*);
    };
}

#[macro_export]
#[allow(clippy::crate_in_macro_def)]
macro_rules! debug {
    ($fmt: literal $( ,$args: expr )*) => {
        log::debug!(concat!("[{:?}] ", $fmt), crate::logs::tid(), $( $args ),*);
    };
}

#[macro_export]
#[allow(clippy::crate_in_macro_def)]
macro_rules! warn {
    ($fmt: literal $( ,$args: expr )*) => {
        log::warn!(concat!("[{:?}] ", $fmt), crate::logs::tid(), $( $args ),*);
    };
}
