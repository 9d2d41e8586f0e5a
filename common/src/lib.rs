pub mod ffi;
pub mod logs;

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug_select {
    ($debug: expr, $release: expr) => {
        $debug
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug_select {
    ($debug: expr, $release: expr) => {
        $release
    };
}
