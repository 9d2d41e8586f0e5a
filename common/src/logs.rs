use log::LevelFilter;

use crate::debug_select;

#[cfg(target_os = "android")]
pub fn init_logger(tag: &'static str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(debug_select!(LevelFilter::Trace, LevelFilter::Info))
            .with_tag(tag)
    );
}

// Host JVMs share stderr with the application, keep release builds quiet.
#[cfg(not(target_os = "android"))]
pub fn init_logger(tag: &'static str) {
    use std::io::Write;

    let _ = env_logger::Builder::new()
        .filter_level(debug_select!(LevelFilter::Trace, LevelFilter::Warn))
        .format(move |buf, record| {
            writeln!(buf, "{tag} {:<5} {}", record.level(), record.args())
        })
        .try_init();
}
