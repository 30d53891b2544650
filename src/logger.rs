use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// Initializes the global logger, writing to stderr.
///
/// The level comes from `RUST_LOG` when set, otherwise from `default_level`.
/// Stdout is left to the JSON response.
pub fn init(default_level: &str) {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    Dispatch::new()
        .level(log_level_filter)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .unwrap_or_else(|e| {
            eprintln!("Failed to apply logger configuration: {}", e);
        });
}
