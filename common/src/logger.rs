use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!("{}", format_entry(&timestamp, self.prefix.as_deref(), file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Before `init_logger` runs (unit tests, library users that never set one
/// up) entries go to stderr without a timestamp.
pub fn log(file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(file, line, message),
        None => eprintln!("{}", format_entry("-", None, file, line, message)),
    }
}

fn format_entry(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_strips_directories() {
        let entry = format_entry("t", None, "common/src/games/snake/scheduler.rs", 12, "tick");
        assert_eq!(entry, "[t][scheduler.rs:12] tick");
    }

    #[test]
    fn test_format_entry_with_prefix() {
        let entry = format_entry("t", Some("Watch"), "C:\\src\\watch.rs", 3, "respawn");
        assert_eq!(entry, "[t][Watch][watch.rs:3] respawn");
    }
}
