use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    debug_enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, debug_enabled: bool) -> Self {
        Self { prefix, debug_enabled }
    }

    pub fn format_line(&self, level: &str, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp, level, prefix, file_name, line, message
            ),
            None => format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message),
        }
    }

    // stdout belongs to the board display, so log lines go to stderr.
    pub fn log(&self, level: &str, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(level, file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>, debug_enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, debug_enabled));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log("INFO", file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.debug_enabled)
}

pub fn log_debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get().filter(|logger| logger.debug_enabled) {
        logger.log("DEBUG", file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log_debug(file!(), line!(), &format!($($arg)*))
        }
    };
}
