use std::ffi::{c_char, CString};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::sys::*;

/// Where log records end up in HiLog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub domain: u32,
    pub tag: String,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { domain: 0xFF00, tag: "drag".to_string(), level: LevelFilter::Info }
    }
}

struct HiLogger {
    domain: u32,
    tag: CString,
    level: LevelFilter,
}

impl Log for HiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => LOG_ERROR,
            Level::Warn => LOG_WARN,
            Level::Info => LOG_INFO,
            Level::Debug | Level::Trace => LOG_DEBUG,
        };
        // Interior NULs would truncate the line; drop them.
        let message = format!("{}", record.args()).replace('\0', "");
        let Ok(message) = CString::new(message) else {
            return;
        };
        unsafe {
            OH_LOG_Print(
                LOG_APP,
                level,
                self.domain,
                self.tag.as_ptr(),
                b"%{public}s\0".as_ptr() as *const c_char,
                message.as_ptr(),
            );
        }
    }

    fn flush(&self) {}
}

/// Routes the `log` facade to HiLog. Only the first call installs a logger.
pub fn init_logger(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let tag = CString::new(config.tag.replace('\0', "")).unwrap_or_default();
    let logger = HiLogger { domain: config.domain, tag, level: config.level };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(config.level);
    Ok(())
}
