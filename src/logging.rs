use log;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

pub const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

static LOGGER: SimpleLogger = SimpleLogger;

/// Writes every enabled record to stderr as `[target] [LEVEL] message`.
pub struct SimpleLogger;

impl SimpleLogger {
    pub fn init() -> Result<(), SetLoggerError> {
        Self::init_with_level(MAX_LOG_LEVEL)
    }

    pub fn init_with_level(max_log_level: LevelFilter) -> Result<(), SetLoggerError> {
        try!(log::set_logger(&LOGGER));
        log::set_max_level(max_log_level);
        Ok(())
    }
}

impl log::Log for SimpleLogger {

    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] [{}] {}", record.metadata().target(), record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
