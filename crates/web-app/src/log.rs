use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Number of entries kept by a log repository.
pub const MAX_ENTRIES: usize = 100;

/// Persistent log, newest entry first.
///
/// Implementations must not log themselves, as they are called from within the logger.
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn from_record(record: &Record) -> Self {
        Self {
            time: Utc::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry::from_record(record);

        #[cfg(target_arch = "wasm32")]
        {
            let message = entry.message.clone();
            match entry.level {
                Level::Error => gloo_console::error!(message),
                Level::Warn => gloo_console::warn!(message),
                Level::Info => gloo_console::info!(message),
                Level::Debug | Level::Trace => gloo_console::debug!(message),
            }
        }

        let repository = match LOG.lock() {
            Ok(log) => log.clone(),
            Err(_) => None,
        };
        if let Some(repository) = repository {
            if let Ok(repository) = repository.lock() {
                let _ = repository.write_entry(entry);
            }
        }
    }

    fn flush(&self) {}
}
