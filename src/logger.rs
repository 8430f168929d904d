use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static INIT: OnceLock<()> = OnceLock::new();

/// Daily log file sink. One file per local date, named `app-YYYY-MM-DD.txt`.
#[derive(Clone)]
pub struct LogManager {
    file: Arc<Mutex<Option<(String, File)>>>,
    log_dir: PathBuf,
}

impl LogManager {
    pub fn new(log_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let log_dir = log_dir.into();
        fs::create_dir_all(&log_dir)?;
        Ok(Self {
            file: Arc::new(Mutex::new(None)),
            log_dir,
        })
    }

    fn current_file_name() -> String {
        let now = chrono::Local::now();
        format!("app-{}.txt", now.format("%Y-%m-%d"))
    }

    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let name = Self::current_file_name();
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Lock error: {}", e)))?;

        // Rotate when the date changed or the file was removed underneath us.
        let needs_new_file = match guard.as_ref() {
            Some((current, f)) => {
                current != &name || !self.log_dir.join(current).exists() || f.metadata().is_err()
            }
            None => true,
        };

        if needs_new_file {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.log_dir.join(&name))?;
            *guard = Some((name, file));
        }

        if let Some((_, file)) = guard.as_mut() {
            file.write_all(line)?;
            file.flush()?;
        }
        Ok(())
    }

    pub fn list_log_files(&self) -> io::Result<Vec<String>> {
        let mut log_files: Vec<String> = fs::read_dir(&self.log_dir)?
            .filter_map(|entry| {
                entry.ok().and_then(|e| {
                    let path = e.path();
                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
                        path.file_name()
                            .and_then(|n| n.to_str())
                            .map(|s| s.to_string())
                    } else {
                        None
                    }
                })
            })
            .collect();

        log_files.sort_by(|a, b| b.cmp(a)); // Most recent first
        Ok(log_files)
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// `io::Write` handle handed to the fmt layer, one per event.
pub struct LogFileWriter {
    manager: LogManager,
    buf: Vec<u8>,
}

impl Write for LogFileWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = std::mem::take(&mut self.buf);
        self.manager.write_line(&line)
    }
}

impl Drop for LogFileWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured
/// level. Calling this more than once is a no-op.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let filter = env_filter(&config.level);
    let result = match config.log_dir.as_deref() {
        Some(dir) => {
            let manager = LogManager::new(dir)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(move || LogFileWriter {
                    manager: manager.clone(),
                    buf: Vec::new(),
                })
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };

    // A subscriber installed elsewhere (tests, embedding host) is not an error.
    if let Err(e) = result {
        tracing::debug!(component = "logger", "subscriber already set: {}", e);
    }
    let _ = INIT.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_dir() -> PathBuf {
        std::env::temp_dir().join(format!("companion-logs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn writes_to_dated_file() {
        let dir = temp_log_dir();
        let manager = LogManager::new(&dir).unwrap();
        manager.write_line(b"first\n").unwrap();
        manager.write_line(b"second\n").unwrap();

        let files = manager.list_log_files().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("app-"));

        let content = fs::read_to_string(dir.join(&files[0])).unwrap();
        assert_eq!(content, "first\nsecond\n");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn reopens_file_after_external_delete() {
        let dir = temp_log_dir();
        let manager = LogManager::new(&dir).unwrap();
        manager.write_line(b"one\n").unwrap();
        let name = manager.list_log_files().unwrap().remove(0);
        fs::remove_file(dir.join(&name)).unwrap();

        manager.write_line(b"two\n").unwrap();
        let content = fs::read_to_string(dir.join(&name)).unwrap();
        assert_eq!(content, "two\n");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn writer_buffers_until_flush() {
        let dir = temp_log_dir();
        let manager = LogManager::new(&dir).unwrap();
        {
            let mut writer = LogFileWriter {
                manager: manager.clone(),
                buf: Vec::new(),
            };
            writer.write_all(b"partial ").unwrap();
            writer.write_all(b"line\n").unwrap();
        }
        let name = manager.list_log_files().unwrap().remove(0);
        let content = fs::read_to_string(dir.join(name)).unwrap();
        assert_eq!(content, "partial line\n");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn second_init_is_noop() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
