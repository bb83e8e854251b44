use chrono::{Local, Utc};
use env_logger::{Builder, Env};
use log::{debug, error, info};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::SystemTime;

static INIT: Once = Once::new();

/// Keep only this many session logs in `LOG_DIR`
const MAX_LOG_FILES: usize = 10;

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `level` when set. Logs always go to stdout; when
/// `LOG_DIR` is set they are also appended to a per-session file there.
pub fn init_logger(level: &str) {
    INIT.call_once(|| {
        let env = Env::default().default_filter_or(level);
        let mut builder = Builder::from_env(env);
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });

        let Some(log_dir) = env::var_os("LOG_DIR").map(PathBuf::from) else {
            builder.init();
            info!("Order gateway logging to stdout at level {}", level);
            return;
        };

        let log_file = get_log_file_path(&log_dir);
        let opened = fs::create_dir_all(&log_dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
        });

        match opened {
            Ok(file) => {
                builder
                    .target(env_logger::Target::Pipe(Box::new(FileAndStdout { file })))
                    .init();
                info!("Logging initialized: {}", log_file.display());
                debug!("Log level: {}", level);

                if let Err(e) = clean_old_logs(&log_dir) {
                    error!("Failed to clean old logs: {}", e);
                }
            }
            Err(e) => {
                // Fall back to stdout only
                builder.init();
                error!(
                    "Failed to open log file {}, logging to stdout only: {}",
                    log_file.display(),
                    e
                );
            }
        }
    });
}

/// Get the log file path for the current session
fn get_log_file_path(log_dir: &Path) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    log_dir.join(format!("order_gateway_{}.log", timestamp))
}

/// Remove all but the newest `keep` `.log` files in `log_dir`
fn clean_old_logs_keeping(log_dir: &Path, keep: usize) -> std::io::Result<()> {
    let mut log_files: Vec<(PathBuf, SystemTime)> = Vec::new();

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "log") {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            log_files.push((path, modified));
        }
    }

    // Newest first
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    for (file, _) in log_files.iter().skip(keep) {
        debug!("Removing old log file: {}", file.display());
        fs::remove_file(file)?;
    }

    Ok(())
}

fn clean_old_logs(log_dir: &Path) -> std::io::Result<()> {
    clean_old_logs_keeping(log_dir, MAX_LOG_FILES)
}

/// Custom writer that writes to both a file and stdout
struct FileAndStdout {
    file: File,
}

impl Write for FileAndStdout {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()?;
        self.file.flush()
    }
}
