//! ロギングシステム
//!
//! `log` ファサードの出力先。端末は UI が占有するため、ログはファイルにのみ書き出す。

use crate::config::LogConfig;
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// ファイル出力ロガー
#[derive(Debug)]
pub struct Logger {
    level: log::LevelFilter,
    path: PathBuf,
    file: Mutex<File>,
}

impl Logger {
    /// 出力先を開いてロガーを作成
    pub fn open(path: &Path, level: log::LevelFilter) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_record(record: &log::Record<'_>) -> String {
        format!(
            "{} {} {}: {}",
            timestamp_ms(),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_record(record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// グローバルロガーを設定する
///
/// 出力先が決まらない場合や既に設定済みの場合は何もしない。
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;
    if level == log::LevelFilter::Off {
        return Ok(None);
    }
    let Some(path) = config.resolve_path() else {
        return Ok(None);
    };

    let logger: &'static Logger = Box::leak(Box::new(Logger::open(&path, level)?));
    match log::set_logger(logger) {
        Ok(()) => {
            log::set_max_level(level);
            log::info!("logging to {}", path.display());
            Ok(Some(path))
        }
        Err(err) => {
            log::debug!("logger already installed: {}", err);
            Ok(None)
        }
    }
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use tempfile::tempdir;

    #[test]
    fn logger_respects_log_level() {
        let dir = tempdir().unwrap();
        let logger = Logger::open(&dir.path().join("a.log"), log::LevelFilter::Info).unwrap();

        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }

    #[test]
    fn logger_writes_lines_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("b.log");
        let logger = Logger::open(&path, log::LevelFilter::Debug).unwrap();

        logger.log(
            &log::Record::builder()
                .args(format_args!("opened {}", "notes.txt"))
                .level(log::Level::Info)
                .target("plainpad::session")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("INFO plainpad::session: opened notes.txt"));
    }

    #[test]
    fn init_with_off_level_installs_nothing() {
        let config = LogConfig {
            level: "off".to_string(),
            path: None,
        };
        assert_eq!(init(&config).unwrap(), None);
    }
}
