//! ファイルI/O操作
//!
//! 文書は行単位で読み込み、各行の後ろに改行を付け直す。保存は内容をそのまま書き出す。

use crate::buffer::LINE_TERMINATOR;
use crate::error::{FileError, PadError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// ファイル操作のトレイト
pub trait FileOperations {
    /// ファイルからテキストを読み込み
    fn read_file(&self, path: &Path) -> Result<String>;

    /// テキストをファイルに書き込み
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// ファイル操作の実装
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFileOperations;

impl FileOperations for DefaultFileOperations {
    fn read_file(&self, path: &Path) -> Result<String> {
        let display = path.display().to_string();

        if !path.exists() {
            return Err(PadError::Read(FileError::NotFound { path: display }));
        }

        // ディレクトリではないことを確認
        if path.is_dir() {
            return Err(PadError::Read(FileError::InvalidPath { path: display }));
        }

        let file = File::open(path).map_err(|e| PadError::Read(FileError::from_io(&e, &display)))?;
        let reader = BufReader::new(file);

        let mut content = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| PadError::Read(FileError::from_io(&e, &display)))?;
            content.push_str(&line);
            content.push_str(LINE_TERMINATOR);
        }

        log::info!("read {} ({} bytes)", display, content.len());
        Ok(content)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let display = path.display().to_string();

        if path.is_dir() {
            return Err(PadError::Write(FileError::InvalidPath { path: display }));
        }

        let mut file =
            File::create(path).map_err(|e| PadError::Write(FileError::from_io(&e, &display)))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| PadError::Write(FileError::from_io(&e, &display)))?;

        log::info!("wrote {} ({} bytes)", display, content.len());
        Ok(())
    }
}

/// ファイル読み込みの便利関数
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    DefaultFileOperations.read_file(path.as_ref())
}

/// ファイル書き込みの便利関数
pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    DefaultFileOperations.write_file(path.as_ref(), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let content = "Hello, World!\nこんにちは！\n";

        write_document(&file_path, content).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), content);
        assert_eq!(read_document(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_adds_trailing_newline() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("no_newline.txt");
        fs::write(&file_path, "first\nlast").unwrap();

        assert_eq!(read_document(&file_path).unwrap(), "first\nlast\n");
    }

    #[test]
    fn test_read_normalizes_crlf() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("crlf.txt");
        fs::write(&file_path, "a\r\nb\r\n").unwrap();

        assert_eq!(read_document(&file_path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert_eq!(read_document(&file_path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = read_document(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PadError::Read(FileError::NotFound { .. })));
    }

    #[test]
    fn test_read_directory_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let err = read_document(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PadError::Read(FileError::InvalidPath { .. })));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, b'\n']).unwrap();

        let err = read_document(&file_path).unwrap_err();
        assert!(matches!(err, PadError::Read(FileError::Encoding { .. })));
        assert_eq!(err.user_message(), "Failed to read file.");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nope").join("out.txt");
        let err = write_document(&file_path, "x").unwrap_err();
        assert_eq!(err.user_message(), "Failed to save file.");
    }
}
