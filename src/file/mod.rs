//! ファイル操作モジュール
//!
//! 文書の読み込み・保存とパス展開

pub mod io;
pub mod path;

pub use io::{read_document, write_document, DefaultFileOperations, FileOperations};
pub use path::expand_path;
