//! 編集セッション
//!
//! フロントエンドに依存しない UI 側の状態。テキストバッファへの呼び出しと、
//! カーソル・ハイライト・表示設定・通知の管理を受け持つ。

use crate::buffer::TextBuffer;
use crate::config::{EditorConfig, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{PadError, Result};
use crate::file::{DefaultFileOperations, FileOperations};
use crate::search::HighlightSet;
use crate::status::EditorStatus;
use std::path::{Path, PathBuf};

/// 表示設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub dark_mode: bool,
    pub font_size: u16,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ViewSettings {
    /// フォントサイズを範囲内に丸めて設定
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// ユーザーへの1行通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// 編集セッション
#[derive(Debug)]
pub struct Session<F: FileOperations = DefaultFileOperations> {
    buffer: TextBuffer,
    /// カーソル位置（文字オフセット）
    caret: usize,
    highlights: HighlightSet,
    view: ViewSettings,
    path: Option<PathBuf>,
    notification: Option<Notification>,
    files: F,
}

impl Session<DefaultFileOperations> {
    /// 既定のファイル操作で作成
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_file_operations(config, DefaultFileOperations)
    }
}

impl Default for Session<DefaultFileOperations> {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl<F: FileOperations> Session<F> {
    /// ファイル操作を差し替えて作成
    pub fn with_file_operations(config: &EditorConfig, files: F) -> Self {
        let mut view = ViewSettings {
            dark_mode: config.dark_mode,
            font_size: DEFAULT_FONT_SIZE,
        };
        view.set_font_size(config.font_size);

        Self {
            buffer: TextBuffer::with_undo_limit(config.undo_limit),
            caret: 0,
            highlights: HighlightSet::new(),
            view,
            path: None,
            notification: None,
            files,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn view(&self) -> ViewSettings {
        self.view
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    // ---- ファイル ----

    /// ファイルを開いて文書を置き換える。失敗時は文書を変更しない。
    pub fn open(&mut self, path: &Path) -> Result<()> {
        match self.files.read_file(path) {
            Ok(content) => {
                self.buffer.set_text(&content);
                self.caret = 0;
                self.highlights.clear();
                self.path = Some(path.to_path_buf());
                self.notify(Notification::info(format!("Opened {}", path.display())));
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// 指定パスへ保存
    pub fn save(&mut self, path: &Path) -> Result<()> {
        match self.files.write_file(path, self.buffer.text()) {
            Ok(()) => {
                self.path = Some(path.to_path_buf());
                self.notify(Notification::info(format!("Saved {}", path.display())));
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// 現在のファイルへ保存
    pub fn save_current(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Err(self.report(PadError::Application(
                "No file name; use save as".to_string(),
            )));
        };
        self.save(&path)
    }

    fn report(&mut self, err: PadError) -> PadError {
        log::warn!("{}", err);
        self.notify(Notification::error(err.user_message()));
        err
    }

    // ---- 文書操作 ----

    /// 1行を末尾へ追加。空文字列なら何もしない。
    pub fn write_line(&mut self, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }
        self.buffer.append(input);
        self.caret = self.buffer.len_chars();
        self.after_content_change();
        true
    }

    /// 検索してハイライトを付け直す。マッチ件数を返す。
    pub fn search(&mut self, query: &str) -> usize {
        self.highlights.clear();
        let spans = self.buffer.search(Some(query));
        let count = spans.len();
        self.highlights.apply(query, spans);

        if !query.is_empty() {
            log::debug!("search {:?}: {} matches", query, count);
            self.notify(Notification::info(format!("{} matches", count)));
        }
        count
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.buffer.undo();
        if changed {
            self.after_content_change();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.buffer.redo();
        if changed {
            self.after_content_change();
        }
        changed
    }

    /// カーソル位置へ1文字入力
    pub fn insert_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut utf8));
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// カーソル位置へ文字列入力
    pub fn insert_str(&mut self, text: &str) {
        match self.buffer.insert(self.caret, text) {
            Ok(()) => {
                self.caret += text.chars().count();
                self.after_content_change();
            }
            Err(err) => log::warn!("insert rejected: {}", err),
        }
    }

    /// カーソル直前の1文字を削除
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        match self.buffer.delete(self.caret - 1..self.caret) {
            Ok(_) => {
                self.caret -= 1;
                self.after_content_change();
                true
            }
            Err(err) => {
                log::warn!("backspace rejected: {}", err);
                false
            }
        }
    }

    /// カーソル位置の1文字を削除
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.buffer.len_chars() {
            return false;
        }
        match self.buffer.delete(self.caret..self.caret + 1) {
            Ok(_) => {
                self.after_content_change();
                true
            }
            Err(err) => {
                log::warn!("delete rejected: {}", err);
                false
            }
        }
    }

    fn after_content_change(&mut self) {
        self.caret = self.caret.min(self.buffer.len_chars());
        // 編集でオフセットがずれるため、古いハイライトは残さない
        self.highlights.clear();
    }

    // ---- カーソル移動 ----

    /// カーソルを指定位置へ（範囲内に丸める）
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.buffer.len_chars());
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }

    pub fn move_line_start(&mut self) {
        let (line, _) = self.caret_line_column();
        if let Some(start) = self.buffer.line_start(line) {
            self.caret = start;
        }
    }

    pub fn move_line_end(&mut self) {
        let (line, _) = self.caret_line_column();
        if let (Some(start), Some(len)) = (self.buffer.line_start(line), self.buffer.line_len(line)) {
            self.caret = start + len;
        }
    }

    pub fn move_up(&mut self) {
        let (line, column) = self.caret_line_column();
        if line > 0 {
            self.move_to_line(line - 1, column);
        }
    }

    pub fn move_down(&mut self) {
        let (line, column) = self.caret_line_column();
        if line + 1 < self.buffer.line_count() {
            self.move_to_line(line + 1, column);
        }
    }

    fn move_to_line(&mut self, line: usize, column: usize) {
        if let (Some(start), Some(len)) = (self.buffer.line_start(line), self.buffer.line_len(line)) {
            self.caret = start + column.min(len);
        }
    }

    /// カーソルの行と列（どちらも0始まり）
    pub fn caret_line_column(&self) -> (usize, usize) {
        let mut line = 0usize;
        let mut column = 0usize;
        for ch in self.buffer.text().chars().take(self.caret) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    // ---- 表示設定 ----

    /// ダークモードを切り替え、新しい状態を返す
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.view.dark_mode = !self.view.dark_mode;
        self.view.dark_mode
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.view.set_font_size(size);
    }

    pub fn increase_font_size(&mut self) {
        self.view.set_font_size(self.view.font_size.saturating_add(1));
    }

    pub fn decrease_font_size(&mut self) {
        self.view.set_font_size(self.view.font_size.saturating_sub(1));
    }

    // ---- ステータス ----

    pub fn status(&self) -> EditorStatus {
        self.buffer.status(self.caret)
    }

    /// ステータスライン文字列
    pub fn status_line(&self) -> String {
        format!("{} | Font: {}", self.status(), self.view.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// メモリ上のファイル操作
    #[derive(Default)]
    struct MemoryFiles {
        files: RefCell<HashMap<PathBuf, String>>,
        fail_writes: bool,
    }

    impl FileOperations for MemoryFiles {
        fn read_file(&self, path: &Path) -> Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| {
                    PadError::Read(FileError::NotFound {
                        path: path.display().to_string(),
                    })
                })
        }

        fn write_file(&self, path: &Path, content: &str) -> Result<()> {
            if self.fail_writes {
                return Err(PadError::Write(FileError::PermissionDenied {
                    path: path.display().to_string(),
                }));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    fn session() -> Session<MemoryFiles> {
        Session::with_file_operations(&EditorConfig::default(), MemoryFiles::default())
    }

    #[test]
    fn open_replaces_document() {
        let mut session = session();
        session
            .files
            .files
            .borrow_mut()
            .insert(PathBuf::from("a.txt"), "one\ntwo\n".to_string());

        session.insert_str("scratch");
        session.open(Path::new("a.txt")).unwrap();
        assert_eq!(session.text(), "one\ntwo\n");
        assert_eq!(session.caret(), 0);
        assert_eq!(session.current_path(), Some(Path::new("a.txt")));

        // 開く操作も undo できる
        assert!(session.undo());
        assert_eq!(session.text(), "scratch");
    }

    #[test]
    fn failed_open_leaves_document_untouched() {
        let mut session = session();
        session.insert_str("keep me");

        let err = session.open(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, PadError::Read(_)));
        assert_eq!(session.text(), "keep me");
        let notification = session.notification().unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.message, "Failed to read file.");
    }

    #[test]
    fn failed_save_reports_generic_message() {
        let mut session = Session::with_file_operations(
            &EditorConfig::default(),
            MemoryFiles {
                fail_writes: true,
                ..MemoryFiles::default()
            },
        );
        session.insert_str("data");
        assert!(session.save(Path::new("out.txt")).is_err());
        assert_eq!(session.notification().unwrap().message, "Failed to save file.");
        assert_eq!(session.current_path(), None);
    }

    #[test]
    fn save_current_requires_path() {
        let mut session = session();
        assert!(session.save_current().is_err());

        session.save(Path::new("b.txt")).unwrap();
        session.insert_str("x");
        session.save_current().unwrap();
        assert_eq!(
            session.files.files.borrow().get(Path::new("b.txt")).map(String::as_str),
            Some("x")
        );
    }

    #[test]
    fn write_line_appends_and_ignores_empty() {
        let mut session = session();
        assert!(!session.write_line(""));
        assert!(session.write_line("hello"));
        assert_eq!(session.text(), "hello\n");
        assert_eq!(session.caret(), 6);
    }

    #[test]
    fn search_replaces_highlights() {
        let mut session = session();
        session.insert_str("abAB ab");
        assert_eq!(session.search("ab"), 3);
        assert_eq!(session.highlights().len(), 3);

        assert_eq!(session.search(""), 0);
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn edits_clear_stale_highlights() {
        let mut session = session();
        session.insert_str("foo foo");
        session.search("foo");
        session.insert_char('!');
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn typing_and_deleting() {
        let mut session = session();
        session.insert_str("ac");
        session.move_left();
        session.insert_char('b');
        assert_eq!(session.text(), "abc");
        assert_eq!(session.caret(), 2);

        assert!(session.backspace());
        assert_eq!(session.text(), "ac");
        assert!(session.delete_forward());
        assert_eq!(session.text(), "a");
        assert!(!session.delete_forward());

        session.set_caret(0);
        assert!(!session.backspace());
    }

    #[test]
    fn undo_clamps_caret() {
        let mut session = session();
        session.insert_str("hello");
        assert_eq!(session.caret(), 5);
        assert!(session.undo());
        assert_eq!(session.text(), "");
        assert_eq!(session.caret(), 0);
        assert!(!session.undo());
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let mut session = session();
        session.insert_str("long line\nab\nthird line");
        session.set_caret(7);
        session.move_down();
        assert_eq!(session.caret_line_column(), (1, 2));
        session.move_down();
        assert_eq!(session.caret_line_column(), (2, 2));
        session.move_up();
        session.move_up();
        assert_eq!(session.caret_line_column(), (0, 2));
        session.move_line_end();
        assert_eq!(session.caret(), 9);
        session.move_line_start();
        assert_eq!(session.caret(), 0);
    }

    #[test]
    fn view_settings() {
        let mut session = session();
        assert!(session.toggle_dark_mode());
        assert!(!session.toggle_dark_mode());

        session.set_font_size(99);
        assert_eq!(session.view().font_size, MAX_FONT_SIZE);
        session.increase_font_size();
        assert_eq!(session.view().font_size, MAX_FONT_SIZE);
        session.set_font_size(MIN_FONT_SIZE);
        session.decrease_font_size();
        assert_eq!(session.view().font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn status_line_format() {
        let mut session = session();
        session.insert_str("a  b c\nd");
        assert_eq!(session.status_line(), "Words: 4 | Chars: 8 | Line: 2 | Font: 14");
    }
}
