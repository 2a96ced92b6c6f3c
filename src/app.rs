//! メインアプリケーション構造体
//!
//! キー入力を受けてセッション操作を1つ呼び出し、プロンプト入力を管理する。

use crate::config::EditorConfig;
use crate::file::expand_path;
use crate::input::{Action, KeyMap};
use crate::session::{Notification, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// プロンプトの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
    Write,
    Search,
}

impl PromptKind {
    /// 表示ラベル
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Open => "Open file: ",
            PromptKind::SaveAs => "Save as: ",
            PromptKind::Write => "Enter text to append: ",
            PromptKind::Search => "Search: ",
        }
    }
}

/// 1行入力プロンプト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }
}

/// メインアプリケーション構造体
pub struct App {
    session: Session,
    keymap: KeyMap,
    prompt: Option<Prompt>,
    /// 直前の検索語（検索プロンプトの初期値）
    last_search: String,
    running: bool,
}

impl App {
    /// 新しいアプリケーションインスタンスを作成
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            session: Session::new(config),
            keymap: KeyMap::new(),
            prompt: None,
            last_search: String::new(),
            running: true,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// アプリケーションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// 起動引数のファイルを開く。失敗しても通知だけで続行する。
    pub fn open_initial(&mut self, path: &str) {
        match expand_path(path) {
            Ok(path) => {
                // 失敗は通知として報告済み
                let _ = self.session.open(&path);
            }
            Err(err) => {
                log::warn!("initial file {:?}: {}", path, err);
                self.session.notify(Notification::error(err.user_message()));
            }
        }
    }

    /// 端末のキーイベントを処理
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if event.kind == KeyEventKind::Release {
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt_key(event);
            return;
        }

        if let Some(action) = self.keymap.resolve(event) {
            self.handle_action(action);
        }
    }

    /// アクションを実行
    pub fn handle_action(&mut self, action: Action) {
        // 次の操作で古い通知は消える
        self.session.clear_notification();

        match action {
            Action::Open => self.begin_prompt(PromptKind::Open),
            Action::Save => {
                if self.session.current_path().is_some() {
                    // 失敗は通知として報告済み
                    let _ = self.session.save_current();
                } else {
                    self.begin_prompt(PromptKind::SaveAs);
                }
            }
            Action::Write => self.begin_prompt(PromptKind::Write),
            Action::Search => {
                self.begin_prompt(PromptKind::Search);
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input = self.last_search.clone();
                }
            }
            Action::Undo => {
                self.session.undo();
            }
            Action::Redo => {
                self.session.redo();
            }
            Action::ToggleDarkMode => {
                let dark = self.session.toggle_dark_mode();
                log::debug!("dark mode: {}", dark);
            }
            Action::FontLarger => self.session.increase_font_size(),
            Action::FontSmaller => self.session.decrease_font_size(),
            Action::Cancel => self.session.clear_highlights(),
            Action::Quit => self.shutdown(),
            Action::InsertChar(ch) => self.session.insert_char(ch),
            Action::Newline => self.session.insert_newline(),
            Action::Backspace => {
                self.session.backspace();
            }
            Action::DeleteForward => {
                self.session.delete_forward();
            }
            Action::MoveLeft => self.session.move_left(),
            Action::MoveRight => self.session.move_right(),
            Action::MoveUp => self.session.move_up(),
            Action::MoveDown => self.session.move_down(),
            Action::LineStart => self.session.move_line_start(),
            Action::LineEnd => self.session.move_line_end(),
        }
    }

    fn begin_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt::new(kind));
    }

    fn handle_prompt_key(&mut self, event: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match event.code {
            KeyCode::Esc => {
                self.prompt = None;
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit_prompt(prompt);
                }
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char('g') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.prompt = None;
            }
            KeyCode::Char(ch)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                prompt.input.push(ch);
            }
            _ => {}
        }
    }

    /// プロンプト入力を確定
    pub fn submit_prompt(&mut self, prompt: Prompt) {
        match prompt.kind {
            PromptKind::Open => match expand_path(&prompt.input) {
                Ok(path) => {
                    // 失敗は通知として報告済み
                    let _ = self.session.open(&path);
                }
                Err(err) => self.session.notify(Notification::error(err.user_message())),
            },
            PromptKind::SaveAs => match expand_path(&prompt.input) {
                Ok(path) => {
                    // 失敗は通知として報告済み
                    let _ = self.session.save(&path);
                }
                Err(err) => self.session.notify(Notification::error(err.user_message())),
            },
            PromptKind::Write => {
                self.session.write_line(&prompt.input);
            }
            PromptKind::Search => {
                self.session.search(&prompt.input);
                self.last_search = prompt.input;
            }
        }
    }
}
