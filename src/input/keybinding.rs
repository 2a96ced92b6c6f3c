//! キーバインドシステム
//!
//! 端末のキーイベントをアクションへ対応付ける

use crossterm::event::{KeyCode as CrosstermKeyCode, KeyEvent, KeyModifiers as CrosstermModifiers};
use std::collections::HashMap;

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Esc,
    Unknown,
}

impl Key {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers::default(),
            code,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            },
            code,
        }
    }

    /// 挿入可能な文字かどうかを判定
    pub fn is_insertable_char(&self) -> bool {
        matches!(self.code, KeyCode::Char(_)) && !self.modifiers.ctrl && !self.modifiers.alt
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
            shift: event.modifiers.contains(CrosstermModifiers::SHIFT),
        };

        let code = match event.code {
            // Ctrl+文字は端末によって大文字で届くことがある
            CrosstermKeyCode::Char(c) if modifiers.ctrl => KeyCode::Char(c.to_ascii_lowercase()),
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        // Shift は文字そのものに反映済み
        let modifiers = KeyModifiers {
            shift: false,
            ..modifiers
        };

        Key { modifiers, code }
    }
}

/// エディタのアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Save,
    Write,
    Search,
    Undo,
    Redo,
    ToggleDarkMode,
    FontLarger,
    FontSmaller,
    Cancel,
    Quit,
    InsertChar(char),
    Newline,
    Backspace,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
}

/// キーマップ
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<Key, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    /// 既定のキーマップを作成
    pub fn new() -> Self {
        let mut bindings = HashMap::with_capacity(24);

        bindings.insert(Key::ctrl(KeyCode::Char('o')), Action::Open);
        bindings.insert(Key::ctrl(KeyCode::Char('s')), Action::Save);
        bindings.insert(Key::ctrl(KeyCode::Char('w')), Action::Write);
        bindings.insert(Key::ctrl(KeyCode::Char('f')), Action::Search);
        bindings.insert(Key::ctrl(KeyCode::Char('z')), Action::Undo);
        bindings.insert(Key::ctrl(KeyCode::Char('y')), Action::Redo);
        bindings.insert(Key::ctrl(KeyCode::Char('t')), Action::ToggleDarkMode);
        bindings.insert(Key::ctrl(KeyCode::Up), Action::FontLarger);
        bindings.insert(Key::ctrl(KeyCode::Down), Action::FontSmaller);
        bindings.insert(Key::ctrl(KeyCode::Char('q')), Action::Quit);

        bindings.insert(Key::plain(KeyCode::Esc), Action::Cancel);
        bindings.insert(Key::plain(KeyCode::Enter), Action::Newline);
        bindings.insert(Key::plain(KeyCode::Tab), Action::InsertChar('\t'));
        bindings.insert(Key::plain(KeyCode::Backspace), Action::Backspace);
        bindings.insert(Key::plain(KeyCode::Delete), Action::DeleteForward);
        bindings.insert(Key::plain(KeyCode::Left), Action::MoveLeft);
        bindings.insert(Key::plain(KeyCode::Right), Action::MoveRight);
        bindings.insert(Key::plain(KeyCode::Up), Action::MoveUp);
        bindings.insert(Key::plain(KeyCode::Down), Action::MoveDown);
        bindings.insert(Key::plain(KeyCode::Home), Action::LineStart);
        bindings.insert(Key::plain(KeyCode::End), Action::LineEnd);

        Self { bindings }
    }

    /// キーに対応するアクション
    pub fn lookup(&self, key: &Key) -> Option<Action> {
        if let Some(action) = self.bindings.get(key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(ch) if key.is_insertable_char() => Some(Action::InsertChar(ch)),
            _ => None,
        }
    }

    /// 端末イベントを直接解決
    pub fn resolve(&self, event: KeyEvent) -> Option<Action> {
        self.lookup(&Key::from(event))
    }
}
