use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::home::SearchBarState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
/// The search bar is a single line, so keys that would break the line are dropped.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &SearchBarState) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(CursorMove::Jump(0, to_u16(snapshot.cursor_position.column)));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(textarea, sel);
        }
    }

    fn extract_cursor_position(textarea: &TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition { line, column }
    }

    fn extract_selection(textarea: &TextArea<'_>) -> Option<TextSelection> {
        textarea.selection_range().map(|((sr, sc), (er, ec))| TextSelection {
            start: CursorPosition { line: sr, column: sc },
            end: CursorPosition { line: er, column: ec },
        })
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(CursorMove::Jump(0, to_u16(selection.start.column)));
        textarea.start_selection();
        textarea.move_cursor(CursorMove::Jump(0, to_u16(selection.end.column)));
    }

    /// Keys that would insert a line break into the single-line search bar
    fn breaks_line(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => true,
            KeyCode::Char('m') | KeyCode::Char('j') => {
                key.modifiers.contains(KeyModifiers::CONTROL)
            }
            _ => false,
        }
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &SearchBarState, keys: &[KeyEvent]) -> SearchBarState {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        for key in keys.iter().filter(|key| !Self::breaks_line(key)) {
            textarea.input(Event::Key(*key));
        }
        let content = textarea.lines().concat();
        let cursor = Self::extract_cursor_position(&textarea);
        let selection = Self::extract_selection(&textarea);
        SearchBarState::new(content, cursor, selection)
    }
}
