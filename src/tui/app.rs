use crate::session::Session;
use crate::tui::handlers::{HelpModeAction, InputModeAction, KeyHandler, NormalModeAction};
use crate::tui::input::InputState;
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input,
    Help,
}

pub struct App {
    pub session: Session,
    pub selected_index: usize,
    pub should_quit: bool,
    pub mode: Mode,
    pub input: InputState,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            selected_index: 0,
            should_quit: false,
            mode: Mode::Normal,
            input: InputState::new(),
            status_message: None,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Help => self.handle_help_mode_key(key_event),
            Mode::Input => self.handle_input_mode_key(key_event),
            Mode::Normal => self.handle_normal_mode_key(key_event),
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        // Any keypress dismisses the previous status line
        self.status_message = None;

        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::EnterInputMode => self.enter_input_mode(),
            NormalModeAction::RemoveItem => self.remove_selected_item(),
            NormalModeAction::ClearItems => self.clear_items(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::ToggleHelpMode => self.mode = Mode::Help,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.mode = Mode::Normal;
        }
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::CancelInput => self.cancel_input(),
            InputModeAction::ConfirmInput => self.confirm_input(),
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.item_count().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keeps the cursor inside the list after it shrinks or grows.
    fn clamp_selection(&mut self) {
        let len = self.item_count();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn item_count(&self) -> usize {
        self.session.items().len()
    }

    pub fn history_count(&self) -> usize {
        self.session.invoker().len()
    }

    fn enter_input_mode(&mut self) {
        self.input.reset();
        self.mode = Mode::Input;
    }

    fn cancel_input(&mut self) {
        self.input.reset();
        self.mode = Mode::Normal;
    }

    fn confirm_input(&mut self) {
        let text = self.input.take();
        self.mode = Mode::Normal;

        match self.session.add(&text) {
            Ok(true) => {
                self.selected_index = self.item_count().saturating_sub(1);
                info!(item = %text.trim(), "item added");
            }
            Ok(false) => {}
            Err(e) => self.report_error(e),
        }
    }

    fn remove_selected_item(&mut self) {
        if self.item_count() == 0 {
            return;
        }

        let item = self
            .session
            .items()
            .get(self.selected_index)
            .map(str::to_string);

        match self.session.remove(self.selected_index) {
            Ok(()) => {
                info!(index = self.selected_index, item = ?item, "item removed");
                self.clamp_selection();
            }
            Err(e) => self.report_error(e),
        }
    }

    fn clear_items(&mut self) {
        match self.session.clear() {
            Ok(true) => {
                info!("items cleared");
                self.selected_index = 0;
            }
            Ok(false) => {}
            Err(e) => self.report_error(e),
        }
    }

    fn undo(&mut self) {
        match self.session.undo() {
            Ok(Some(description)) => {
                info!(command = %description, "undo");
                self.status_message = Some(format!("Undid: {}", description));
                self.clamp_selection();
            }
            Ok(None) => {
                self.status_message = Some("Nothing to undo".to_string());
            }
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, error: impl std::fmt::Display) {
        warn!(error = %error, "command failed");
        self.status_message = Some(format!("Error: {}", error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn create_test_app(items: &[&str]) -> App {
        let seed = items.iter().map(|item| item.to_string()).collect();
        App::new(Session::with_items(seed))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_item_through_input_mode() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Input);

        type_text(&mut app, "milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.session.items().snapshot(), vec!["milk"]);
        assert_eq!(app.history_count(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_typing_q_in_input_mode_does_not_quit() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quit");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.session.items().snapshot(), vec!["quit"]);
    }

    #[test]
    fn test_cancel_input_adds_nothing() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "eggs");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.session.items().is_empty());
        assert_eq!(app.history_count(), 0);
        assert!(app.input.buffer.is_empty());
    }

    #[test]
    fn test_blank_input_is_not_recorded() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.session.items().is_empty());
        assert_eq!(app.history_count(), 0);
    }

    #[test]
    fn test_remove_selected_item_and_undo() {
        let mut app = create_test_app(&["Task A", "Task B", "Task C"]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.session.items().snapshot(), vec!["Task A", "Task C"]);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.session.items().snapshot(), vec!["Task A", "Task B", "Task C"]);
        assert_eq!(app.status_message.as_deref(), Some("Undid: Remove item at index 2"));
    }

    #[test]
    fn test_remove_last_item_clamps_selection() {
        let mut app = create_test_app(&["Task A", "Task B"]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.selected_index, 0);
        assert_eq!(app.session.items().snapshot(), vec!["Task A"]);
    }

    #[test]
    fn test_remove_on_empty_list_does_nothing() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.history_count(), 0);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_clear_and_undo() {
        let mut app = create_test_app(&["x", "y", "z"]);

        press(&mut app, KeyCode::Char('C'));
        assert!(app.session.items().is_empty());

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.session.items().snapshot(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_clear_empty_list_not_recorded() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.history_count(), 0);
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut app = create_test_app(&["seed"]);

        press(&mut app, KeyCode::Char('u'));

        assert_eq!(app.session.items().snapshot(), vec!["seed"]);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to undo"));
    }

    #[test]
    fn test_undo_clamps_selection_after_add() {
        let mut app = create_test_app(&["a"]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = create_test_app(&["a", "b"]);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_help_mode_toggle() {
        let mut app = create_test_app(&[]);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);

        // Commands are ignored while help is open
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.mode, Mode::Help);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = create_test_app(&[]);
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        app.handle_key_event(key_event).unwrap();
        assert!(app.should_quit);
    }
}
