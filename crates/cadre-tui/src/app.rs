//! Application state: the presentation adapter over the navigation
//! controller.

use cadre_core::{EntityAttributes, EntityDataSource, EntitySet};
use cadre_nav::{NavCommand, NavigationController, RenderRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default status line listing the key bindings.
const KEY_HINT: &str =
    "Tab/PgDn sets | \u{2190}/\u{2192} pages | \u{2191}/\u{2193} entities | 1-9 page | S/P/H/R set | ? help | q quit";

/// Roster panel application state.
pub struct CadreApp<S> {
    controller: NavigationController<S>,
    frame: Option<RenderRequest>,
    attributes: Option<EntityAttributes>,
    status: String,
    /// Whether the help popup is shown.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: EntityDataSource> CadreApp<S> {
    /// Create the app and open the panel on the given set and slot.
    pub fn new(source: S, set: EntitySet, slot: usize) -> Self {
        let mut app = Self {
            controller: NavigationController::new(source),
            frame: None,
            attributes: None,
            status: String::new(),
            show_help: false,
            should_quit: false,
        };
        app.dispatch(NavCommand::OpenPanel { set, slot });
        app
    }

    /// The controller, for read access while drawing.
    pub fn controller(&self) -> &NavigationController<S> {
        &self.controller
    }

    /// The last render request, while the panel is open.
    pub fn frame(&self) -> Option<&RenderRequest> {
        self.frame.as_ref()
    }

    /// Attribute bundle of the entity on screen, if one resolved.
    pub fn attributes(&self) -> Option<&EntityAttributes> {
        self.attributes.as_ref()
    }

    /// Current status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Run one command through the controller and absorb the outcome.
    ///
    /// Rejected commands land in the status line; they never quit or panic
    /// the event loop. Closing the panel quits the app.
    pub fn dispatch(&mut self, cmd: NavCommand) {
        match self.controller.apply(cmd) {
            Ok(Some(frame)) => {
                self.status = match &frame.warning {
                    Some(warning) => format!("warning: {warning}"),
                    None => KEY_HINT.to_string(),
                };
                self.attributes = frame.entity.as_ref().and_then(|entity| {
                    self.controller.source().fetch_attributes(entity.id).ok()
                });
                self.frame = Some(frame);
            }
            Ok(None) => {
                self.frame = None;
                self.attributes = None;
                self.should_quit = true;
            }
            Err(err) => {
                self.status = format!("rejected: {err}");
            }
        }
    }

    /// Map a key press to a navigation command and dispatch it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.dispatch(NavCommand::ClosePanel),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::PageDown => self.dispatch(NavCommand::MoveSetNext),
            KeyCode::BackTab | KeyCode::PageUp => self.dispatch(NavCommand::MoveSetPrevious),
            KeyCode::Down | KeyCode::Char('j') => self.dispatch(NavCommand::MoveEntityNext),
            KeyCode::Up | KeyCode::Char('k') => self.dispatch(NavCommand::MoveEntityPrevious),
            KeyCode::Right | KeyCode::Char('l') => self.dispatch(NavCommand::MovePageNext),
            KeyCode::Left | KeyCode::Char('h') => self.dispatch(NavCommand::MovePagePrevious),
            // Re-confirm click on the active category: harmless by contract.
            KeyCode::Enter => {
                if let Some(set) = self.controller.current_set() {
                    self.dispatch(NavCommand::SelectSet {
                        set,
                        reset_slot: false,
                    });
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.dispatch(NavCommand::SelectPage { index });
            }
            KeyCode::Char(c) => {
                if let Some(set) = menu_set(c) {
                    self.dispatch(NavCommand::SelectSet {
                        set,
                        reset_slot: true,
                    });
                }
            }
            _ => {}
        }
    }
}

/// Menu-style set selection keys: uppercase, reset to slot 0.
fn menu_set(c: char) -> Option<EntitySet> {
    match c {
        'S' => Some(EntitySet::Subordinates),
        'P' => Some(EntitySet::Player),
        'H' => Some(EntitySet::Hq),
        'R' => Some(EntitySet::Reserves),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use cadre_core::Roster;
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn demo_app() -> CadreApp<Roster> {
        CadreApp::new(Roster::demo(), EntitySet::Subordinates, 0)
    }

    #[test]
    fn new_app_opens_on_requested_set() {
        let app = demo_app();
        let frame = app.frame().unwrap();
        assert_eq!(frame.set, EntitySet::Subordinates);
        assert_eq!(frame.slot, Some(0));
        assert!(app.attributes().is_some());
    }

    #[test]
    fn arrow_keys_move_the_entity_axis() {
        let mut app = demo_app();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.frame().unwrap().slot, Some(1));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.frame().unwrap().slot, Some(0));
    }

    #[test]
    fn tab_cycles_sets_and_resumes_slots() {
        let mut app = demo_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.frame().unwrap().set, EntitySet::Player);
        app.handle_key(key(KeyCode::BackTab));
        let frame = app.frame().unwrap();
        assert_eq!(frame.set, EntitySet::Subordinates);
        assert_eq!(frame.slot, Some(1));
    }

    #[test]
    fn rejected_page_selection_lands_in_status() {
        let mut app = demo_app();
        app.handle_key(key(KeyCode::Char('H')));
        app.handle_key(key(KeyCode::Char('9')));
        assert!(app.status().starts_with("rejected:"));
        assert_eq!(app.frame().unwrap().set, EntitySet::Hq);
    }

    #[test]
    fn quit_key_closes_panel_and_quits() {
        let mut app = demo_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert!(app.frame().is_none());
        assert!(!app.controller().is_open());
    }

    #[test]
    fn any_key_dismisses_help() {
        let mut app = demo_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Down));
        assert!(!app.show_help);
        // The key that dismissed help was not treated as navigation.
        assert_eq!(app.frame().unwrap().slot, Some(0));
    }
}
