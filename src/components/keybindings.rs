//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current view.
//! The same registry resolves key presses to actions and drives the
//! navigation bar and the help overlay, so what the help shows is what the
//! keys do.

use crate::app::ViewKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextField,
    PreviousField,
    Submit,
    Spin,
    StartOver,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` presses this binding. Shift is ignored because
    /// terminals report it inconsistently for BackTab and symbols like `?`.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code
            && event.modifiers.difference(KeyModifiers::SHIFT)
                == self.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// View-specific keybindings
    view_bindings: HashMap<ViewKind, Vec<Keybinding>>,
    /// Global keybindings (available in all views)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            view_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        // Letters are text input on the form, so globals avoid them
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.view_bindings.insert(
            ViewKind::Form,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(
                    KeyCode::BackTab,
                    KeyAction::PreviousField,
                    "Shift+Tab",
                    "Previous field",
                ),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "↓", "Next field"),
                Keybinding::new(KeyCode::Up, KeyAction::PreviousField, "↑", "Previous field"),
                Keybinding::new(
                    KeyCode::Enter,
                    KeyAction::Submit,
                    "Enter",
                    "Generate Secret Santa name",
                ),
                Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            ],
        );

        self.view_bindings.insert(
            ViewKind::Submitting,
            vec![Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit")],
        );

        self.view_bindings.insert(
            ViewKind::Result,
            vec![
                Keybinding::new(KeyCode::Char(' '), KeyAction::Spin, "Space", "Spin wheel"),
                Keybinding::new(KeyCode::Enter, KeyAction::Spin, "Enter", "Spin wheel"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::StartOver, "N", "New name"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
                Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            ],
        );
    }

    /// Get keybindings for a view (includes global bindings)
    pub fn get_bindings(&self, view: ViewKind) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(view_bindings) = self.view_bindings.get(&view) {
            bindings.extend(view_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Action bound to `event` in `view`. View bindings shadow globals.
    pub fn action_for(&self, view: ViewKind, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(view)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, view: ViewKind) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(view);

        let priority_actions = match view {
            ViewKind::Form => vec![
                KeyAction::NextField,
                KeyAction::Submit,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            ViewKind::Submitting => vec![KeyAction::Quit],
            ViewKind::Result => vec![
                KeyAction::Spin,
                KeyAction::StartOver,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // First binding per action wins, so Space shows for Spin, not Enter
        priority_actions
            .into_iter()
            .filter_map(|action| bindings.iter().find(|b| b.action == action))
            .map(|binding| NavBarItem {
                key_display: binding.display.clone(),
                action_label: binding.description.clone(),
            })
            .collect()
    }

    /// Get full help content for a view (for help overlay)
    pub fn get_help_content(&self, view: ViewKind) -> Vec<HelpSection> {
        let mut sections = Vec::new();
        let bindings = self.get_bindings(view);

        let form_bindings: Vec<_> = bindings
            .iter()
            .filter(|b| matches!(b.action, KeyAction::NextField | KeyAction::PreviousField))
            .collect();
        if !form_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Form".to_string(),
                items: form_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        let action_bindings: Vec<_> = bindings
            .iter()
            .filter(|b| {
                matches!(
                    b.action,
                    KeyAction::Submit | KeyAction::Spin | KeyAction::StartOver
                )
            })
            .collect();
        if !action_bindings.is_empty() {
            sections.push(HelpSection {
                title: "Actions".to_string(),
                items: action_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        let general_bindings: Vec<_> = bindings
            .iter()
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Quit))
            .collect();
        if !general_bindings.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general_bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
