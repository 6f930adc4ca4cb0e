//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, ViewState, ViewKind)
//! - Main module - App struct, event loop, submission worker

mod state;

pub use state::{AppState, ViewKind, ViewState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::AppConfig;
use crate::error::Result;
use crate::submission::{AliasRequest, AliasService, SubmitError};
use crate::ui::UiRenderer;
use crate::wheel::SpinObserver;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages delivered to the UI thread
#[derive(Debug)]
pub enum AppMessage {
    /// The submission worker finished
    SubmissionFinished(std::result::Result<String, SubmitError>),
    /// The wheel settled on a label
    WheelSettled(String),
}

/// Run one submission on a worker thread and report back over `tx`.
///
/// If the app is gone by the time the request finishes, the result is dropped.
pub fn spawn_submission(
    service: Arc<dyn AliasService>,
    request: AliasRequest,
    tx: Sender<AppMessage>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let result = service.request_alias(&request);
        if tx.send(AppMessage::SubmissionFinished(result)).is_err() {
            debug!("App closed before submission finished, dropping result");
        }
    })
}

/// Main application struct
pub struct App {
    state: AppState,
    service: Arc<dyn AliasService>,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// Cloned into submission workers and wheel observers
    tx: Sender<AppMessage>,
    /// Polled in the main loop
    rx: Receiver<AppMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig, service: Arc<dyn AliasService>) -> Self {
        info!("Creating new App instance");
        let (tx, rx) = mpsc::channel();

        Self {
            state: AppState::new(config.candidates.clone(), config.settle_delay()),
            service,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Observer handed to each new wheel: logs the pick and forwards it to the UI thread
    fn selection_observer(&self) -> SpinObserver {
        let tx = self.tx.clone();
        Box::new(move |label: &str| {
            info!(selected = label, "Wheel selection");
            let _ = tx.send(AppMessage::WheelSettled(label.to_string()));
        })
    }

    /// Validate the form and hand the request to a worker
    fn submit(&mut self) {
        if let Some(request) = self.state.begin_submit() {
            info!(email = %request.email, "Submitting alias request");
            spawn_submission(Arc::clone(&self.service), request, self.tx.clone());
        }
    }

    /// Apply all pending worker and wheel messages without blocking
    pub fn poll_messages(&mut self) -> Result<()> {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::SubmissionFinished(result) => {
                    let observer = self.selection_observer();
                    self.state.finish_submit(result, Some(observer))?;
                }
                AppMessage::WheelSettled(label) => self.state.record_selection(label),
            }
        }
        Ok(())
    }

    /// Block until the next message arrives (or `timeout` passes), then apply it
    /// and anything else pending. Returns false on timeout.
    pub fn wait_for_message(&mut self, timeout: Duration) -> Result<bool> {
        match self.rx.recv_timeout(timeout) {
            Ok(AppMessage::SubmissionFinished(result)) => {
                let observer = self.selection_observer();
                self.state.finish_submit(result, Some(observer))?;
            }
            Ok(AppMessage::WheelSettled(label)) => self.state.record_selection(label),
            Err(_) => return Ok(false),
        }
        self.poll_messages()?;
        Ok(true)
    }

    /// Advance the wheel's settling timer
    pub fn tick(&mut self, now: Instant) {
        let settled = self
            .state
            .wheel_mut()
            .and_then(|wheel| wheel.tick(now).map(|outcome| outcome.label.clone()));
        if let Some(label) = settled {
            debug!(label = %label, "Wheel settled in UI");
        }
    }

    /// Run the main application loop until the user quits or `shutdown` is raised
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        shutdown: &AtomicBool,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            if shutdown.load(Ordering::SeqCst) {
                info!("Shutdown signal received, leaving main loop");
                break;
            }

            self.poll_messages()?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event, Instant::now()) {
                        break;
                    }
                }
            }

            let now = Instant::now();
            self.tick(now);

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context, now);
            })?;
        }

        // No selection may be reported once the loop is gone
        if let Some(wheel) = self.state.wheel_mut() {
            wheel.cancel();
        }
        Ok(())
    }

    /// Handle a key press. Returns true if the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let view = self.state.kind();
        let action = self.keybinding_context.action_for(view, &key);

        if self.state.help_visible {
            // Only Ctrl+C reaches through the overlay
            if action == Some(KeyAction::Quit) && key.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.state.help_visible = false;
            }
            return false;
        }

        match action {
            Some(KeyAction::Quit) => return true,
            Some(KeyAction::Help) => self.toggle_help(),
            Some(KeyAction::NextField) => self.state.fields.focus_next(),
            Some(KeyAction::PreviousField) => self.state.fields.focus_previous(),
            Some(KeyAction::Submit) => self.submit(),
            Some(KeyAction::Spin) => self.spin(now),
            Some(KeyAction::StartOver) => self.state.start_over(),
            None if view == ViewKind::Form => self.edit_field(key),
            None => {}
        }

        false
    }

    /// Trigger the wheel; ignored while it is already spinning
    fn spin(&mut self, now: Instant) {
        let rotation = self.state.wheel_mut().and_then(|w| w.trigger(now));
        match rotation {
            Some(rotation) => {
                debug!(rotation, "Spin triggered");
                self.state.status_message = "Spinning...".to_string();
            }
            None => debug!("Spin ignored, wheel already spinning"),
        }
    }

    /// Text editing keys not claimed by a binding
    fn edit_field(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Backspace => self.state.fields.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.fields.insert_char(c)
            }
            _ => {}
        }
    }
}
