//! Secret Santa TUI Library
//!
//! A terminal app that requests a Secret Santa alias from a backend and then
//! lets the user spin a wheel of fortune over a fixed list of names.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod signals;
pub mod submission;
pub mod theme;
pub mod ui;
pub mod wheel;

// Re-export main types for convenience
pub use app::{App, AppMessage, AppState, ViewKind, ViewState};
pub use config::AppConfig;
pub use error::{Result, SantaError};
pub use submission::{
    AliasRequest, AliasResponse, AliasService, FormField, FormFields, HttpAliasClient,
    SubmitError,
};
pub use wheel::{SelectorWheel, SpinOutcome, WheelState};
