//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod info_panel;
mod intent_mapping;
/// Application State
///
/// Host-Schnappschuss, Ergebniszustand, Kartenzustand und Optionen des Werkzeugs.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use info_panel::{build as build_info_panel, InfoPanel};
pub use state::{AppState, HostSnapshot, MapEffect, ShownResult, ToolPhase};
