//! Use-Cases der Application-Layer-Orchestrierung.

pub mod click_gate;
pub mod effects;
pub mod lifecycle;
pub mod query;
pub mod results;
