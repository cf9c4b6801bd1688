//! Controller layer: backend events and command orchestration for the UI.

pub mod events;
pub mod orchestration;
