//! Event handlers: keyboard input and API worker responses

pub mod api;
pub mod keyboard;
