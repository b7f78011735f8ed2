//! Background services (I/O off the UI loop)

pub mod api;
