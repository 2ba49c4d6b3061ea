//! Bridge between the UI thread and the worker that talks to the waitlist endpoint.

pub mod commands;
pub mod runtime;
