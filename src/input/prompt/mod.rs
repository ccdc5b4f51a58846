//! Startup prompt asking for the session's iteration limit.

pub mod iteration_prompt;
