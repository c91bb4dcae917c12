//! API route modules.

pub mod modes;
pub mod send_email;
pub mod summarize;
pub mod transcripts;
pub mod workspace;
