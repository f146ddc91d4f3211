//! Utilities shared by the server and client binaries.

pub mod logger;
pub mod time;
