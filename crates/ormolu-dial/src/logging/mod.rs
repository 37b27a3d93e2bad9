//! Logging utilities.
//!
//! Centralizes logger initialization for hosts embedding the dial. Kept
//! small on purpose: the crate logs through the standard `log` facade and
//! imposes no backend beyond the default `env_logger` setup here.

mod init;

pub use init::{LoggingConfig, init_logging};
