//! Library half of the `isocode` binary: logging setup and table rendering.

pub mod commands;
pub mod logging;
