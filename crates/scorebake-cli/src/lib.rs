//! scorebake CLI library.
//!
//! Command implementations, the WAV-file playback sink and logging setup used
//! by the `scorebake` binary.

pub mod commands;
pub mod logging;
pub mod sink;
