//! Structured logging setup.
//!
//! The crate instruments its event handling, filtering, and API calls with
//! `tracing` spans and fields; this module wires those to a
//! `tracing-subscriber` fmt layer on stderr so log output never interleaves
//! with the rendered screen on stdout.
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`

mod init;

pub use init::init_tracing;
