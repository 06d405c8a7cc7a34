//! Configuration and constants
//!
//! Default file conventions live in [`defaults`]; the runtime [`Settings`]
//! object threads them through the parser, resolver, and sequencer so tests
//! can supply alternate fixtures.

pub mod defaults;
pub mod settings;

pub use settings::Settings;
