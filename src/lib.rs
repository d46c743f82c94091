//! Clean Water Collector — catch the clean drops, dodge the polluted ones.
//!
//! The library holds the whole game core; the binary only wires terminal
//! input, rendering and frame pacing around it.

pub mod collision;
pub mod compute;
pub mod config;
pub mod difficulty;
pub mod droplet;
pub mod entities;
pub mod input;
