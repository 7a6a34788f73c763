//! Mascot artwork to e-ink bitmap header converter.
//!
//! Turns `hiki-ava.png` into `hiki_bitmaps.h` (two packed `PROGMEM` arrays)
//! plus 1-bit preview PNGs for visual inspection.

pub mod config;
pub mod pipeline;

pub use config::ToolConfig;
pub use pipeline::{Artifacts, build_artifacts, write_artifacts};
