pub mod chapter;
pub mod config;
pub mod pacing;
pub mod sequencer;
pub mod visibility;
