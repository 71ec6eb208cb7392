pub mod layout;
pub mod scroll;
pub mod snapshot;
pub mod story;
pub mod timers;
