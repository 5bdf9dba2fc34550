//! Explorer app: terminal front end over the explorer core and engine.
pub mod platform;
