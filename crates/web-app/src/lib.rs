#![warn(clippy::pedantic)]

pub mod log;
mod notification;
mod settings;

pub use notification::*;
pub use settings::*;
