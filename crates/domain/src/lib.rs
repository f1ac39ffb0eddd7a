#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod equipment;
mod error;
mod exercise;
mod plan;
mod profile;
mod service;
mod session;

pub use catalog::*;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use profile::*;
pub use service::*;
pub use session::*;
