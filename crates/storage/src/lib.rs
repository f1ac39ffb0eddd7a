#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod export;
pub mod reconcile;
pub mod rest;
