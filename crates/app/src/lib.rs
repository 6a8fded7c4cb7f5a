#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod chart;
pub mod format;
pub mod log;
mod settings;

pub use settings::*;
