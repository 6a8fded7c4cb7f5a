#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod name;
mod statistics;
mod store;
mod workout;

pub use error::*;
pub use name::*;
pub use statistics::*;
pub use store::*;
pub use workout::*;
