#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod player;
mod search;
mod service;
mod timer;
mod workout;

pub use catalog::*;
pub use error::*;
pub use exercise::*;
pub use player::*;
pub use search::*;
pub use service::*;
pub use timer::*;
pub use workout::*;
