#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod ongoing_workout_session;
mod service;
mod settings;

pub use ongoing_workout_session::*;
pub use service::*;
pub use settings::*;
