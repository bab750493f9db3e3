#![warn(clippy::pedantic)]

pub mod bundled;
pub mod memory;
