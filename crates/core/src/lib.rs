#![forbid(unsafe_code)]

pub mod catalogue;
pub mod error;
pub mod model;
pub mod progression;
pub mod session;
pub mod time;

pub use catalogue::{Catalogue, LEVELS_PER_CATEGORY, QUESTIONS_PER_LEVEL};
pub use error::Error;
pub use time::Clock;
