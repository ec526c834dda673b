#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::missing_errors_doc)]

pub mod core;
pub mod error;
pub mod render;

pub use crate::core::engine::{render_course, Engine};
pub use error::{ConfigError, RenderError};

pub type Result<T> = eyre::Result<T>;
