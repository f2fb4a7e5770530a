#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;

pub use local_storage::{Backend, Browser, LocalStorage, Memory};
