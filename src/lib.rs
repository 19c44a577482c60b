//! Weekly practice log and preferences for musicians.
//! Minutes and notes are kept per day of the week, preferences are read lazily and written
//! through on every change. Everything is stored as small json documents in the application
//! directory, so the data can be inspected and edited by hand.
//!

pub mod cli;
pub mod fs;
pub mod practice;
pub mod preferences;
pub mod storage;
pub mod utils;
