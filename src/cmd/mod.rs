//! Command module structure for the mailform CLI

pub mod check;
pub mod config;
pub mod greet;
pub mod text;
pub mod ui;
pub mod util;
