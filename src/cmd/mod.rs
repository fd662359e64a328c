//! Command handlers for the salmontt CLI

pub mod check;
pub mod config;
pub mod run;
