#[macro_use]
extern crate rust_i18n;

pub mod access;
pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod shutdown;
pub mod startup;

// Initialize i18n
i18n!("locales", fallback = "en");
