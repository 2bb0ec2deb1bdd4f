//! Onboarding Wizard — multi-step employee onboarding form.

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod views;
pub mod wizard;
