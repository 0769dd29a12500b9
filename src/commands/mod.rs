//! CLI commands

pub mod chat;
pub mod list;
pub mod new;
pub mod show;
