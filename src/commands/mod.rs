//! CLI commands for idea-factory

pub mod create;
pub mod develop;
pub mod dispatch;
pub mod export;
pub mod helpers;
pub mod index;
pub mod list;
pub mod note;
pub mod relocate;
pub mod search;
pub mod show;
pub mod similar;
pub mod stats;
