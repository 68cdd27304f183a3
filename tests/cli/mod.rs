pub mod support;

mod create;
mod develop;
mod errors;
mod export;
mod index;
mod list;
mod note;
mod relocate;
mod search;
mod show;
mod similar;
mod stats;
