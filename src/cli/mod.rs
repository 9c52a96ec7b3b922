mod catalog;
mod config;
mod draft;
mod export;
mod generate;
mod history;
mod root;
mod schema;
mod watch;
mod workspace;

pub use root::Cli;
