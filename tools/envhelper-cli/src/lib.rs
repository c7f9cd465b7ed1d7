//! `envhelper` command-line tool: typed reads of environment variables.

pub mod app;
pub mod command;
pub mod config;
pub mod demo;
pub mod report;
