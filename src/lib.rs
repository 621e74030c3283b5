//! This is the library of the comment-driven PR label manager.
pub mod config;
pub mod github;
pub mod manager;
pub mod utils;

#[cfg(test)]
mod tests;
