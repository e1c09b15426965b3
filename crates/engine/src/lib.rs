pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod measure;
pub mod mutation;
pub mod style;
pub mod transition;

#[cfg(test)]
pub mod harness;
