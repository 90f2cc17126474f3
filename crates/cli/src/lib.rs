//! Library half of `ont-cli`, split out so argument parsing and the
//! commands can be tested without spawning the binary.

pub mod args;
pub mod commands;
