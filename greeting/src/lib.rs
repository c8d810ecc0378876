//! Greeting values built through the `create` constructor.
//!
//! - **[`greeting`]**: the `Greeting` value, its builder and options.
//! - **[`config`]**: optional TOML file translated into builder options.
//!
//! The `greeting` binary layers command-line flags over the config file, so
//! the flags win on any field both of them set.

pub mod config;
pub mod exit_codes;
pub mod greeting;
pub mod logging;

pub use greeting::{Greeting, GreetingBuilder, GreetingOption, new_greeting, with_noun};
