//! The `Greeting` value and its builder.

use std::fmt;

use anyhow::{Result, bail};
use create::{BoxOption, Builder, Create};
use serde::Serialize;

/// Noun used when no option sets one.
pub const DEFAULT_NOUN: &str = "world";

/// Rendered greeting, e.g. `Hello world!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Greeting(String);

impl Greeting {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Create for Greeting {
    type Builder = GreetingBuilder;
}

/// Staging state for a [`Greeting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingBuilder {
    pub noun: String,
}

impl Default for GreetingBuilder {
    fn default() -> Self {
        Self {
            noun: DEFAULT_NOUN.to_string(),
        }
    }
}

impl Builder for GreetingBuilder {
    type Target = Greeting;
    type Error = anyhow::Error;

    fn build(self) -> Result<Greeting> {
        if self.noun.is_empty() {
            bail!("empty noun");
        }
        Ok(Greeting(format!("Hello {}!", self.noun)))
    }
}

pub type GreetingOption = BoxOption<GreetingBuilder>;

/// Greet `noun` instead of the default.
pub fn with_noun(noun: impl Into<String>) -> GreetingOption {
    let noun = noun.into();
    Box::new(move |b: &mut GreetingBuilder| b.noun = noun)
}

/// `create::new` instantiated for [`Greeting`].
pub fn new_greeting<I>(options: I) -> Result<Greeting>
where
    I: IntoIterator<Item = GreetingOption>,
{
    create::new::<GreetingBuilder, I>(options)
}
