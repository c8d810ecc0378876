//! Generic construction through builders and deferred options.
//!
//! A value is never assembled field by field at the call site. Instead:
//!
//! - **[`builder`]**: a [`Builder`] stages configuration. `Default` supplies
//!   sensible defaults and `build` is the single place validation happens.
//! - **[`options`]**: each option is one infallible mutation of the builder,
//!   applied in the order given (later options win on the same field).
//! - **[`construct`]**: [`new`] ties the two together: defaults, options,
//!   then `build`.
//!
//! ```
//! use create::{BoxOption, Builder};
//!
//! #[derive(Debug, PartialEq)]
//! struct Port(u16);
//!
//! struct PortBuilder {
//!     port: u16,
//! }
//!
//! impl Default for PortBuilder {
//!     fn default() -> Self {
//!         Self { port: 8080 }
//!     }
//! }
//!
//! impl Builder for PortBuilder {
//!     type Target = Port;
//!     type Error = String;
//!
//!     fn build(self) -> Result<Port, String> {
//!         if self.port == 0 {
//!             return Err("zero port".to_string());
//!         }
//!         Ok(Port(self.port))
//!     }
//! }
//!
//! fn with_port(port: u16) -> BoxOption<PortBuilder> {
//!     Box::new(move |b: &mut PortBuilder| b.port = port)
//! }
//!
//! assert_eq!(create::new_default::<PortBuilder>(), Ok(Port(8080)));
//! assert_eq!(create::new::<PortBuilder, _>([with_port(1), with_port(2)]), Ok(Port(2)));
//! assert_eq!(create::new::<PortBuilder, _>([with_port(0)]), Err("zero port".to_string()));
//! ```

pub mod builder;
pub mod construct;
pub mod options;
#[cfg(test)]
mod test_support;

pub use builder::{Builder, Create};
pub use construct::{new, new_default};
pub use options::{BoxOption, BuilderOption, Options};
