//! The generic constructor.

use std::any::type_name;
use std::iter;

use tracing::{debug, trace};

use crate::builder::Builder;
use crate::options::{BoxOption, BuilderOption};

/// Construct a `B::Target` from defaults plus `options`.
///
/// Steps: `B::default()`, then each option in iteration order, then
/// `B::build`. Later options overwrite fields set by earlier ones. A build
/// error is returned as-is; no partial value is produced.
pub fn new<B, I>(options: I) -> Result<B::Target, B::Error>
where
    B: Builder,
    I: IntoIterator,
    I::Item: BuilderOption<B>,
{
    let mut builder = B::default();
    let mut applied = 0usize;
    for option in options {
        option.apply(&mut builder);
        applied += 1;
    }
    trace!(builder = type_name::<B>(), applied, "options applied");

    builder
        .build()
        .inspect_err(|_| debug!(builder = type_name::<B>(), applied, "build rejected"))
}

/// Construct a `B::Target` from defaults alone.
pub fn new_default<B: Builder>() -> Result<B::Target, B::Error> {
    new::<B, _>(iter::empty::<BoxOption<B>>())
}
