//! Builder contract consumed by the generic constructor.

use crate::construct::{new, new_default};
use crate::options::BuilderOption;

/// Mutable staging object that produces a `Target` once configured.
///
/// `Default::default()` populates the defaults. It must always return a
/// fresh builder that is ready to receive options; every construction call
/// starts from its own instance.
///
/// Options only assign fields. Cross-field checks and derived values belong
/// in [`Builder::build`], which consumes the builder so it can be finalized
/// at most once.
pub trait Builder: Default {
    /// Value produced by a successful build.
    type Target;
    /// Validation failure reported by `build`.
    type Error;

    fn build(self) -> Result<Self::Target, Self::Error>;
}

/// Target types with a dedicated builder.
///
/// Implementing this gives the type an instantiated constructor, so callers
/// can write `Greeting::create([with_noun("planet")])` instead of naming the
/// builder.
pub trait Create: Sized {
    type Builder: Builder<Target = Self>;

    /// Construct from defaults plus `options`, applied in order.
    fn create<I>(options: I) -> Result<Self, <Self::Builder as Builder>::Error>
    where
        I: IntoIterator,
        I::Item: BuilderOption<Self::Builder>,
    {
        new::<Self::Builder, I>(options)
    }

    /// Construct from defaults alone.
    fn create_default() -> Result<Self, <Self::Builder as Builder>::Error> {
        new_default::<Self::Builder>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Rect, RectBuilder, height, width};

    #[test]
    fn default_builders_are_independent_and_equal() {
        let first = RectBuilder::default().build().expect("first");
        let second = RectBuilder::default().build().expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn create_forwards_options() {
        let rect = Rect::create([width(4), height(5)]).expect("create");
        assert_eq!(
            rect,
            Rect {
                width: 4,
                height: 5
            }
        );
    }

    #[test]
    fn create_default_matches_builder_default() {
        let rect = Rect::create_default().expect("create");
        assert_eq!(rect, RectBuilder::default().build().expect("build"));
    }

    #[test]
    fn create_surfaces_build_error() {
        let err = Rect::create([height(0)]).expect_err("zero height");
        assert_eq!(err.to_string(), "zero height");
    }
}
