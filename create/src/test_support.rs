//! Test-only builder with a pair of validation rules.

use anyhow::{Result, bail};

use crate::builder::{Builder, Create};
use crate::options::BoxOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

/// Defaults to a 1x1 rectangle.
#[derive(Debug)]
pub struct RectBuilder {
    pub width: u32,
    pub height: u32,
}

impl Default for RectBuilder {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

impl Builder for RectBuilder {
    type Target = Rect;
    type Error = anyhow::Error;

    fn build(self) -> Result<Rect> {
        if self.width == 0 {
            bail!("zero width");
        }
        if self.height == 0 {
            bail!("zero height");
        }
        Ok(Rect {
            width: self.width,
            height: self.height,
        })
    }
}

impl Create for Rect {
    type Builder = RectBuilder;
}

pub fn width(width: u32) -> BoxOption<RectBuilder> {
    Box::new(move |b: &mut RectBuilder| b.width = width)
}

pub fn height(height: u32) -> BoxOption<RectBuilder> {
    Box::new(move |b: &mut RectBuilder| b.height = height)
}
