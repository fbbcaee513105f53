use crate::foundation::error::{FadeError, FadeResult};

/// Pixel dimensions of an image or animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> FadeResult<Self> {
        if width == 0 || height == 0 {
            return Err(FadeError::validation(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn of(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// Longer of the two axes.
    pub fn longest_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Per-axis maximum of two sizes.
    pub fn union(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn fits_within(self, max_dimension: u32) -> bool {
        self.width <= max_dimension && self.height <= max_dimension
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
