//! Structuring element for neighborhood operations
//!
//! A structuring element is a small square matrix of weights with a
//! designated center (the hot spot). The same type serves both
//! operators: dilation stamps its values onto the output, convolution
//! uses them as multiplicative weights.
//!
//! The size is always odd so a unique integer center exists; the center
//! offset is `(size - 1) / 2`.

use crate::{MorphError, MorphResult};
use rasterkit_core::{Error, Result};

/// A square weight matrix with a designated center
#[derive(Debug, Clone)]
pub struct StructElement {
    /// Side length, always odd
    size: u32,
    /// Weights in row-major order, length = size * size
    data: Vec<f32>,
}

impl StructElement {
    /// Create a new element of the given size with all weights zero.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidKernel`] if `size` is zero or even.
    pub fn new(size: u32) -> MorphResult<Self> {
        Self::check_size(size)?;
        Ok(StructElement {
            size,
            data: vec![0.0; (size * size) as usize],
        })
    }

    /// Create an element from an explicit row-major weight matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidKernel`] for a zero or even size, or
    /// when `values` does not hold exactly `size * size` weights.
    pub fn from_matrix(size: u32, values: &[f32]) -> MorphResult<Self> {
        Self::check_size(size)?;
        let expected = (size * size) as usize;
        if values.len() != expected {
            return Err(MorphError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                expected,
                size,
                size,
                values.len()
            )));
        }
        Ok(StructElement {
            size,
            data: values.to_vec(),
        })
    }

    /// Create a cross-shaped dilation element: center row and center
    /// column at `fg`, corners zero.
    ///
    /// The conventional foreground intensity is 255.
    pub fn create_cross(size: u32, fg: f32) -> MorphResult<Self> {
        let mut elem = Self::new(size)?;
        let center = elem.offset();
        for i in 0..size {
            elem.data[(center * size + i) as usize] = fg;
            elem.data[(i * size + center) as usize] = fg;
        }
        Ok(elem)
    }

    /// Create the 3x3 Laplacian edge-detection kernel: all weights -1
    /// except the center at +8. The weights sum to zero, so convolution
    /// leaves the result unnormalized as a derivative signal.
    pub fn create_laplacian() -> Self {
        StructElement {
            size: 3,
            data: vec![-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
        }
    }

    fn check_size(size: u32) -> MorphResult<()> {
        if size == 0 {
            return Err(MorphError::InvalidKernel("size must be > 0".to_string()));
        }
        if size % 2 == 0 {
            return Err(MorphError::InvalidKernel(format!(
                "size must be odd, got {size}"
            )));
        }
        Ok(())
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the center offset `(size - 1) / 2`.
    #[inline]
    pub fn offset(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Get the weight at the center cell.
    pub fn hot_spot(&self) -> f32 {
        let c = self.offset();
        self.data[(c * self.size + c) as usize]
    }

    /// Get the weight at (i, j), column `i` and row `j`.
    ///
    /// # Errors
    ///
    /// Returns [`rasterkit_core::Error::OutOfBounds`] for indices
    /// outside `[0, size)`.
    pub fn get(&self, i: u32, j: u32) -> Result<f32> {
        if i >= self.size || j >= self.size {
            return Err(Error::OutOfBounds {
                x: i,
                y: j,
                width: self.size,
                height: self.size,
            });
        }
        Ok(self.data[(j * self.size + i) as usize])
    }

    /// Set the weight at (i, j), column `i` and row `j`.
    ///
    /// Mutation is only meaningful before an engine call consumes the
    /// element; operations take it by shared reference and never write.
    pub fn set(&mut self, i: u32, j: u32, value: f32) -> Result<()> {
        if i >= self.size || j >= self.size {
            return Err(Error::OutOfBounds {
                x: i,
                y: j,
                width: self.size,
                height: self.size,
            });
        }
        self.data[(j * self.size + i) as usize] = value;
        Ok(())
    }

    /// Get the raw row-major weight data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the sum of all weights.
    ///
    /// Convolution divides by this sum when it is meaningfully non-zero
    /// to keep overall brightness stable under averaging kernels.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
