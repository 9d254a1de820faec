//! Owned fixed-length vector with element-wise arithmetic.
//!
//! Operands are taken by reference and results are freshly allocated; an
//! error return performs no partial computation.

use std::fmt;
use std::ops::Index;

use crate::error::{VectorError, VectorResult};

/// An owned, fixed-length sequence of `f32` components.
///
/// The length is fixed at construction; arithmetic between two vectors
/// requires equal lengths. A zero-length vector is a valid *cleared* state
/// but is rejected as an operand by every numeric operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    components: Vec<f32>,
}

impl Vector {
    /// Creates a vector of `len` zero-initialized components.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Allocation`] if the component buffer cannot
    /// be obtained.
    pub fn zeroed(len: usize) -> VectorResult<Self> {
        let mut components = Vec::new();
        if components.try_reserve_exact(len).is_err() {
            tracing::error!(requested = len, "vector allocation failed");
            return Err(VectorError::Allocation { requested: len });
        }
        components.resize(len, 0.0);
        Ok(Self { components })
    }

    /// Creates a vector from existing component data.
    #[must_use]
    pub fn from_components(components: impl Into<Vec<f32>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Resets the vector to the zero-length state, releasing its buffer.
    ///
    /// Idempotent: clearing an already-cleared vector is a no-op.
    pub fn clear(&mut self) {
        self.components = Vec::new();
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Returns the components as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.components
    }

    /// Returns the component at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.components.get(index).copied()
    }

    /// Checks that `self` and `other` have equal, non-negotiable lengths.
    fn check_lengths(&self, other: &Self) -> VectorResult<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            tracing::warn!(
                left = self.len(),
                right = other.len(),
                "vector lengths do not match"
            );
            Err(VectorError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }

    /// Element-wise sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn add(&self, other: &Self) -> VectorResult<Self> {
        self.check_lengths(other)?;
        let components = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { components })
    }

    /// Element-wise difference of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Self) -> VectorResult<Self> {
        self.check_lengths(other)?;
        let components = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self { components })
    }

    /// Dot product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> VectorResult<f32> {
        self.check_lengths(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] on a zero-length vector.
    pub fn magnitude(&self) -> VectorResult<f32> {
        if self.is_empty() {
            tracing::warn!("magnitude of an empty vector");
            return Err(VectorError::Empty);
        }
        Ok(self.components.iter().map(|c| c * c).sum::<f32>().sqrt())
    }

    /// Element-wise multiplication by `scalar`, as a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] on a zero-length vector.
    pub fn scaled(&self, scalar: f32) -> VectorResult<Self> {
        if self.is_empty() {
            tracing::warn!("scaling an empty vector");
            return Err(VectorError::Empty);
        }
        let components = self.components.iter().map(|c| c * scalar).collect();
        Ok(Self { components })
    }

    /// Unit vector in the direction of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Degenerate`] when the magnitude is zero or
    /// not finite; division by zero never occurs.
    pub fn normalized(&self) -> VectorResult<Self> {
        let mag = self.magnitude()?;
        if mag == 0.0 || mag.is_nan() {
            tracing::warn!("cannot normalize a zero or invalid vector");
            return Err(VectorError::Degenerate);
        }
        self.scaled(1.0 / mag)
    }
}

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.components[index]
    }
}

impl From<&[f32]> for Vector {
    fn from(components: &[f32]) -> Self {
        Self::from_components(components.to_vec())
    }
}

impl fmt::Display for Vector {
    /// Renders all components with two decimals: `[ 1.00 2.00 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for c in &self.components {
            write!(f, "{c:.2} ")?;
        }
        write!(f, "]")
    }
}
