//! Elementary arithmetic on state vectors.
//!
//! Every operation allocates its result; inputs are never modified.

use crate::traits::Scalar;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<(), VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

pub fn add<T: Scalar>(a: &[T], b: &[T]) -> Result<Vec<T>, VectorError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| x + y).collect())
}

pub fn subtract<T: Scalar>(a: &[T], b: &[T]) -> Result<Vec<T>, VectorError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| x - y).collect())
}

pub fn scale<T: Scalar>(v: &[T], k: T) -> Vec<T> {
    v.iter().map(|&x| x * k).collect()
}

pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> Result<T, VectorError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Euclidean norm. Zero for the empty vector.
pub fn magnitude<T: Scalar>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

/// True when no element is NaN or infinite.
pub fn all_finite<T: Scalar>(v: &[T]) -> bool {
    v.iter().all(|x| x.is_finite())
}
