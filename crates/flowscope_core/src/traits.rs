use crate::vector::VectorError;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in state vectors.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents a continuous-time dynamical system with a fixed parameter vector.
pub trait DynamicalSystem<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    /// x: current state
    /// params: parameter values in declaration order
    /// Returns dx/dt as a new vector of length `dimension()`.
    fn derivative(&self, x: &[T], params: &[T]) -> Vec<T>;
}

/// A trait for fixed-step solvers that advance a state by one increment.
pub trait Steppable<T: Scalar> {
    /// Computes the state one step of size dt ahead.
    /// The input state is left untouched; the next state is returned.
    fn step(
        &self,
        system: &impl DynamicalSystem<T>,
        state: &[T],
        params: &[T],
        dt: T,
    ) -> Result<Vec<T>, VectorError>;
}
