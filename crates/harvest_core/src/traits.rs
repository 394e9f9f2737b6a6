use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Numeric types the population models can be evaluated in.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-or-more dimensional autonomous or time-dependent vector field.
pub trait VectorField<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates dx/dt at (t, x) into `out`.
    fn derivative(&self, t: T, x: &[T], out: &mut [T]);
}

/// A fixed-step integrator that advances a state in place.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt, updating both `t` and `state`.
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T);
}
