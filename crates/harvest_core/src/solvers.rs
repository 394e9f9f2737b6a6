use crate::traits::{Scalar, Steppable, VectorField};

/// Classic fourth-order Runge-Kutta stepper with preallocated stage buffers.
pub struct Rk4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    stage: Vec<T>,
}

impl<T: Scalar> Rk4<T> {
    pub fn new(dim: usize) -> Self {
        let zero = T::zero();
        Self {
            k1: vec![zero; dim],
            k2: vec![zero; dim],
            k3: vec![zero; dim],
            k4: vec![zero; dim],
            stage: vec![zero; dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for Rk4<T> {
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        let half_dt = dt / (T::one() + T::one());
        let two = T::one() + T::one();
        let six = two + two + two;
        let t0 = *t;

        field.derivative(t0, state, &mut self.k1);

        for i in 0..state.len() {
            self.stage[i] = state[i] + half_dt * self.k1[i];
        }
        field.derivative(t0 + half_dt, &self.stage, &mut self.k2);

        for i in 0..state.len() {
            self.stage[i] = state[i] + half_dt * self.k2[i];
        }
        field.derivative(t0 + half_dt, &self.stage, &mut self.k3);

        for i in 0..state.len() {
            self.stage[i] = state[i] + dt * self.k3[i];
        }
        field.derivative(t0 + dt, &self.stage, &mut self.k4);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        for i in 0..state.len() {
            state[i] = state[i]
                + (dt / six) * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        *t = t0 + dt;
    }
}

#[cfg(test)]
mod tests {
    use super::Rk4;
    use crate::traits::{Steppable, VectorField};

    struct Decay {
        rate: f64,
    }

    impl VectorField<f64> for Decay {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = -self.rate * x[0];
        }
    }

    struct Clock;

    impl VectorField<f32> for Clock {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, t: f32, _x: &[f32], out: &mut [f32]) {
            out[0] = 2.0 * t;
        }
    }

    #[test]
    fn rk4_tracks_exponential_decay() {
        let field = Decay { rate: 0.5 };
        let mut solver = Rk4::new(field.dimension());
        let mut t = 0.0;
        let mut state = vec![1.0];
        for _ in 0..100 {
            solver.step(&field, &mut t, &mut state, 0.1);
        }
        let expected = (-0.5_f64 * 10.0).exp();
        assert!((t - 10.0).abs() < 1e-9);
        assert!(
            (state[0] - expected).abs() < 1e-7,
            "expected {expected}, got {}",
            state[0]
        );
    }

    #[test]
    fn rk4_integrates_polynomial_in_time_exactly() {
        // x' = 2t is integrated without truncation error by a fourth-order method.
        let field = Clock;
        let mut solver = Rk4::new(1);
        let mut t = 0.0_f32;
        let mut state = vec![0.0_f32];
        for _ in 0..4 {
            solver.step(&field, &mut t, &mut state, 0.5);
        }
        assert!((state[0] - 4.0).abs() < 1e-5);
    }
}
