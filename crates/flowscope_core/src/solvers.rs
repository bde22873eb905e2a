use crate::traits::{DynamicalSystem, Scalar, Steppable};
use crate::vector::{add, scale, VectorError};

/// Classic Runge-Kutta 4th Order Solver
///
/// Stateless: each call builds its stages from fresh vectors, so the same
/// inputs always produce the same output bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl RK4 {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Scalar> Steppable<T> for RK4 {
    fn step(
        &self,
        system: &impl DynamicalSystem<T>,
        state: &[T],
        params: &[T],
        dt: T,
    ) -> Result<Vec<T>, VectorError> {
        let two = T::one() + T::one();
        let half_dt = dt / two;
        let sixth_dt = dt / (two + two + two);

        // k1 = f(y)
        let k1 = system.derivative(state, params);

        // k2 = f(y + dt/2 * k1)
        let k2 = system.derivative(&add(state, &scale(&k1, half_dt))?, params);

        // k3 = f(y + dt/2 * k2)
        let k3 = system.derivative(&add(state, &scale(&k2, half_dt))?, params);

        // k4 = f(y + dt * k3)
        let k4 = system.derivative(&add(state, &scale(&k3, dt))?, params);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        let weighted = add(
            &add(&k1, &scale(&k2, two))?,
            &add(&scale(&k3, two), &k4)?,
        )?;
        add(state, &scale(&weighted, sixth_dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay;

    impl DynamicalSystem<f64> for Decay {
        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, x: &[f64], _params: &[f64]) -> Vec<f64> {
            vec![-x[0]]
        }
    }

    struct Constant;

    impl DynamicalSystem<f64> for Constant {
        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, _x: &[f64], params: &[f64]) -> Vec<f64> {
            vec![params[0], -params[0]]
        }
    }

    /// Returns a derivative one element too short.
    struct Truncated;

    impl DynamicalSystem<f64> for Truncated {
        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, x: &[f64], _params: &[f64]) -> Vec<f64> {
            vec![x[0]]
        }
    }

    fn integrate_decay(dt: f64, t_end: f64) -> f64 {
        let steps = (t_end / dt).round() as usize;
        let mut state = vec![1.0];
        for _ in 0..steps {
            state = RK4.step(&Decay, &state, &[], dt).expect("step");
        }
        state[0]
    }

    #[test]
    fn rk4_matches_taylor_series_for_single_step() {
        let dt = 0.1_f64;
        let next = RK4.step(&Decay, &[1.0], &[], dt).expect("step");
        // Exact RK4 amplification factor for x' = -x.
        let expected = 1.0 - dt + dt.powi(2) / 2.0 - dt.powi(3) / 6.0 + dt.powi(4) / 24.0;
        assert!((next[0] - expected).abs() < 1e-14);
    }

    #[test]
    fn rk4_integrates_constant_field_exactly() {
        let next = RK4.step(&Constant, &[1.0, 2.0], &[3.0], 0.5).expect("step");
        assert!((next[0] - 2.5).abs() < 1e-12);
        assert!((next[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rk4_does_not_modify_input_state() {
        let state = vec![2.0];
        let _ = RK4.step(&Decay, &state, &[], 0.25).expect("step");
        assert_eq!(state, vec![2.0]);
    }

    #[test]
    fn rk4_is_deterministic() {
        let a = RK4.step(&Decay, &[0.3], &[], 0.01).expect("step");
        let b = RK4.step(&Decay, &[0.3], &[], 0.01).expect("step");
        assert_eq!(a[0].to_bits(), b[0].to_bits());
    }

    #[test]
    fn rk4_global_error_is_fourth_order() {
        let exact = (-1.0_f64).exp();
        let coarse = (integrate_decay(0.05, 1.0) - exact).abs();
        let fine = (integrate_decay(0.025, 1.0) - exact).abs();
        let ratio = coarse / fine;
        assert!(
            (ratio - 16.0).abs() < 1.5,
            "expected error ratio near 16, got {ratio}"
        );
    }

    #[test]
    fn rk4_reports_derivative_dimension_mismatch() {
        let result = RK4.step(&Truncated, &[1.0, 1.0], &[], 0.1);
        assert_eq!(
            result,
            Err(VectorError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
