//! Lévy-flight step sampling.
//!
//! Steps follow Mantegna's algorithm: `s = u / |v|^(1/β)` with
//! `u ~ N(0, σ_u²)` and `v ~ N(0, 1)`. The result is heavy-tailed: most
//! steps are small, a few are very large.
//!
//! # References
//!
//! - Mantegna (1994), "Fast, accurate algorithm for numerical simulation of
//!   Lévy stable stochastic processes"
//! - Yang & Deb (2009), "Cuckoo Search via Lévy flights"

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::PI;

/// A Lévy step sampler with a fixed exponent.
#[derive(Debug, Clone, Copy)]
pub struct LevyFlight {
    beta: f64,
    sigma_u: f64,
}

impl LevyFlight {
    /// Creates a sampler for exponent `beta`.
    ///
    /// # Panics
    /// Panics unless `0 < beta < 2`.
    pub fn new(beta: f64) -> Self {
        assert!(
            beta > 0.0 && beta < 2.0,
            "levy beta must be in (0, 2), got {beta}"
        );
        Self {
            beta,
            sigma_u: mantegna_sigma(beta),
        }
    }

    /// The stability exponent β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Standard deviation of the numerator in Mantegna's ratio.
    pub fn sigma_u(&self) -> f64 {
        self.sigma_u
    }

    /// Draws one step.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        loop {
            let u: f64 = StandardNormal.sample(rng);
            let v: f64 = StandardNormal.sample(rng);
            let step = u * self.sigma_u / v.abs().powf(1.0 / self.beta);
            if step.is_finite() {
                return step;
            }
        }
    }

    /// Draws `n` independent steps.
    pub fn sample_vec<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// `σ_u = [Γ(1+β)·sin(πβ/2) / (Γ((1+β)/2)·β·2^((β−1)/2))]^(1/β)`
fn mantegna_sigma(beta: f64) -> f64 {
    let num = gamma(1.0 + beta) * (PI * beta / 2.0).sin();
    let den = gamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0);
    (num / den).powf(1.0 / beta)
}

/// Gamma function for positive arguments (Lanczos series).
fn gamma(x: f64) -> f64 {
    const COF: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.120_865_097_386_617_9e-2,
        -0.539_523_938_495_3e-5,
    ];
    let mut y = x;
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();
    let mut ser = 1.000_000_000_190_015;
    for c in COF {
        y += 1.0;
        ser += c / y;
    }
    (-tmp + (2.506_628_274_631_000_5 * ser / x).ln()).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_gamma_known_values() {
        assert!((gamma(1.0) - 1.0).abs() < 1e-9);
        assert!((gamma(5.0) - 24.0).abs() < 1e-7);
        assert!((gamma(0.5) - PI.sqrt()).abs() < 1e-9);
        assert!((gamma(2.5) - 1.329_340_388).abs() < 1e-8);
    }

    #[test]
    fn test_sigma_for_beta_one_and_a_half() {
        let levy = LevyFlight::new(1.5);
        assert!(
            (levy.sigma_u() - 0.6966).abs() < 1e-3,
            "unexpected sigma {}",
            levy.sigma_u()
        );
    }

    #[test]
    fn test_samples_are_finite() {
        let levy = LevyFlight::new(1.5);
        let mut rng = create_rng(42);
        let steps = levy.sample_vec(10_000, &mut rng);
        assert_eq!(steps.len(), 10_000);
        assert!(steps.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_samples_are_heavy_tailed() {
        let levy = LevyFlight::new(1.5);
        let mut rng = create_rng(42);
        let steps = levy.sample_vec(20_000, &mut rng);

        let small = steps.iter().filter(|s| s.abs() < 1.0).count();
        let large = steps.iter().filter(|s| s.abs() > 10.0).count();
        // mostly small moves, with a tail far beyond a Gaussian's
        assert!(small > steps.len() * 2 / 5, "small steps: {small}");
        assert!(large > 0, "no large jumps in 20000 samples");
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let levy = LevyFlight::new(1.3);
        let a = levy.sample_vec(50, &mut create_rng(8));
        let b = levy.sample_vec(50, &mut create_rng(8));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "levy beta")]
    fn test_rejects_beta_two() {
        LevyFlight::new(2.0);
    }
}
