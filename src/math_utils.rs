// src/math_utils.rs
use statrs::consts::SQRT_2PI;
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Standard normal CDF through the complementary error function.
///
/// ```text
/// Φ(x) = erfc(-x/√2) / 2
/// ```
///
/// Unlike `(1 + erf(x/√2)) / 2` this keeps full relative precision in the far left tail,
/// where `1 + erf` cancels to zero.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    erf::erfc(-x / SQRT_2) / 2.0
}

/// Standard normal PDF: φ(x) = exp(-x²/2) / √(2π)
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
