//! A constant current step stimulus with optional normally distributed
//! noise on the amplitude.

use crate::distribution::limited_distr;


/// Parameters used in generating noise
#[derive(Debug, Clone)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f64,
    /// Standard deviation of distribution
    pub std: f64,
    /// Maximum cutoff value
    pub max: f64,
    /// Minimum cutoff value
    pub min: f64,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0, // center of norm distr
            std: 0.0, // std of norm distr
            max: 2.0, // maximum cutoff for norm distr
            min: 0.0, // minimum cutoff for norm distr
        }
    }
}

impl GaussianParameters {
    /// Generates a normally distributed random number clamped between
    /// a minimum and a maximum
    pub fn get_random_number(&self) -> f64 {
        limited_distr(self.mean, self.std, self.min, self.max)
    }
}

/// A current clamp applying a constant current step to a compartment
#[derive(Debug, Clone)]
pub struct CurrentClamp {
    /// Stimulus amplitude (nA)
    pub amp: f64,
    /// Time before the step begins (ms)
    pub delay: f64,
    /// Step duration (ms)
    pub dur: f64,
    /// Noise factor applied to the amplitude while the step is active,
    /// a standard deviation of `0.` leaves the amplitude unchanged
    pub noise: GaussianParameters,
}

impl Default for CurrentClamp {
    fn default() -> Self {
        CurrentClamp {
            amp: -0.001, // hyperpolarizing step (nA)
            delay: 500., // baseline period before the step (ms)
            dur: 10000., // step duration (ms)
            noise: GaussianParameters::default(),
        }
    }
}

impl CurrentClamp {
    /// Returns the injected current (nA) at time `t` (ms), the amplitude
    /// within the step window and `0.` outside of it
    pub fn current_at(&self, t: f64) -> f64 {
        if t >= self.delay && t < self.delay + self.dur {
            self.amp * self.noise.get_random_number()
        } else {
            0.
        }
    }

    /// Time at which the step ends (ms)
    pub fn end(&self) -> f64 {
        self.delay + self.dur
    }
}
