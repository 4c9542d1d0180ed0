#[cfg(test)]
mod tests {
    use passive_dendrite::stimulus::{CurrentClamp, GaussianParameters};

    #[test]
    pub fn test_step_window() {
        let stim = CurrentClamp { amp: -0.001, delay: 500., dur: 10000., ..CurrentClamp::default() };

        assert_eq!(stim.current_at(0.), 0.);
        assert_eq!(stim.current_at(499.9), 0.);
        assert_eq!(stim.current_at(500.), -0.001);
        assert_eq!(stim.current_at(5000.), -0.001);
        assert_eq!(stim.current_at(10500.), 0.);
        assert_eq!(stim.current_at(20000.), 0.);
        assert_eq!(stim.end(), 10500.);
    }

    #[test]
    pub fn test_zero_std_noise_leaves_amplitude_unchanged() {
        let stim = CurrentClamp::default();

        for i in 0..100 {
            let t = stim.delay + i as f64;
            assert_eq!(stim.current_at(t), stim.amp);
        }
    }

    #[test]
    pub fn test_noise_factor_is_clamped() {
        let noise = GaussianParameters { mean: 1., std: 5., min: 0.5, max: 1.5 };

        for _ in 0..1000 {
            let factor = noise.get_random_number();
            assert!((0.5..=1.5).contains(&factor));
        }
    }

    #[test]
    pub fn test_noisy_step_stays_within_cutoffs() {
        let stim = CurrentClamp {
            amp: 1.,
            noise: GaussianParameters { mean: 1., std: 0.2, min: 0.5, max: 1.5 },
            ..CurrentClamp::default()
        };

        for i in 0..1000 {
            let t = stim.delay + i as f64;
            let current = stim.current_at(t);
            assert!((0.5..=1.5).contains(&current));
        }
    }
}
