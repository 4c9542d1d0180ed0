#[cfg(test)]
mod tests {
    use passive_dendrite::{
        compartment::PassiveCompartment,
        error::MeasureError,
        measure::measure_passive_properties,
        stimulus::CurrentClamp,
        trace::VoltageTrace,
    };

    fn decaying_trace() -> VoltageTrace {
        VoltageTrace {
            times: vec![0., 1., 2., 3., 4.],
            voltages: vec![-65., -70., -72., -73., -73.5],
        }
    }

    #[test]
    pub fn test_scan_finds_closest_sample() {
        let trace = decaying_trace();

        assert_eq!(trace.closest_voltage_index(-70.2, 4.), Some(1));
        assert_eq!(trace.closest_voltage_index(-65., 4.), Some(0));
        assert_eq!(trace.closest_voltage_index(-100., 4.), Some(4));
    }

    #[test]
    pub fn test_scan_respects_time_bound() {
        let trace = decaying_trace();

        // the closest sample overall is at t = 3 but it lies past the bound
        assert_eq!(trace.closest_voltage_index(-73., 2.), Some(2));
        assert_eq!(trace.closest_voltage_index(-73., 4.), Some(3));
    }

    #[test]
    pub fn test_scan_with_no_qualifying_samples() {
        let trace = decaying_trace();

        assert_eq!(trace.closest_voltage_index(-70., -1.), None);
        assert_eq!(VoltageTrace::default().closest_voltage_index(-70., 10.), None);
    }

    #[test]
    pub fn test_min_and_max_voltage() {
        let trace = decaying_trace();

        assert_eq!(trace.max_voltage(), Some(-65.));
        assert_eq!(trace.min_voltage(), Some(-73.5));
        assert_eq!(VoltageTrace::default().max_voltage(), None);
    }

    #[test]
    pub fn test_decay_point_outside_stimulus_window_is_an_error() {
        let dend = PassiveCompartment::default();
        let stim = CurrentClamp { delay: 0., dur: 1., ..CurrentClamp::default() };
        // every sample is recorded after the stimulus window ends
        let trace = VoltageTrace {
            times: vec![5., 6., 7.],
            voltages: vec![-65., -66., -67.],
        };

        let result = measure_passive_properties(&dend, &stim, &trace);
        assert!(matches!(result, Err(MeasureError::DecayPointNotFound)));
    }
}
