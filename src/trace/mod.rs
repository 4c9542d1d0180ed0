//! Recorded time and voltage sequences produced by a simulation run.


/// Two equal length ordered sequences of simulation times (ms) and
/// membrane voltages (mV), immutable once the run completes
#[derive(Debug, Clone, Default)]
pub struct VoltageTrace {
    /// Sample times (ms)
    pub times: Vec<f64>,
    /// Membrane voltages (mV)
    pub voltages: Vec<f64>,
}

impl VoltageTrace {
    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    /// Whether the trace holds no samples
    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    /// Highest recorded voltage, `None` if the trace is empty
    pub fn max_voltage(&self) -> Option<f64> {
        self.voltages.iter().cloned().fold(None, |acc, v| {
            match acc {
                Some(current) if current >= v => Some(current),
                _ => Some(v),
            }
        })
    }

    /// Lowest recorded voltage, `None` if the trace is empty
    pub fn min_voltage(&self) -> Option<f64> {
        self.voltages.iter().cloned().fold(None, |acc, v| {
            match acc {
                Some(current) if current <= v => Some(current),
                _ => Some(v),
            }
        })
    }

    /// Scans the trace for the sample whose voltage is closest to `target`
    /// among samples recorded at or before `t_max` (ms), returns the index
    /// of that sample or `None` if no sample qualifies
    pub fn closest_voltage_index(&self, target: f64, t_max: f64) -> Option<usize> {
        let mut closest: Option<(usize, f64)> = None;

        for (i, (t, v)) in self.times.iter().zip(self.voltages.iter()).enumerate() {
            if *t > t_max {
                continue;
            }

            let distance = (target - v).abs();

            match closest {
                Some((_, best)) if best <= distance => {},
                _ => { closest = Some((i, distance)); },
            }
        }

        closest.map(|(i, _)| i)
    }
}
