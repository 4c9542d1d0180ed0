//! Derives input resistance and membrane time constant from model
//! parameters and from a recorded voltage trace.

use std::f64::consts::E;
use crate::compartment::PassiveCompartment;
use crate::error::MeasureError;
use crate::stimulus::CurrentClamp;
use crate::trace::VoltageTrace;


/// Passive electrical parameters derived once per run, both analytically
/// from the model parameters and empirically from the recorded trace
#[derive(Debug, Clone)]
pub struct PassiveEstimates {
    /// Input resistance from membrane resistance over area (megaohms)
    pub rin_calculated_megaohms: f64,
    /// Input resistance from the voltage deflection, dv/di (megaohms)
    pub rin_measured_megaohms: f64,
    /// Membrane time constant from rm * cm (seconds)
    pub tau_calculated_secs: f64,
    /// Membrane time constant from the 63% decay point of the trace (seconds)
    pub tau_measured_secs: f64,
}

/// Calculates rin and tau using two methods, from the compartment
/// parameters and from the recorded trace.
///
/// The measured values assume a hyperpolarizing step: the baseline voltage
/// is taken as the trace maximum and the steady state as the trace minimum.
/// The decay point scan is bounded to samples at or before the end of the
/// stimulus so the recovery crossing is ignored.
pub fn measure_passive_properties(
    cell: &PassiveCompartment,
    stim: &CurrentClamp,
    trace: &VoltageTrace,
) -> Result<PassiveEstimates, MeasureError> {
    if trace.times.len() != trace.voltages.len() {
        return Err(MeasureError::MismatchedTraceLengths);
    }

    if stim.amp == 0. {
        return Err(MeasureError::ZeroAmplitudeStimulus);
    }

    let vi = trace.max_voltage().ok_or(MeasureError::EmptyTrace)?;
    let vf = trace.min_voltage().ok_or(MeasureError::EmptyTrace)?;

    let dv = vf - vi;
    let di = stim.amp;

    // ohm's law, r = dv/di, and mV/nA = 1 Mohm
    let rin_measured_megaohms = dv / di;

    // tau is the time at which ~63% of the voltage change is reached
    let vtau = vi + dv * (1. - 1. / E);
    let index = trace
        .closest_voltage_index(vtau, stim.end())
        .ok_or(MeasureError::DecayPointNotFound)?;

    let tau_measured_secs = (trace.times[index] - stim.delay) * 1e-3;

    Ok(PassiveEstimates {
        rin_calculated_megaohms: cell.input_resistance_megaohms(),
        rin_measured_megaohms,
        tau_calculated_secs: cell.membrane_time_constant_secs(),
        tau_measured_secs,
    })
}

/// Prints the calculated and measured values of rin and tau
pub fn print_passive_estimates(estimates: &PassiveEstimates) {
    println!(
        "Calculated rin is {} ohms or {} megaohms",
        estimates.rin_calculated_megaohms * 1e6,
        estimates.rin_calculated_megaohms,
    );
    println!("Measured rin is {} megaohms", estimates.rin_measured_megaohms);

    println!("Calculated tau is {} seconds", estimates.tau_calculated_secs);
    println!("Measured tau is {} seconds", estimates.tau_measured_secs);
}
