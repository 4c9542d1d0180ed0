//! A passive (leak-only) dendrite compartment that implements [`IteratePassive`]
//! along with a current clamp runner that records the membrane
//! voltage over time.

use std::f64::consts::PI;
use crate::stimulus::CurrentClamp;
use crate::trace::VoltageTrace;


/// Gets current voltage (mV) of model
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f64;
}

/// Handles changes in simulation timestep information
pub trait Timestep {
    /// Retrieves timestep value (ms)
    fn get_dt(&self) -> f64;
    /// Updates instance with new timestep information
    fn set_dt(&mut self, dt: f64);
}

/// Handles the iteration of a passive membrane model over a single timestep
pub trait IteratePassive: CurrentVoltage + Timestep {
    /// Takes in an input current (nA) and updates the membrane potential
    /// by one timestep
    fn iterate(&mut self, input_current: f64);
}

/// A single cylindrical dendrite segment with only a passive leak channel
#[derive(Debug, Clone)]
pub struct PassiveCompartment {
    /// Membrane potential (mV)
    pub current_voltage: f64,
    /// Voltage initialization value (mV)
    pub v_init: f64,
    /// Segment length (um)
    pub length: f64,
    /// Segment diameter (um)
    pub diam: f64,
    /// Axial resistance (ohm cm), static morphology parameter
    pub ra: f64,
    /// Leak conductance (S/cm^2)
    pub g_pas: f64,
    /// Leak reversal potential (mV)
    pub e_pas: f64,
    /// Specific membrane capacitance (uF/cm^2)
    pub cm: f64,
    /// Time step (ms)
    pub dt: f64,
}

impl Default for PassiveCompartment {
    fn default() -> Self {
        PassiveCompartment {
            current_voltage: -65., // resting at the leak reversal
            v_init: -65., // initial potential (mV)
            length: 200., // length (um)
            diam: 2., // diameter (um)
            ra: 100., // axial resistance (ohm cm)
            g_pas: 1e-5, // low conductance to keep the channel effectively closed
            e_pas: -65., // leak reversal potential (mV)
            cm: 1., // membrane capacitance (uF/cm^2)
            dt: 0.025, // simulation time step (ms)
        }
    }
}

impl PassiveCompartment {
    /// Returns the side area of the cylinder in square microns,
    /// the full membrane area because there is only one segment
    pub fn surface_area_square_microns(&self) -> f64 {
        PI * self.diam * self.length
    }

    /// Returns the membrane area in square centimeters
    pub fn surface_area_square_cm(&self) -> f64 {
        self.surface_area_square_microns() * 1e-8
    }

    /// Calculates the input resistance in ohms from the membrane
    /// resistance over the full area, 1 / (g_pas * area)
    pub fn input_resistance_ohms(&self) -> f64 {
        1. / (self.g_pas * self.surface_area_square_cm())
    }

    /// Calculates the input resistance in megaohms
    pub fn input_resistance_megaohms(&self) -> f64 {
        self.input_resistance_ohms() * 1e-6
    }

    /// Calculates the membrane time constant in seconds,
    /// tau = rm * cm where rm is the inverse of g_pas,
    /// (uF/cm^2) / (S/cm^2) * 1e-6 = seconds
    pub fn membrane_time_constant_secs(&self) -> f64 {
        (self.cm / self.g_pas) * 1e-6
    }

    /// Calculates the change in voltage (mV) over one timestep given an
    /// input current in nA, the current is converted to a membrane
    /// current density (mA/cm^2) over the segment area
    pub fn get_dv_change(&self, input_current: f64) -> f64 {
        let current_density = input_current * 1e-6 / self.surface_area_square_cm();

        // (mA/cm^2) / (uF/cm^2) = V/ms, scaled to mV/ms
        self.dt * 1000. * (
            current_density - self.g_pas * (self.current_voltage - self.e_pas)
        ) / self.cm
    }
}

impl CurrentVoltage for PassiveCompartment {
    fn get_current_voltage(&self) -> f64 {
        self.current_voltage
    }
}

impl Timestep for PassiveCompartment {
    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
    }
}

impl IteratePassive for PassiveCompartment {
    fn iterate(&mut self, input_current: f64) {
        let dv = self.get_dv_change(input_current);
        self.current_voltage += dv;
    }
}

/// Applies the given current clamp to the compartment and iterates it
/// from `t = 0` until `tstop` (ms), recording the time and membrane
/// voltage at every step, returns the voltages from the model over time
pub fn run_current_clamp<T: IteratePassive>(
    cell: &mut T,
    stim: &CurrentClamp,
    tstop: f64,
) -> VoltageTrace {
    let mut times: Vec<f64> = vec![];
    let mut voltages: Vec<f64> = vec![];

    let dt = cell.get_dt();
    let mut t = 0.;

    while t <= tstop {
        times.push(t);
        voltages.push(cell.get_current_voltage());

        cell.iterate(stim.current_at(t));
        t += dt;
    }

    VoltageTrace { times, voltages }
}
