//! # Passive Dendrite
//!
//! `passive_dendrite` is a package for simulating a passive (leak-only)
//! dendrite compartment under a current clamp and deriving its passive
//! electrical parameters. A hyperpolarizing current step is applied to a
//! single cylindrical segment, the membrane voltage is recorded over time,
//! and the input resistance and membrane time constant are each computed
//! two ways: analytically from the model parameters and empirically from
//! the recorded trace. The trace can be rendered to a date stamped,
//! auto numbered PNG plot.
//!
//! The membrane model exposes its iteration through the [`IteratePassive`]
//! trait so alternative compartment models can be driven by the same
//! current clamp runner.
//!
//! [`IteratePassive`]: crate::compartment::IteratePassive
//!
//! ## Example Code
//!
//! ### Measuring passive properties of the default compartment
//!
//! ```rust
//! use passive_dendrite::compartment::{PassiveCompartment, run_current_clamp};
//! use passive_dendrite::stimulus::CurrentClamp;
//! use passive_dendrite::measure::measure_passive_properties;
//!
//! // coarse timestep to keep the example fast, tau is 100 ms
//! let mut dend = PassiveCompartment { dt: 1., ..PassiveCompartment::default() };
//! let stim = CurrentClamp { delay: 100., dur: 2000., ..CurrentClamp::default() };
//!
//! let trace = run_current_clamp(&mut dend, &stim, 3000.);
//! let estimates = measure_passive_properties(&dend, &stim, &trace)
//!     .expect("Trace should be measurable");
//!
//! // dv/di agrees with 1 / (g_pas * area)
//! let relative_error = (estimates.rin_measured_megaohms
//!     - estimates.rin_calculated_megaohms).abs()
//!     / estimates.rin_calculated_megaohms;
//! assert!(relative_error < 0.05);
//! ```

pub mod compartment;
pub mod distribution;
pub mod error;
pub mod figures;
pub mod measure;
pub mod plot;
pub mod stimulus;
pub mod trace;
