use std::{
    env,
    fs::read_to_string,
    io::{Error, ErrorKind, Result},
    path::Path,
};
use toml::{from_str, Value};
use passive_dendrite::compartment::{run_current_clamp, PassiveCompartment};
use passive_dendrite::error::PassiveDendriteError;
use passive_dendrite::figures::{date_stamp, resolve_figure_path};
use passive_dendrite::measure::{measure_passive_properties, print_passive_estimates};
use passive_dendrite::plot::plot_voltage_trace;
use passive_dendrite::stimulus::CurrentClamp;


fn parse_f64(value: &Value, field_name: &str) -> Result<f64> {
    match value.as_float() {
        Some(parsed) => Ok(parsed),
        None => match value.as_integer() {
            Some(parsed) => Ok(parsed as f64),
            None => Err(
                Error::new(ErrorKind::InvalidData, format!("Cannot parse {} as float", field_name))
            ),
        },
    }
}

fn parse_value_with_default<T>(
    table: &Value,
    key: &str,
    parser: impl Fn(&Value, &str) -> Result<T>,
    default: T,
) -> Result<T> {
    table
        .get(key)
        .map_or(Ok(default), |value| parser(value, key))
}

#[derive(Clone)]
struct SimulationParameters {
    compartment: PassiveCompartment,
    stim: CurrentClamp,
    tstop: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            compartment: PassiveCompartment::default(),
            stim: CurrentClamp::default(),
            tstop: 20000., // stop sim at 20000 ms or 20 s
        }
    }
}

fn get_compartment_params(compartment: &mut PassiveCompartment, table: &Value) -> Result<()> {
    compartment.length = parse_value_with_default(table, "length", parse_f64, compartment.length)?;
    compartment.diam = parse_value_with_default(table, "diam", parse_f64, compartment.diam)?;
    compartment.ra = parse_value_with_default(table, "ra", parse_f64, compartment.ra)?;
    compartment.g_pas = parse_value_with_default(table, "g_pas", parse_f64, compartment.g_pas)?;
    compartment.e_pas = parse_value_with_default(table, "e_pas", parse_f64, compartment.e_pas)?;
    compartment.cm = parse_value_with_default(table, "cm", parse_f64, compartment.cm)?;
    compartment.v_init = parse_value_with_default(table, "v_init", parse_f64, compartment.v_init)?;
    compartment.dt = parse_value_with_default(table, "dt", parse_f64, compartment.dt)?;

    compartment.current_voltage = compartment.v_init;

    Ok(())
}

fn get_stimulus_params(stim: &mut CurrentClamp, table: &Value) -> Result<()> {
    stim.amp = parse_value_with_default(table, "amp", parse_f64, stim.amp)?;
    stim.delay = parse_value_with_default(table, "delay", parse_f64, stim.delay)?;
    stim.dur = parse_value_with_default(table, "dur", parse_f64, stim.dur)?;
    stim.noise.mean = parse_value_with_default(table, "gaussian_mean", parse_f64, stim.noise.mean)?;
    stim.noise.std = parse_value_with_default(table, "gaussian_std", parse_f64, stim.noise.std)?;
    stim.noise.min = parse_value_with_default(table, "gaussian_min", parse_f64, stim.noise.min)?;
    stim.noise.max = parse_value_with_default(table, "gaussian_max", parse_f64, stim.noise.max)?;

    Ok(())
}

fn get_simulation_parameters(config_file: &str) -> Result<SimulationParameters> {
    let toml_content = read_to_string(config_file)?;
    let config: Value = match from_str(&toml_content) {
        Ok(value) => value,
        Err(e) => return Err(Error::new(ErrorKind::InvalidData, format!("Cannot read config: {}", e))),
    };

    let mut sim_params = SimulationParameters::default();

    if let Some(compartment_table) = config.get("compartment") {
        get_compartment_params(&mut sim_params.compartment, compartment_table)?;
    }

    if let Some(stimulus_table) = config.get("stimulus") {
        get_stimulus_params(&mut sim_params.stim, stimulus_table)?;
    }

    if let Some(simulation_table) = config.get("simulation") {
        sim_params.tstop = parse_value_with_default(simulation_table, "tstop", parse_f64, sim_params.tstop)?;
    }

    Ok(sim_params)
}

/// Splits the command line arguments into an optional `.toml` parameter
/// file and an optional figure filename suffix, in either order
fn split_args(args: &[String]) -> Result<(Option<&str>, Option<&str>)> {
    let mut config_file: Option<&str> = None;
    let mut suffix: Option<&str> = None;

    for arg in args {
        if arg.ends_with(".toml") {
            if config_file.is_some() {
                return Err(Error::new(ErrorKind::InvalidInput, "Only one .toml argument file allowed"));
            }
            config_file = Some(arg);
        } else {
            if suffix.is_some() {
                return Err(Error::new(ErrorKind::InvalidInput, "Only one figure suffix allowed"));
            }
            suffix = Some(arg);
        }
    }

    Ok((config_file, suffix))
}

fn main() -> std::result::Result<(), PassiveDendriteError> {
    let args: Vec<String> = env::args().collect();
    let (config_file, suffix) = split_args(&args[1..])?;

    let sim_params = match config_file {
        Some(file) => {
            println!("config: {}", file);
            get_simulation_parameters(file)?
        },
        None => SimulationParameters::default(),
    };

    let stamp = date_stamp();
    let outfig = resolve_figure_path(Path::new("figs"), &stamp, suffix)?;

    let mut dend = sim_params.compartment.clone();
    let stim = sim_params.stim;

    println!("Running current clamp for {} ms...", sim_params.tstop);
    let trace = run_current_clamp(&mut dend, &stim, sim_params.tstop);

    let estimates = measure_passive_properties(&dend, &stim, &trace)?;
    print_passive_estimates(&estimates);

    plot_voltage_trace(&trace, &outfig)
        .map_err(|e| PassiveDendriteError::PlottingError(e.to_string()))?;
    println!("Saved figure to {}", outfig.display());

    Ok(())
}
