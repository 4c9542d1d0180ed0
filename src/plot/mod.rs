//! Renders a recorded voltage trace to a PNG line plot.

use std::path::Path;
use plotters::prelude::*;
use crate::trace::VoltageTrace;


/// Save the membrane voltage over time as a PNG plot with axes and labels
pub fn plot_voltage_trace(
    trace: &VoltageTrace,
    filename: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let t_min = trace.times.first().cloned().unwrap_or(0.);
    let t_max = trace.times.last().cloned().unwrap_or(1.);

    let mut y_min = trace.min_voltage().unwrap_or(-1.);
    let mut y_max = trace.max_voltage().unwrap_or(1.);

    if (y_max - y_min).abs() < 1e-9 {
        // flat trace, open up a fixed window around it
        y_min -= 1.;
        y_max += 1.;
    } else {
        // add a 10% margin around the data range
        let margin = 0.1 * (y_max - y_min);
        y_min -= margin;
        y_max += margin;
    }

    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Membrane voltage vs time", ("sans-serif", 30))
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("time (ms)")
        .y_desc("voltage (mV)")
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(LineSeries::new(
        trace.times.iter().zip(trace.voltages.iter()).map(|(&t, &v)| (t, v)),
        &BLUE,
    ))?;

    root.present()?;

    Ok(())
}
