use std::time::Instant;

use crate::error::Result;
use crate::simulation::params::{DAY, WEEK};
use crate::simulation::scenario::Scenario;
use crate::simulation::simulator::simulate;
use crate::visualization::renderer::render_frame;

/// Durations swept by both benchmarks
const DURATIONS: [i64; 5] = [DAY, WEEK, 2 * WEEK, 4 * WEEK, 8 * WEEK];

/// Time `simulate` over a range of durations for the scenario's bodies
/// Paste output directly into a spreadsheet to graph
pub fn bench_simulate(scenario: &Scenario) -> Result<()> {
    let params = &scenario.parameters;

    println!("duration_s,steps,rows,simulate_ms");
    for duration in DURATIONS {
        // Warm up
        simulate(&scenario.bodies, DAY.min(duration), params)?;

        let t0 = Instant::now();
        let log = simulate(&scenario.bodies, duration, params)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{},{},{:.3}", duration, duration / params.delta_time, log.capacity(), ms);
    }
    Ok(())
}

/// Time one full-trail frame over a range of log lengths.
/// Every frame re-projects the whole log, so cost grows with the row count.
pub fn bench_render(scenario: &Scenario) -> Result<()> {
    let params = &scenario.parameters;
    let frames = 5;

    println!("duration_s,rows,render_ms");
    for duration in DURATIONS {
        let log = simulate(&scenario.bodies, duration, params)?;

        let t0 = Instant::now();
        for _ in 0..frames {
            render_frame(&log, 0, &scenario.view)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{},{},{:.3}", duration, log.capacity(), ms);
    }
    Ok(())
}
