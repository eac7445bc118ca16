//! Step dispatch and the record-producing run loop
//!
//! `step` advances a `Scenario` by one step with its chosen method and
//! samples the tracked pair; `run` repeats that for the configured number
//! of steps, writing one TSV record per step to the output sink

use std::fmt;
use std::io::Write;

use crate::configuration::config::Method;
use crate::simulation::integrator::{naive_euler, symplectic_euler};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, System};
use crate::Error;

/// One output record: positions of the tracked pair after a step, stamped
/// with the elapsed time at which that step started
///
/// The tracked pair is always bodies 0 and 1 in configuration order, even
/// when the system carries more bodies
#[derive(Debug, Clone)]
pub struct Sample {
    pub t: f64, // elapsed time at the start of the step (s)
    pub x0: NVec2, // post-step position of body 0 (m)
    pub x1: NVec2, // post-step position of body 1 (m)
    pub distance: f64, // post-step separation of the pair (m)
}

/// Tab-separated record: `t  x0  y0  x1  y1  distance`, one line
///
/// Plain `{}` formatting keeps every value at full precision (the shortest
/// decimal form that round-trips the f64)
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.t, self.x0.x, self.x0.y, self.x1.x, self.x1.y, self.distance
        )
    }
}

/// Advance the scenario by one step and sample the tracked pair.
///
/// Dispatches on the scenario's method. On failure the system keeps its
/// pre-step positions, velocities and time
pub fn step(scenario: &mut Scenario) -> Result<Sample, Error> {
    // Records carry the time the step started from, not the time reached
    let t = scenario.system.t;

    match scenario.method {
        Method::Naive => {
            naive_euler(&mut scenario.system, &scenario.gravity, &scenario.parameters)?
        }
        Method::Symplectic => {
            symplectic_euler(&mut scenario.system, &scenario.gravity, &scenario.parameters)?
        }
    }

    let b0 = &scenario.system.bodies[0];
    let b1 = &scenario.system.bodies[1];
    Ok(Sample {
        t,
        x0: b0.x,
        x1: b1.x,
        distance: b0.distance_to(b1),
    })
}

/// Run the scenario to completion, writing one record per step.
///
/// Emits exactly `parameters.steps` lines to `out` and returns the final
/// system state for inspection. The scenario is consumed; a finished run
/// cannot be resumed
pub fn run(mut scenario: Scenario, out: &mut impl Write) -> Result<System, Error> {
    for _ in 0..scenario.parameters.steps {
        let sample = step(&mut scenario)?;
        writeln!(out, "{sample}")?;
    }
    Ok(scenario.system)
}
