//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus the chosen [`Method`] and
//! produces the runtime bundle (`Scenario`) containing:
//! - the integration method
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, accumulators zeroed)
//! - the force law (`NewtonianGravity`)
//!
//! All configuration validation happens here; everything downstream assumes
//! a well-formed scenario

use crate::configuration::config::{Method, ScenarioConfig, BodyConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2};
use crate::simulation::forces::NewtonianGravity;
use crate::Error;

/// A fully-initialized simulation run
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the integration method, the parameters, the current system
/// state, and the gravitational force law. The engine consumes it step by
/// step until `parameters.steps` steps have been taken
#[derive(Debug)]
pub struct Scenario {
    pub method: Method,
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig, method: Method) -> Result<Self, Error> {
        // Gravity needs at least one pair
        if cfg.bodies.len() < 2 {
            return Err(Error::InvalidConfig(format!(
                "at least two bodies are required, got {}",
                cfg.bodies.len()
            )));
        }
        for bc in &cfg.bodies {
            if !(bc.m.is_finite() && bc.m > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "body `{}` needs a positive finite mass, got {}",
                    bc.name, bc.m
                )));
            }
        }
        if !(cfg.parameters.dt.is_finite() && cfg.parameters.dt > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "time step must be positive and finite, got {}",
                cfg.parameters.dt
            )));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // keeping configuration order (output records rely on it)
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            name: bc.name.clone(),
            m: bc.m,
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            f: NVec2::zeros(),
        }).collect();

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            g: p_cfg.g,
        };

        // Force law: direct pairwise gravity with the configured constant
        let gravity = NewtonianGravity { g: parameters.g };

        Ok(Self {
            method,
            parameters,
            system,
            gravity,
        })
    }
}
