//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario, plus the integration-method selector:
//!
//! - [`Method`]           – which Euler variant advances the system
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! The method is not part of the scenario file; it is chosen per run on the
//! command line and parsed into [`Method`] exactly once.
//!
//! # YAML format
//! The reference Earth–Moon scenario as YAML (also available built-in via
//! [`ScenarioConfig::earth_moon`]):
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0      # step size, seconds
//!   steps: 8760     # 24 * 365 one-hour steps
//!   G: 6.674e-11    # gravitational constant
//!
//! bodies:
//!   - name: Earth
//!     m: 5.9722e24
//!     x: [0.0, 0.0]
//!     v: [0.0, -12.5]
//!   - name: Moon
//!     m: 7.342e22
//!     x: [384405000.0, 0.0]
//!     v: [0.0, 1022.0]
//! ```
//!
//! The scenario builder maps this configuration into the runtime types in
//! `simulation`, validating it on the way.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// Which Euler variant advances the system
/// `naive` or `symplectic` on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Naive, // Explicit Euler: position advances with the pre-step velocity. Energy drifts without bound
    Symplectic, // Semi-implicit Euler: position advances with the just-updated velocity. Energy error stays bounded
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Method::Naive),
            "symplectic" => Ok(Method::Symplectic),
            other => Err(Error::InvalidConfig(format!(
                "unknown integration method `{other}`, expected `naive` or `symplectic`"
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Naive => write!(f, "naive"),
            Method::Symplectic => write!(f, "symplectic"),
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step size (s)
    pub steps: u32, // number of steps in a full run
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // label carried through to the output, no semantic effect
    pub m: f64, // mass of the body (kg)
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}

impl ScenarioConfig {
    /// The built-in reference scenario: Earth and Moon, one simulated year
    /// of one-hour steps.
    pub fn earth_moon() -> Self {
        Self {
            parameters: ParametersConfig {
                dt: 3600.0, // one hour
                steps: 24 * 365,
                g: 6.674e-11,
            },
            bodies: vec![
                BodyConfig {
                    name: "Earth".to_string(),
                    m: 5.9722e24,
                    x: [0.0, 0.0],
                    v: [0.0, -12.5],
                },
                BodyConfig {
                    name: "Moon".to_string(),
                    m: 7.342e22,
                    x: [384_405_000.0, 0.0],
                    v: [0.0, 1022.0],
                },
            ],
        }
    }
}
