use std::error;
use std::fmt;
use std::io;

pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{naive_euler, symplectic_euler};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::engine::{run, step, Sample};

pub use configuration::config::{Method, ParametersConfig, BodyConfig, ScenarioConfig};

/// Everything that can go wrong while building or running a simulation.
#[derive(Debug)]
pub enum Error {
    /// The configuration cannot produce a runnable scenario
    InvalidConfig(String),
    /// Two bodies occupy the same position; the force between them is undefined
    DegenerateState { i: usize, j: usize, t: f64 },
    /// Writing a record to the output sink failed
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(reason) => {
                write!(f, "invalid scenario configuration: {reason}")
            }
            Error::DegenerateState { i, j, t } => {
                write!(
                    f,
                    "bodies {i} and {j} coincide at t = {t} s, gravitational force is undefined"
                )
            }
            Error::Io(e) => write!(f, "failed to write simulation output: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
