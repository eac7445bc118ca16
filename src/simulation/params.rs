//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings:
//! - fixed integration step size and total step count,
//! - the gravitational constant `g`
//!
//! All three are fixed for the lifetime of a run.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub steps: u32, // number of steps in a full run
    pub g: f64, // gravitational constant
}
