//! Core state types for the two-body simulation.
//!
//! Defines the body/system structs:
//! - `Body`   one point mass, using `NVec2` (2d)
//! - `System` the ordered body collection and the current simulation time `t`
//!
//! The force accumulator on each body is rebuilt from scratch every step;
//! between steps its contents are stale and must not be read.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // label, output only
    pub m: f64, // mass (kg)
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub f: NVec2, // per-step force accumulator (N)
}

impl Body {
    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Kinetic energy `0.5 * m * |v|^2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Euclidean distance to another body
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, fixed for the whole run
    pub t: f64, // time (s)
}

impl System {
    /// Sum of all bodies' momenta. No external forces act, so this is
    /// conserved up to floating-point rounding.
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    /// Sum of all bodies' kinetic energies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
