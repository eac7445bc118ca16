//! Newtonian gravity for the n-body core
//!
//! Computes the per-step force pass: one sweep over all unique body pairs
//! that accumulates equal-and-opposite contributions into each body's
//! force accumulator. The reference scenario has exactly one pair, but the
//! sweep sums correctly for any body count.

use crate::simulation::states::{NVec2, System};
use crate::Error;

/// Direct pairwise Newtonian gravity, raw 1/r^2.
///
/// There is deliberately no softening: the only guarded case is an exactly
/// zero separation, where the pull direction is undefined. Anything else,
/// including near-singular close approaches, propagates through untouched.
#[derive(Debug)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Rebuild every body's force accumulator for the current positions.
    ///
    /// Pairs are visited in increasing (i, j) order, i < j, and their
    /// contributions summed, so the result is deterministic for any body
    /// count and the per-pair forces obey Newton's third law exactly
    /// (the pull on j is the bitwise negation of the pull on i).
    ///
    /// Fails with [`Error::DegenerateState`] if two bodies coincide. No
    /// position or velocity is touched here, so a failed pass leaves the
    /// observable state of the step untouched.
    pub fn accumulate_forces(&self, sys: &mut System) -> Result<(), Error> {
        let n = sys.bodies.len();

        // Zero the accumulators; whatever the previous step left is stale
        for b in sys.bodies.iter_mut() {
            b.f = NVec2::zeros();
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let xi = sys.bodies[i].x;
                let mi = sys.bodies[i].m;
                let xj = sys.bodies[j].x;
                let mj = sys.bodies[j].m;

                // d points from i to j: i is pulled along +d, j along -d
                let d = xj - xi;

                // Squared separation |d|^2
                let r2 = d.norm_squared();
                if r2 == 0.0 {
                    return Err(Error::DegenerateState { i, j, t: sys.t });
                }

                // Unit direction from i to j
                let dir = d / r2.sqrt();

                // F = G * m_i * m_j / |d|^2
                let f_mag = self.g * (mi * mj) / r2;

                let df = dir * f_mag;
                sys.bodies[i].f += df; // pull on i, toward j
                sys.bodies[j].f -= df; // equal and opposite pull on j
            }
        }

        Ok(())
    }

    /// Total gravitational potential energy, each unique pair counted once:
    /// `sum over i < j of -G * m_i * m_j / |x_j - x_i|`
    pub fn potential_energy(&self, sys: &System) -> f64 {
        let n = sys.bodies.len();
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = sys.bodies[i].distance_to(&sys.bodies[j]);
                pe -= self.g * sys.bodies[i].m * sys.bodies[j].m / r;
            }
        }
        pe
    }
}
