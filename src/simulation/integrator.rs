//! Fixed-step Euler integrators for the n-body system
//!
//! Provides the explicit ("naive") and semi-implicit ("symplectic")
//! variants, both driven by `NewtonianGravity` and `Parameters`. They share
//! the force pass and differ in one line: which velocity advances the
//! position.

use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::System;
use crate::Error;

/// Advance the system by one step using explicit (naive) Euler.
///
/// Positions advance with the pre-step velocity, decoupled from the
/// velocity update. Not symplectic: orbital energy drifts without bound,
/// which is exactly the behavior this variant exists to demonstrate.
pub fn naive_euler(
    sys: &mut System,
    gravity: &NewtonianGravity,
    params: &Parameters,
) -> Result<(), Error> {
    let dt = params.dt; // time step dt

    // All forces come from the pre-step position snapshot; no body moves
    // until the pass over every pair is complete
    gravity.accumulate_forces(sys)?;

    for b in sys.bodies.iter_mut() {
        // a_n = f_n / m
        let a = b.f / b.m;

        // v_n+1 = v_n + a_n * dt
        let new_v = b.v + a * dt;

        // x_n+1 = x_n + v_n * dt  (pre-step velocity)
        b.x += b.v * dt;
        b.v = new_v;
    }

    // Increment the system time by one full step
    sys.t += dt;
    Ok(())
}

/// Advance the system by one step using semi-implicit (symplectic) Euler.
///
/// Velocities update first; positions then advance with the just-updated
/// velocity. First order like the naive variant, but symplectic, so energy
/// oscillates boundedly instead of drifting.
pub fn symplectic_euler(
    sys: &mut System,
    gravity: &NewtonianGravity,
    params: &Parameters,
) -> Result<(), Error> {
    let dt = params.dt; // time step dt

    // Same common force snapshot as the naive variant
    gravity.accumulate_forces(sys)?;

    for b in sys.bodies.iter_mut() {
        // a_n = f_n / m
        let a = b.f / b.m;

        // v_n+1 = v_n + a_n * dt
        b.v += a * dt;

        // x_n+1 = x_n + v_n+1 * dt  (just-updated velocity)
        b.x += b.v * dt;
    }

    // Increment the system time by one full step
    sys.t += dt;
    Ok(())
}
