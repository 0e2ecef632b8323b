//! Vertical rocket launch and soft-landing simulation.
//!
//! A single-stage rocket burns at full throttle for a fixed ascent
//! window, coasts, then triggers a landing burn once its stopping
//! distance approaches the remaining altitude. A proportional controller
//! tracks an altitude-dependent descent profile down to touchdown, which
//! is interpolated within the final step for an accurate landing
//! assessment.

use serde::{Deserialize, Serialize};

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.81;

/// Snapshot of the rocket's motion state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketState {
    /// Simulation time stamp in seconds.
    pub time: f64,
    /// Altitude above the pad in metres.
    pub altitude: f64,
    /// Vertical velocity in m/s, positive upward.
    pub velocity: f64,
    /// Normalised throttle command in `[0, 1]`.
    pub throttle: f64,
}

/// Summary of a launch-to-landing simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub states: Vec<RocketState>,
    pub touchdown_velocity: f64,
    pub max_altitude: f64,
}

/// Simulation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketError {
    /// Named parameter must be positive.
    InvalidParameter(&'static str),
    /// Thrust-to-weight below one: the rocket cannot brake its descent.
    CannotHover,
    /// The simulation window elapsed (or the rocket hit the pad too
    /// fast) without meeting the soft-landing criteria.
    NoSoftLanding,
}

impl std::fmt::Display for RocketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RocketError::InvalidParameter(name) => write!(f, "{} must be positive", name),
            RocketError::CannotHover => write!(
                f,
                "the rocket cannot hover; increase max_thrust or reduce mass to allow landing burns"
            ),
            RocketError::NoSoftLanding => {
                write!(f, "rocket did not achieve a soft landing within the simulation window")
            }
        }
    }
}

impl std::error::Error for RocketError {}

/// Configuration for [`simulate_vertical_landing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Rocket mass in kilograms.
    pub mass: f64,
    /// Maximum engine thrust in Newtons.
    pub max_thrust: f64,
    /// Duration of the full-throttle ascent burn, seconds.
    pub burn_time: f64,
    /// Altitude margin added to the stopping-distance criterion before
    /// the landing burn ignites, metres.
    pub controller_activation_altitude: f64,
    /// Gain (1/s) linking altitude to the target descent velocity.
    pub descent_gain: f64,
    /// Gain converting velocity error to an acceleration command.
    pub damping_gain: f64,
    /// Cap on the commanded descent rate, m/s.
    pub max_descent_rate: f64,
    /// Integration timestep, seconds.
    pub dt: f64,
    /// Simulation abort horizon, seconds.
    pub max_time: f64,
    /// Maximum pad altitude counted as a successful landing, metres.
    pub landing_altitude_tolerance: f64,
    /// Maximum |velocity| at touchdown counted as soft, m/s.
    pub landing_velocity_tolerance: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        LandingConfig {
            mass: 2_000.0,
            max_thrust: 45_000.0,
            burn_time: 20.0,
            controller_activation_altitude: 200.0,
            descent_gain: 0.3,
            damping_gain: 1.2,
            max_descent_rate: 60.0,
            dt: 0.05,
            max_time: 400.0,
            landing_altitude_tolerance: 0.5,
            landing_velocity_tolerance: 0.5,
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Throttle command that brakes the rocket toward rest at ground level.
fn landing_controller(altitude: f64, velocity: f64, config: &LandingConfig) -> f64 {
    let altitude = altitude.max(0.0);
    let desired_velocity = -(config.max_descent_rate).min(config.descent_gain * altitude);
    let velocity_error = desired_velocity - velocity;
    let desired_acceleration = velocity_error * config.damping_gain;

    let acceleration_command = desired_acceleration + GRAVITY;
    clamp_unit(acceleration_command * config.mass / config.max_thrust)
}

/// Launch vertically and guide the rocket back to a gentle landing.
pub fn simulate_vertical_landing(config: &LandingConfig) -> Result<SimulationResult, RocketError> {
    simulate(config, None)
}

/// Like [`simulate_vertical_landing`], with a throttle modifier hook.
///
/// `modifier(time, altitude, velocity)` returns a multiplier that is
/// clamped to `[0, 1]` and applied to the commanded throttle, useful for
/// exploring thrust limits or engine faults.
pub fn simulate_vertical_landing_with(
    config: &LandingConfig,
    modifier: impl Fn(f64, f64, f64) -> f64,
) -> Result<SimulationResult, RocketError> {
    simulate(config, Some(&modifier))
}

fn simulate(
    config: &LandingConfig,
    modifier: Option<&dyn Fn(f64, f64, f64) -> f64>,
) -> Result<SimulationResult, RocketError> {
    if config.burn_time <= 0.0 {
        return Err(RocketError::InvalidParameter("burn_time"));
    }
    if config.dt <= 0.0 {
        return Err(RocketError::InvalidParameter("dt"));
    }
    if config.mass <= 0.0 {
        return Err(RocketError::InvalidParameter("mass"));
    }
    if config.max_thrust <= 0.0 {
        return Err(RocketError::InvalidParameter("max_thrust"));
    }

    let upward_acceleration_available = config.max_thrust / config.mass - GRAVITY;
    if upward_acceleration_available <= 0.0 {
        return Err(RocketError::CannotHover);
    }

    let mut time = 0.0;
    let mut altitude = 0.0;
    let mut velocity = 0.0;
    let mut states = vec![RocketState {
        time,
        altitude,
        velocity,
        throttle: 0.0,
    }];
    let mut max_altitude = altitude;
    let mut landed = false;
    let mut touchdown_velocity = 0.0;
    let mut landing_burn_active = false;

    while time < config.max_time {
        let mut throttle = if time < config.burn_time {
            1.0
        } else {
            if !landing_burn_active && velocity < 0.0 {
                let required_stop_distance =
                    velocity * velocity / (2.0 * upward_acceleration_available.max(1e-6));
                if altitude <= required_stop_distance + config.controller_activation_altitude {
                    landing_burn_active = true;
                }
            }
            if landing_burn_active {
                landing_controller(altitude, velocity, config)
            } else {
                0.0
            }
        };

        if let Some(modifier) = modifier {
            throttle = clamp_unit(throttle * clamp_unit(modifier(time, altitude, velocity)));
        }

        let acceleration = throttle * config.max_thrust / config.mass - GRAVITY;

        let prev_altitude = altitude;
        let prev_velocity = velocity;

        velocity = prev_velocity + acceleration * config.dt;
        altitude = prev_altitude + velocity * config.dt;
        let next_time = time + config.dt;

        if altitude <= 0.0 && next_time > config.burn_time {
            // Interpolate within the final step to refine the touchdown.
            let touchdown_time;
            if prev_altitude <= 0.0 {
                touchdown_time = next_time;
                touchdown_velocity = velocity;
            } else {
                let altitude_drop = prev_altitude - altitude;
                let touchdown_fraction = if altitude_drop == 0.0 {
                    1.0
                } else {
                    prev_altitude / altitude_drop
                };
                touchdown_time = time + config.dt * touchdown_fraction;
                touchdown_velocity =
                    prev_velocity + acceleration * config.dt * touchdown_fraction;
            }

            let altitude_before_touchdown = prev_altitude.max(0.0);
            max_altitude = max_altitude.max(altitude_before_touchdown);
            landed = altitude_before_touchdown <= config.landing_altitude_tolerance
                && touchdown_velocity.abs() <= config.landing_velocity_tolerance;
            altitude = 0.0;
            velocity = touchdown_velocity;
            time = touchdown_time;
            states.push(RocketState {
                time,
                altitude,
                velocity,
                throttle,
            });
            break;
        }

        time = next_time;
        max_altitude = max_altitude.max(altitude);
        states.push(RocketState {
            time,
            altitude,
            velocity,
            throttle,
        });
    }

    if !landed {
        return Err(RocketError::NoSoftLanding);
    }

    Ok(SimulationResult {
        states,
        touchdown_velocity,
        max_altitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mission_lands_softly() {
        let result = simulate_vertical_landing(&LandingConfig::default()).unwrap();
        assert!(result.touchdown_velocity.abs() <= 0.5);
        assert!(result.max_altitude > 100.0);
        let final_state = result.states.last().unwrap();
        assert_eq!(final_state.altitude, 0.0);
    }

    #[test]
    fn test_states_start_on_the_pad() {
        let result = simulate_vertical_landing(&LandingConfig::default()).unwrap();
        let first = result.states[0];
        assert_eq!(first.time, 0.0);
        assert_eq!(first.altitude, 0.0);
        assert_eq!(first.velocity, 0.0);
    }

    #[test]
    fn test_reduced_thrust_lands_later() {
        let config = LandingConfig {
            max_thrust: 42_000.0,
            controller_activation_altitude: 180.0,
            damping_gain: 1.5,
            ..LandingConfig::default()
        };
        let result = simulate_vertical_landing(&config).unwrap();
        assert!(result.max_altitude > 100.0);
        assert!(result.states.last().unwrap().time > 120.0);
    }

    #[test]
    fn test_parameter_validation() {
        let bad = LandingConfig {
            burn_time: 0.0,
            ..LandingConfig::default()
        };
        assert_eq!(
            simulate_vertical_landing(&bad),
            Err(RocketError::InvalidParameter("burn_time"))
        );

        let heavy = LandingConfig {
            mass: 100_000.0,
            ..LandingConfig::default()
        };
        assert_eq!(simulate_vertical_landing(&heavy), Err(RocketError::CannotHover));
    }

    #[test]
    fn test_dead_engine_modifier_crashes() {
        // Engine cuts out after the ascent burn: no landing burn, no soft
        // landing.
        let result = simulate_vertical_landing_with(&LandingConfig::default(), |time, _, _| {
            if time < 20.0 {
                1.0
            } else {
                0.0
            }
        });
        assert_eq!(result, Err(RocketError::NoSoftLanding));
    }

    #[test]
    fn test_unit_modifier_matches_unmodified_run() {
        let plain = simulate_vertical_landing(&LandingConfig::default()).unwrap();
        let modified =
            simulate_vertical_landing_with(&LandingConfig::default(), |_, _, _| 1.0).unwrap();
        assert_eq!(plain.touchdown_velocity, modified.touchdown_velocity);
        assert_eq!(plain.states.len(), modified.states.len());
    }
}
