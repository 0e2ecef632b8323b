//! Swirl-regime classification for stirred containers.
//!
//! A qualitative model of the steady → perturbed → turbulent storyline:
//! obstacles and dense carried objects shrink the Reynolds-number window
//! that supports a steady swirl, and perturbations bias the flow toward
//! turbulence. The thresholds are dimensionless weights chosen for quick
//! reasoning exercises, not fluid-dynamics fidelity.

use serde::{Deserialize, Serialize};

/// Validation failure for flow inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Named quantity must be non-negative.
    NegativeQuantity(&'static str),
    /// Viscosity of zero leaves the Reynolds number undefined.
    ZeroViscosity,
    /// Named modifier must lie in `[0, 1]`.
    OutOfUnitInterval(&'static str),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::NegativeQuantity(name) => write!(f, "{} must be non-negative", name),
            FlowError::ZeroViscosity => {
                write!(f, "dynamic_viscosity must be non-zero to compute a Reynolds number")
            }
            FlowError::OutOfUnitInterval(name) => {
                write!(f, "{} must be between 0 and 1 inclusive", name)
            }
        }
    }
}

impl std::error::Error for FlowError {}

/// Flow regime classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwirlRegime {
    SteadySwirl,
    PerturbedSwirl,
    Turbulence,
}

impl SwirlRegime {
    pub fn label(&self) -> &'static str {
        match self {
            SwirlRegime::SteadySwirl => "steady swirl",
            SwirlRegime::PerturbedSwirl => "perturbed swirl",
            SwirlRegime::Turbulence => "turbulence",
        }
    }
}

/// Structured summary of a swirl transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwirlTransition {
    /// Reynolds number of the base flow.
    pub reynolds_number: f64,
    /// Final regime classification.
    pub regime: SwirlRegime,
    /// Ordered regimes encountered while the flow develops.
    pub sequence: Vec<SwirlRegime>,
}

/// Reynolds number `Re = ρ·v·L / μ` for a flow configuration.
///
/// All quantities must be non-negative and the viscosity non-zero.
pub fn reynolds_number(
    density: f64,
    velocity: f64,
    length_scale: f64,
    dynamic_viscosity: f64,
) -> Result<f64, FlowError> {
    let quantities = [
        ("density", density),
        ("velocity", velocity),
        ("length_scale", length_scale),
        ("dynamic_viscosity", dynamic_viscosity),
    ];
    for (name, value) in quantities {
        if value < 0.0 {
            return Err(FlowError::NegativeQuantity(name));
        }
    }
    if dynamic_viscosity == 0.0 {
        return Err(FlowError::ZeroViscosity);
    }
    Ok(density * velocity * length_scale / dynamic_viscosity)
}

fn check_unit_interval(value: f64, name: &'static str) -> Result<f64, FlowError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FlowError::OutOfUnitInterval(name));
    }
    Ok(value)
}

/// Classify the swirl regime for a container with obstacles and movers.
///
/// `perturbation_intensity`, `obstacle_fraction`, and `mover_density` are
/// normalised weights in `[0, 1]` that compress the regime thresholds.
pub fn swirl_state(
    reynolds: f64,
    perturbation_intensity: f64,
    obstacle_fraction: f64,
    mover_density: f64,
) -> Result<SwirlRegime, FlowError> {
    if reynolds < 0.0 {
        return Err(FlowError::NegativeQuantity("reynolds"));
    }
    let perturbation = check_unit_interval(perturbation_intensity, "perturbation_intensity")?;
    let obstacles = check_unit_interval(obstacle_fraction, "obstacle_fraction")?;
    let movers = check_unit_interval(mover_density, "mover_density")?;

    // Base thresholds reflect the canonical laminar-to-turbulent shift.
    let base_steady_limit = 150.0;
    let base_turbulent_onset = 950.0;

    // Obstacles and dense movers narrow the steady window; perturbations
    // pull the turbulent onset downward.
    let modifier = (1.0 - (0.45 * obstacles + 0.35 * movers + 0.25 * perturbation)).max(0.25);

    let steady_limit = base_steady_limit * modifier;
    let turbulent_onset = base_turbulent_onset * modifier * (1.0 - 0.15 * perturbation);

    let regime = if reynolds < steady_limit {
        SwirlRegime::SteadySwirl
    } else if reynolds < turbulent_onset {
        SwirlRegime::PerturbedSwirl
    } else {
        SwirlRegime::Turbulence
    };
    Ok(regime)
}

/// Bundle a regime classification with the transition sequence leading
/// up to it.
#[allow(clippy::too_many_arguments)]
pub fn swirl_transition_report(
    density: f64,
    velocity: f64,
    length_scale: f64,
    dynamic_viscosity: f64,
    perturbation_intensity: f64,
    obstacle_fraction: f64,
    mover_density: f64,
) -> Result<SwirlTransition, FlowError> {
    let re_value = reynolds_number(density, velocity, length_scale, dynamic_viscosity)?;
    let regime = swirl_state(re_value, perturbation_intensity, obstacle_fraction, mover_density)?;

    let mut sequence = vec![SwirlRegime::SteadySwirl];
    if regime != SwirlRegime::SteadySwirl {
        sequence.push(SwirlRegime::PerturbedSwirl);
    }
    if regime == SwirlRegime::Turbulence {
        sequence.push(SwirlRegime::Turbulence);
    }

    Ok(SwirlTransition {
        reynolds_number: re_value,
        regime,
        sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reynolds_number() {
        let re = reynolds_number(1000.0, 2.0, 0.05, 0.001).unwrap();
        assert!((re - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_reynolds_rejects_bad_inputs() {
        assert_eq!(
            reynolds_number(-1.0, 2.0, 0.05, 0.001),
            Err(FlowError::NegativeQuantity("density"))
        );
        assert_eq!(reynolds_number(1.0, 2.0, 0.05, 0.0), Err(FlowError::ZeroViscosity));
    }

    #[test]
    fn test_swirl_state_baseline_thresholds() {
        assert_eq!(swirl_state(100.0, 0.0, 0.0, 0.0).unwrap(), SwirlRegime::SteadySwirl);
        assert_eq!(swirl_state(500.0, 0.0, 0.0, 0.0).unwrap(), SwirlRegime::PerturbedSwirl);
        assert_eq!(swirl_state(1000.0, 0.0, 0.0, 0.0).unwrap(), SwirlRegime::Turbulence);
    }

    #[test]
    fn test_obstacles_shrink_steady_window() {
        // Re = 100 is steady in an open container but not once obstacles
        // compress the threshold: 150 · (1 − 0.45) = 82.5.
        assert_eq!(swirl_state(100.0, 0.0, 1.0, 0.0).unwrap(), SwirlRegime::PerturbedSwirl);
    }

    #[test]
    fn test_modifier_floor() {
        // All modifiers maxed: floor at 0.25 keeps the thresholds positive.
        let regime = swirl_state(0.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(regime, SwirlRegime::SteadySwirl);
    }

    #[test]
    fn test_unit_interval_validation() {
        assert_eq!(
            swirl_state(100.0, 1.5, 0.0, 0.0),
            Err(FlowError::OutOfUnitInterval("perturbation_intensity"))
        );
        assert_eq!(
            swirl_state(100.0, 0.0, -0.1, 0.0),
            Err(FlowError::OutOfUnitInterval("obstacle_fraction"))
        );
    }

    #[test]
    fn test_transition_report_sequence() {
        let report = swirl_transition_report(1000.0, 2.0, 0.05, 0.001, 0.2, 0.1, 0.0).unwrap();
        assert_eq!(report.regime, SwirlRegime::Turbulence);
        assert_eq!(
            report.sequence,
            vec![
                SwirlRegime::SteadySwirl,
                SwirlRegime::PerturbedSwirl,
                SwirlRegime::Turbulence
            ]
        );

        let calm = swirl_transition_report(1.0, 0.1, 0.01, 0.001, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(calm.regime, SwirlRegime::SteadySwirl);
        assert_eq!(calm.sequence, vec![SwirlRegime::SteadySwirl]);
    }
}
