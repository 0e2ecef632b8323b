//! Discrete logistic estimator for fungal species numbers.
//!
//! A difference equation combining logistic growth with externally
//! supplied influx (dispersal) and efflux (attrition) series, modulated
//! by environmental scaling of the growth rate and carrying capacity.

use serde::{Deserialize, Serialize};

/// Environmental inputs to the species estimator.
///
/// `earth_size` multiplies the carrying capacity (fragmented terrain is
/// below one). `water_level` is a normalised 0–1 availability that scales
/// the growth rate. `forest_temperature` is in °C, with growth maximised
/// near a temperate 20 °C. `landscape_loading` is a stress term that
/// diminishes the carrying capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub earth_size: f64,
    pub water_level: f64,
    pub forest_temperature: f64,
    pub landscape_loading: f64,
}

impl Default for Environment {
    fn default() -> Self {
        // A moderately healthy forest.
        Environment {
            earth_size: 1.0,
            water_level: 0.7,
            forest_temperature: 20.0,
            landscape_loading: 0.2,
        }
    }
}

/// Model parameters for [`estimate_species_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesModel {
    /// Species present before the simulation begins.
    pub initial_population: f64,
    /// Intrinsic per-step growth rate before environmental adjustment.
    pub base_growth_rate: f64,
    /// Carrying capacity before environmental adjustment.
    pub base_carrying_capacity: f64,
    /// Size of the discrete time step.
    pub time_step: f64,
    pub environment: Environment,
}

impl Default for SpeciesModel {
    fn default() -> Self {
        SpeciesModel {
            initial_population: 1_000.0,
            base_growth_rate: 0.15,
            base_carrying_capacity: 100_000.0,
            time_step: 1.0,
            environment: Environment::default(),
        }
    }
}

/// Estimator validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FungalError {
    /// Influx and efflux series lengths differ.
    LengthMismatch { influx: usize, efflux: usize },
    NonPositiveTimeStep,
    NegativeInitialPopulation,
    /// Environmental scaling drove the carrying capacity to zero or below.
    NonPositiveCapacity,
}

impl std::fmt::Display for FungalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FungalError::LengthMismatch { influx, efflux } => write!(
                f,
                "influx and efflux series must have the same length ({} vs {})",
                influx, efflux
            ),
            FungalError::NonPositiveTimeStep => write!(f, "time step must be positive"),
            FungalError::NegativeInitialPopulation => {
                write!(f, "initial population must be non-negative")
            }
            FungalError::NonPositiveCapacity => {
                write!(f, "carrying capacity must be positive after scaling")
            }
        }
    }
}

impl std::error::Error for FungalError {}

fn scaled_growth_rate(base: f64, env: &Environment) -> f64 {
    // Water availability linearly boosts or reduces the growth rate.
    let water_adjustment = 0.5 + env.water_level;

    // Penalise deviations from an optimal 20 °C, capped at 80%.
    let optimal_temperature = 20.0;
    let temperature_penalty =
        1.0 - ((env.forest_temperature - optimal_temperature).abs() / 40.0).min(0.8);

    base * water_adjustment * temperature_penalty
}

fn scaled_carrying_capacity(base: f64, env: &Environment) -> f64 {
    let capacity = base * env.earth_size.max(0.0);
    // Landscape loading is a pressure that reduces available niches.
    capacity * (1.0 - env.landscape_loading).max(0.05)
}

/// Estimate species counts over time with a logistic difference equation.
///
/// Returns one entry per time step, with the initial population first.
/// The population is clamped at zero; efflux cannot drive it negative.
pub fn estimate_species_numbers(
    influx: &[f64],
    efflux: &[f64],
    model: &SpeciesModel,
) -> Result<Vec<f64>, FungalError> {
    if influx.len() != efflux.len() {
        return Err(FungalError::LengthMismatch {
            influx: influx.len(),
            efflux: efflux.len(),
        });
    }
    if model.time_step <= 0.0 {
        return Err(FungalError::NonPositiveTimeStep);
    }
    if model.initial_population < 0.0 {
        return Err(FungalError::NegativeInitialPopulation);
    }

    let growth_rate = scaled_growth_rate(model.base_growth_rate, &model.environment);
    let carrying_capacity =
        scaled_carrying_capacity(model.base_carrying_capacity, &model.environment);
    if carrying_capacity <= 0.0 {
        return Err(FungalError::NonPositiveCapacity);
    }

    let mut population = model.initial_population;
    let mut history = Vec::with_capacity(influx.len() + 1);
    history.push(population);

    for (step_influx, step_efflux) in influx.iter().zip(efflux) {
        let logistic_term = growth_rate * population * (1.0 - population / carrying_capacity);
        population =
            (population + model.time_step * logistic_term + step_influx - step_efflux).max(0.0);
        history.push(population);
    }

    Ok(history)
}
