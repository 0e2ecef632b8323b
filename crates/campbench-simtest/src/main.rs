//! Campbench Headless Validation Harness
//!
//! Sweeps every exercise module in-process — no files, no networking.
//!
//! Usage:
//!   cargo run -p campbench-simtest
//!   cargo run -p campbench-simtest -- --verbose
//!   cargo run -p campbench-simtest -- --json

use campbench_logic::complex::Complex;
use campbench_logic::fluids::{swirl_state, swirl_transition_report, SwirlRegime};
use campbench_logic::folding::SequenceFly;
use campbench_logic::fungal::{estimate_species_numbers, Environment, SpeciesModel};
use campbench_logic::nucleic::{dna_to_rna, reverse_rna_complement};
use campbench_logic::primes::{armstrong_numbers, prime_series, twin_prime_pairs};
use campbench_logic::railway::{RailwayNetwork, Station, Track};
use campbench_logic::rocket::{simulate_vertical_landing, LandingConfig};
use campbench_logic::symmetry::analyze_fly_landscape;
use campbench_logic::zeta::{find_first_zero, riemann_zeta, ZeroSearch};
use serde::Serialize;
use std::f64::consts::PI;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Zero-search summary exported by `--json`.
#[derive(Serialize)]
struct ZeroReport {
    search: ZeroSearch,
    zero_real: f64,
    zero_imag: f64,
    residual_magnitude: f64,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    println!("=== Campbench Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Zeta evaluator against classical values
    results.extend(validate_zeta_values());

    // 2. Critical-line zero search
    results.extend(validate_zero_search(json));

    // 3. Prime and digit-power series
    results.extend(validate_primes());

    // 4. Nucleic-acid helpers
    results.extend(validate_nucleic());

    // 5. Swirl regime sweep
    results.extend(validate_fluids());

    // 6. Fungal population trajectory
    results.extend(validate_fungal());

    // 7. Rocket landing
    results.extend(validate_rocket());

    // 8. Railway network analytics
    results.extend(validate_railway());

    // 9. Folding landscape symmetry
    results.extend(validate_symmetry());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Zeta evaluator ───────────────────────────────────────────────────

fn validate_zeta_values() -> Vec<TestResult> {
    println!("--- Zeta Evaluator ---");
    let mut results = Vec::new();

    let basel = riemann_zeta(Complex::from_real(2.0), 1e-14, 512);
    let expected = PI * PI / 6.0;
    results.push(match basel {
        Ok(value) => {
            let rel = (value.re - expected).abs() / expected;
            TestResult {
                name: "zeta_two_basel".into(),
                passed: rel < 1e-12 && value.im.abs() < 1e-12,
                detail: format!("ζ(2) = {:.15}, relative error {:.2e}", value.re, rel),
            }
        }
        Err(e) => TestResult {
            name: "zeta_two_basel".into(),
            passed: false,
            detail: format!("evaluation failed: {}", e),
        },
    });

    let fourth = riemann_zeta(Complex::from_real(4.0), 1e-14, 128);
    let expected = PI.powi(4) / 90.0;
    results.push(match fourth {
        Ok(value) => {
            let rel = (value.re - expected).abs() / expected;
            TestResult {
                name: "zeta_four".into(),
                passed: rel < 1e-12,
                detail: format!("ζ(4) = {:.15}, relative error {:.2e}", value.re, rel),
            }
        }
        Err(e) => TestResult {
            name: "zeta_four".into(),
            passed: false,
            detail: format!("evaluation failed: {}", e),
        },
    });

    // Guard rails: domain and near-pole rejections must fire.
    let domain = riemann_zeta(Complex::from_real(-1.0), 1e-12, 64);
    results.push(TestResult {
        name: "zeta_domain_guard".into(),
        passed: domain.is_err(),
        detail: format!("Re(s) ≤ 0 rejected: {:?}", domain.err()),
    });

    let pole = riemann_zeta(Complex::from_real(1.0 + 1e-9), 1e-6, 64);
    results.push(TestResult {
        name: "zeta_near_pole_guard".into(),
        passed: pole.is_err(),
        detail: format!("s ≈ 1 rejected: {:?}", pole.err()),
    });

    results
}

// ── 2. Zero search ──────────────────────────────────────────────────────

fn validate_zero_search(json: bool) -> Vec<TestResult> {
    println!("--- Critical-Line Zero Search ---");
    let mut results = Vec::new();

    let search = ZeroSearch::default();
    match find_first_zero(&search) {
        Ok(zero) => {
            let target = 14.134725141;
            let rel = (zero.im - target).abs() / target;
            let residual = riemann_zeta(zero, 1e-14, 512)
                .map(|v| v.abs())
                .unwrap_or(f64::INFINITY);
            results.push(TestResult {
                name: "first_zero_location".into(),
                passed: rel < 1e-6,
                detail: format!("t = {:.9}, relative error {:.2e}", zero.im, rel),
            });
            results.push(TestResult {
                name: "first_zero_residual".into(),
                passed: residual < 5e-9,
                detail: format!("|ζ(1/2 + it)| = {:.2e}", residual),
            });

            if json {
                let report = ZeroReport {
                    search,
                    zero_real: zero.re,
                    zero_imag: zero.im,
                    residual_magnitude: residual,
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => results.push(TestResult {
                        name: "zero_report_json".into(),
                        passed: false,
                        detail: format!("serialization failed: {}", e),
                    }),
                }
            }
        }
        Err(e) => results.push(TestResult {
            name: "first_zero_location".into(),
            passed: false,
            detail: format!("search failed: {}", e),
        }),
    }

    results
}

// ── 3. Primes ───────────────────────────────────────────────────────────

fn validate_primes() -> Vec<TestResult> {
    println!("--- Prime Series ---");
    let mut results = Vec::new();

    let primes = prime_series(100);
    results.push(TestResult {
        name: "prime_count_to_100".into(),
        passed: primes.len() == 25,
        detail: format!("{} primes ≤ 100", primes.len()),
    });

    let twins = twin_prime_pairs(100);
    results.push(TestResult {
        name: "twin_primes_to_100".into(),
        passed: twins.len() == 8 && twins[0] == (3, 5),
        detail: format!("{} twin pairs ≤ 100", twins.len()),
    });

    let armstrong = armstrong_numbers(10_000);
    results.push(TestResult {
        name: "armstrong_to_10000".into(),
        passed: armstrong.contains(&153) && armstrong.contains(&9474),
        detail: format!("{} Armstrong numbers ≤ 10000", armstrong.len()),
    });

    results
}

// ── 4. Nucleic acids ────────────────────────────────────────────────────

fn validate_nucleic() -> Vec<TestResult> {
    println!("--- Nucleic Acids ---");
    let mut results = Vec::new();

    let rna = dna_to_rna("GATTACA");
    results.push(TestResult {
        name: "transcription".into(),
        passed: rna.as_deref() == Ok("GAUUACA"),
        detail: format!("GATTACA → {:?}", rna),
    });

    let complement = reverse_rna_complement("GATTACA");
    results.push(TestResult {
        name: "reverse_complement".into(),
        passed: complement.as_deref() == Ok("UGUAAUC"),
        detail: format!("GATTACA → {:?}", complement),
    });

    let invalid = dna_to_rna("GATTAXA");
    results.push(TestResult {
        name: "invalid_base_rejected".into(),
        passed: invalid.is_err(),
        detail: format!("{:?}", invalid.err()),
    });

    results
}

// ── 5. Fluids ───────────────────────────────────────────────────────────

fn validate_fluids() -> Vec<TestResult> {
    println!("--- Swirl Regimes ---");
    let mut results = Vec::new();

    // Regime boundaries must be monotone in the Reynolds number.
    let sweep: Vec<SwirlRegime> = [50.0, 300.0, 2000.0]
        .iter()
        .map(|&re| swirl_state(re, 0.1, 0.1, 0.1).unwrap())
        .collect();
    results.push(TestResult {
        name: "regime_sweep_monotone".into(),
        passed: sweep
            == vec![
                SwirlRegime::SteadySwirl,
                SwirlRegime::PerturbedSwirl,
                SwirlRegime::Turbulence,
            ],
        detail: format!("{:?}", sweep),
    });

    let report = swirl_transition_report(1000.0, 2.0, 0.05, 0.001, 0.2, 0.1, 0.0);
    results.push(TestResult {
        name: "transition_report".into(),
        passed: report
            .as_ref()
            .map(|r| r.regime == SwirlRegime::Turbulence && r.sequence.len() == 3)
            .unwrap_or(false),
        detail: format!("{:?}", report.map(|r| r.sequence)),
    });

    results
}

// ── 6. Fungal dynamics ──────────────────────────────────────────────────

fn validate_fungal() -> Vec<TestResult> {
    println!("--- Fungal Dynamics ---");
    let mut results = Vec::new();

    let influx = vec![0.0; 100];
    let efflux = vec![0.0; 100];
    let history = estimate_species_numbers(&influx, &efflux, &SpeciesModel::default());
    results.push(match history {
        Ok(history) => {
            let grew = history.last().copied().unwrap_or(0.0) > history[0];
            TestResult {
                name: "logistic_growth".into(),
                passed: grew && history.len() == 101,
                detail: format!(
                    "{:.0} → {:.0} species over {} steps",
                    history[0],
                    history.last().unwrap(),
                    history.len() - 1
                ),
            }
        }
        Err(e) => TestResult {
            name: "logistic_growth".into(),
            passed: false,
            detail: format!("estimation failed: {}", e),
        },
    });

    let barren = SpeciesModel {
        environment: Environment {
            earth_size: 0.0,
            ..Environment::default()
        },
        ..SpeciesModel::default()
    };
    let rejected = estimate_species_numbers(&[], &[], &barren);
    results.push(TestResult {
        name: "barren_environment_rejected".into(),
        passed: rejected.is_err(),
        detail: format!("{:?}", rejected.err()),
    });

    results
}

// ── 7. Rocket landing ───────────────────────────────────────────────────

fn validate_rocket() -> Vec<TestResult> {
    println!("--- Rocket Landing ---");
    let mut results = Vec::new();

    results.push(match simulate_vertical_landing(&LandingConfig::default()) {
        Ok(result) => TestResult {
            name: "soft_landing".into(),
            passed: result.touchdown_velocity.abs() <= 0.5,
            detail: format!(
                "apogee {:.0} m, touchdown {:.3} m/s, {} states",
                result.max_altitude,
                result.touchdown_velocity,
                result.states.len()
            ),
        },
        Err(e) => TestResult {
            name: "soft_landing".into(),
            passed: false,
            detail: format!("simulation failed: {}", e),
        },
    });

    results
}

// ── 8. Railway network ──────────────────────────────────────────────────

fn validate_railway() -> Vec<TestResult> {
    println!("--- Railway Network ---");
    let mut results = Vec::new();

    let mut network = RailwayNetwork::new();
    let built = (|| {
        network.add_station(Station::new("Hub", (0.0, 0.0))?)?;
        network.add_station(Station::new("Coast", (200.0, 0.0))?)?;
        network.add_station(Station::new("Summit", (0.0, 150.0))?)?;
        network.add_track(Track::new("Hub", "Coast", 210.0, 300.0, true)?)?;
        network.add_track(Track::new("Hub", "Summit", 160.0, 200.0, true)?)?;
        Ok::<(), campbench_logic::railway::NetworkError>(())
    })();
    results.push(TestResult {
        name: "network_construction".into(),
        passed: built.is_ok() && network.station_count() == 3,
        detail: format!("{} stations", network.station_count()),
    });

    let time = network.travel_time("Coast", "Summit");
    results.push(TestResult {
        name: "cross_network_travel_time".into(),
        passed: time
            .as_ref()
            .map(|&t| (t - (0.7 + 0.8)).abs() < 1e-9)
            .unwrap_or(false),
        detail: format!("Coast → Summit = {:?} h", time),
    });

    let orbits = vec![vec!["Coast".to_string(), "Summit".to_string()]];
    let index = network.equivariant_index(&orbits, 1.0);
    results.push(TestResult {
        name: "equivariant_index".into(),
        passed: index.as_ref().map(|&i| i > 0.0).unwrap_or(false),
        detail: format!("index = {:?}", index),
    });

    results
}

// ── 9. Symmetry reduction ───────────────────────────────────────────────

fn validate_symmetry() -> Vec<TestResult> {
    println!("--- Folding Symmetry ---");
    let mut results = Vec::new();

    let summary = analyze_fly_landscape(32, &SequenceFly::default());
    results.push(match summary {
        Ok(summary) => {
            let (leading, trailing) = summary.variance_explained();
            TestResult {
                name: "landscape_symmetry".into(),
                passed: leading >= trailing && (leading + trailing - 1.0).abs() < 1e-9,
                detail: format!(
                    "axis ratio {:.3}, variance split {:.3}/{:.3}",
                    summary.axis_ratio, leading, trailing
                ),
            }
        }
        Err(e) => TestResult {
            name: "landscape_symmetry".into(),
            passed: false,
            detail: format!("analysis failed: {}", e),
        },
    });

    results
}
