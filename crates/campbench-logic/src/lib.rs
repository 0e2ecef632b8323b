//! Pure exercise logic for Campbench.
//!
//! This crate is a bench of self-contained bootcamp exercises: each
//! module is pure logic with no I/O, no globals, and no shared state, so
//! every function is unit-testable in isolation and safe to evaluate in
//! parallel from the caller's side.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`complex`] | Minimal complex-number type and principal-branch powers |
//! | [`fluids`] | Reynolds numbers and swirl-regime classification |
//! | [`folding`] | Deterministic spiral energy-barrier landscapes |
//! | [`fungal`] | Discrete logistic species estimation with environment scaling |
//! | [`nucleic`] | DNA→RNA transcription and reverse complements |
//! | [`primes`] | Prime series, twin primes, Armstrong numbers |
//! | [`railway`] | Dijkstra travel times and equivariant network indices |
//! | [`rocket`] | Vertical launch and soft-landing simulation |
//! | [`symmetry`] | Closed-form 2×2 PCA over complex sequences |
//! | [`zeta`] | Hasse-series ζ(s) evaluation and critical-line zero search |

pub mod complex;
pub mod fluids;
pub mod folding;
pub mod fungal;
pub mod nucleic;
pub mod primes;
pub mod railway;
pub mod rocket;
pub mod symmetry;
pub mod zeta;
