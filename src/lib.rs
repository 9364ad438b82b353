//! Metaheuristic search harness for optimal experimental designs.
//!
//! Searches for A- and D-optimal designs for simple linear regression
//! over `[0, 1]` exposure levels, and compares stochastic search
//! strategies over repeated seeded runs:
//!
//! - **Simulated Annealing (SA)**: single-solution trajectory search with
//!   temperature-scheduled perturbations and Metropolis acceptance.
//! - **Particle Swarm Optimization (PSO)**: a swarm of candidate points
//!   with velocities pulled toward personal-best and global-best positions.
//! - **Genetic Algorithm (GA)**: real-coded population search with
//!   tournament selection, blend crossover, and coordinate mutation.
//!
//! # Architecture
//!
//! [`criteria`] defines the objective seam: an object-safe
//! [`Criterion`](criteria::Criterion) scores a candidate vector (lower is
//! better) and fails on singular information matrices.
//! [`SearchStrategy`](strategy::SearchStrategy) is the polymorphic search
//! seam; each algorithm module exposes a config, a runner, and a strategy
//! wrapper. [`experiment`] repeats seeded runs and summarizes the
//! distribution of discovered designs as a frequency table.
//!
//! None of the strategies guarantee the true optimum; the harness exists
//! to measure, over many seeds, how often each one finds it.

pub mod criteria;
pub mod design;
pub mod experiment;
pub mod ga;
pub mod pso;
pub mod sa;
pub mod strategy;
