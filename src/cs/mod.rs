//! Cuckoo Search (CS).
//!
//! A population-based metaheuristic modeled on the brood parasitism of
//! cuckoos. Each iteration every nest lays an egg (a Lévy-flight
//! perturbation of itself) into a randomly chosen nest, which keeps the egg
//! only if it is no worse than the current occupant. A fraction of the worst
//! nests is then abandoned and rebuilt at random, keeping the search from
//! settling into a single basin.
//!
//! # Key Types
//!
//! - [`CsConfig`]: Algorithm parameters (nests, budget, abandonment, step size)
//! - [`CsRunner`]: Executes the search for a fixed iteration budget
//! - [`CuckooSearch`]: Step-by-step access to the two phases
//! - [`CsResult`]: Best solution, history, and final population
//!
//! # References
//!
//! - Yang & Deb (2009), "Cuckoo Search via Lévy flights"
//! - Yang & Deb (2010), "Engineering optimisation by cuckoo search"
//! - Mantegna (1994), "Fast, accurate algorithm for numerical simulation of
//!   Lévy stable stochastic processes"

mod config;
mod history;
pub mod levy;
mod runner;

pub use config::{CsConfig, FeasibilityPolicy};
pub use history::{best_changes, BestChange};
pub use levy::LevyFlight;
pub use runner::{CsResult, CsRunner, CuckooSearch, IterationReport, Replacement};
