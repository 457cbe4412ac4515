//! # Beliefnet - Exact Inference over Discrete Bayesian Networks
//!
//! Beliefnet builds discrete Bayesian networks incrementally and answers
//! conditional probability queries exactly, by two independent engines that
//! must agree: enumeration over joint completions and variable elimination
//! over factors.
//!
//! ## Architecture
//!
//! The system is organized into several modules:
//!
//! - **engine**: Network aggregate, evidence handling, and both inference
//!   engines
//! - **networks**: Ready-made demonstration networks
//! - **storage**: Persistence layer (JSON document exchange format)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beliefnet::{posterior, BayesNet, Evidence};
//!
//! let mut net = BayesNet::new();
//! net.add_variable("Lluvia", &["Si", "No"])?;
//! net.add_variable("HierbaMojada", &["Si", "No"])?;
//! net.set_parents("HierbaMojada", &["Lluvia"])?;
//! net.set_cpt("Lluvia", &[], &[("Si", 0.2), ("No", 0.8)])?;
//! net.set_cpt("HierbaMojada", &["Si"], &[("Si", 0.9), ("No", 0.1)])?;
//! net.set_cpt("HierbaMojada", &["No"], &[("Si", 0.1), ("No", 0.9)])?;
//!
//! let ev = Evidence::new().with("HierbaMojada", "Si");
//! let p = posterior(&net, "Lluvia", &ev)?;
//! println!("P(Lluvia=Si | mojada) = {:.4}", p.prob("Si").unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod networks;
pub mod storage;

// Re-export commonly used types
pub use engine::{BayesError, BayesNet, Evidence, Posterior, VarId, Variable};

/// Computes the posterior distribution of `query` given `evidence`.
///
/// This is the default entry point and runs variable elimination, which
/// scales far better than enumeration on networks with many hidden
/// variables. [`engine::enumeration::posterior`] computes the same answer
/// by brute force and exists as an independent cross-check.
///
/// # Arguments
///
/// * `net` - The network to query
/// * `query` - Name of the query variable
/// * `evidence` - Observed variable/value pairs (may be empty)
///
/// # Returns
///
/// * `Ok(Posterior)` - Normalized distribution over the query domain
/// * `Err(BayesError::Structural)` - Unknown query variable
pub fn posterior(
    net: &BayesNet,
    query: &str,
    evidence: &Evidence,
) -> Result<Posterior, BayesError> {
    engine::elimination::posterior(net, query, evidence)
}
