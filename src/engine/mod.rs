//! Exact inference over discrete Bayesian networks.
//!
//! This module provides:
//! - **errors**: Error types for construction, inference, and storage
//! - **network**: The network model — variables, domains, parents, CPTs
//! - **evidence**: Raw observations and their resolution to domain indices
//! - **factor**: Dense factor algebra backing variable elimination
//! - **enumeration**: Exact inference by summation over joint completions
//! - **elimination**: Exact inference by variable elimination
//! - **posterior**: Result distributions and weight normalization
//!
//! Both engines take a query variable name and an [`Evidence`] set against
//! a shared-borrowed [`BayesNet`] and return a [`Posterior`]; for identical
//! inputs their results agree within floating tolerance.

pub mod elimination;
pub mod enumeration;
pub mod errors;
pub mod evidence;
pub(crate) mod factor;
pub mod network;
pub mod posterior;

pub use errors::BayesError;
pub use evidence::Evidence;
pub use network::{BayesNet, VarId, Variable, ROW_SUM_TOLERANCE};
pub use posterior::{normalize, Posterior};
