//! Enumeration inference: exact summation over joint completions.
//!
//! The classic textbook enumeration algorithm, restructured from recursion
//! into an explicit odometer over the hidden variables' joint assignments so
//! the stack stays bounded regardless of network size. Cost is exponential
//! in the hidden-variable count — intrinsic to the algorithm, intended for
//! demonstration-scale networks.

use crate::engine::errors::BayesError;
use crate::engine::evidence::{self, Evidence, Slot};
use crate::engine::factor::advance;
use crate::engine::network::{BayesNet, VarId};
use crate::engine::posterior::Posterior;

/// Computes the posterior of `query` given `evidence` by enumeration.
///
/// Unknown query or evidence names are structural errors. Evidence values
/// matching no domain label zero out every weight, producing the degenerate
/// all-zero posterior; a query fixed by evidence returns its one-hot (or
/// all-zero) posterior without running the sum. For identical inputs this
/// engine and [`crate::engine::elimination::posterior`] agree within
/// floating tolerance.
pub fn posterior(
    net: &BayesNet,
    query: &str,
    evidence: &Evidence,
) -> Result<Posterior, BayesError> {
    let qid = net
        .var_id(query)
        .ok_or_else(|| BayesError::Structural(format!("unknown query variable '{}'", query)))?;
    let mut slots = evidence::resolve(net, evidence)?;
    if let Some(fixed) = evidence::fixed_query_posterior(net, qid, &slots) {
        return Ok(fixed);
    }

    let hidden: Vec<VarId> = slots
        .iter()
        .enumerate()
        .filter(|(ix, slot)| **slot == Slot::Hidden && *ix != qid.index())
        .map(|(ix, _)| VarId(ix as u32))
        .collect();

    let labels = net.var(qid).domain().to_vec();
    let mut weights = vec![0.0; labels.len()];
    for (qx, weight) in weights.iter_mut().enumerate() {
        slots[qid.index()] = Slot::Observed(qx);
        *weight = joint_weight(net, &slots, &hidden);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "enumeration over '{}': {} hidden variables, total weight {}",
        query,
        hidden.len(),
        weights.iter().sum::<f64>()
    );

    Ok(Posterior::from_weights(labels, weights))
}

/// Total probability mass consistent with the given slots.
///
/// Sums, over every joint completion of `hidden`, the product over all
/// variables of their CPT entry under the completed assignment. Missing
/// rows contribute 0, as does any assignment touching an unmatched
/// observation.
fn joint_weight(net: &BayesNet, slots: &[Slot], hidden: &[VarId]) -> f64 {
    let cards: Vec<usize> = hidden.iter().map(|h| net.var(*h).domain().len()).collect();
    let mut assignment: Vec<Option<usize>> = slots
        .iter()
        .map(|slot| match slot {
            Slot::Observed(ix) => Some(*ix),
            Slot::Hidden | Slot::Unmatched => None,
        })
        .collect();
    let mut digits = vec![0usize; hidden.len()];
    let mut total = 0.0;
    loop {
        for (dim, h) in hidden.iter().enumerate() {
            assignment[h.index()] = Some(digits[dim]);
        }
        total += completion_product(net, &assignment);
        if !advance(&mut digits, &cards) {
            break;
        }
    }
    total
}

/// Product of every variable's CPT entry under the assignment.
///
/// An unassigned position (an unmatched observation) or an absent CPT row
/// makes the product 0 — all entries are validated finite, so the early
/// return equals multiplying through by zero.
fn completion_product(net: &BayesNet, assignment: &[Option<usize>]) -> f64 {
    let mut product = 1.0;
    for (ix, var) in net.variables().enumerate() {
        let own = match assignment[ix] {
            Some(v) => v,
            None => return 0.0,
        };
        let mut key = Vec::with_capacity(var.parents().len());
        for p in var.parents() {
            match assignment[p.index()] {
                Some(v) => key.push(v),
                None => return 0.0,
            }
        }
        match var.row(&key) {
            Some(row) => product *= row[own],
            None => return 0.0,
        }
    }
    product
}
