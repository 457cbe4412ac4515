//! Variable elimination: factor-based exact inference.
//!
//! Builds one evidence-masked factor per variable, sums hidden variables out
//! in declaration order — no min-degree or min-fill heuristic, a deliberate
//! simplification — then folds the survivors and projects onto the query.
//! All factors are transient within one call.

use crate::engine::errors::BayesError;
use crate::engine::evidence::{self, Evidence, Slot};
use crate::engine::factor::Factor;
use crate::engine::network::{BayesNet, VarId};
use crate::engine::posterior::Posterior;

/// Computes the posterior of `query` given `evidence` by variable
/// elimination.
///
/// Mirrors [`crate::engine::enumeration::posterior`] in contract exactly —
/// the two engines are each other's regression guard. Unknown query or
/// evidence names are structural errors; inconsistent evidence degrades to
/// the all-zero posterior; a query fixed by evidence short-circuits to its
/// one-hot (or all-zero) posterior.
pub fn posterior(
    net: &BayesNet,
    query: &str,
    evidence: &Evidence,
) -> Result<Posterior, BayesError> {
    let qid = net
        .var_id(query)
        .ok_or_else(|| BayesError::Structural(format!("unknown query variable '{}'", query)))?;
    let slots = evidence::resolve(net, evidence)?;
    if let Some(fixed) = evidence::fixed_query_posterior(net, qid, &slots) {
        return Ok(fixed);
    }

    let mut factors: Vec<Factor> = (0..net.len())
        .map(|ix| Factor::for_variable(net, VarId(ix as u32), &slots))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "elimination over '{}': {} factors, {} hidden variables",
        query,
        factors.len(),
        slots.iter().filter(|s| **s == Slot::Hidden).count() - 1
    );

    for ix in 0..net.len() {
        let h = VarId(ix as u32);
        if h == qid || slots[h.index()] != Slot::Hidden {
            continue;
        }
        let (containing, rest): (Vec<Factor>, Vec<Factor>) =
            factors.into_iter().partition(|f| f.mentions(h));
        factors = rest;
        let mut folding = containing.into_iter();
        let folded = match folding.next() {
            Some(first) => folding.fold(first, |acc, f| acc.product(&f)),
            None => continue,
        };
        let summed = folded.sum_out(h);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "summed out '{}', surviving scope size {}",
            net.var(h).name(),
            summed.scope().len()
        );
        factors.push(summed);
    }

    let labels = net.var(qid).domain().to_vec();
    let mut remaining = factors.into_iter();
    let result = match remaining.next() {
        Some(first) => remaining.fold(first, |acc, f| acc.product(&f)),
        // unreachable for a resolvable query, handled without panicking
        None => return Ok(Posterior::zeroed(labels)),
    };
    match result.project_onto(qid) {
        Some(weights) => Ok(Posterior::from_weights(labels, weights)),
        // defensive: a result factor that lost the query projects to zero
        None => Ok(Posterior::zeroed(labels)),
    }
}
