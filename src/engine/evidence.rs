//! Evidence sets and their resolution to domain indices.
//!
//! Evidence arrives as raw textual name/value pairs. Resolution happens once
//! per inference call: names must exist, while values that match no domain
//! label become [`Slot::Unmatched`] — an observation that disagrees with
//! every domain value, so dependent weights collapse to zero instead of
//! raising. The engines past this boundary compare plain indices, never
//! strings.

use crate::engine::errors::BayesError;
use crate::engine::network::{BayesNet, VarId};
use crate::engine::posterior::Posterior;

/// Observed raw values keyed by variable name, with map semantics.
///
/// Entries keep insertion order for deterministic iteration; setting a name
/// twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evidence {
    entries: Vec<(String, String)>,
}

impl Evidence {
    /// Creates an empty evidence set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; replaces an existing entry for `variable`.
    pub fn with(mut self, variable: &str, value: &str) -> Self {
        self.set(variable, value);
        self
    }

    /// Inserts or replaces the observation for `variable`.
    pub fn set(&mut self, variable: &str, value: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == variable) {
            Some(entry) => entry.1 = value.to_string(),
            None => self
                .entries
                .push((variable.to_string(), value.to_string())),
        }
    }

    /// Raw observed value for `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| value.as_str())
    }

    /// Number of observed variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(variable, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Per-variable evidence state after boundary resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Not observed; inference ranges over the whole domain.
    Hidden,
    /// Observed at this domain index.
    Observed(usize),
    /// Observed with a raw value outside the domain; disagrees with every
    /// index.
    Unmatched,
}

impl Slot {
    /// True unless this slot is observed at a different index.
    pub(crate) fn allows(self, value_ix: usize) -> bool {
        match self {
            Slot::Hidden => true,
            Slot::Observed(seen) => seen == value_ix,
            Slot::Unmatched => false,
        }
    }
}

/// Resolves raw evidence into one slot per network variable.
///
/// Unknown variable names are structural errors; unknown values resolve to
/// [`Slot::Unmatched`].
pub(crate) fn resolve(net: &BayesNet, evidence: &Evidence) -> Result<Vec<Slot>, BayesError> {
    let mut slots = vec![Slot::Hidden; net.len()];
    for (name, raw) in evidence.iter() {
        let id = net.var_id(name).ok_or_else(|| {
            BayesError::Structural(format!("unknown variable '{}' in evidence", name))
        })?;
        slots[id.index()] = match net.var(id).value_index(raw) {
            Some(ix) => Slot::Observed(ix),
            None => Slot::Unmatched,
        };
    }
    Ok(slots)
}

/// Posterior for a query that evidence already fixes, if it does.
///
/// An observed query yields the one-hot posterior at the observed value —
/// the evidence wins, never a conflict error. An unmatched observation
/// yields the all-zero map, since no domain value is consistent with it.
pub(crate) fn fixed_query_posterior(
    net: &BayesNet,
    query: VarId,
    slots: &[Slot],
) -> Option<Posterior> {
    match slots[query.index()] {
        Slot::Hidden => None,
        Slot::Observed(ix) => Some(Posterior::one_hot(net.var(query).domain().to_vec(), ix)),
        Slot::Unmatched => Some(Posterior::zeroed(net.var(query).domain().to_vec())),
    }
}
