//! Bayesian network data structures and validated mutators.
//!
//! This module implements the network model both inference engines read:
//! - Variables with ordered domains of distinct textual labels
//! - Parent lists stored as resolved [`VarId`] indices
//! - CPT rows keyed by parent-value index tuples, validated row-by-row
//!
//! Declaration order is significant: it is the default enumeration and
//! elimination order, and domain order fixes the layout of CPT rows and
//! posteriors. Rows that were never declared are implicit all-zero rows at
//! inference time; [`BayesNet::missing_rows`] exposes the strict view.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::engine::errors::BayesError;
use crate::engine::factor::advance;

/// Tolerance for the per-row sum-to-1 check in [`BayesNet::set_cpt`].
pub const ROW_SUM_TOLERANCE: f64 = 0.01;

/// Identifier for a variable in a [`BayesNet`].
///
/// Ids are positions in declaration order. [`BayesNet::remove_variable`]
/// shifts the ids of later variables down by one, so ids captured before a
/// removal must not be reused afterwards; the name-keyed API is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct VarId(pub u32);

impl VarId {
    /// Position of this variable in declaration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A discrete random variable: name, ordered domain, parents, CPT rows.
///
/// CPT rows are keyed by parent-value index tuples (one domain index per
/// parent, in parent order) and store each distribution positionally over
/// the variable's own domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    domain: Vec<String>,
    parents: Vec<VarId>,
    cpt: BTreeMap<Vec<usize>, Vec<f64>>,
}

impl Variable {
    fn new(name: String, domain: Vec<String>) -> Self {
        Self {
            name,
            domain,
            parents: Vec::new(),
            cpt: BTreeMap::new(),
        }
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Domain labels in declared order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Parent ids in declared order.
    pub fn parents(&self) -> &[VarId] {
        &self.parents
    }

    /// Resolves a raw textual value to its domain index.
    ///
    /// This is the value-coercion boundary: everything past it works on
    /// indices. `None` means the raw value matches no label; evidence
    /// resolution turns that into an always-disagreeing observation rather
    /// than an error.
    pub fn value_index(&self, raw: &str) -> Option<usize> {
        self.domain.iter().position(|label| label == raw)
    }

    /// Distribution stored for a parent-value index tuple, if any.
    ///
    /// `None` is the implicit-zero case: inference reads the row as all
    /// zeros.
    pub fn row(&self, key: &[usize]) -> Option<&[f64]> {
        self.cpt.get(key).map(Vec::as_slice)
    }

    /// Iterates stored CPT rows in deterministic (lexicographic key) order.
    pub fn rows(&self) -> impl Iterator<Item = (&[usize], &[f64])> {
        self.cpt.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Number of stored CPT rows.
    pub fn row_count(&self) -> usize {
        self.cpt.len()
    }
}

/// A discrete Bayesian network.
///
/// Variables keep their declaration order, which both engines use as the
/// default enumeration/elimination order. All mutators validate up front and
/// leave the network unchanged on error; inference takes the network by
/// shared reference, so the borrow checker rules out mutation during an
/// in-flight query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BayesNet {
    variables: Vec<Variable>,
    index: FxHashMap<String, u32>,
}

impl BayesNet {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable with its ordered domain and returns its id.
    ///
    /// If the name is already declared the call is a no-op returning the
    /// existing id — first declaration wins, the supplied domain is not
    /// compared. A fresh declaration must carry a nonempty domain of
    /// distinct labels.
    pub fn add_variable(&mut self, name: &str, domain: &[&str]) -> Result<VarId, BayesError> {
        if let Some(&ix) = self.index.get(name) {
            return Ok(VarId(ix));
        }
        if domain.is_empty() {
            return Err(BayesError::Structural(format!(
                "variable '{}' must have a nonempty domain",
                name
            )));
        }
        for (i, label) in domain.iter().enumerate() {
            if domain[..i].contains(label) {
                return Err(BayesError::Structural(format!(
                    "variable '{}' repeats domain label '{}'",
                    name, label
                )));
            }
        }
        let id = VarId(self.variables.len() as u32);
        self.index.insert(name.to_string(), id.0);
        self.variables.push(Variable::new(
            name.to_string(),
            domain.iter().map(|s| s.to_string()).collect(),
        ));
        Ok(id)
    }

    /// Declares the ordered parent list for `variable`.
    ///
    /// Replaces any previous parent list and clears the variable's CPT,
    /// since stored row keys no longer have the right arity. Rejects
    /// unknown names, repeated parents, and parent sets that would close a
    /// directed cycle.
    pub fn set_parents(&mut self, variable: &str, parents: &[&str]) -> Result<(), BayesError> {
        let child = self.require(variable)?;
        let mut resolved: Vec<VarId> = Vec::with_capacity(parents.len());
        for name in parents {
            let pid = self.require(name)?;
            if resolved.contains(&pid) {
                return Err(BayesError::Structural(format!(
                    "variable '{}' lists parent '{}' more than once",
                    variable, name
                )));
            }
            resolved.push(pid);
        }
        for &pid in &resolved {
            if self.reaches_via_parents(pid, child) {
                return Err(BayesError::Structural(format!(
                    "parent '{}' of '{}' would close a directed cycle",
                    self.variables[pid.index()].name, variable
                )));
            }
        }
        let var = &mut self.variables[child.index()];
        var.parents = resolved;
        var.cpt.clear();
        Ok(())
    }

    /// Sets one CPT row for `variable`.
    ///
    /// `parent_values` supplies one raw value per declared parent, each
    /// resolved against that parent's domain. `distribution` must cover the
    /// variable's whole domain exactly once with finite nonnegative
    /// probabilities summing to 1 within [`ROW_SUM_TOLERANCE`]. On any
    /// violation the whole row is rejected and the network is unchanged; on
    /// success exactly this row is inserted or overwritten.
    pub fn set_cpt(
        &mut self,
        variable: &str,
        parent_values: &[&str],
        distribution: &[(&str, f64)],
    ) -> Result<(), BayesError> {
        let id = self.require(variable)?;
        let arity = self.variables[id.index()].parents.len();
        if parent_values.len() != arity {
            return Err(BayesError::Structural(format!(
                "cpt row for '{}' has {} parent values, expected {}",
                variable,
                parent_values.len(),
                arity
            )));
        }
        let mut key = Vec::with_capacity(arity);
        for (slot, raw) in parent_values.iter().enumerate() {
            let pid = self.variables[id.index()].parents[slot];
            let parent = &self.variables[pid.index()];
            let ix = parent.value_index(raw).ok_or_else(|| {
                BayesError::Structural(format!(
                    "cpt row for '{}': value '{}' is not in the domain of parent '{}'",
                    variable, raw, parent.name
                ))
            })?;
            key.push(ix);
        }

        let var = &self.variables[id.index()];
        let mut resolved: Vec<Option<f64>> = vec![None; var.domain.len()];
        for (raw, p) in distribution {
            let ix = var.value_index(raw).ok_or_else(|| {
                BayesError::Distribution(format!(
                    "row {:?} for '{}' names '{}', which is not in the domain",
                    parent_values, variable, raw
                ))
            })?;
            if resolved[ix].is_some() {
                return Err(BayesError::Distribution(format!(
                    "row {:?} for '{}' supplies '{}' more than once",
                    parent_values, variable, raw
                )));
            }
            if !p.is_finite() || *p < 0.0 {
                return Err(BayesError::Distribution(format!(
                    "row {:?} for '{}' has invalid probability {} for '{}'",
                    parent_values, variable, p, raw
                )));
            }
            resolved[ix] = Some(*p);
        }
        let mut row = Vec::with_capacity(var.domain.len());
        for (ix, p) in resolved.into_iter().enumerate() {
            match p {
                Some(p) => row.push(p),
                None => {
                    return Err(BayesError::Distribution(format!(
                        "row {:?} for '{}' misses a probability for '{}'",
                        parent_values, variable, var.domain[ix]
                    )))
                }
            }
        }
        let sum: f64 = row.iter().sum();
        if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(BayesError::Distribution(format!(
                "row {:?} for '{}' sums to {}, expected 1 within {}",
                parent_values, variable, sum, ROW_SUM_TOLERANCE
            )));
        }
        self.variables[id.index()].cpt.insert(key, row);
        Ok(())
    }

    /// Removes a variable and every reference to it.
    ///
    /// Referencing variables lose the parent entry, and each of their CPT
    /// rows is re-keyed by dropping the corresponding tuple position
    /// (remaining positions keep their order; when two re-keyed rows
    /// collide, the one with the lexicographically greater original key
    /// wins). Ids after the removed position shift down by one.
    pub fn remove_variable(&mut self, name: &str) -> Result<(), BayesError> {
        let removed = self.require(name)?;
        self.variables.remove(removed.index());
        for var in &mut self.variables {
            if let Some(pos) = var.parents.iter().position(|p| *p == removed) {
                var.parents.remove(pos);
                let old = std::mem::take(&mut var.cpt);
                for (mut key, row) in old {
                    key.remove(pos);
                    var.cpt.insert(key, row);
                }
            }
            for p in &mut var.parents {
                if p.0 > removed.0 {
                    p.0 -= 1;
                }
            }
        }
        self.rebuild_index();
        Ok(())
    }

    /// Variables in declaration order — the default order both engines use.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when no variable has been declared.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Id for `name`, if declared.
    pub fn var_id(&self, name: &str) -> Option<VarId> {
        self.index.get(name).map(|&ix| VarId(ix))
    }

    /// Variable for `id`, if valid.
    pub fn variable(&self, id: VarId) -> Option<&Variable> {
        self.variables.get(id.index())
    }

    /// Parent-value label tuples of `variable` with no stored CPT row.
    ///
    /// Missing rows act as implicit zeros during inference; this is the
    /// opt-in strict view for callers that want complete tables. The result
    /// enumerates the Cartesian product of the parent domains, so it is
    /// meant for demonstration-scale networks, like the engines themselves.
    pub fn missing_rows(&self, variable: &str) -> Result<Vec<Vec<String>>, BayesError> {
        let id = self.require(variable)?;
        let var = &self.variables[id.index()];
        let cards: Vec<usize> = var
            .parents
            .iter()
            .map(|p| self.variables[p.index()].domain.len())
            .collect();
        let mut missing = Vec::new();
        let mut key = vec![0usize; cards.len()];
        loop {
            if !var.cpt.contains_key(&key) {
                missing.push(
                    key.iter()
                        .enumerate()
                        .map(|(slot, &ix)| {
                            self.variables[var.parents[slot].index()].domain[ix].clone()
                        })
                        .collect(),
                );
            }
            if !advance(&mut key, &cards) {
                break;
            }
        }
        Ok(missing)
    }

    /// Variable for `id` under the aggregate invariant that `id` is valid.
    pub(crate) fn var(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    fn require(&self, name: &str) -> Result<VarId, BayesError> {
        self.var_id(name)
            .ok_or_else(|| BayesError::Structural(format!("unknown variable '{}'", name)))
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (ix, var) in self.variables.iter().enumerate() {
            self.index.insert(var.name.clone(), ix as u32);
        }
    }

    /// True when walking parent edges upward from `from` reaches `target`.
    fn reaches_via_parents(&self, from: VarId, target: VarId) -> bool {
        let mut seen = vec![false; self.variables.len()];
        let mut stack = vec![from];
        while let Some(v) = stack.pop() {
            if v == target {
                return true;
            }
            if seen[v.index()] {
                continue;
            }
            seen[v.index()] = true;
            stack.extend(self.variables[v.index()].parents.iter().copied());
        }
        false
    }
}
