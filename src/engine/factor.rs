//! Factor algebra: the computational substrate for variable elimination.
//!
//! A [`Factor`] is a dense nonnegative table over an ordered scope of
//! variables. Three operations cover everything elimination needs: building
//! the evidence-masked factor of one variable, pointwise product with a
//! deterministic scope-union order, and summing a variable out. Factors are
//! transient by contract — created inside one elimination call and dropped
//! before it returns, never stored in the network.

use crate::engine::evidence::Slot;
use crate::engine::network::{BayesNet, VarId};

/// Advances a mixed-radix assignment vector by one, rightmost digit fastest.
///
/// Returns `false` once the vector wraps past the last assignment. The
/// all-zero vector is the first assignment; the empty vector has exactly one
/// (empty) assignment.
pub(crate) fn advance(digits: &mut [usize], cards: &[usize]) -> bool {
    let mut slot = digits.len();
    while slot > 0 {
        slot -= 1;
        digits[slot] += 1;
        if digits[slot] < cards[slot] {
            return true;
        }
        digits[slot] = 0;
    }
    false
}

/// Row-major strides for the given cardinalities (last dimension is 1).
fn strides_of(cards: &[usize]) -> Vec<usize> {
    let mut strides = vec![0usize; cards.len()];
    let mut acc = 1usize;
    for dim in (0..cards.len()).rev() {
        strides[dim] = acc;
        acc *= cards[dim];
    }
    strides
}

/// A dense probability table over an ordered variable scope.
///
/// `table` is row-major over `cards`: the last scope variable varies
/// fastest. Cells ruled out by the evidence mask, or backed by no CPT row,
/// hold 0.
#[derive(Debug, Clone)]
pub(crate) struct Factor {
    scope: Vec<VarId>,
    cards: Vec<usize>,
    table: Vec<f64>,
}

impl Factor {
    /// Builds the factor of one variable under the given evidence slots.
    ///
    /// Scope is the variable's parents followed by the variable itself.
    /// Cells start at 0; each stored CPT row writes its probabilities into
    /// the cells every observed slot agrees with, so missing rows and
    /// disagreeing assignments stay 0 — the implicit-zero policy in factor
    /// form.
    pub(crate) fn for_variable(net: &BayesNet, id: VarId, slots: &[Slot]) -> Self {
        let var = net.var(id);
        let mut scope: Vec<VarId> = var.parents().to_vec();
        scope.push(id);
        let cards: Vec<usize> = scope.iter().map(|v| net.var(*v).domain().len()).collect();
        let strides = strides_of(&cards);
        let mut table = vec![0.0; cards.iter().product()];
        let own = scope.len() - 1;
        'rows: for (key, row) in var.rows() {
            let mut base = 0usize;
            for (dim, &value_ix) in key.iter().enumerate() {
                if !slots[scope[dim].index()].allows(value_ix) {
                    continue 'rows;
                }
                base += value_ix * strides[dim];
            }
            for (value_ix, &p) in row.iter().enumerate() {
                if slots[id.index()].allows(value_ix) {
                    table[base + value_ix * strides[own]] = p;
                }
            }
        }
        Self {
            scope,
            cards,
            table,
        }
    }

    /// Pointwise product with `other`.
    ///
    /// The result scope is this factor's scope followed by the variables of
    /// `other` not already present, in `other`'s order — a deterministic
    /// union, not a set union.
    pub(crate) fn product(&self, other: &Factor) -> Factor {
        let mut scope = self.scope.clone();
        let mut cards = self.cards.clone();
        for (dim, v) in other.scope.iter().enumerate() {
            if !scope.contains(v) {
                scope.push(*v);
                cards.push(other.cards[dim]);
            }
        }
        let left: Vec<Option<usize>> = scope
            .iter()
            .map(|v| self.scope.iter().position(|s| s == v))
            .collect();
        let right: Vec<Option<usize>> = scope
            .iter()
            .map(|v| other.scope.iter().position(|s| s == v))
            .collect();
        let left_strides = strides_of(&self.cards);
        let right_strides = strides_of(&other.cards);
        let mut table = vec![0.0; cards.iter().product()];
        let mut digits = vec![0usize; cards.len()];
        for cell in table.iter_mut() {
            let mut li = 0usize;
            let mut ri = 0usize;
            for (dim, &d) in digits.iter().enumerate() {
                if let Some(p) = left[dim] {
                    li += d * left_strides[p];
                }
                if let Some(p) = right[dim] {
                    ri += d * right_strides[p];
                }
            }
            *cell = self.table[li] * other.table[ri];
            advance(&mut digits, &cards);
        }
        Factor {
            scope,
            cards,
            table,
        }
    }

    /// Sums `id` out of the factor.
    ///
    /// The result drops `id` from the scope; each surviving cell sums the
    /// source cells over `id`'s domain in the dropped position. Summing out
    /// the last scope variable leaves a scalar factor (empty scope, one
    /// cell). A factor that does not mention `id` is returned unchanged.
    pub(crate) fn sum_out(&self, id: VarId) -> Factor {
        let pos = match self.scope.iter().position(|v| *v == id) {
            Some(pos) => pos,
            None => return self.clone(),
        };
        let mut scope = self.scope.clone();
        let mut cards = self.cards.clone();
        scope.remove(pos);
        cards.remove(pos);
        let target_strides = strides_of(&cards);
        let mut table = vec![0.0; cards.iter().product()];
        let mut digits = vec![0usize; self.cards.len()];
        for &value in self.table.iter() {
            let mut ti = 0usize;
            let mut tdim = 0usize;
            for (dim, &d) in digits.iter().enumerate() {
                if dim != pos {
                    ti += d * target_strides[tdim];
                    tdim += 1;
                }
            }
            table[ti] += value;
            advance(&mut digits, &self.cards);
        }
        Factor {
            scope,
            cards,
            table,
        }
    }

    /// Projects onto `id`, summing over every residual dimension.
    ///
    /// Returns one accumulator per domain value of `id`, or `None` when
    /// `id` is not in the scope — the caller decides how to degrade.
    pub(crate) fn project_onto(&self, id: VarId) -> Option<Vec<f64>> {
        let pos = self.scope.iter().position(|v| *v == id)?;
        let mut acc = vec![0.0; self.cards[pos]];
        let mut digits = vec![0usize; self.cards.len()];
        for &value in self.table.iter() {
            acc[digits[pos]] += value;
            advance(&mut digits, &self.cards);
        }
        Some(acc)
    }

    /// Ordered scope of the factor.
    pub(crate) fn scope(&self) -> &[VarId] {
        &self.scope
    }

    /// True when `id` is in the scope.
    pub(crate) fn mentions(&self, id: VarId) -> bool {
        self.scope.contains(&id)
    }
}
