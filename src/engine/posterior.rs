//! Posterior distributions and weight normalization.
//!
//! Both inference engines produce unnormalized per-value weights and finish
//! by normalizing them into a [`Posterior`]. A zero total weight is a valid
//! degenerate outcome (evidence inconsistent with the network) and yields an
//! all-zero posterior rather than an error.

/// Normalizes a weight slice in place.
///
/// Every entry is divided by the total. A total of exactly 0 sets every
/// entry to 0 instead of dividing; callers never see NaN from a degenerate
/// weight vector. Applying `normalize` to an already-normalized slice is
/// idempotent up to floating error.
pub fn normalize(weights: &mut [f64]) {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        for w in weights.iter_mut() {
            *w = 0.0;
        }
        return;
    }
    for w in weights.iter_mut() {
        *w /= total;
    }
}

/// Posterior distribution over a query variable's domain.
///
/// Labels appear in the variable's declared domain order, so iteration and
/// serialization are deterministic. Lookup is by label via [`Posterior::prob`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Posterior {
    labels: Vec<String>,
    probs: Vec<f64>,
}

impl Posterior {
    /// Builds a posterior by normalizing raw accumulator weights.
    pub(crate) fn from_weights(labels: Vec<String>, mut weights: Vec<f64>) -> Self {
        normalize(&mut weights);
        Self {
            labels,
            probs: weights,
        }
    }

    /// Builds the one-hot posterior with the whole mass at `hot`.
    ///
    /// `hot` must be a valid index into `labels`.
    pub(crate) fn one_hot(labels: Vec<String>, hot: usize) -> Self {
        let mut probs = vec![0.0; labels.len()];
        probs[hot] = 1.0;
        Self { labels, probs }
    }

    /// Builds the degenerate all-zero posterior.
    pub(crate) fn zeroed(labels: Vec<String>) -> Self {
        let probs = vec![0.0; labels.len()];
        Self { labels, probs }
    }

    /// Probability for `label`, or `None` if the label is not in the domain.
    pub fn prob(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.probs[i])
    }

    /// Domain labels in declared order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Probabilities, positionally matching [`Posterior::labels`].
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Iterates `(label, probability)` pairs in declared domain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.probs.iter().copied())
    }

    /// True when every probability is 0 — the degenerate result produced by
    /// evidence the network assigns zero total weight.
    pub fn is_all_zero(&self) -> bool {
        self.probs.iter().all(|&p| p == 0.0)
    }

    /// Number of domain values.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True for the empty domain (never produced by the engines).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
