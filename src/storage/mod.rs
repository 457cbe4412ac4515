//! Network persistence: the document exchange format.
//!
//! A [`NetworkDocument`] is the structured form collaborators persist and
//! exchange: the variable list in declaration order, domains, parent lists,
//! and CPT rows keyed by the JSON encoding of their parent-value label
//! tuple (`"[]"` for root variables, `"[\"Si\",\"No\"]"` and so on — the
//! encoding stays unambiguous for labels containing quotes or commas).
//!
//! Loading rebuilds the network through the construction API, so every
//! structural and distribution invariant is re-validated; the engines only
//! ever operate on the reconstructed [`BayesNet`], never on the document.

use std::collections::BTreeMap;

use crate::engine::errors::BayesError;
use crate::engine::network::BayesNet;

/// Serialized form of a network.
///
/// Field names and shapes follow the persistence schema consumed by
/// external collaborators: `variables`, `domains`, `parents`, `cpt`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkDocument {
    /// Variable names in declaration order.
    pub variables: Vec<String>,
    /// Ordered domain labels per variable.
    pub domains: BTreeMap<String, Vec<String>>,
    /// Ordered parent names per variable.
    pub parents: BTreeMap<String, Vec<String>>,
    /// Per variable: stringified parent-value tuple → value → probability.
    pub cpt: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>,
}

/// Converts a network into its document form.
#[cfg(feature = "serde")]
pub fn to_document(net: &BayesNet) -> Result<NetworkDocument, BayesError> {
    let mut doc = NetworkDocument::default();
    for var in net.variables() {
        doc.variables.push(var.name().to_string());
        doc.domains
            .insert(var.name().to_string(), var.domain().to_vec());
        let parent_names: Vec<String> = var
            .parents()
            .iter()
            .map(|p| net.var(*p).name().to_string())
            .collect();
        doc.parents.insert(var.name().to_string(), parent_names);
        let mut rows = BTreeMap::new();
        for (key, probs) in var.rows() {
            let labels: Vec<&str> = key
                .iter()
                .enumerate()
                .map(|(slot, &ix)| net.var(var.parents()[slot]).domain()[ix].as_str())
                .collect();
            let tuple = serde_json::to_string(&labels)
                .map_err(|e| BayesError::Storage(format!("failed to encode row key: {}", e)))?;
            let mut dist = BTreeMap::new();
            for (ix, &p) in probs.iter().enumerate() {
                dist.insert(var.domain()[ix].clone(), p);
            }
            rows.insert(tuple, dist);
        }
        doc.cpt.insert(var.name().to_string(), rows);
    }
    Ok(doc)
}

/// Rebuilds a network from its document form.
///
/// Construction goes through the normal mutators, so a document that
/// violates any invariant fails exactly the way the offending call would:
/// structural problems as [`BayesError::Structural`], bad rows as
/// [`BayesError::Distribution`]. Problems with the document shape itself
/// surface as [`BayesError::Storage`].
#[cfg(feature = "serde")]
pub fn from_document(doc: &NetworkDocument) -> Result<BayesNet, BayesError> {
    let mut net = BayesNet::new();
    for name in &doc.variables {
        if net.var_id(name).is_some() {
            return Err(BayesError::Storage(format!(
                "document repeats variable '{}'",
                name
            )));
        }
        let domain = doc.domains.get(name).ok_or_else(|| {
            BayesError::Storage(format!(
                "document lists variable '{}' without a domain",
                name
            ))
        })?;
        let labels: Vec<&str> = domain.iter().map(String::as_str).collect();
        net.add_variable(name, &labels)?;
    }
    for (name, parent_names) in &doc.parents {
        let refs: Vec<&str> = parent_names.iter().map(String::as_str).collect();
        net.set_parents(name, &refs)?;
    }
    for (name, rows) in &doc.cpt {
        for (tuple, dist) in rows {
            let labels: Vec<String> = serde_json::from_str(tuple).map_err(|e| {
                BayesError::Storage(format!(
                    "malformed row key '{}' for '{}': {}",
                    tuple, name, e
                ))
            })?;
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let pairs: Vec<(&str, f64)> = dist.iter().map(|(v, p)| (v.as_str(), *p)).collect();
            net.set_cpt(name, &refs, &pairs)?;
        }
    }
    Ok(net)
}

/// Serializes a network to a pretty-printed JSON document string.
#[cfg(feature = "serde")]
pub fn save_network_json(net: &BayesNet) -> Result<String, BayesError> {
    let doc = to_document(net)?;
    serde_json::to_string_pretty(&doc)
        .map_err(|e| BayesError::Storage(format!("failed to serialize document: {}", e)))
}

/// Parses a JSON document string and rebuilds the network it describes.
#[cfg(feature = "serde")]
pub fn load_network_json(json: &str) -> Result<BayesNet, BayesError> {
    let doc: NetworkDocument = serde_json::from_str(json)
        .map_err(|e| BayesError::Storage(format!("failed to deserialize document: {}", e)))?;
    from_document(&doc)
}
