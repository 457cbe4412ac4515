//! Ready-made demonstration networks.
//!
//! Each constructor builds a small, fully specified network through the
//! public construction API and returns it ready for queries. They double as
//! living documentation of that API and as fixtures for the integration
//! tests and benchmarks.

use crate::engine::errors::BayesError;
use crate::engine::network::BayesNet;

/// Classic burglary alarm network: `Robo` and `Terremoto` can trip
/// `Alarma`, and `JuanLlama` / `MariaLlama` report on it.
///
/// The textbook query is `P(Robo | JuanLlama=Si, MariaLlama=Si)`, which
/// comes out near 0.284 for `Si`.
pub fn alarm() -> Result<BayesNet, BayesError> {
    let mut net = BayesNet::new();
    net.add_variable("Robo", &["Si", "No"])?;
    net.add_variable("Terremoto", &["Si", "No"])?;
    net.add_variable("Alarma", &["Si", "No"])?;
    net.add_variable("JuanLlama", &["Si", "No"])?;
    net.add_variable("MariaLlama", &["Si", "No"])?;

    net.set_parents("Alarma", &["Robo", "Terremoto"])?;
    net.set_parents("JuanLlama", &["Alarma"])?;
    net.set_parents("MariaLlama", &["Alarma"])?;

    net.set_cpt("Robo", &[], &[("Si", 0.001), ("No", 0.999)])?;
    net.set_cpt("Terremoto", &[], &[("Si", 0.002), ("No", 0.998)])?;

    net.set_cpt("Alarma", &["Si", "Si"], &[("Si", 0.95), ("No", 0.05)])?;
    net.set_cpt("Alarma", &["Si", "No"], &[("Si", 0.94), ("No", 0.06)])?;
    net.set_cpt("Alarma", &["No", "Si"], &[("Si", 0.29), ("No", 0.71)])?;
    net.set_cpt("Alarma", &["No", "No"], &[("Si", 0.001), ("No", 0.999)])?;

    net.set_cpt("JuanLlama", &["Si"], &[("Si", 0.90), ("No", 0.10)])?;
    net.set_cpt("JuanLlama", &["No"], &[("Si", 0.05), ("No", 0.95)])?;

    net.set_cpt("MariaLlama", &["Si"], &[("Si", 0.70), ("No", 0.30)])?;
    net.set_cpt("MariaLlama", &["No"], &[("Si", 0.01), ("No", 0.99)])?;
    Ok(net)
}

/// Cloudy/sprinkler/rain/wet-grass network.
///
/// `Nublado` drives both `Rociador` and `Lluvia`, which meet again at
/// `HierbaMojada` — the standard example of two converging causes.
pub fn sprinkler() -> Result<BayesNet, BayesError> {
    let mut net = BayesNet::new();
    net.add_variable("Nublado", &["Si", "No"])?;
    net.add_variable("Rociador", &["Si", "No"])?;
    net.add_variable("Lluvia", &["Si", "No"])?;
    net.add_variable("HierbaMojada", &["Si", "No"])?;

    net.set_parents("Rociador", &["Nublado"])?;
    net.set_parents("Lluvia", &["Nublado"])?;
    net.set_parents("HierbaMojada", &["Rociador", "Lluvia"])?;

    net.set_cpt("Nublado", &[], &[("Si", 0.5), ("No", 0.5)])?;

    net.set_cpt("Rociador", &["Si"], &[("Si", 0.1), ("No", 0.9)])?;
    net.set_cpt("Rociador", &["No"], &[("Si", 0.5), ("No", 0.5)])?;

    net.set_cpt("Lluvia", &["Si"], &[("Si", 0.8), ("No", 0.2)])?;
    net.set_cpt("Lluvia", &["No"], &[("Si", 0.2), ("No", 0.8)])?;

    net.set_cpt("HierbaMojada", &["Si", "Si"], &[("Si", 0.99), ("No", 0.01)])?;
    net.set_cpt("HierbaMojada", &["Si", "No"], &[("Si", 0.90), ("No", 0.10)])?;
    net.set_cpt("HierbaMojada", &["No", "Si"], &[("Si", 0.90), ("No", 0.10)])?;
    net.set_cpt("HierbaMojada", &["No", "No"], &[("Si", 0.00), ("No", 1.00)])?;
    Ok(net)
}

/// Small diagnostic network relating two conditions to two symptoms.
///
/// `Fiebre` is the one ternary variable (`Alta`/`Baja`/`Nula`), so this
/// network exercises non-binary domains.
pub fn clinic() -> Result<BayesNet, BayesError> {
    let mut net = BayesNet::new();
    net.add_variable("Gripe", &["Si", "No"])?;
    net.add_variable("Absceso", &["Si", "No"])?;
    net.add_variable("Fiebre", &["Alta", "Baja", "Nula"])?;
    net.add_variable("Cansancio", &["Si", "No"])?;

    net.set_parents("Fiebre", &["Gripe", "Absceso"])?;
    net.set_parents("Cansancio", &["Gripe"])?;

    net.set_cpt("Gripe", &[], &[("Si", 0.05), ("No", 0.95)])?;
    net.set_cpt("Absceso", &[], &[("Si", 0.02), ("No", 0.98)])?;

    net.set_cpt(
        "Fiebre",
        &["Si", "Si"],
        &[("Alta", 0.90), ("Baja", 0.09), ("Nula", 0.01)],
    )?;
    net.set_cpt(
        "Fiebre",
        &["Si", "No"],
        &[("Alta", 0.60), ("Baja", 0.30), ("Nula", 0.10)],
    )?;
    net.set_cpt(
        "Fiebre",
        &["No", "Si"],
        &[("Alta", 0.70), ("Baja", 0.20), ("Nula", 0.10)],
    )?;
    net.set_cpt(
        "Fiebre",
        &["No", "No"],
        &[("Alta", 0.01), ("Baja", 0.09), ("Nula", 0.90)],
    )?;

    net.set_cpt("Cansancio", &["Si"], &[("Si", 0.80), ("No", 0.20)])?;
    net.set_cpt("Cansancio", &["No"], &[("Si", 0.10), ("No", 0.90)])?;
    Ok(net)
}

/// Engine-fault diagnosis network: battery and fuel state behind whether
/// the car starts and what the fuel gauge reads.
///
/// Several rows are deterministic (`IgnicionOK` is impossible without
/// battery), so posteriors here exercise zero-probability paths.
pub fn machine_faults() -> Result<BayesNet, BayesError> {
    let mut net = BayesNet::new();
    net.add_variable("BateriaOK", &["Si", "No"])?;
    net.add_variable("CombustibleOK", &["Si", "No"])?;
    net.add_variable("IgnicionOK", &["Si", "No"])?;
    net.add_variable("Arranca", &["Si", "No"])?;
    net.add_variable("MedidorLleno", &["Si", "No"])?;

    net.set_parents("IgnicionOK", &["BateriaOK"])?;
    net.set_parents("Arranca", &["IgnicionOK", "CombustibleOK"])?;
    net.set_parents("MedidorLleno", &["CombustibleOK"])?;

    net.set_cpt("BateriaOK", &[], &[("Si", 0.9), ("No", 0.1)])?;
    net.set_cpt("CombustibleOK", &[], &[("Si", 0.9), ("No", 0.1)])?;

    net.set_cpt("IgnicionOK", &["Si"], &[("Si", 0.95), ("No", 0.05)])?;
    net.set_cpt("IgnicionOK", &["No"], &[("Si", 0.00), ("No", 1.00)])?;

    net.set_cpt("Arranca", &["Si", "Si"], &[("Si", 0.99), ("No", 0.01)])?;
    net.set_cpt("Arranca", &["Si", "No"], &[("Si", 0.0), ("No", 1.0)])?;
    net.set_cpt("Arranca", &["No", "Si"], &[("Si", 0.0), ("No", 1.0)])?;
    net.set_cpt("Arranca", &["No", "No"], &[("Si", 0.0), ("No", 1.0)])?;

    net.set_cpt("MedidorLleno", &["Si"], &[("Si", 0.98), ("No", 0.02)])?;
    net.set_cpt("MedidorLleno", &["No"], &[("Si", 0.05), ("No", 0.95)])?;
    Ok(net)
}
