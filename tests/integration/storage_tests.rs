#![cfg(feature = "serde")]

#[test]
fn demo_networks_survive_save_and_load() {
    use beliefnet::networks;
    use beliefnet::storage::{load_network_json, save_network_json};

    for net in [
        networks::alarm().unwrap(),
        networks::sprinkler().unwrap(),
        networks::clinic().unwrap(),
        networks::machine_faults().unwrap(),
    ] {
        let json = save_network_json(&net).unwrap();
        let loaded = load_network_json(&json).unwrap();
        assert_eq!(loaded, net);
    }
}

#[test]
fn loaded_network_answers_the_same_queries() {
    use beliefnet::storage::{load_network_json, save_network_json};
    use beliefnet::{networks, posterior, Evidence};

    let net = networks::alarm().unwrap();
    let loaded = load_network_json(&save_network_json(&net).unwrap()).unwrap();

    let ev = Evidence::new()
        .with("JuanLlama", "Si")
        .with("MariaLlama", "Si");
    let before = posterior(&net, "Robo", &ev).unwrap();
    let after = posterior(&loaded, "Robo", &ev).unwrap();
    for (label, p) in before.iter() {
        assert!((p - after.prob(label).unwrap()).abs() < 1e-12);
    }
}

#[test]
fn handwritten_document_loads_and_queries() {
    use beliefnet::storage::load_network_json;
    use beliefnet::{posterior, Evidence};

    let json = r#"{
        "variables": ["Lluvia", "Trafico"],
        "domains": {
            "Lluvia": ["Si", "No"],
            "Trafico": ["Si", "No"]
        },
        "parents": {
            "Lluvia": [],
            "Trafico": ["Lluvia"]
        },
        "cpt": {
            "Lluvia": { "[]": { "Si": 0.3, "No": 0.7 } },
            "Trafico": {
                "[\"Si\"]": { "Si": 0.8, "No": 0.2 },
                "[\"No\"]": { "Si": 0.4, "No": 0.6 }
            }
        }
    }"#;

    let net = load_network_json(json).unwrap();
    assert_eq!(net.len(), 2);

    let p = posterior(&net, "Trafico", &Evidence::new()).unwrap();
    assert!((p.prob("Si").unwrap() - 0.52).abs() < 1e-12);
}

#[test]
fn document_preserves_declaration_order() {
    use beliefnet::storage::load_network_json;

    // Declaration order comes from the variables list, not key order.
    let json = r#"{
        "variables": ["Zeta", "Alfa"],
        "domains": { "Alfa": ["a", "b"], "Zeta": ["a", "b"] },
        "parents": { "Alfa": [], "Zeta": [] },
        "cpt": {}
    }"#;

    let net = load_network_json(json).unwrap();
    let names: Vec<&str> = net.variables().map(|v| v.name()).collect();
    assert_eq!(names, vec!["Zeta", "Alfa"]);
}

#[test]
fn bad_row_sum_in_document_is_rejected() {
    use beliefnet::storage::load_network_json;
    use beliefnet::BayesError;

    let json = r#"{
        "variables": ["A"],
        "domains": { "A": ["Si", "No"] },
        "parents": { "A": [] },
        "cpt": { "A": { "[]": { "Si": 0.5, "No": 0.3 } } }
    }"#;

    assert!(matches!(
        load_network_json(json),
        Err(BayesError::Distribution(_))
    ));
}

#[test]
fn malformed_row_key_in_document_is_rejected() {
    use beliefnet::storage::load_network_json;
    use beliefnet::BayesError;

    let json = r#"{
        "variables": ["A"],
        "domains": { "A": ["Si", "No"] },
        "parents": { "A": [] },
        "cpt": { "A": { "('Si',)": { "Si": 0.5, "No": 0.5 } } }
    }"#;

    assert!(matches!(
        load_network_json(json),
        Err(BayesError::Storage(_))
    ));
}

#[test]
fn garbage_input_is_a_storage_error() {
    use beliefnet::storage::load_network_json;
    use beliefnet::BayesError;

    for bad in ["", "{", "[1, 2, 3]", "\"just a string\""] {
        assert!(matches!(
            load_network_json(bad),
            Err(BayesError::Storage(_))
        ));
    }
}
