#[test]
fn incremental_construction_lifecycle() {
    use beliefnet::{posterior, BayesNet, Evidence};

    let mut net = BayesNet::new();
    net.add_variable("Nube", &["Si", "No"]).unwrap();
    net.add_variable("Lluvia", &["Si", "No"]).unwrap();
    net.set_parents("Lluvia", &["Nube"]).unwrap();
    net.set_cpt("Nube", &[], &[("Si", 0.4), ("No", 0.6)]).unwrap();
    net.set_cpt("Lluvia", &["Si"], &[("Si", 0.7), ("No", 0.3)])
        .unwrap();
    net.set_cpt("Lluvia", &["No"], &[("Si", 0.1), ("No", 0.9)])
        .unwrap();

    let p = posterior(&net, "Lluvia", &Evidence::new()).unwrap();
    assert!((p.prob("Si").unwrap() - (0.4 * 0.7 + 0.6 * 0.1)).abs() < 1e-12);

    // Reconfiguring parents clears the table; the variable must be refilled.
    net.add_variable("Frente", &["Si", "No"]).unwrap();
    net.set_cpt("Frente", &[], &[("Si", 0.5), ("No", 0.5)])
        .unwrap();
    net.set_parents("Lluvia", &["Nube", "Frente"]).unwrap();
    assert_eq!(net.missing_rows("Lluvia").unwrap().len(), 4);

    for (nube, frente, p_si) in [
        ("Si", "Si", 0.9),
        ("Si", "No", 0.5),
        ("No", "Si", 0.4),
        ("No", "No", 0.05),
    ] {
        net.set_cpt("Lluvia", &[nube, frente], &[("Si", p_si), ("No", 1.0 - p_si)])
            .unwrap();
    }
    assert!(net.missing_rows("Lluvia").unwrap().is_empty());

    let p = posterior(&net, "Lluvia", &Evidence::new()).unwrap();
    // 0.4*(0.5*0.9+0.5*0.5) + 0.6*(0.5*0.4+0.5*0.05)
    assert!((p.prob("Si").unwrap() - 0.415).abs() < 1e-12);
}

#[test]
fn redeclaring_a_variable_is_a_no_op() {
    use beliefnet::BayesNet;

    let mut net = BayesNet::new();
    let first = net.add_variable("A", &["Si", "No"]).unwrap();
    let second = net.add_variable("A", &["x", "y", "z"]).unwrap();
    assert_eq!(first, second);

    let var = net.variable(first).unwrap();
    assert_eq!(var.domain(), ["Si", "No"]);
    assert_eq!(net.len(), 1);
}

#[test]
fn parent_lists_are_validated() {
    use beliefnet::{BayesError, BayesNet};

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();
    net.add_variable("B", &["Si", "No"]).unwrap();

    let unknown = net.set_parents("B", &["Fantasma"]);
    assert!(matches!(unknown, Err(BayesError::Structural(_))));

    let duplicated = net.set_parents("B", &["A", "A"]);
    assert!(matches!(duplicated, Err(BayesError::Structural(_))));

    let self_loop = net.set_parents("A", &["A"]);
    assert!(matches!(self_loop, Err(BayesError::Structural(_))));
}

#[test]
fn cycles_are_rejected() {
    use beliefnet::{BayesError, BayesNet};

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();
    net.add_variable("B", &["Si", "No"]).unwrap();
    net.add_variable("C", &["Si", "No"]).unwrap();
    net.set_parents("B", &["A"]).unwrap();
    net.set_parents("C", &["B"]).unwrap();

    let err = net.set_parents("A", &["C"]).unwrap_err();
    if let BayesError::Structural(msg) = err {
        assert!(msg.contains("cycle"));
    } else {
        panic!("expected Structural error");
    }

    // The failed call left the network untouched.
    let a = net.var_id("A").unwrap();
    assert!(net.variable(a).unwrap().parents().is_empty());
}

#[test]
fn distributions_are_validated_on_entry() {
    use beliefnet::{BayesError, BayesNet};

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();

    let short = net.set_cpt("A", &[], &[("Si", 1.0)]);
    assert!(matches!(short, Err(BayesError::Distribution(_))));

    let negative = net.set_cpt("A", &[], &[("Si", -0.1), ("No", 1.1)]);
    assert!(matches!(negative, Err(BayesError::Distribution(_))));

    let off_sum = net.set_cpt("A", &[], &[("Si", 0.6), ("No", 0.6)]);
    assert!(matches!(off_sum, Err(BayesError::Distribution(_))));

    let foreign = net.set_cpt("A", &[], &[("Si", 0.5), ("Quizas", 0.5)]);
    assert!(matches!(foreign, Err(BayesError::Distribution(_))));

    // Within tolerance passes and is stored as given.
    net.set_cpt("A", &[], &[("Si", 0.503), ("No", 0.503)])
        .unwrap();
    let a = net.var_id("A").unwrap();
    assert_eq!(net.variable(a).unwrap().row(&[]), Some(&[0.503, 0.503][..]));
}

#[test]
fn wrong_tuple_arity_is_structural() {
    use beliefnet::{BayesError, BayesNet};

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();
    net.add_variable("B", &["Si", "No"]).unwrap();
    net.set_parents("B", &["A"]).unwrap();

    let too_many = net.set_cpt("B", &["Si", "No"], &[("Si", 0.5), ("No", 0.5)]);
    assert!(matches!(too_many, Err(BayesError::Structural(_))));

    let too_few = net.set_cpt("B", &[], &[("Si", 0.5), ("No", 0.5)]);
    assert!(matches!(too_few, Err(BayesError::Structural(_))));
}

#[test]
fn removal_rewires_children_and_rekeys_rows() {
    use beliefnet::{posterior, BayesNet, Evidence};

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();
    net.add_variable("B", &["Si", "No"]).unwrap();
    net.add_variable("C", &["Si", "No"]).unwrap();
    net.set_parents("C", &["A", "B"]).unwrap();
    net.set_cpt("A", &[], &[("Si", 0.5), ("No", 0.5)]).unwrap();
    net.set_cpt("B", &[], &[("Si", 0.3), ("No", 0.7)]).unwrap();
    for (a, b, p_si) in [
        ("Si", "Si", 0.9),
        ("Si", "No", 0.8),
        ("No", "Si", 0.2),
        ("No", "No", 0.1),
    ] {
        net.set_cpt("C", &[a, b], &[("Si", p_si), ("No", 1.0 - p_si)])
            .unwrap();
    }

    net.remove_variable("A").unwrap();
    assert_eq!(net.len(), 2);
    assert!(net.var_id("A").is_none());

    // C now depends on B alone and its rows keep B's positions.
    let c = net.var_id("C").unwrap();
    let parents = net.variable(c).unwrap().parents();
    assert_eq!(parents.len(), 1);
    let parent_name = net.variable(parents[0]).unwrap().name();
    assert_eq!(parent_name, "B");
    assert!(net.missing_rows("C").unwrap().is_empty());

    // Queries keep working against the surviving structure.
    let p = posterior(&net, "C", &Evidence::new().with("B", "Si")).unwrap();
    assert!(p.prob("Si").unwrap() > 0.0);
}

#[test]
fn missing_rows_lists_label_tuples_in_domain_order() {
    use beliefnet::BayesNet;

    let mut net = BayesNet::new();
    net.add_variable("A", &["Si", "No"]).unwrap();
    net.add_variable("F", &["Alta", "Baja", "Nula"]).unwrap();
    net.add_variable("X", &["Si", "No"]).unwrap();
    net.set_parents("X", &["A", "F"]).unwrap();
    net.set_cpt("X", &["Si", "Baja"], &[("Si", 0.5), ("No", 0.5)])
        .unwrap();

    let missing = net.missing_rows("X").unwrap();
    let expected: Vec<Vec<String>> = [
        ["Si", "Alta"],
        ["Si", "Nula"],
        ["No", "Alta"],
        ["No", "Baja"],
        ["No", "Nula"],
    ]
    .iter()
    .map(|pair| pair.iter().map(|s| s.to_string()).collect())
    .collect();
    assert_eq!(missing, expected);
}
