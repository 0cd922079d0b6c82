use dfa_minimize::prelude::*;

fn four_state_dfa() -> Automaton {
    Automaton::builder()
        .with_states(["A", "B", "C", "D"])
        .with_alphabet(["0", "1"])
        .with_transitions([
            ("A", "0", "B"),
            ("A", "1", "A"),
            ("B", "0", "A"),
            ("B", "1", "C"),
            ("C", "0", "D"),
            ("C", "1", "C"),
            ("D", "0", "D"),
            ("D", "1", "D"),
        ])
        .with_accepting(["D"])
        .into_automaton("A")
}

#[test_log::test]
fn four_state_example_is_already_minimal() {
    // `C` reaches `D` on `0` while `A` and `B` do not, and `B` reaches `C` on `1`, so every
    // pair ends up marked
    let dfa = four_state_dfa();
    let min = minimize(&dfa).unwrap();

    assert_eq!(min.states, vec!["A", "B", "C", "D"]);
    assert_eq!(min.initial, "A");
    assert_eq!(min.accepting, vec!["D"]);
    assert_eq!(min.transitions.len(), 8);
    assert!(dfa.agrees_up_to(&min, 7));
    assert!(min.is_isomorphic_to(&dfa));
}

#[test]
fn equivalent_pair_is_merged() {
    let dfa = Automaton::builder()
        .with_states(["A", "B", "C", "D"])
        .with_alphabet(["0", "1"])
        .with_transitions([
            ("A", "0", "B"),
            ("A", "1", "C"),
            ("B", "0", "D"),
            ("B", "1", "D"),
            ("C", "0", "B"),
            ("C", "1", "A"),
            ("D", "0", "D"),
            ("D", "1", "D"),
        ])
        .with_accepting(["D"])
        .into_automaton("A");
    let min = minimize(&dfa).unwrap();

    assert_eq!(min.size(), 3);
    assert_eq!(min.states, vec!["A_C", "B", "D"]);
    assert_eq!(min.initial, "A_C");
    assert_eq!(min.accepting, vec!["D"]);
    assert!(dfa.agrees_up_to(&min, 7));
}

#[test]
fn isolated_state_is_pruned() {
    let mut dfa = four_state_dfa();
    dfa.states.push("E".into());
    dfa.transitions.push(Transition::new("E", "0", "A"));
    dfa.transitions.push(Transition::new("E", "1", "E"));
    dfa.accepting.push("E".into());

    let result = minimize_with(&dfa, &Options::default()).unwrap();
    let min = &result.automaton;
    assert_eq!(result.pruned_states, 1);
    assert!(!min.states.iter().any(|q| q.contains('E')));
    assert!(min
        .transitions
        .iter()
        .all(|t| t.source != "E" && t.target != "E"));
    assert!(!min.accepting.contains(&"E".to_string()));
    assert_eq!(min, &minimize(&four_state_dfa()).unwrap());
}

#[test]
fn minimization_is_deterministic() {
    let dfa = four_state_dfa();
    let first = minimize_with(&dfa, &Options::default()).unwrap();
    let second = minimize_with(&dfa.clone(), &Options::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_alphabet_distinguishes_by_acceptance_only() {
    let dfa = Automaton::builder()
        .with_states(["p", "q"])
        .with_accepting(["p"])
        .into_automaton("p");
    let min = minimize(&dfa).unwrap();

    assert_eq!(min.states, vec!["p"]);
    assert!(min.alphabet.is_empty());
    assert!(min.transitions.is_empty());
    assert_eq!(min.accepting, vec!["p"]);
    assert!(min.accepts(Vec::<&str>::new()));
}

#[test]
fn declared_symbols_without_transitions_are_kept() {
    let dfa = Automaton::builder()
        .with_alphabet(["a", "b", "unused"])
        .with_transitions([("x", "a", "y"), ("y", "a", "x"), ("x", "b", "x"), ("y", "b", "y")])
        .with_accepting(["x", "y"])
        .into_automaton("x");
    let min = minimize(&dfa).unwrap();
    assert_eq!(min.states, vec!["x_y"]);
    assert_eq!(min.alphabet, vec!["a", "b", "unused"]);
}

#[test]
fn unlisted_symbols_take_part_in_refinement() {
    let mut dfa = Automaton::builder()
        .with_alphabet(["a"])
        .with_transitions([("x", "a", "y"), ("y", "a", "y")])
        .with_accepting(["z"])
        .into_automaton("x");
    dfa.transitions.push(Transition::new("y", "c", "z"));
    dfa.transitions.push(Transition::new("z", "c", "z"));
    dfa.transitions.push(Transition::new("z", "a", "z"));

    let min = minimize_with(
        &dfa,
        &Options::default().with_partial(PartialPolicy::ImplicitSink),
    )
    .unwrap()
    .automaton;
    assert_eq!(min.alphabet, vec!["a"]);
    assert_eq!(min.size(), 3);
    assert!(dfa.agrees_up_to(&min, 5));

    let strict = Options::default().with_unknown_symbols(SymbolPolicy::Reject);
    assert_eq!(
        minimize_with(&dfa, &strict),
        Err(MinimizeError::UnknownSymbol("c".into()))
    );
}

#[test]
fn dangling_transitions_are_dropped_by_default() {
    let mut dfa = four_state_dfa();
    dfa.transitions.push(Transition::new("A", "2", "nowhere"));

    let min = minimize(&dfa).unwrap();
    assert_eq!(min, minimize(&four_state_dfa()).unwrap());

    let strict = Options::default().with_dangling(DanglingPolicy::Reject);
    assert!(matches!(
        minimize_with(&dfa, &strict),
        Err(MinimizeError::DanglingTransition { .. })
    ));
}

#[test]
fn partial_policy_changes_result() {
    let dfa = Automaton::builder()
        .with_transitions([("s", "a", "p"), ("s", "b", "f"), ("p", "a", "p")])
        .with_accepting(["f"])
        .into_automaton("s");

    // without evidence from one-sided transitions `s` and `p` collapse, which accepts
    // `ab` although the input does not
    let lenient = minimize(&dfa).unwrap();
    assert_eq!(lenient.states, vec!["f", "p_s"]);
    assert!(lenient.accepts(["a", "b"]));
    assert!(!dfa.accepts(["a", "b"]));

    let sink = Options::default().with_partial(PartialPolicy::ImplicitSink);
    let strict = minimize_with(&dfa, &sink).unwrap().automaton;
    assert_eq!(strict.size(), 3);
    assert!(dfa.agrees_up_to(&strict, 5));
}

#[test]
fn indexed_naming_reports_classes() {
    let dfa = Automaton::builder()
        .with_transitions([("A", "0", "B"), ("B", "0", "C"), ("C", "0", "C")])
        .with_accepting(["B", "C"])
        .into_automaton("A");
    let result = minimize_with(&dfa, &Options::default().with_naming(ClassNaming::Indexed))
        .unwrap();

    assert_eq!(result.automaton.states, vec!["q0", "q1"]);
    assert_eq!(
        result.classes,
        vec![
            EquivalenceClass {
                name: "q0".into(),
                members: vec!["A".into()]
            },
            EquivalenceClass {
                name: "q1".into(),
                members: vec!["B".into(), "C".into()]
            },
        ]
    );

    let custom = minimize_with(
        &dfa,
        &Options::default().with_naming(ClassNaming::Concatenate("+".into())),
    )
    .unwrap();
    assert_eq!(custom.automaton.states, vec!["A", "B+C"]);
}

#[test]
fn malformed_records_are_rejected_before_minimizing() {
    let mut dfa = four_state_dfa();
    dfa.accepting.push("Z".into());
    assert_eq!(
        minimize(&dfa),
        Err(MinimizeError::UnknownAccepting("Z".into()))
    );
    assert_eq!(
        MinimizeError::UnknownAccepting("Z".into()).to_string(),
        "malformed automaton: accepting state `Z` in F is not a member of Q"
    );
}
