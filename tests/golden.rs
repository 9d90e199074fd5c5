//! Golden tests for the checker.
//!
//! These tests run full certificates through the validator, from parsed text
//! and from files on disk.

use isr_checker::{
    load_certificate, load_endpoints, load_graph, parse_certificate, parse_endpoints,
    parse_graph, validate, Certificate, Endpoints, Graph, LoadError, ParseError,
    ReconfigurationValidator, ReportCode, State, Step, ValidationError, Verdict,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

const PATH_GRAPH: &str = "\
c 1 - 2 - 3   4
p 4 2
e 1 2
e 2 3
";

fn path_graph() -> Graph {
    parse_graph(PATH_GRAPH).unwrap()
}

fn cycle_graph(n: usize) -> Graph {
    Graph::new(n, (1..=n).map(|i| (i, i % n + 1)))
}

fn check(graph: &str, st: &str, answer: &str) -> Result<Verdict, ValidationError> {
    let graph = parse_graph(graph).unwrap();
    let endpoints = parse_endpoints(st).unwrap();
    let certificate = parse_certificate(answer).unwrap();
    ReconfigurationValidator::new(&graph, &endpoints).validate(&certificate)
}

// ─────────────────────────────────────────────────────────────────────────────
// SCENARIOS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_one_token_move_succeeds() {
    let outcome = check(PATH_GRAPH, "s 1 3\nt 1 4\n", "a YES\na 1 3\na 1 4\n");
    assert_eq!(outcome, Ok(Verdict::Reachable { steps: 2, warnings: vec![] }));
    assert_eq!(outcome.unwrap().code(), ReportCode::Code01);
}

#[test]
fn test_two_tokens_moved_fails_at_first_step() {
    let err = check(PATH_GRAPH, "s 1 3\nt 2 4\n", "a YES\na 1 3\na 2 4\n").unwrap_err();
    assert_eq!(err, ValidationError::InvalidMove { step: Step::from_index(0) });
    assert_eq!(err.code(), ReportCode::Code13);
}

#[test]
fn test_no_answer_is_accepted() {
    let verdict = check(PATH_GRAPH, "s 1 3\nt 2 4\n", "a NO\n").unwrap();
    assert_eq!(verdict, Verdict::NoSequenceClaimed);
    assert_eq!(verdict.code(), ReportCode::Code00);
}

#[test]
fn test_unsorted_input_states() {
    let outcome = check(PATH_GRAPH, "s 3 1\nt 4 1\n", "a YES\na 3 1\na 4 1 1\n");
    assert!(outcome.is_ok());
}

#[test]
fn test_start_mismatch() {
    let err = check(PATH_GRAPH, "s 1 3\nt 1 4\n", "a YES\na 1 4\na 1 4\n").unwrap_err();
    assert_eq!(err, ValidationError::StartMismatch);
    assert_eq!(err.code(), ReportCode::Code10);
}

#[test]
fn test_target_mismatch() {
    let err = check(PATH_GRAPH, "s 1 3\nt 1 4\n", "a YES\na 1 3\na 3 4\n").unwrap_err();
    assert_eq!(err, ValidationError::TargetMismatch);
    assert_eq!(err.code(), ReportCode::Code11);
}

#[test]
fn test_dependent_middle_state() {
    let err = check(
        PATH_GRAPH,
        "s 1 3\nt 3 4\n",
        "a YES\na 1 3\na 2 3\na 3 4\n",
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::NotIndependentSet { step: Step::from_index(1) });
    assert_eq!(err.to_string(), "The 2nd state is not an independent set");
}

#[test]
fn test_yes_without_states() {
    let err = check(PATH_GRAPH, "s 1 3\nt 1 4\n", "a YES\n").unwrap_err();
    assert_eq!(err, ValidationError::EmptySequence);
}

#[test]
fn test_walk_around_cycle() {
    // Two tokens on C8 at {1, 5}, walked one vertex at a time to {3, 7}.
    let graph = cycle_graph(8);
    let seq: Vec<State> = vec![
        State::from([1, 5]),
        State::from([2, 5]),
        State::from([2, 6]),
        State::from([3, 6]),
        State::from([3, 7]),
    ];
    let endpoints = Endpoints::new([1, 5], [3, 7]);
    let verdict = ReconfigurationValidator::new(&graph, &endpoints)
        .validate(&Certificate::yes(seq))
        .unwrap();
    assert_eq!(verdict, Verdict::Reachable { steps: 5, warnings: vec![] });
}

#[test]
fn test_revisit_warns_but_succeeds() {
    let verdict = check(
        PATH_GRAPH,
        "s 1 3\nt 1 4\n",
        "a YES\na 1 3\na 1 4\na 1 3\na 1 4\n",
    )
    .unwrap();
    assert_eq!(verdict.code(), ReportCode::Code02);
    assert_eq!(verdict.warnings().len(), 1);
}

#[test]
fn test_huge_declared_vertex_count() {
    let outcome = check(
        "p 18446744073709551615 0\n",
        "s 1\nt 2\n",
        "a YES\na 1\na 2\n",
    );
    assert_eq!(outcome, Ok(Verdict::Reachable { steps: 2, warnings: vec![] }));

    let outcome = check("p 1000000000000 1\ne 1 2\n", "s 1\nt 1\n", "a YES\na 1 2\n");
    assert_eq!(outcome, Err(ValidationError::NotIndependentSet { step: Step::from_index(0) }));
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_input_same_outcome_100_runs() {
    let graph = path_graph();
    let start = State::from([1, 3]);
    let target = State::from([2, 4]);
    let answers = vec![start.clone(), target.clone()];

    let first = validate(&graph, &start, &target, true, &answers);
    for i in 1..100 {
        assert_eq!(
            validate(&graph, &start, &target, true, &answers),
            first,
            "Outcome must be deterministic (run {} differs from run 0)",
            i
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FILE LOADING
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_load_from_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    std::fs::write(dir.join("graph.col"), PATH_GRAPH).unwrap();
    std::fs::write(dir.join("st.dat"), "s 1 3\nt 1 4\n").unwrap();
    std::fs::write(dir.join("answer.dat"), "a YES\na 1 3\na 1 4\n").unwrap();

    let graph = load_graph(dir.join("graph.col")).unwrap();
    let endpoints = load_endpoints(dir.join("st.dat")).unwrap();
    let certificate = load_certificate(dir.join("answer.dat")).unwrap();

    let verdict = ReconfigurationValidator::new(&graph, &endpoints)
        .validate(&certificate)
        .unwrap();
    assert_eq!(verdict.code(), ReportCode::Code01);
}

#[test]
fn test_load_reports_path_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.col");
    std::fs::write(&path, "p 3 1\nq 1 2\n").unwrap();

    match load_graph(&path) {
        Err(LoadError::Parse { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source, ParseError::IllegalLine { line: 2 });
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
