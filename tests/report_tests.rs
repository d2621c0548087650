use interval_sssp::config::ScenarioConfig;
use interval_sssp::graph::generators::{embedded_network, embedded_network_all_open};
use interval_sssp::{robust_shortest_path, Error, RouteReport, Verdict};
use serde_json::Value;

#[test]
fn test_report_uses_node_names() {
    let graph = embedded_network_all_open().unwrap();
    let result = robust_shortest_path(&graph, "a", "d").unwrap();
    let report = RouteReport::assemble(&graph, &result);

    assert_eq!(report.best_path, vec!["a", "c", "d"]);
    assert_eq!((report.best_a, report.best_b), (14.0, 53.0));
    assert_eq!(report.baseline.path, vec!["a", "b", "d"]);
    assert_eq!(report.delta(), Some((-2.0, 0.0)));
    assert_eq!(report.verdict(), Verdict::Improves);
}

#[test]
fn test_report_matches_when_baseline_is_optimal() {
    let graph = embedded_network_all_open().unwrap();
    let result = robust_shortest_path(&graph, "a", "g").unwrap();
    let report = RouteReport::assemble(&graph, &result);

    assert_eq!(report.delta(), Some((0.0, 0.0)));
    assert_eq!(report.verdict(), Verdict::Matches);
    assert_eq!(report.verdict().to_string(), "matches the baseline");
}

#[test]
fn test_report_json_layout() {
    let graph = embedded_network_all_open().unwrap();
    let result = robust_shortest_path(&graph, "b", "g").unwrap();
    let report = RouteReport::assemble(&graph, &result);

    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["best_path"], serde_json::json!(["b", "c", "e", "g"]));
    assert_eq!(json["best_A"], 25.0);
    assert_eq!(json["best_B"], 81.0);
    assert_eq!(json["baseline"]["path"], serde_json::json!(["b", "c", "e", "g"]));
    assert_eq!(json["baseline"]["A"], 25.0);
    assert_eq!(json["baseline"]["B"], 81.0);
}

#[test]
fn test_infeasible_report() {
    let graph = embedded_network(5, 1.0).unwrap();
    let result = robust_shortest_path(&graph, "a", "g").unwrap();
    let report = RouteReport::assemble(&graph, &result);

    assert!(!report.is_feasible());
    assert!(report.best_path.is_empty());
    assert!(report.baseline.path.is_empty());
    assert_eq!(report.delta(), None);
    assert_eq!(report.verdict(), Verdict::Infeasible);

    // Infinite costs have no JSON number form
    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert!(json["best_B"].is_null());
}

#[test]
fn test_scenario_config_defaults() {
    let config = ScenarioConfig::default();
    assert_eq!(config.seed, 42);
    assert_eq!(config.p_closed, 0.02);
    assert_eq!(config.source, "b");
    assert_eq!(config.destination, "g");
    assert!(!config.json);
    assert!(config.validate().is_ok());

    let bad = ScenarioConfig {
        p_closed: 2.0,
        ..ScenarioConfig::default()
    };
    assert_eq!(bad.validate(), Err(Error::InvalidProbability(2.0)));
}

#[test]
fn test_json_errors_use_the_crate_error() {
    let graph = embedded_network_all_open().unwrap();
    let result = robust_shortest_path(&graph, "a", "d").unwrap();
    let report = RouteReport::assemble(&graph, &result);

    let json: Result<String, Error> = report.to_json();
    assert!(json.unwrap().contains("\"best_path\""));

    let err = Error::Serialization("key must be a string".to_string());
    assert_eq!(err.to_string(), "Could not serialize report: key must be a string");
}
