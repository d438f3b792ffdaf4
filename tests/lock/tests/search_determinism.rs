//! In-process determinism: repeated runs produce byte-identical graphs.

use lock_tests::fixtures::FIXTURES;
use tileslide_harness::config::RunConfig;
use tileslide_harness::runner::run;
use tileslide_search::observer::{NoopObserver, RecordingObserver};
use tileslide_search::search::solve;

// ---------------------------------------------------------------------------
// ACCEPTANCE: SEARCH-DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn search_graph_bytes_identical_over_n10() {
    for fixture in FIXTURES {
        let first = solve(fixture.initial, fixture.goal, &fixture.policy())
            .unwrap()
            .graph
            .to_canonical_json_bytes()
            .unwrap();
        for _ in 1..10 {
            let again = solve(fixture.initial, fixture.goal, &fixture.policy())
                .unwrap()
                .graph
                .to_canonical_json_bytes()
                .unwrap();
            assert_eq!(first, again, "{}: graph bytes diverged", fixture.name);
        }
    }
}

#[test]
fn run_reports_identical_over_n10() {
    for fixture in FIXTURES {
        let config = RunConfig {
            policy: fixture.policy(),
            ..RunConfig::default()
        };
        let first = run(fixture.initial, fixture.goal, &config, &mut NoopObserver).unwrap();
        for _ in 1..10 {
            let again = run(fixture.initial, fixture.goal, &config, &mut NoopObserver).unwrap();
            assert_eq!(first.report, again.report, "{}", fixture.name);
        }
    }
}

#[test]
fn observer_does_not_change_the_result() {
    for fixture in FIXTURES {
        let config = RunConfig {
            policy: fixture.policy(),
            ..RunConfig::default()
        };
        let quiet = run(fixture.initial, fixture.goal, &config, &mut NoopObserver).unwrap();
        let mut recorder = RecordingObserver::default();
        let watched = run(fixture.initial, fixture.goal, &config, &mut recorder).unwrap();
        assert_eq!(quiet.report, watched.report, "{}", fixture.name);
        assert!(!recorder.events.is_empty());
    }
}

#[test]
fn policies_produce_distinct_graph_digests() {
    let restricted = &FIXTURES[4];
    let full = &FIXTURES[5];
    assert_eq!(restricted.initial, full.initial);
    let a = solve(restricted.initial, restricted.goal, &restricted.policy()).unwrap();
    let b = solve(full.initial, full.goal, &full.policy()).unwrap();
    assert_ne!(a.graph.digest().unwrap(), b.graph.digest().unwrap());
}
