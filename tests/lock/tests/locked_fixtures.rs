//! Locked outcomes and counters for every fixture instance.

use lock_tests::fixtures::FIXTURES;
use tileslide_search::search::solve;

/// ACCEPTANCE: FIXTURE-OUTCOMES-LOCK
#[test]
fn fixture_outcomes_and_counters_are_locked() {
    for fixture in FIXTURES {
        let result = solve(fixture.initial, fixture.goal, &fixture.policy()).unwrap();
        let meta = &result.graph.metadata;
        assert_eq!(
            result.outcome.solution().map(|s| s.g_cost),
            fixture.solution_len,
            "{}: outcome",
            fixture.name
        );
        assert_eq!(meta.total_expansions, fixture.total_expansions, "{}: expansions", fixture.name);
        assert_eq!(meta.total_nodes, fixture.total_nodes, "{}: nodes", fixture.name);
    }
}

/// ACCEPTANCE: FIXTURE-COUNTER-COHERENCE
#[test]
fn metadata_counters_agree_with_the_event_log() {
    for fixture in FIXTURES {
        let result = solve(fixture.initial, fixture.goal, &fixture.policy()).unwrap();
        let graph = &result.graph;
        let meta = &graph.metadata;

        assert_eq!(graph.expansions.len() as u64, meta.total_expansions, "{}", fixture.name);
        assert_eq!(graph.node_summaries.len() as u64, meta.total_nodes, "{}", fixture.name);
        assert_eq!(result.nodes.len() as u64, meta.total_nodes, "{}", fixture.name);
        // Every node but the root came from exactly one candidate.
        let generated: u64 = graph
            .expansions
            .iter()
            .map(|e| (e.candidates.len() as u64) - duplicates(e))
            .sum();
        assert_eq!(generated + 1, meta.total_nodes, "{}", fixture.name);
        let suppressed: u64 = graph.expansions.iter().map(duplicates).sum();
        assert_eq!(suppressed, meta.total_duplicates_suppressed, "{}", fixture.name);
        assert_eq!(meta.visited_count, meta.total_nodes, "{}", fixture.name);

        for (order, event) in graph.expansions.iter().enumerate() {
            assert_eq!(event.expansion_order, order as u64);
        }
    }
}

fn duplicates(event: &tileslide_search::graph::ExpandEvent) -> u64 {
    event
        .candidates
        .iter()
        .filter(|c| {
            matches!(
                c.outcome,
                tileslide_search::graph::CandidateOutcome::DuplicateSuppressed { .. }
            )
        })
        .count() as u64
}

/// ACCEPTANCE: FIXTURE-POP-ORDER
#[test]
fn expansions_pop_in_nondecreasing_f_under_all_children() {
    // Misplaced tiles is consistent, so full best-first pops in f order.
    for fixture in FIXTURES
        .iter()
        .filter(|f| f.reinsertion == tileslide_search::policy::ReinsertionPolicy::AllChildren)
    {
        let result = solve(fixture.initial, fixture.goal, &fixture.policy()).unwrap();
        let keys: Vec<u32> = result.graph.expansions.iter().map(|e| e.pop_key.f_cost).collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "{}: f order {keys:?}",
            fixture.name
        );
    }
}
