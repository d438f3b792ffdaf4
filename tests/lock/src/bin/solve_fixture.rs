//! Binary that runs every locked fixture through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `name.key=value` line per field, fixtures in table order.

use lock_tests::fixtures::FIXTURES;
use tileslide_harness::config::RunConfig;
use tileslide_harness::runner::run;
use tileslide_search::observer::NoopObserver;

fn main() {
    for fixture in FIXTURES {
        let config = RunConfig {
            policy: fixture.policy(),
            ..RunConfig::default()
        };
        let out = run(fixture.initial, fixture.goal, &config, &mut NoopObserver)
            .unwrap_or_else(|e| panic!("{}: run failed: {e}", fixture.name));
        let report = &out.report;
        let name = fixture.name;

        println!("{name}.solved={}", report.solved);
        println!("{name}.reachable={}", report.reachable);
        println!("{name}.moves={}", report.moves.join(","));
        println!("{name}.total_expansions={}", report.total_expansions);
        println!("{name}.total_nodes={}", report.total_nodes);
        println!("{name}.graph_digest={}", report.graph_digest.as_str());
        println!("{name}.policy_digest={}", report.policy_digest.as_str());
    }
}
