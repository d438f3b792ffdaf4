//! Cross-process determinism: spawns the `solve_fixture` binary under
//! several environment variants and asserts identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// ACCEPTANCE: SEARCH-DETERMINISM-CROSSPROC
#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("one_slide.solved=true"));
    assert!(baseline.contains("one_slide.moves=right"));
    assert!(baseline.contains("restricted_dead_end.solved=false"));
    assert!(baseline.contains("restricted_dead_end.reachable=true"));
    assert!(baseline.contains("unreachable_2x2.reachable=false"));
    assert!(baseline.contains("four_slides.graph_digest=sha256:"));

    let tmp = std::env::temp_dir();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (tmp.to_str().expect("temp dir is UTF-8"), &[]),
        (root.as_str(), &[("LC_ALL", "C"), ("LANG", "C")]),
        (root.as_str(), &[("TZ", "Pacific/Kiritimati"), ("LANG", "tr_TR.UTF-8")]),
    ];
    for (work_dir, overrides) in variants {
        let output = run_variant(work_dir, overrides);
        assert_eq!(
            baseline, output,
            "output diverged (work_dir={work_dir}, overrides={overrides:?})"
        );
    }
}
