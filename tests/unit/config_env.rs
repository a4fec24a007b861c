//! Environment overrides for the resource ceilings.
//!
//! Everything touching the process environment lives in one test so the
//! harness's parallel runner cannot interleave the variables.

use charalign::config::{
    DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_DEPTH, ENV_MAX_CANDIDATES, ENV_MAX_DEPTH,
};
use charalign::{AlignConfig, AlignError, Aligner};

#[test]
fn test_from_env_overrides_and_rejections() {
    std::env::remove_var(ENV_MAX_CANDIDATES);
    std::env::remove_var(ENV_MAX_DEPTH);
    let config = AlignConfig::from_env().unwrap();
    assert_eq!(config.max_candidates, DEFAULT_MAX_CANDIDATES);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

    std::env::set_var(ENV_MAX_CANDIDATES, "2_000");
    std::env::set_var(ENV_MAX_DEPTH, "unlimited");
    let config = AlignConfig::from_env().unwrap();
    assert_eq!(config.max_candidates, 2_000);
    assert_eq!(config.max_depth, usize::MAX);

    std::env::set_var(ENV_MAX_CANDIDATES, "lots");
    assert!(matches!(
        AlignConfig::from_env(),
        Err(AlignError::InvalidConfig(_))
    ));

    std::env::set_var(ENV_MAX_CANDIDATES, "0");
    assert!(matches!(
        AlignConfig::from_env(),
        Err(AlignError::InvalidConfig(_))
    ));

    // An env-derived ceiling flows through the aligner.
    std::env::set_var(ENV_MAX_CANDIDATES, "1");
    std::env::set_var(ENV_MAX_DEPTH, "4096");
    let aligner = Aligner::new(AlignConfig::from_env().unwrap());
    assert_eq!(
        aligner.align("baba", "abab"),
        Err(AlignError::CandidateLimit { limit: 1 })
    );

    std::env::remove_var(ENV_MAX_CANDIDATES);
    std::env::remove_var(ENV_MAX_DEPTH);
}

#[test]
fn test_unbounded_accepts_what_default_rejects() {
    // Neither end is shared, so nothing trims away.
    let run = "a".repeat(DEFAULT_MAX_DEPTH + 1);
    let long_run = format!("{}x", run);
    let other = format!("b{}", run);

    let default = Aligner::default().align(&long_run, &other);
    assert!(matches!(default, Err(AlignError::DepthLimit { .. })));

    let basis = Aligner::new(AlignConfig::unbounded())
        .align(&long_run, &other)
        .unwrap();
    assert_eq!(basis.correct_count(), run.len());
    assert_eq!(basis.extra_count(), 1);
}
