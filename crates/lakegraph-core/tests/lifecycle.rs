// crates/lakegraph-core/tests/lifecycle.rs
// ============================================================================
// Module: Lifecycle Tests
// Description: Tests for removal policy and auto-delete resolution.
// Purpose: Ensure the invalid retain-with-auto-delete state is unreachable.
// Dependencies: lakegraph-core, serde_json
// ============================================================================
//! ## Overview
//! Validates the keep-on-destroy resolver and the fail-fast construction
//! error for invalid retention settings.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use lakegraph_core::DataRetention;
use lakegraph_core::LifecycleError;
use lakegraph_core::RemovalPolicy;

/// Keeping data maps to retain with the auto-delete flag unset.
#[test]
fn resolve_keep_retains_without_auto_delete() {
    let retention = DataRetention::resolve(true);
    assert_eq!(retention.policy(), RemovalPolicy::Retain);
    assert_eq!(retention.auto_delete_objects(), None);
}

/// Destroying data maps to destroy with auto-delete enabled.
#[test]
fn resolve_destroy_enables_auto_delete() {
    let retention = DataRetention::resolve(false);
    assert_eq!(retention.policy(), RemovalPolicy::Destroy);
    assert_eq!(retention.auto_delete_objects(), Some(true));
}

/// The resolver range never contains the retain-with-auto-delete pairing.
#[test]
fn resolver_never_pairs_retain_with_auto_delete() {
    for keep in [true, false] {
        let retention = DataRetention::resolve(keep);
        assert!(
            !(retention.policy() == RemovalPolicy::Retain
                && retention.auto_delete_objects().is_some()),
            "invalid pairing produced for keep={keep}"
        );
    }
}

/// Explicit construction of the invalid pairing fails fast.
#[test]
fn new_rejects_retain_with_auto_delete() {
    let result = DataRetention::new(RemovalPolicy::Retain, Some(true));
    assert!(matches!(result, Err(LifecycleError::RetainWithAutoDelete)));

    let result = DataRetention::new(RemovalPolicy::Retain, Some(false));
    assert!(matches!(result, Err(LifecycleError::RetainWithAutoDelete)));
}

/// Valid explicit constructions succeed.
#[test]
fn new_accepts_valid_pairings() {
    let retained = DataRetention::new(RemovalPolicy::Retain, None).expect("retain without flag");
    assert_eq!(retained, DataRetention::resolve(true));

    let destroyed =
        DataRetention::new(RemovalPolicy::Destroy, Some(true)).expect("destroy with flag");
    assert_eq!(destroyed, DataRetention::resolve(false));

    DataRetention::new(RemovalPolicy::Destroy, None).expect("destroy without flag");
}

/// Retention settings serialize without the unset flag and round-trip.
#[test]
fn retention_serializes_unset_flag_as_absent() {
    let retained = DataRetention::resolve(true);
    let json = serde_json::to_value(&retained).expect("serialize retain");
    assert_eq!(json, serde_json::json!({ "policy": "retain" }));

    let destroyed = DataRetention::resolve(false);
    let json = serde_json::to_value(&destroyed).expect("serialize destroy");
    assert_eq!(
        json,
        serde_json::json!({ "policy": "destroy", "auto_delete_objects": true })
    );

    let decoded: DataRetention = serde_json::from_value(json).expect("deserialize destroy");
    assert_eq!(decoded, destroyed);
}
