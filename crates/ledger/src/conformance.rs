//! Conformance test suite for `LedgerState` implementations.
//!
//! A backend-agnostic test suite that any `LedgerState` implementation can
//! run to verify correctness of the key-value semantics the record contract
//! relies on:
//!
//! - **Absence**: never-written and deleted keys read as `None`
//! - **Round trip**: put-then-get returns the stored bytes unchanged
//! - **Overwrite**: a later put replaces the current value
//! - **Independence**: writes to one key never affect another
//!
//! # Usage
//!
//! Backend crates call [`run_conformance_suite`] with a factory function that
//! creates a fresh, empty backend for each test:
//!
//! ```ignore
//! use vvchain_ledger::conformance::run_conformance_suite;
//!
//! #[tokio::test]
//! async fn my_backend_conformance() {
//!     let report = run_conformance_suite(|| async { make_test_backend().await }).await;
//!     assert_eq!(report.failed, 0, "{report}");
//! }
//! ```

use std::fmt;
use std::future::Future;

use crate::traits::LedgerState;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test name (e.g. "put_then_get_round_trips").
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(name: &str, result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self {
                name: name.to_string(),
                passed: true,
                message: None,
            },
            Err(msg) => Self {
                name: name.to_string(),
                passed: false,
                message: Some(msg),
            },
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}]: {}",
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against a ledger backend.
///
/// The `factory` function is called once per test to create a fresh, empty
/// backend, ensuring test isolation.
pub async fn run_conformance_suite<S, F, Fut>(factory: F) -> ConformanceReport
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "missing_key_reads_as_none",
        missing_key_reads_as_none(&factory).await,
    ));
    results.push(TestResult::from_result(
        "put_then_get_round_trips",
        put_then_get_round_trips(&factory).await,
    ));
    results.push(TestResult::from_result(
        "put_overwrites_current_value",
        put_overwrites_current_value(&factory).await,
    ));
    results.push(TestResult::from_result(
        "delete_removes_key",
        delete_removes_key(&factory).await,
    ));
    results.push(TestResult::from_result(
        "delete_of_missing_key_is_noop",
        delete_of_missing_key_is_noop(&factory).await,
    ));
    results.push(TestResult::from_result(
        "keys_are_independent",
        keys_are_independent(&factory).await,
    ));
    results.push(TestResult::from_result(
        "empty_value_round_trips",
        empty_value_round_trips(&factory).await,
    ));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

async fn fresh<S, F, Fut>(factory: &F) -> S
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    factory().await
}

async fn missing_key_reads_as_none<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    match ledger.get_state("no-such-key").await {
        Ok(None) => Ok(()),
        Ok(Some(v)) => Err(format!("expected None, got {} bytes", v.len())),
        Err(e) => Err(format!("expected Ok(None), got error: {e}")),
    }
}

async fn put_then_get_round_trips<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    let value = br#"{"mileage":1000}"#;
    ledger
        .put_state("rec-1", value)
        .await
        .map_err(|e| format!("put failed: {e}"))?;
    match ledger.get_state("rec-1").await {
        Ok(Some(stored)) if stored == value => Ok(()),
        Ok(Some(stored)) => Err(format!("stored bytes differ: {stored:?}")),
        Ok(None) => Err("key absent after put".to_string()),
        Err(e) => Err(format!("get failed: {e}")),
    }
}

async fn put_overwrites_current_value<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    ledger
        .put_state("rec-1", b"old")
        .await
        .map_err(|e| format!("first put failed: {e}"))?;
    ledger
        .put_state("rec-1", b"new")
        .await
        .map_err(|e| format!("second put failed: {e}"))?;
    match ledger.get_state("rec-1").await {
        Ok(Some(stored)) if stored == b"new" => Ok(()),
        other => Err(format!("expected overwritten value, got {other:?}")),
    }
}

async fn delete_removes_key<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    ledger
        .put_state("rec-1", b"value")
        .await
        .map_err(|e| format!("put failed: {e}"))?;
    ledger
        .delete_state("rec-1")
        .await
        .map_err(|e| format!("delete failed: {e}"))?;
    match ledger.get_state("rec-1").await {
        Ok(None) => Ok(()),
        other => Err(format!("expected None after delete, got {other:?}")),
    }
}

async fn delete_of_missing_key_is_noop<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    ledger
        .delete_state("never-written")
        .await
        .map_err(|e| format!("delete of missing key errored: {e}"))
}

async fn keys_are_independent<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let ledger = fresh(factory).await;
    ledger
        .put_state("rec-1", b"one")
        .await
        .map_err(|e| format!("put rec-1 failed: {e}"))?;
    ledger
        .put_state("rec-2", b"two")
        .await
        .map_err(|e| format!("put rec-2 failed: {e}"))?;
    ledger
        .delete_state("rec-1")
        .await
        .map_err(|e| format!("delete rec-1 failed: {e}"))?;
    match ledger.get_state("rec-2").await {
        Ok(Some(stored)) if stored == b"two" => Ok(()),
        other => Err(format!("rec-2 disturbed by rec-1 delete: {other:?}")),
    }
}

async fn empty_value_round_trips<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: LedgerState,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    // The contract treats empty bytes as "absent", but the adapter itself
    // must still store and return them faithfully.
    let ledger = fresh(factory).await;
    ledger
        .put_state("rec-1", b"")
        .await
        .map_err(|e| format!("put failed: {e}"))?;
    match ledger.get_state("rec-1").await {
        Ok(Some(stored)) if stored.is_empty() => Ok(()),
        other => Err(format!("expected empty value, got {other:?}")),
    }
}
