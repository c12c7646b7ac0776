// Host-side tests for the install guard.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod guard {
    include!("../src/guard.rs");
}

use guard::InstallGuard;

#[test]
fn failed_install_releases_the_guard() {
    let guard = InstallGuard::new();

    {
        let _claim = guard.try_claim().expect("first claim");
        // e.g. stylesheet or listener wiring failed; claim dropped uncommitted
    }

    let retry = guard.try_claim();
    assert!(retry.is_some(), "a failed install must be retryable");
    retry.unwrap().commit();
}

#[test]
fn committed_install_blocks_further_installs() {
    let guard = InstallGuard::new();
    guard.try_claim().unwrap().commit();

    assert!(guard.try_claim().is_none());
    assert!(guard.try_claim().is_none());
}

#[test]
fn concurrent_claim_is_refused_while_in_progress() {
    let guard = InstallGuard::new();
    let claim = guard.try_claim().unwrap();
    assert!(guard.try_claim().is_none());
    drop(claim);
    assert!(guard.try_claim().is_some());
}

#[test]
fn static_guard_starts_unclaimed() {
    static GUARD: InstallGuard = InstallGuard::new();
    let claim = GUARD.try_claim();
    assert!(claim.is_some());
}
