use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot flag guarding listener registration.
///
/// A claim holds the flag while installation is in progress. It is released
/// on drop unless [`Claim::commit`] is called, so a failed install can be
/// retried.
pub struct InstallGuard {
    taken: AtomicBool,
}

impl InstallGuard {
    pub const fn new() -> Self {
        Self {
            taken: AtomicBool::new(false),
        }
    }

    /// `None` while another claim is live or after a committed install.
    pub fn try_claim(&self) -> Option<Claim<'_>> {
        if self.taken.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(Claim {
            guard: self,
            committed: false,
        })
    }
}

impl Default for InstallGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "dropping a claim without committing releases it"]
pub struct Claim<'a> {
    guard: &'a InstallGuard,
    committed: bool,
}

impl Claim<'_> {
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.guard.taken.store(false, Ordering::SeqCst);
        }
    }
}
