use std::cell::Cell;

/// Single-flight flag for one morph camera's update path.
///
/// Applying an evaluated pose can make the host fire the very notification
/// that triggered the evaluation. While a [`GuardToken`] is alive, further
/// `enter` calls fail and the nested update is skipped instead of recursing.
/// The flag lives in a `Cell`, so a guard is tied to a single thread.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    active: Cell<bool>,
}

/// Proof of entry. Dropping it (normal return, early `?`, or unwinding) clears the flag.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the token is dropped"]
pub struct GuardToken<'a> {
    guard: &'a ReentrancyGuard,
}

impl ReentrancyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Enter the guarded section, or `None` if it is already running.
    pub fn enter(&self) -> Option<GuardToken<'_>> {
        if self.active.replace(true) {
            return None;
        }
        Some(GuardToken { guard: self })
    }

    /// Run `f` inside the guard. Returns `None` without calling `f` on re-entry.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let _token = self.enter()?;
        Some(f())
    }
}

impl Drop for GuardToken<'_> {
    fn drop(&mut self) {
        self.guard.active.set(false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/guard.rs"]
mod tests;
