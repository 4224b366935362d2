// Tenant identifier context
//
// One mutable string - the tenant ID - is shared by every component of the
// shell: the header edits it, the status panel presents it. Instead of
// threading the value through every render call, a provider owns the slot
// and hands out cheap non-owning handles, mirroring the shared-state
// pattern used elsewhere in this codebase (Arc<Mutex<..>> with one writer).
//
// Contract:
// - The shell mounts exactly one TenantProvider before wiring any component.
// - Components hold a TenantHandle and resolve it with read() when they need
//   the value or the setter. Resolution fails if no provider is alive; that
//   is a wiring bug and is propagated fatally, never recovered.
// - set() replaces the value unconditionally. The event loop re-reads the
//   slot before every draw, so all readers observe a mutation on the frame
//   that follows it.

use std::sync::{Arc, Mutex, Weak};
use thiserror::Error;

/// Usage error: the store was accessed outside an active provider.
///
/// This is a programmer mistake, not a runtime condition. Callers bubble it
/// up with `?`; main exits with the message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("tenant context must be used within a TenantProvider")]
    MissingProvider,
}

/// The slot itself: current value plus a change counter.
///
/// `version` increments on every set, including sets that write the same
/// string. Readers that cache the value can compare versions instead of
/// strings to detect edits.
#[derive(Debug, Default)]
struct Slot {
    value: String,
    version: u64,
}

/// Owns the tenant identifier slot for the lifetime of the shell.
///
/// Created with an empty value. Dropping the provider invalidates every
/// handle derived from it. Mounting a second provider creates an
/// independent slot; handles always resolve to the provider they came from.
pub struct TenantProvider {
    slot: Arc<Mutex<Slot>>,
}

impl TenantProvider {
    /// Install a fresh slot with `value == ""`.
    pub fn mount() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// Derive a non-owning handle for a component.
    pub fn handle(&self) -> TenantHandle {
        TenantHandle {
            slot: Arc::downgrade(&self.slot),
        }
    }
}

/// Non-owning reference to the slot, held by components.
///
/// A handle must not outlive its provider; `read()` reports the violation.
#[derive(Clone)]
pub struct TenantHandle {
    slot: Weak<Mutex<Slot>>,
}

impl TenantHandle {
    /// A handle bound to no provider. Every `read()` fails with
    /// [`ContextError::MissingProvider`]. This is what a component
    /// effectively holds when it was wired without a mounted provider;
    /// the misuse contract is exercised through it in tests.
    #[cfg(test)]
    pub fn detached() -> Self {
        Self { slot: Weak::new() }
    }

    /// Resolve the handle to a live binding.
    pub fn read(&self) -> Result<TenantBinding, ContextError> {
        self.slot
            .upgrade()
            .map(|slot| TenantBinding { slot })
            .ok_or(ContextError::MissingProvider)
    }
}

/// A resolved view of the slot: value and setter.
///
/// Bindings are intended to be short-lived (one key event, one frame);
/// components keep a [`TenantHandle`] and re-resolve as needed.
pub struct TenantBinding {
    slot: Arc<Mutex<Slot>>,
}

impl TenantBinding {
    /// Current value of the tenant identifier.
    pub fn value(&self) -> String {
        self.slot.lock().unwrap().value.clone()
    }

    /// Replace the value unconditionally.
    ///
    /// No validation, no trimming, no equality check - every call counts as
    /// a change and bumps the version. Cannot fail.
    pub fn set(&self, value: impl Into<String>) {
        let mut slot = self.slot.lock().unwrap();
        slot.value = value.into();
        slot.version += 1;
    }

    /// Change counter, bumped on every `set`.
    pub fn version(&self) -> u64 {
        self.slot.lock().unwrap().version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_mount_is_empty() {
        let provider = TenantProvider::mount();
        let binding = provider.handle().read().unwrap();
        assert_eq!(binding.value(), "");
        assert_eq!(binding.version(), 0);
    }

    #[test]
    fn set_replaces_exactly() {
        let provider = TenantProvider::mount();
        let binding = provider.handle().read().unwrap();

        // No trimming or normalization of any kind
        binding.set("  1234-abcd  ");
        assert_eq!(binding.value(), "  1234-abcd  ");

        binding.set("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(binding.value(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn set_is_idempotent_for_value() {
        let provider = TenantProvider::mount();
        let binding = provider.handle().read().unwrap();

        binding.set("tenant-a");
        let first = binding.value();
        binding.set("tenant-a");
        assert_eq!(binding.value(), first);
    }

    #[test]
    fn every_set_bumps_version() {
        let provider = TenantProvider::mount();
        let binding = provider.handle().read().unwrap();

        binding.set("x");
        binding.set("x");
        assert_eq!(binding.version(), 2);
    }

    #[test]
    fn handles_share_one_slot() {
        let provider = TenantProvider::mount();
        let writer = provider.handle();
        let reader = writer.clone();

        writer.read().unwrap().set("shared");
        assert_eq!(reader.read().unwrap().value(), "shared");
    }

    #[test]
    fn detached_handle_fails() {
        let handle = TenantHandle::detached();
        assert_eq!(handle.read().err(), Some(ContextError::MissingProvider));
    }

    #[test]
    fn read_after_provider_drop_fails() {
        let provider = TenantProvider::mount();
        let handle = provider.handle();
        drop(provider);
        assert_eq!(handle.read().err(), Some(ContextError::MissingProvider));
    }

    #[test]
    fn nested_providers_are_independent() {
        let outer = TenantProvider::mount();
        let inner = TenantProvider::mount();

        outer.handle().read().unwrap().set("outer");
        inner.handle().read().unwrap().set("inner");

        assert_eq!(outer.handle().read().unwrap().value(), "outer");
        assert_eq!(inner.handle().read().unwrap().value(), "inner");

        // Dropping the inner provider leaves the outer slot reachable
        drop(inner);
        assert_eq!(outer.handle().read().unwrap().value(), "outer");
    }

    #[test]
    fn error_message_names_the_provider() {
        let msg = ContextError::MissingProvider.to_string();
        assert!(msg.contains("TenantProvider"), "got: {msg}");
    }
}
