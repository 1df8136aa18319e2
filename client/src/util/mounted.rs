//! Liveness flag for async work started by a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page fetches complete after arbitrary delays; the user may have navigated
//! away by then. Every page creates one `MountFlag` and checks it before
//! writing fetch results into its signals.
//!
//! A resource that can be refetched while a request is in flight (tab or
//! period switches, retries) also gets a `RequestGate`. Each `begin` issues a
//! ticket that supersedes all earlier ones, so a slow earlier response can
//! never overwrite a newer one.

#[cfg(test)]
#[path = "mounted_test.rs"]
mod mounted_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared "view is still mounted" flag.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl Default for MountFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountFlag {
    /// A live flag that goes dead when the current reactive owner is cleaned up.
    pub fn on_current_owner() -> Self {
        let flag = Self::default();
        let dead = flag.clone();
        leptos::prelude::on_cleanup(move || dead.unmount());
        flag
    }

    /// A request gate for one resource of this view.
    pub fn gate(&self) -> RequestGate {
        RequestGate { mounted: self.clone(), latest: Arc::new(AtomicU64::new(0)) }
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the view is mounted. Returns whether it ran.
    pub fn run_if_live(&self, apply: impl FnOnce()) -> bool {
        if self.is_live() {
            apply();
            true
        } else {
            false
        }
    }
}

/// Latest-request tracker for one resource.
#[derive(Clone, Debug)]
pub struct RequestGate {
    mounted: MountFlag,
    latest: Arc<AtomicU64>,
}

impl RequestGate {
    /// Start a request, superseding every ticket issued before.
    pub fn begin(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { gate: self.clone(), id }
    }

    /// Supersede in-flight requests without starting a new one.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Write permission for one started request.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    gate: RequestGate,
    id: u64,
}

impl RequestTicket {
    /// Still the newest request of its gate, on a mounted view.
    pub fn is_current(&self) -> bool {
        self.gate.mounted.is_live() && self.gate.latest.load(Ordering::SeqCst) == self.id
    }

    /// Run `apply` only while this ticket is current. Returns whether it ran.
    pub fn run_if_current(&self, apply: impl FnOnce()) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            false
        }
    }
}
