// File: crates/area-core/src/frame.rs
// Summary: Single-threaded frame scheduler and the subscription handle views hold while animating.
// Notes:
// - The scheduler does not call into views. The host loop asks `wants_frames()` to choose
//   between continuous redraw and waiting, and forwards each frame timestamp to its views.
// - A `FrameLink` deregisters itself on drop, so finishing, cancelling and dropping the
//   owning view all release the registration.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

#[derive(Default, Debug)]
struct Registry {
    next_id: u64,
    active: BTreeSet<u64>,
    last_timestamp: Option<f64>,
}

/// Cloneable handle to the UI thread's frame registry.
#[derive(Clone, Default, Debug)]
pub struct FrameScheduler {
    inner: Rc<RefCell<Registry>>,
}

impl FrameScheduler {
    pub fn new() -> Self { Self::default() }

    /// Register a new per-frame subscriber.
    pub fn subscribe(&self) -> FrameLink {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.active.insert(id);
        log::trace!("frame link {id} registered");
        FrameLink { id, registry: Rc::downgrade(&self.inner) }
    }

    /// True while at least one link is registered.
    pub fn wants_frames(&self) -> bool {
        !self.inner.borrow().active.is_empty()
    }

    pub fn active_links(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Record the host's frame timestamp (seconds) and hand it back for dispatch.
    pub fn tick(&self, timestamp: f64) -> f64 {
        self.inner.borrow_mut().last_timestamp = Some(timestamp);
        timestamp
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.inner.borrow().last_timestamp
    }
}

/// Registration with a [`FrameScheduler`]. Released on drop or [`FrameLink::cancel`].
#[derive(Debug)]
pub struct FrameLink {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl FrameLink {
    pub fn id(&self) -> u64 { self.id }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|reg| reg.borrow().active.contains(&self.id))
            .unwrap_or(false)
    }

    /// Explicitly release the registration.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FrameLink {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            if reg.borrow_mut().active.remove(&self.id) {
                log::trace!("frame link {} released", self.id);
            }
        }
    }
}
