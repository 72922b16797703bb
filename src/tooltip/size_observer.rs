use std::cell::Cell;

use crate::geometry::Size;

thread_local! {
    static LIVE_OBSERVERS: Cell<usize> = const { Cell::new(0) };
}

/// Watches the measured size of a visible tooltip.
///
/// Lives exactly as long as the tooltip is shown; dropping it detaches.
#[derive(Debug)]
pub struct SizeObserver {
    last: Option<Size>,
}

impl SizeObserver {
    pub fn attach() -> Self {
        let live = LIVE_OBSERVERS.with(|n| {
            n.set(n.get() + 1);
            n.get()
        });
        log::debug!("Tooltip size observer attached ({} live)", live);
        Self { last: None }
    }

    /// Observers currently attached on this thread
    pub fn live_count() -> usize {
        LIVE_OBSERVERS.with(Cell::get)
    }

    /// Record a measurement. Returns true when it differs from the previous
    /// one; the first measurement is not a change.
    pub fn observe(&mut self, size: Size) -> bool {
        let changed = self.last.is_some_and(|last| last != size);
        self.last = Some(size);
        changed
    }

    pub fn last(&self) -> Option<Size> {
        self.last
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        let live = LIVE_OBSERVERS.with(|n| {
            n.set(n.get().saturating_sub(1));
            n.get()
        });
        log::debug!("Tooltip size observer detached ({} live)", live);
    }
}
