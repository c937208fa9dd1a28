//! Per-edge resize notifications.
//!
//! Listeners receive the raw pointer delta along the dragged edge's axis
//! (`dx` for Left/Right, `dy` for Top/Bottom) before the clip is resized.

use std::fmt;

use cliplane_core::ResizeEdge;
use smallvec::SmallVec;

/// Handle returned by [`ResizeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(f32)>;

/// Subscriber lists keyed by edge.
#[derive(Default)]
pub struct ResizeNotifier {
    listeners: [SmallVec<[(SubscriptionId, Listener); 2]>; 4],
    next_id: u64,
}

fn slot(edge: ResizeEdge) -> usize {
    match edge {
        ResizeEdge::Left => 0,
        ResizeEdge::Right => 1,
        ResizeEdge::Top => 2,
        ResizeEdge::Bottom => 3,
    }
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for drags of `edge`.
    pub fn subscribe(&mut self, edge: ResizeEdge, listener: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners[slot(edge)].push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in &mut self.listeners {
            if let Some(index) = list.iter().position(|(sub, _)| *sub == id) {
                drop(list.remove(index));
                return true;
            }
        }
        false
    }

    /// Call every listener registered for `edge`, in subscription order.
    pub fn emit(&mut self, edge: ResizeEdge, amount: f32) {
        for (_, listener) in self.listeners[slot(edge)].iter_mut() {
            listener(amount);
        }
    }

    pub fn listener_count(&self, edge: ResizeEdge) -> usize {
        self.listeners[slot(edge)].len()
    }
}

impl fmt::Debug for ResizeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeNotifier")
            .field("left", &self.listener_count(ResizeEdge::Left))
            .field("right", &self.listener_count(ResizeEdge::Right))
            .field("top", &self.listener_count(ResizeEdge::Top))
            .field("bottom", &self.listener_count(ResizeEdge::Bottom))
            .finish()
    }
}
