//! Cliplane Interaction - drag gestures for timeline clips
//!
//! Provides the pointer side of the clip widget:
//! - Edge handle hit testing
//! - Resize notifications per edge
//! - The drag state machine (`ClipWidget`)
//! - Moving clips across tracks through a drag proxy

pub mod config;
pub mod handles;
pub mod notify;
pub mod proxy;
pub mod reassign;
pub mod session;
pub mod widget;

pub use config::{ConfigFile, DragConfig};
pub use handles::{hit_test, DragEdge};
pub use notify::{ResizeNotifier, SubscriptionId};
pub use proxy::{DragProxy, ProxyFactory, SurfaceId};
pub use reassign::{should_reassign, MoveStep};
pub use session::{DragMode, DragSession, DragState};
pub use widget::{ClipWidget, ClipWidgetBuilder, DragOutcome, PointerEvent};
