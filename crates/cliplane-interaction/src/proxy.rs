//! Drag proxy collaborators.
//!
//! A proxy is the stand-in shown while a clip is dragged towards another
//! track. The widget only ever creates it, feeds it data and positions, and
//! hands it back for destruction.

use cliplane_core::Vec2;
use cliplane_timeline::ClipData;

/// Opaque handle to the top-level surface proxies are parented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Visual stand-in for a clip in flight.
pub trait DragProxy {
    /// Copy the source clip's payload into the proxy.
    fn set_data(&mut self, data: &ClipData);

    /// Move the proxy to a screen position.
    fn set_position(&mut self, screen_position: Vec2);
}

/// Creates and destroys drag proxies.
pub trait ProxyFactory {
    type Proxy: DragProxy;

    /// Create a proxy parented under `surface`.
    fn create_proxy(&mut self, surface: SurfaceId) -> Self::Proxy;

    fn destroy_proxy(&mut self, proxy: Self::Proxy);
}
