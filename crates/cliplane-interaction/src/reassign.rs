//! Moving a clip onto another track.
//!
//! While a clip is moved, the vertical distance between the pointer and the
//! clip's screen anchor decides whether the user is still sliding it in time
//! or pulling it towards another lane. Past the threshold a proxy takes over
//! and follows the pointer; the clip itself stays put until release, when it
//! is disposed and its payload handed to whichever lane receives the drop.
//! The widget never needs to know where the other lanes are.

use cliplane_core::{Transform2D, Vec2};
use cliplane_timeline::{Clip, ClipHandoff};
use tracing::{debug, info};

use crate::config::DragConfig;
use crate::proxy::{DragProxy, ProxyFactory, SurfaceId};
use crate::session::DragSession;
use crate::widget::PointerEvent;

/// What a move event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveStep {
    /// The clip slid along the time axis by this many timeline units.
    Translated(f32),
    /// The threshold was crossed and a proxy now follows the pointer.
    ProxySpawned,
    /// An existing proxy was moved.
    ProxyMoved,
}

/// True if a vertical pointer offset `delta_y` should pull a clip of
/// `clip_height` off its track. Both are in screen units.
#[inline]
pub fn should_reassign(delta_y: f32, clip_height: f32, config: &DragConfig) -> bool {
    delta_y.abs() > config.reassign_threshold(clip_height)
}

/// Collaborators a move step needs besides the session and the clip.
pub(crate) struct MoveContext<'a, F> {
    pub factory: &'a mut F,
    pub surface: SurfaceId,
    pub to_screen: Transform2D,
    pub config: &'a DragConfig,
}

/// Handle one pointer-move of a body drag.
pub(crate) fn step<F: ProxyFactory>(
    session: &mut DragSession<F::Proxy>,
    clip: &mut Clip,
    event: &PointerEvent,
    ctx: MoveContext<'_, F>,
) -> MoveStep {
    if let Some(proxy) = session.active_proxy.as_mut() {
        proxy.set_position(event.position);
        return MoveStep::ProxyMoved;
    }

    let anchor = clip.screen_anchor(ctx.to_screen);
    let delta_y = event.position.y - anchor.y;
    let screen_height = ctx
        .to_screen
        .transform_vector(Vec2::new(0.0, clip.height()))
        .y
        .abs();

    let from_screen = ctx.to_screen.inverse();

    if should_reassign(delta_y, screen_height, ctx.config) {
        let mut proxy = ctx.factory.create_proxy(ctx.surface);
        proxy.set_data(clip.data());
        proxy.set_position(event.position);

        session.grab_offset = from_screen.transform_point(event.position).x - clip.start();
        session.active_proxy = Some(proxy);

        info!(clip = %clip.id(), delta_y, "clip left its track, proxy spawned");
        return MoveStep::ProxySpawned;
    }

    let dx = from_screen.transform_vector(event.delta).x;
    clip.move_position(dx);
    MoveStep::Translated(dx)
}

/// Finish a cross-track drag: destroy the proxy and package the payload.
///
/// The caller has already detached `clip` from its track, so nothing here
/// can fail.
pub(crate) fn commit<F: ProxyFactory>(
    factory: &mut F,
    proxy: F::Proxy,
    clip: Clip,
    drop_position: Vec2,
    grab_offset: f32,
) -> ClipHandoff {
    factory.destroy_proxy(proxy);

    let clip_id = clip.id();
    let source_track = clip.owner();
    debug!(clip = %clip_id, track = %source_track, "proxy dropped, source clip destroyed");

    ClipHandoff {
        data: clip.into_data(),
        source_track,
        drop_position,
        grab_offset,
    }
}
