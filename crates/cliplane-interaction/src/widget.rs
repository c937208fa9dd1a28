//! Interactive clip widget: pointer events in, clip edits out.
//!
//! A widget wraps one clip. Pointer-down picks a drag mode from the handle
//! that was hit, pointer-move drives either an edge resize or a body move,
//! and pointer-up ends the gesture. A body move that strays far enough
//! vertically is handed to the track-reassignment logic in [`reassign`].
//!
//! [`reassign`]: crate::reassign

use cliplane_core::{ClipError, Rect, ResizeEdge, ResizeOutcome, Result, Transform2D, Vec2};
use cliplane_timeline::{Clip, ClipData, ClipHandoff, ClipOwner};
use tracing::{debug, trace, warn};

use crate::config::DragConfig;
use crate::handles::{hit_test, DragEdge};
use crate::notify::{ResizeNotifier, SubscriptionId};
use crate::proxy::{ProxyFactory, SurfaceId};
use crate::reassign::{self, MoveContext, MoveStep};
use crate::session::{DragMode, DragSession, DragState};

/// A pointer sample in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Current pointer position.
    pub position: Vec2,
    /// Movement since the previous event.
    pub delta: Vec2,
}

impl PointerEvent {
    pub fn new(position: Vec2, delta: Vec2) -> Self {
        Self { position, delta }
    }

    /// An event with no movement, as delivered on pointer-down/up.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
        }
    }
}

/// Result of feeding one pointer event to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// No gesture was in progress.
    Ignored,
    /// An edge was dragged.
    Resized { edge: ResizeEdge, outcome: ResizeOutcome },
    /// The body was dragged.
    Moved(MoveStep),
    /// The gesture ended with the clip still on its track.
    Released { travelled: Vec2 },
    /// The gesture ended over another lane; the clip has been destroyed and
    /// its payload must be inserted by the receiving side.
    Reassigned(ClipHandoff),
}

/// Builder that checks a widget's collaborators before any gesture starts.
pub struct ClipWidgetBuilder<F> {
    clip: Clip,
    to_screen: Transform2D,
    config: DragConfig,
    factory: Option<F>,
    surface: Option<SurfaceId>,
}

impl<F: ProxyFactory> ClipWidgetBuilder<F> {
    pub fn new(clip: Clip) -> Self {
        Self {
            clip,
            to_screen: Transform2D::IDENTITY,
            config: DragConfig::default(),
            factory: None,
            surface: None,
        }
    }

    /// Mapping from the clip's lane space to the screen.
    pub fn screen_transform(mut self, to_screen: Transform2D) -> Self {
        self.to_screen = to_screen;
        self
    }

    pub fn config(mut self, config: DragConfig) -> Self {
        self.config = config;
        self
    }

    pub fn proxy_factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Surface drag proxies are parented under.
    pub fn surface(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn build(self) -> Result<ClipWidget<F>> {
        let factory = self.factory.ok_or_else(|| {
            ClipError::Configuration("clip widget needs a proxy factory".into())
        })?;
        let surface = self.surface.ok_or_else(|| {
            ClipError::Configuration("clip widget needs an interaction surface".into())
        })?;
        self.config.validate()?;
        check_invertible(self.to_screen)?;

        debug!(clip = %self.clip.id(), track = %self.clip.owner(), "clip widget ready");
        Ok(ClipWidget {
            clip: Some(self.clip),
            to_screen: self.to_screen,
            config: self.config,
            factory,
            surface,
            notifier: ResizeNotifier::new(),
            session: None,
        })
    }
}

fn check_invertible(to_screen: Transform2D) -> Result<()> {
    let unit = to_screen.transform_vector(Vec2::ONE);
    if unit.x == 0.0 || unit.y == 0.0 || !unit.is_finite() {
        return Err(ClipError::Configuration(format!(
            "screen transform collapses an axis (unit vector maps to {unit})"
        )));
    }
    Ok(())
}

/// A clip plus the drag state machine driving it.
pub struct ClipWidget<F: ProxyFactory> {
    clip: Option<Clip>,
    to_screen: Transform2D,
    config: DragConfig,
    factory: F,
    surface: SurfaceId,
    notifier: ResizeNotifier,
    session: Option<DragSession<F::Proxy>>,
}

impl<F: ProxyFactory> ClipWidget<F> {
    pub fn builder(clip: Clip) -> ClipWidgetBuilder<F> {
        ClipWidgetBuilder::new(clip)
    }

    /// The wrapped clip, or `None` once it has been destroyed.
    pub fn clip(&self) -> Option<&Clip> {
        self.clip.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.clip.is_none()
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn session(&self) -> Option<&DragSession<F::Proxy>> {
        self.session.as_ref()
    }

    pub fn state(&self) -> DragState {
        self.session
            .as_ref()
            .map_or(DragState::Idle, DragSession::state)
    }

    pub fn has_proxy(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::has_proxy)
    }

    pub fn screen_transform(&self) -> Transform2D {
        self.to_screen
    }

    /// Update the lane-to-screen mapping, e.g. after zooming or scrolling.
    pub fn set_screen_transform(&mut self, to_screen: Transform2D) -> Result<()> {
        check_invertible(to_screen)?;
        self.to_screen = to_screen;
        Ok(())
    }

    /// The clip's bounds on screen.
    pub fn screen_rect(&self) -> Option<Rect> {
        let rect = self.clip.as_ref()?.bounds().rect();
        let a = self.to_screen.transform_point(rect.min());
        let b = self.to_screen.transform_point(rect.max());
        Some(Rect::from_corners(a.min(b), a.max(b)))
    }

    pub fn subscribe(&mut self, edge: ResizeEdge, listener: impl FnMut(f32) + 'static) -> SubscriptionId {
        self.notifier.subscribe(edge, listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Replace the clip's payload; its width follows the new duration.
    pub fn set_clip(&mut self, data: ClipData) -> Result<()> {
        self.clip.as_mut().ok_or(ClipError::Disposed)?.set_clip(data);
        Ok(())
    }

    /// Lifecycle hook fired when the host recognises a drag. Changes nothing.
    pub fn on_begin_drag(&self, event: &PointerEvent) {
        trace!(position = %event.position, "begin drag");
    }

    /// Start a gesture on the given handle.
    pub fn on_pointer_down(&mut self, target: DragEdge, event: &PointerEvent) -> Result<()> {
        let clip = self.clip.as_ref().ok_or(ClipError::Disposed)?;
        if let Some(session) = &self.session {
            debug!(clip = %clip.id(), active = ?session.mode(), "pointer-down during active drag rejected");
            return Err(ClipError::SessionActive(format!("{:?}", session.mode())));
        }

        let mode = DragMode::from(target);
        debug!(clip = %clip.id(), ?mode, position = %event.position, "drag started");
        self.session = Some(DragSession::new(mode));
        Ok(())
    }

    /// Hit-test `event.position` against the clip's handles and start the
    /// matching gesture. Returns the handle hit, or `None` if the pointer
    /// missed the clip.
    pub fn on_pointer_down_at(&mut self, event: &PointerEvent) -> Result<Option<DragEdge>> {
        let rect = self.screen_rect().ok_or(ClipError::Disposed)?;
        let hit = hit_test(rect, event.position, self.config.handle_width);
        if let Some(edge) = hit {
            self.on_pointer_down(edge, event)?;
        }
        Ok(hit)
    }

    /// Feed a pointer-move to the active gesture.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Result<DragOutcome> {
        if self.clip.is_none() {
            return Err(ClipError::Disposed);
        }
        let Some(session) = self.session.as_mut() else {
            trace!("pointer-move without drag ignored");
            return Ok(DragOutcome::Ignored);
        };
        session.travelled += event.delta;
        let edge = session.mode().edge();
        self.drag(edge, event)
    }

    fn drag(&mut self, edge: DragEdge, event: &PointerEvent) -> Result<DragOutcome> {
        let clip = self.clip.as_mut().ok_or(ClipError::Disposed)?;

        match edge.resize_edge() {
            Some(resize) => {
                self.notifier.emit(resize, resize.axis_delta(event.delta));
                let delta = self.to_screen.inverse().transform_vector(event.delta);
                let outcome = clip.resize(resize, delta, self.config.min_size);
                Ok(DragOutcome::Resized {
                    edge: resize,
                    outcome,
                })
            }
            None => {
                let Some(session) = self.session.as_mut() else {
                    return Ok(DragOutcome::Ignored);
                };
                let ctx = MoveContext {
                    factory: &mut self.factory,
                    surface: self.surface,
                    to_screen: self.to_screen,
                    config: &self.config,
                };
                let step = reassign::step(session, clip, event, ctx);
                trace!(?step, "clip body dragged");
                Ok(DragOutcome::Moved(step))
            }
        }
    }

    /// End the active gesture.
    ///
    /// If a proxy is showing, the clip is first removed from `owner`, then
    /// the proxy is destroyed and the payload comes back as
    /// [`DragOutcome::Reassigned`]. `owner` is only touched in that case. If
    /// it refuses the clip (wrong track, or it no longer holds it) a lifecycle
    /// error is returned and the gesture stays active with its proxy.
    pub fn on_pointer_up(&mut self, owner: &mut dyn ClipOwner, event: &PointerEvent) -> Result<DragOutcome> {
        let clip = self.clip.as_ref().ok_or(ClipError::Disposed)?;
        let Some(session) = self.session.as_ref() else {
            trace!("pointer-up without drag ignored");
            return Ok(DragOutcome::Ignored);
        };
        if session.has_proxy() {
            if let Err(err) = clip.detach(owner) {
                warn!(clip = %clip.id(), error = %err, "release refused, drag kept alive");
                return Err(err);
            }
        }

        let Some(mut session) = self.session.take() else {
            return Ok(DragOutcome::Ignored);
        };
        debug!(mode = ?session.mode(), travelled = %session.travelled, "drag ended");

        match session.active_proxy.take() {
            Some(proxy) => {
                let clip = self.clip.take().ok_or(ClipError::Disposed)?;
                Ok(DragOutcome::Reassigned(reassign::commit(
                    &mut self.factory,
                    proxy,
                    clip,
                    event.position,
                    session.grab_offset,
                )))
            }
            None => Ok(DragOutcome::Released {
                travelled: session.travelled,
            }),
        }
    }

    /// Destroy the clip from outside a gesture, e.g. when the user deletes
    /// it. Any drag in progress is abandoned and its proxy destroyed.
    ///
    /// The clip is detached from `owner` before anything else is torn down,
    /// so a refused disposal leaves the widget as it was.
    pub fn dispose(&mut self, owner: &mut dyn ClipOwner) -> Result<ClipData> {
        let clip = self.clip.as_ref().ok_or(ClipError::Disposed)?;
        clip.detach(owner)?;

        if let Some(mut session) = self.session.take() {
            warn!(clip = %clip.id(), mode = ?session.mode(), "clip disposed mid-drag");
            if let Some(proxy) = session.active_proxy.take() {
                self.factory.destroy_proxy(proxy);
            }
        }

        let clip = self.clip.take().ok_or(ClipError::Disposed)?;
        Ok(clip.into_data())
    }
}
