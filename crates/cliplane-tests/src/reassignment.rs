//! Moving clips between tracks through a drag proxy.

use anyhow::{Context, Result};
use cliplane_core::Vec2;
use cliplane_core::ClipError;
use cliplane_interaction::{
    ClipWidget, DragConfig, DragEdge, DragOutcome, DragState, MoveStep, PointerEvent,
};
use cliplane_timeline::{ClipData, ClipOwner, LayerStack, Track, TrackId, TrackKind, DEFAULT_TRACK_HEIGHT};

use crate::support::{anchor, init_tracing, lane_with_clip, step, RecordingFactory, SharedLog, SURFACE};

// ── Threshold and proxy lifecycle ──────────────────────────────

#[test]
fn crossing_threshold_spawns_exactly_one_proxy() -> Result<()> {
    let (mut owner, mut widget, log) = lane_with_clip();
    let clip_id = widget.clip().context("clip")?.id();
    let start = anchor(&widget);

    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(start))?;
    let below = start + Vec2::new(3.0, 6.0);
    assert_eq!(
        widget.on_pointer_move(&step(start, below))?,
        DragOutcome::Moved(MoveStep::Translated(3.0))
    );

    let past = Vec2::new(below.x, start.y + 9.0);
    assert_eq!(
        widget.on_pointer_move(&step(below, past))?,
        DragOutcome::Moved(MoveStep::ProxySpawned)
    );
    let mut at = past;
    for _ in 0..5 {
        let next = at + Vec2::new(4.0, 8.0);
        assert_eq!(
            widget.on_pointer_move(&step(at, next))?,
            DragOutcome::Moved(MoveStep::ProxyMoved)
        );
        at = next;
    }

    {
        let log = log.borrow();
        assert_eq!(log.created, 1);
        assert_eq!(log.surfaces, vec![SURFACE]);
        assert_eq!(log.data.len(), 1);
        assert_eq!(log.data[0].name, "interview");
        assert_eq!(log.positions.len(), 6);
        assert_eq!(log.positions.last().copied(), Some(at));
    }
    // The clip only moved during the first, sub-threshold step.
    assert!((widget.clip().context("clip")?.start() - 103.0).abs() < 1e-4);

    let outcome = widget.on_pointer_up(&mut owner, &PointerEvent::at(at))?;
    assert!(matches!(outcome, DragOutcome::Reassigned(_)));
    assert_eq!(owner.removed, vec![clip_id]);
    assert_eq!(owner.track.clip_count(), 0);
    assert_eq!(log.borrow().destroyed, 1);
    assert!(widget.is_disposed());
    Ok(())
}

#[test]
fn returning_to_own_lane_still_commits_handoff() -> Result<()> {
    let (mut owner, mut widget, log) = lane_with_clip();
    let start = anchor(&widget);

    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(start))?;
    let away = start + Vec2::new(0.0, -12.0);
    widget.on_pointer_move(&step(start, away))?;
    let back = start + Vec2::new(20.0, 0.0);
    widget.on_pointer_move(&step(away, back))?;

    let outcome = widget.on_pointer_up(&mut owner, &PointerEvent::at(back))?;
    let handoff = match outcome {
        DragOutcome::Reassigned(handoff) => handoff,
        other => panic!("expected handoff, got {other:?}"),
    };
    assert_eq!(handoff.source_track, owner.track.id);
    assert_eq!(handoff.drop_position, back);
    assert_eq!(owner.removed.len(), 1);
    assert_eq!(log.borrow().destroyed, 1);
    Ok(())
}

#[test]
fn release_refused_by_track_keeps_clip_and_proxy() -> Result<()> {
    let (mut owner, mut widget, log) = lane_with_clip();
    let clip_id = widget.clip().context("clip")?.id();
    let start = anchor(&widget);

    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(start))?;
    let lifted = start + Vec2::new(0.0, 15.0);
    widget.on_pointer_move(&step(start, lifted))?;
    assert!(owner.track.remove_clip(clip_id));

    let result = widget.on_pointer_up(&mut owner, &PointerEvent::at(lifted));
    assert!(matches!(result, Err(ClipError::Lifecycle(_))));
    assert!(!widget.is_disposed());
    assert!(widget.has_proxy());
    assert_eq!(widget.state(), DragState::Moving);
    assert_eq!(widget.clip().context("clip")?.data().name, "interview");
    assert_eq!(log.borrow().destroyed, 0);

    // The proxy keeps following the pointer.
    let further = lifted + Vec2::new(5.0, 5.0);
    assert_eq!(
        widget.on_pointer_move(&step(lifted, further))?,
        DragOutcome::Moved(MoveStep::ProxyMoved)
    );
    Ok(())
}

#[test]
fn custom_threshold_ratio_is_respected() -> Result<()> {
    init_tracing();
    let mut track = Track::new_video("V1");
    track.height = 20.0;
    let clip = track.create_clip(ClipData::new("wide", 50.0), 0.0);
    let log = SharedLog::default();
    let mut widget = ClipWidget::builder(clip)
        .proxy_factory(RecordingFactory(log.clone()))
        .surface(SURFACE)
        .config(DragConfig {
            reassign_threshold_ratio: 1.0,
            ..DragConfig::default()
        })
        .build()?;

    let start = anchor(&widget);
    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(start))?;
    widget.on_pointer_move(&step(start, start + Vec2::new(0.0, 15.0)))?;
    assert_eq!(log.borrow().created, 0);
    widget.on_pointer_move(&step(start + Vec2::new(0.0, 15.0), start + Vec2::new(0.0, 21.0)))?;
    assert_eq!(log.borrow().created, 1);
    Ok(())
}

// ── Lane stack round trip ──────────────────────────────────────

fn two_lanes() -> (LayerStack, TrackId, TrackId) {
    let mut layers = LayerStack::new(Vec2::new(0.0, 200.0), 1.0);
    let upper = layers.push_track(Track::new_video("V2"));
    let lower = layers.push_track(Track::new_video("V1"));
    (layers, upper, lower)
}

#[test]
fn clip_dragged_to_upper_lane_lands_there() -> Result<()> {
    init_tracing();
    let (mut layers, upper, lower) = two_lanes();
    let clip = layers
        .track_mut(lower)
        .context("lower lane")?
        .create_clip(ClipData::new("music", 30.0).with_source("media/music.wav", 0, 720), 40.0);
    let source_id = clip.id();

    let log = SharedLog::default();
    let to_screen = layers.lane_transform(1).context("lane transform")?;
    let mut widget = ClipWidget::builder(clip)
        .proxy_factory(RecordingFactory(log.clone()))
        .surface(SURFACE)
        .screen_transform(to_screen)
        .build()?;

    // Grab the clip in the middle, pull it up past the threshold and keep
    // going into the upper lane.
    let grab = anchor(&widget);
    assert!((grab.y - (200.0 - 1.5 * DEFAULT_TRACK_HEIGHT)).abs() < 1e-4);
    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(grab))?;
    let lifted = grab + Vec2::new(0.0, 20.0);
    widget.on_pointer_move(&step(grab, lifted))?;
    let drop = Vec2::new(grab.x + 20.0, 200.0 - 0.5 * DEFAULT_TRACK_HEIGHT);
    widget.on_pointer_move(&step(lifted, drop))?;

    let owner = layers.track_mut(lower).context("lower lane")?;
    let handoff = match widget.on_pointer_up(owner, &PointerEvent::at(drop))? {
        DragOutcome::Reassigned(handoff) => handoff,
        other => panic!("expected handoff, got {other:?}"),
    };
    assert!((handoff.grab_offset - 15.0).abs() < 1e-4);

    let landed = layers.accept_handoff(handoff)?;
    assert_eq!(landed.owner(), upper);
    assert_ne!(landed.id(), source_id);
    assert!((landed.start() - 60.0).abs() < 1e-4);
    assert_eq!(landed.width(), 30.0);
    assert_eq!(landed.data().source.as_deref(), Some("media/music.wav"));

    assert_eq!(layers.track(lower).context("lower lane")?.clip_count(), 0);
    assert_eq!(layers.track(upper).context("upper lane")?.clip_count(), 1);
    assert_eq!(log.borrow().destroyed, 1);

    // The landed clip gets a fresh widget and can be dragged again.
    let mut again = ClipWidget::builder(landed)
        .proxy_factory(RecordingFactory::default())
        .surface(SURFACE)
        .screen_transform(layers.lane_transform(0).context("lane transform")?)
        .build()?;
    let at = anchor(&again);
    again.on_pointer_down(DragEdge::Body, &PointerEvent::at(at))?;
    again.on_pointer_move(&step(at, at + Vec2::new(-10.0, 0.0)))?;
    let owner = layers.track_mut(upper).context("upper lane")?;
    assert!(matches!(
        again.on_pointer_up(owner, &PointerEvent::at(at))?,
        DragOutcome::Released { .. }
    ));
    assert!((again.clip().context("clip")?.start() - 50.0).abs() < 1e-4);
    Ok(())
}

#[test]
fn drop_below_every_lane_returns_clip_to_source() -> Result<()> {
    init_tracing();
    let (mut layers, _, lower) = two_lanes();
    let clip = layers
        .track_mut(lower)
        .context("lower lane")?
        .create_clip(ClipData::new("sfx", 10.0), 5.0);
    let mut widget = ClipWidget::builder(clip)
        .proxy_factory(RecordingFactory::default())
        .surface(SURFACE)
        .screen_transform(layers.lane_transform(1).context("lane transform")?)
        .build()?;

    let grab = anchor(&widget);
    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(grab))?;
    let drop = grab - Vec2::new(0.0, 300.0);
    widget.on_pointer_move(&step(grab, drop))?;
    let owner = layers.track_mut(lower).context("lower lane")?;
    let handoff = match widget.on_pointer_up(owner, &PointerEvent::at(drop))? {
        DragOutcome::Reassigned(handoff) => handoff,
        other => panic!("expected handoff, got {other:?}"),
    };

    let landed = layers.accept_handoff(handoff)?;
    assert_eq!(landed.owner(), lower);
    assert!((landed.start() - 5.0).abs() < 1e-4);
    Ok(())
}

#[test]
fn audio_clip_dragged_over_video_lane_stays_on_audio() -> Result<()> {
    init_tracing();
    let mut layers = LayerStack::new(Vec2::new(0.0, 200.0), 1.0);
    let video = layers.push_track(Track::new_video("V1"));
    let audio = layers.push_track(Track::new_audio("A1"));
    let clip = layers
        .track_mut(audio)
        .context("audio lane")?
        .create_clip(ClipData::new("voice-over", 25.0).with_kind(TrackKind::Audio), 10.0);
    let mut widget = ClipWidget::builder(clip)
        .proxy_factory(RecordingFactory::default())
        .surface(SURFACE)
        .screen_transform(layers.lane_transform(1).context("lane transform")?)
        .build()?;

    let grab = anchor(&widget);
    widget.on_pointer_down(DragEdge::Body, &PointerEvent::at(grab))?;
    let drop = Vec2::new(grab.x, 200.0 - 0.5 * DEFAULT_TRACK_HEIGHT);
    widget.on_pointer_move(&step(grab, drop))?;
    let owner = layers.track_mut(audio).context("audio lane")?;
    let handoff = match widget.on_pointer_up(owner, &PointerEvent::at(drop))? {
        DragOutcome::Reassigned(handoff) => handoff,
        other => panic!("expected handoff, got {other:?}"),
    };

    let landed = layers.accept_handoff(handoff)?;
    assert_eq!(landed.owner(), audio);
    assert!((landed.start() - 10.0).abs() < 1e-4);
    assert_eq!(layers.track(video).context("video lane")?.clip_count(), 0);
    Ok(())
}
