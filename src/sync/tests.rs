// Unit tests for the media session

use super::*;
use crate::adapters::ScriptedMediaHandle;
use crate::controller::ControllerState;

fn attached_session(duration: f64) -> MediaSession<ScriptedMediaHandle> {
    let mut session = MediaSession::new(SessionConfig::default());
    session.attach(ScriptedMediaHandle::with_duration(duration), None);
    session
}

fn handle(session: &MediaSession<ScriptedMediaHandle>) -> &ScriptedMediaHandle {
    session.handle.as_ref().expect("session should be attached")
}

#[test]
fn test_attach_with_known_duration_is_immediately_ready() {
    let session = attached_session(3600.0);
    assert_eq!(session.controller().state(), ControllerState::Ready);
    assert_eq!(session.range().end, 3600.0);
}

#[test]
fn test_metadata_event_initializes_pending_source() {
    let mut session = MediaSession::new(SessionConfig::default());
    session.attach(ScriptedMediaHandle::pending_metadata(), None);
    assert_eq!(session.controller().state(), ControllerState::Uninitialized);

    session.handle_event(MediaEvent::MetadataLoaded { duration: 120.0 });
    assert_eq!(session.controller().state(), ControllerState::Ready);
    assert_eq!(session.range().duration, 120.0);
    assert_eq!(session.range().end, 120.0);
}

#[test]
fn test_boundary_crossing_pauses_and_seeks_handle() {
    let mut session = attached_session(100.0);
    session.adjust_start(10.0).unwrap();
    session.adjust_end(20.0).unwrap();
    session.play();

    session.handle_event(MediaEvent::TimeUpdate { position: 20.5 });

    let media = handle(&session);
    assert!(!media.is_playing());
    assert_eq!(media.plays(), 1);
    assert_eq!(media.pauses(), 1);
    assert_eq!(media.seeks().last(), Some(&20.0));
    assert_eq!(session.range().current, 20.0);
}

#[test]
fn test_adjust_start_seeks_handle_once() {
    let mut session = attached_session(100.0);
    session.handle_event(MediaEvent::TimeUpdate { position: 50.0 });

    session.adjust_start(5.0).unwrap();

    assert_eq!(handle(&session).seeks(), &[5.0]);
}

#[test]
fn test_adjust_start_within_tolerance_never_touches_handle() {
    let mut session = attached_session(100.0);
    session.handle_event(MediaEvent::TimeUpdate { position: 5.05 });

    session.adjust_start(5.0).unwrap();

    assert!(handle(&session).seeks().is_empty());
}

#[test]
fn test_rapid_adjustments_apply_latest_seek_per_action() {
    let mut session = attached_session(100.0);
    session.handle_event(MediaEvent::TimeUpdate { position: 90.0 });

    session.adjust_start(10.0).unwrap();
    session.adjust_start(20.0).unwrap();
    session.adjust_start(30.0).unwrap();

    // each action lands exactly one seek; the handle ends on the latest
    let media = handle(&session);
    assert_eq!(media.seeks(), &[10.0, 20.0, 30.0]);
    assert_eq!(media.position(), 30.0);
}

#[test]
fn test_ended_event_reconciles_against_range() {
    let mut session = attached_session(100.0);
    session.adjust_end(20.0).unwrap();
    if let Some(media) = session.handle.as_mut() {
        media.advance_to(100.0);
    }

    session.handle_event(MediaEvent::Ended);

    let media = handle(&session);
    assert_eq!(media.pauses(), 1);
    assert_eq!(media.seeks().last(), Some(&20.0));
}

#[test]
fn test_events_after_detach_are_dropped() {
    let mut session = attached_session(100.0);
    session.adjust_end(20.0).unwrap();
    session.detach();

    assert!(!session.is_attached());
    assert_eq!(session.controller().state(), ControllerState::Detached);

    // no panic, no state change
    session.handle_event(MediaEvent::TimeUpdate { position: 50.0 });
    session.adjust_start(5.0).unwrap();
    session.play();
    session.pause();
    assert_eq!(session.range().current, 0.0);
}

#[test]
fn test_attach_replaces_previous_binding() {
    let mut session = attached_session(100.0);
    session.adjust_start(10.0).unwrap();

    session.attach(ScriptedMediaHandle::with_duration(500.0), None);

    assert_eq!(session.controller().state(), ControllerState::Ready);
    assert_eq!(session.range().duration, 500.0);
    assert_eq!(session.range().start, 0.0);
    assert_eq!(session.range().end, 500.0);
}

#[test]
fn test_attach_with_rebased_initial_range() {
    let mut session = MediaSession::new(SessionConfig::default());
    let initial = InitialRange::new(0.0, 180.0).unwrap();
    session.attach(ScriptedMediaHandle::with_duration(180.0), Some(initial));

    assert_eq!(session.range().start, 0.0);
    assert_eq!(session.range().end, 180.0);
}
