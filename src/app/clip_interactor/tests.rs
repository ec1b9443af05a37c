// Unit tests for the clip interactor

use super::*;
use crate::adapters::{
    FailingExportAdapter, MemoryStoreAdapter, MockExportAdapter, StaticUserAdapter,
};

fn interactor(user: Option<&str>) -> (ClipInteractor, Arc<MemoryStoreAdapter>) {
    let store = Arc::new(MemoryStoreAdapter::new());
    let user_port = match user {
        Some(id) => StaticUserAdapter::signed_in(id),
        None => StaticUserAdapter::signed_out(),
    };
    let interactor = ClipInteractor::new(
        Arc::new(MockExportAdapter::new()),
        Arc::clone(&store) as Arc<dyn StorePort>,
        Arc::new(user_port),
        SessionConfig::default(),
    );
    (interactor, store)
}

fn range(start: f64, end: f64, duration: f64) -> RangeState {
    RangeState {
        duration,
        start,
        end,
        current: start,
    }
}

#[tokio::test]
async fn test_download_clip_queues_request() {
    let (interactor, _) = interactor(Some("user-1"));

    let outcome = interactor
        .download_clip(&range(600.0, 900.0, 3600.0), &MediaIdentity::new("vod123"))
        .await
        .unwrap();

    assert!(matches!(outcome, ExportOutcome::Queued { .. }));
}

#[tokio::test]
async fn test_download_clip_rejects_invalid_range_before_dispatch() {
    let (interactor, _) = interactor(Some("user-1"));

    let result = interactor
        .download_clip(&range(900.0, 600.0, 3600.0), &MediaIdentity::new("vod123"))
        .await;

    assert!(matches!(result, Err(DomainError::InvalidRange { .. })));
}

#[tokio::test]
async fn test_download_clip_surfaces_service_failure() {
    let store = Arc::new(MemoryStoreAdapter::new());
    let interactor = ClipInteractor::new(
        Arc::new(FailingExportAdapter),
        store,
        Arc::new(StaticUserAdapter::signed_out()),
        SessionConfig::default(),
    );

    let result = interactor
        .download_clip(&range(0.0, 60.0, 3600.0), &MediaIdentity::new("vod123"))
        .await;

    assert!(matches!(result, Err(DomainError::ExportFailed { .. })));
}

#[tokio::test]
async fn test_save_to_library_persists_quick_save_window() {
    let (interactor, store) = interactor(Some("user-1"));

    let record = interactor
        .save_to_library(
            &range(600.0, 3000.0, 3600.0),
            &MediaIdentity::new("vod123").with_title("Ranked grind"),
        )
        .await
        .unwrap();

    // fixed 3-minute window from start, not the selected range
    assert_eq!(record.start_time, "00:10:00");
    assert_eq!(record.end_time, "00:13:00");
    assert_eq!(record.clip_duration_seconds, 180.0);
    assert_eq!(record.user_id.as_deref(), Some("user-1"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_save_to_library_clamps_window_to_duration() {
    let (interactor, _) = interactor(Some("user-1"));

    let record = interactor
        .save_to_library(&range(95.0, 100.0, 100.0), &MediaIdentity::new("vod123"))
        .await
        .unwrap();

    assert_eq!(record.start_time, "00:01:35");
    assert_eq!(record.end_time, "00:01:40");
    assert_eq!(record.clip_duration_seconds, 5.0);
}

#[tokio::test]
async fn test_save_to_library_requires_user() {
    let (interactor, store) = interactor(None);

    let result = interactor
        .save_to_library(&range(0.0, 60.0, 3600.0), &MediaIdentity::new("vod123"))
        .await;

    assert!(matches!(result, Err(DomainError::SignInRequired)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_to_library_requires_identity() {
    let (interactor, _) = interactor(Some("user-1"));

    let result = interactor
        .save_to_library(&range(0.0, 60.0, 3600.0), &MediaIdentity::new(""))
        .await;

    assert!(matches!(result, Err(DomainError::MissingIdentity)));
}

#[tokio::test]
async fn test_reopen_clip_rebases_saved_range() {
    let (interactor, _) = interactor(Some("user-1"));

    interactor
        .save_to_library(&range(600.0, 3000.0, 3600.0), &MediaIdentity::new("vod123"))
        .await
        .unwrap();

    let initial = interactor
        .reopen_clip("vod123_cropped.mp4")
        .await
        .unwrap()
        .expect("record should exist");

    // segment-local: the re-fetched clip starts at zero
    assert_eq!(initial.start, 0.0);
    assert_eq!(initial.end, 180.0);
}

#[tokio::test]
async fn test_reopen_from_preseeded_store() {
    let record = SavedClipRecord::completed("old_vod", None, "user-1".to_string(), 30.0, 90.0);
    let store = Arc::new(MemoryStoreAdapter::with_records([record]));
    let interactor = ClipInteractor::new(
        Arc::new(MockExportAdapter::new()),
        store,
        Arc::new(StaticUserAdapter::signed_in("user-1")),
        SessionConfig::default(),
    );

    let initial = interactor
        .reopen_clip("old_vod_cropped.mp4")
        .await
        .unwrap()
        .expect("record should exist");

    assert_eq!(initial.start, 0.0);
    assert_eq!(initial.end, 60.0);
}

#[tokio::test]
async fn test_reopen_unknown_clip_is_none() {
    let (interactor, _) = interactor(Some("user-1"));

    let initial = interactor.reopen_clip("missing.mp4").await.unwrap();
    assert!(initial.is_none());
}
