//! Background deck loading against a scripted provider.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{deck_settled, pump_until, TestAppBuilder};
use pawswipe::adapters::ScriptedProvider;
use pawswipe::deck::{spawn_deck_loader, DeckEvent, DeckLoader};
use pawswipe::models::SwipeDirection;
use pawswipe::session::SessionPhase;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

async fn collect_events(provider: &ScriptedProvider, count: usize) -> Vec<DeckEvent> {
    let loader = DeckLoader::with_rng(Arc::new(provider.clone()), StdRng::seed_from_u64(3));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let task = spawn_deck_loader(loader, count, move |event| {
        let _ = tx.send(event);
    });
    task.await.expect("loader task panicked");

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_items_arrive_in_index_order_then_finish() {
    let provider = ScriptedProvider::new();
    let events = collect_events(&provider, 4).await;

    let loaded: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            DeckEvent::Loaded(item) => Some(item.index),
            _ => None,
        })
        .collect();
    assert_eq!(loaded, vec![0, 1, 2, 3]);
    assert!(matches!(events.last(), Some(DeckEvent::Finished { loaded: 4 })));
    assert_eq!(events.len(), 5);
}

#[tokio::test]
async fn test_names_are_unique_within_a_deck() {
    let provider = ScriptedProvider::new();
    let events = collect_events(&provider, 8).await;

    let mut names: Vec<String> = events
        .iter()
        .filter_map(|event| match event {
            DeckEvent::Loaded(item) => Some(item.name.clone()),
            _ => None,
        })
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 8);
}

#[tokio::test]
async fn test_fetches_never_overlap() {
    let provider = ScriptedProvider::new()
        .with_default_delay(Duration::from_millis(5))
        .with_delay(0, Duration::from_millis(20));
    let _ = collect_events(&provider, 4).await;

    assert_eq!(provider.requests(), vec![0, 1, 2, 3]);
    assert_eq!(provider.max_in_flight(), 1);
}

#[tokio::test]
async fn test_failed_index_shrinks_deck_and_stalls() {
    let provider = ScriptedProvider::new().failing_at(2);
    let (mut app, mut rx) = TestAppBuilder::new().count(3).provider(provider).build();
    app.start_session();
    pump_until(&mut app, &mut rx, deck_settled).await;

    assert_eq!(app.session.deck().len(), 2);
    assert!(app.last_error.as_deref().is_some_and(|e| e.contains('2')));

    let _ = app.swipe(SwipeDirection::Right);
    let _ = app.swipe(SwipeDirection::Left);
    assert_eq!(app.session.phase(), SessionPhase::CatchingUp);
    assert!(app.session.current_item().is_none());
    assert!(app.view().is_stalled());
    assert!(app.session.summary().is_none());
}

#[tokio::test]
async fn test_first_item_failure_does_not_stop_loading() {
    let provider = ScriptedProvider::new().failing_at(0);
    let (mut app, mut rx) = TestAppBuilder::new().count(3).provider(provider).build();
    app.start_session();
    pump_until(&mut app, &mut rx, deck_settled).await;

    assert_eq!(app.session.phase(), SessionPhase::Browsing);
    let current = app.session.current_item().expect("deck has a current item");
    assert_eq!(current.id.as_str(), "cat-1");
    assert_eq!(app.view().target, 3);
}

#[tokio::test]
async fn test_handles_released_when_app_is_dropped() {
    let provider = ScriptedProvider::new();
    let (mut app, mut rx) = TestAppBuilder::new()
        .count(3)
        .provider(provider.clone())
        .build();
    app.start_session();
    pump_until(&mut app, &mut rx, deck_settled).await;
    assert_eq!(provider.tracker().issued(), 3);

    app.shutdown().await;
    drop(app);
    drop(rx);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(provider.tracker().live(), 0);
}
