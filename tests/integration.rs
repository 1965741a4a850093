// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::time::Duration;
use tempfile::tempdir;
use toast_stack::config::{self, Config, DismissalConfig, GestureConfig};
use toast_stack::notifications::{
    CountdownOutcome, DragPhase, RemovalCause, ShowRequest, ToastEvent, Toaster, ViewMode,
};
use tokio::runtime::Handle;

fn ids(toaster: &Toaster) -> Vec<toast_stack::domain::toast::ToastId> {
    toaster.snapshot().iter().map(|v| v.toast.id()).collect()
}

#[tokio::test(start_paused = true)]
async fn config_file_drives_dismiss_delay_and_gesture_tuning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toasts.toml");
    let config = Config {
        dismissal: DismissalConfig {
            delay_secs: Some(5),
        },
        gesture: GestureConfig {
            fling_threshold: Some(100.0),
            velocity_multiplier: Some(0.0),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    let toaster = Toaster::new(&loaded, Handle::current());
    toaster.success(None);
    toaster.success(None);
    let all = ids(&toaster);
    let (first, second) = (all[0], all[1]);

    // Velocity is ignored and 100 units suffice with this tuning.
    toaster.drag(
        first,
        DragPhase::End {
            delta_y: -100.0,
            velocity_y: 0.0,
        },
    );
    assert!(!toaster.contains(first));

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(toaster.contains(second));
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(toaster.is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[tokio::test(start_paused = true)]
async fn toast_is_removed_exactly_after_default_delay() {
    let toaster = Toaster::new(&Config::default(), Handle::current());
    let mut events = toaster.subscribe();
    let started = tokio::time::Instant::now();

    toaster.show(ShowRequest::error().title("Upload failed"));

    loop {
        match events.recv().await.expect("toaster alive") {
            ToastEvent::Removed { cause, toast, .. } => {
                assert_eq!(cause, RemovalCause::Expired);
                assert_eq!(toast.content().title, "Upload failed");
                break;
            }
            _ => continue,
        }
    }
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(3), "removed early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(3005), "removed late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn toast_added_while_expanded_survives_until_collapse() {
    let toaster = Toaster::new(&Config::default(), Handle::current());
    toaster.success(None);
    toaster.success(None);
    toaster.tap_stack();
    assert_eq!(toaster.view_mode(), ViewMode::Expanded);

    toaster.warning(Some("Added while expanded".to_string()));
    tokio::time::sleep(Duration::from_secs(20)).await;
    assert_eq!(toaster.len(), 3);

    toaster.tap_background();
    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert_eq!(toaster.len(), 3);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(toaster.is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_dismissal_cancels_countdown_silently() {
    let toaster = Toaster::new(&Config::default(), Handle::current());
    let mut events = toaster.subscribe();
    toaster.success(None);
    let id = ids(&toaster)[0];

    tokio::time::sleep(Duration::from_secs(1)).await;
    toaster.dismiss(id);
    toaster.dismiss(id);
    tokio::time::sleep(Duration::from_secs(10)).await;

    let mut outcomes = Vec::new();
    let mut removals = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            ToastEvent::CountdownEnded { outcome, .. } => outcomes.push(outcome),
            ToastEvent::Removed { .. } => removals += 1,
            _ => {}
        }
    }
    assert_eq!(outcomes, vec![CountdownOutcome::Cancelled]);
    assert_eq!(removals, 1);
}

#[tokio::test(start_paused = true)]
async fn order_is_preserved_under_interleaved_removals() {
    let toaster = Toaster::new(&Config::default(), Handle::current());
    for i in 0..6 {
        toaster.success(Some(format!("toast {i}")));
    }
    let all = ids(&toaster);

    toaster.dismiss(all[1]);
    toaster.drag(
        all[4],
        DragPhase::End {
            delta_y: -150.0,
            velocity_y: -30.0,
        },
    );
    toaster.success(Some("late".to_string()));

    let titles: Vec<String> = toaster
        .snapshot()
        .into_iter()
        .map(|v| v.toast.content().title.clone())
        .collect();
    assert_eq!(titles, vec!["toast 0", "toast 2", "toast 3", "toast 5", "late"]);
}

#[test]
fn concurrent_shows_keep_ids_unique() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .expect("Failed to build runtime");
    let toaster = Toaster::new(&Config::default(), runtime.handle().clone());

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let toaster = toaster.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    toaster.success(None);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().expect("show thread panicked");
    }

    let all = ids(&toaster);
    assert_eq!(all.len(), 400);
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len());
    for id in &all {
        assert!(toaster.is_countdown_armed(*id));
    }
}
