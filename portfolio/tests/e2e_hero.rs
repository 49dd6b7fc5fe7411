// E2E tests for the hero headline
//
// Runs the animator with the page's default timings on a paused clock and
// watches what a subscriber would render.

use portfolio::{
    spawn_typewriter, HeadlineFrame, HeadlinePort, SiteConfig, TypewriterConfig, TypewriterPhase,
    TypewriterTimings, WatchHeadline,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Transcript {
    frames: Mutex<Vec<HeadlineFrame>>,
}

impl HeadlinePort for Transcript {
    fn publish(&self, frame: &HeadlineFrame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}

#[tokio::test(start_paused = true)]
async fn e2e_default_page_cycles_through_all_roles() {
    let site = SiteConfig::default();
    let mut config = site.hero.typewriter_config();
    config.max_cycles = Some(1);
    let transcript = Arc::new(Transcript::default());

    let snapshot = spawn_typewriter(config, transcript.clone(), None)
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(snapshot.roles_completed, 3);
    assert_eq!(snapshot.role, "UI/UX Designer");
    assert_eq!(snapshot.phase, TypewriterPhase::Typing);

    let frames = transcript.frames.lock().unwrap();
    let full_texts: Vec<&str> = frames
        .iter()
        .filter(|frame| frame.text == frame.role && !frame.text.is_empty())
        .map(|frame| frame.text.as_str())
        .collect();
    assert_eq!(
        full_texts,
        ["UI/UX Designer", "MERN Stack Developer", "Programmer"]
    );
    // every frame shows a prefix of the role carried next to it
    assert!(frames.iter().all(|frame| frame.role.starts_with(&frame.text)));
}

#[tokio::test(start_paused = true)]
async fn e2e_watch_subscriber_sees_latest_frame() {
    let (headline, mut rx) = WatchHeadline::new();
    let config = TypewriterConfig::new(
        vec!["Programmer".into()],
        TypewriterTimings::default(),
    );
    let handle = spawn_typewriter(config, Arc::new(headline), None).unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().as_ref().unwrap().text, "");

    // 4 typing ticks at 110 ms
    tokio::time::sleep(Duration::from_millis(445)).await;
    let frame = rx.borrow_and_update().clone().unwrap();
    assert_eq!(frame.text, "Prog");
    assert_eq!(frame.role, "Programmer");
    assert_eq!(frame.phase, TypewriterPhase::Typing);

    // full role is held for the end pause
    tokio::time::sleep(Duration::from_millis(660 + 1000)).await;
    let frame = rx.borrow_and_update().clone().unwrap();
    assert_eq!(frame.text, "Programmer");
    assert_eq!(frame.phase, TypewriterPhase::PausedFull);
    assert_eq!(handle.pending_timers(), 1);

    let snapshot = handle.stop().await.unwrap();
    assert_eq!(snapshot.displayed, "Programmer");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!rx.has_changed().unwrap_or(false));
}
