//! Engine-level behavior: settle timing, gesture flags, the tab-press gate,
//! header tolerance, and teardown.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use foldview::{
    NavigationState, PaneKey, Route, ScrollHandle, ScrollSync, SyncConfig, TabPressEvent,
};

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<(f32, bool)>>>);

impl Recorder {
    fn calls(&self) -> Vec<(f32, bool)> {
        self.0.borrow().clone()
    }
}

impl ScrollHandle for Recorder {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.0.borrow_mut().push((offset, animated));
    }
}

const MS: Duration = Duration::from_millis(1);

fn focused_engine(name: &str) -> (ScrollSync, PaneKey, Recorder) {
    let mut sync = ScrollSync::new(SyncConfig::default());
    sync.set_navigation(&NavigationState::new(0, vec![Route::new(name, name)]));
    let key = PaneKey::new(name);
    let recorder = Recorder::default();
    sync.register_scroll_handle(key, Box::new(recorder.clone()));
    sync.on_header_layout(129.0); // header height 80
    (sync, key, recorder)
}

#[test]
fn test_scroll_updates_shared_value_and_translate() {
    let (mut sync, key, _recorder) = focused_engine("feed");

    sync.pane(key).on_scroll(30.0);
    assert_eq!(sync.scroll_value(), 30.0);
    assert_eq!(sync.header_translate(), -30.0);

    sync.pane(key).on_scroll(200.0);
    assert_eq!(sync.header_translate(), -80.0); // clamped at the boundary
}

#[test]
fn test_non_focused_pane_scroll_is_dropped() {
    let (mut sync, _key, _recorder) = focused_engine("feed");
    let other = PaneKey::new("likes");

    sync.pane(other).on_scroll(55.0);

    assert_eq!(sync.scroll_value(), 0.0);
    assert_eq!(sync.pane_offset(other), None);
}

#[test]
fn test_disabled_pane_scroll_is_dropped_until_reenabled() {
    let (mut sync, key, _recorder) = focused_engine("feed");

    sync.pane(key).set_scroll_enabled(false);
    sync.pane(key).on_scroll(25.0);
    assert_eq!(sync.scroll_value(), 0.0);

    sync.pane(key).set_scroll_enabled(true);
    sync.pane(key).on_scroll(25.0);
    assert_eq!(sync.scroll_value(), 25.0);
}

#[test]
fn test_scroll_burst_settles_exactly_once() {
    let (mut sync, key, recorder) = focused_engine("feed");

    // Each event restarts the quiet period; nothing settles mid-burst.
    for offset in [30.0, 31.0, 29.0] {
        sync.pane(key).on_scroll(offset);
        sync.tick(50 * MS);
        assert_eq!(recorder.calls(), vec![]);
    }

    // 100ms after the last event the single settle fires.
    sync.tick(60 * MS);
    assert_eq!(recorder.calls(), vec![(0.0, true)]);

    // And only once: further idle time changes nothing.
    sync.tick(500 * MS);
    assert_eq!(recorder.calls(), vec![(0.0, true)]);
}

#[test]
fn test_active_drag_gates_settle_until_release() {
    let (mut sync, key, recorder) = focused_engine("feed");

    sync.pane(key).on_scroll_begin_drag();
    sync.pane(key).on_scroll(30.0);

    // The countdown elapses mid-drag: the fire is swallowed by the flag
    // check and no snap happens while the finger is down.
    sync.tick(150 * MS);
    assert_eq!(recorder.calls(), vec![]);

    // Lifting the finger re-arms the countdown even though no further
    // scroll events arrive; the snap follows.
    sync.pane(key).on_scroll_end_drag();
    assert_eq!(recorder.calls(), vec![]);
    sync.tick(150 * MS);
    assert_eq!(recorder.calls(), vec![(0.0, true)]);
}

#[test]
fn test_header_measurements_ignore_subpixel_noise() {
    let changes = Rc::new(RefCell::new(0));
    let mut sync = ScrollSync::new(SyncConfig::default());
    let counter = changes.clone();
    sync.set_on_header_height_change(move || *counter.borrow_mut() += 1);

    sync.on_header_layout(149.0); // height 100.0
    sync.on_header_layout(149.04); // 100.04 rounds to the same height
    assert_eq!(*changes.borrow(), 1);
    assert_eq!(sync.header_height(), 100.0);

    sync.on_header_layout(149.1); // 100.1 is a real change
    assert_eq!(*changes.borrow(), 2);
    assert!((sync.header_height() - 100.1).abs() < 1e-3);
}

#[test]
fn test_tab_press_suppressed_only_while_gliding() {
    let (mut sync, key, _recorder) = focused_engine("feed");

    let mut press = TabPressEvent::new(key);
    sync.handle_tab_press(&mut press);
    assert!(!press.is_default_prevented());

    sync.pane(key).on_momentum_scroll_begin();
    let mut press = TabPressEvent::new(key);
    sync.handle_tab_press(&mut press);
    assert!(press.is_default_prevented());

    sync.pane(key).on_momentum_scroll_end();
    let mut press = TabPressEvent::new(key);
    sync.handle_tab_press(&mut press);
    assert!(!press.is_default_prevented());
}

#[test]
fn test_tab_press_passes_through_when_suppression_disabled() {
    let config = SyncConfig {
        prevent_tab_press_on_glide: false,
        ..SyncConfig::default()
    };
    let mut sync = ScrollSync::new(config);
    sync.set_navigation(&NavigationState::new(0, vec![Route::new("feed", "Feed")]));
    let key = PaneKey::new("feed");

    sync.on_momentum_scroll_begin();
    let mut press = TabPressEvent::new(key);
    sync.handle_tab_press(&mut press);

    // The press proceeds; the host's own handler still sees a live event.
    assert!(!press.is_default_prevented());
    assert!(sync.is_gliding());
}

#[test]
fn test_glide_flag_follows_momentum_boundaries() {
    let (mut sync, key, _recorder) = focused_engine("feed");

    assert!(!sync.is_gliding());
    sync.pane(key).on_momentum_scroll_begin();
    assert!(sync.is_gliding());
    sync.pane(key).on_momentum_scroll_end();
    assert!(!sync.is_gliding());
}

#[test]
fn test_observe_and_unobserve_scroll() {
    let (mut sync, key, _recorder) = focused_engine("feed");
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = seen.clone();
    let token = sync.observe_scroll(move |v| sink.borrow_mut().push(v));
    sync.pane(key).on_scroll(12.0);
    sync.unobserve_scroll(token);
    sync.pane(key).on_scroll(24.0);

    assert_eq!(*seen.borrow(), vec![12.0]);
}

#[test]
fn test_teardown_is_unconditional_and_idempotent() {
    let (mut sync, key, recorder) = focused_engine("feed");
    let seen = Rc::new(RefCell::new(0));

    let sink = seen.clone();
    let _token = sync.observe_scroll(move |_| *sink.borrow_mut() += 1);

    sync.pane(key).on_scroll(30.0); // arms the countdown, notifies once
    sync.teardown();
    sync.teardown();

    // No pending settle survives teardown and no listener fires again.
    sync.tick(500 * MS);
    assert_eq!(recorder.calls(), vec![]);
    sync.pane(key).on_scroll(31.0);
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn test_expand_and_collapse_commands_drive_all_panes() {
    let mut sync = ScrollSync::new(SyncConfig::default());
    sync.set_navigation(&NavigationState::new(
        0,
        vec![Route::new("a", "A"), Route::new("b", "B")],
    ));
    let a = PaneKey::new("a");
    let b = PaneKey::new("b");
    let rec_a = Recorder::default();
    let rec_b = Recorder::default();
    sync.register_scroll_handle(a, Box::new(rec_a.clone()));
    sync.register_scroll_handle(b, Box::new(rec_b.clone()));
    sync.on_header_layout(129.0);

    sync.collapse_header();
    assert_eq!(rec_a.calls(), vec![(80.0, true)]); // focused, animated
    assert_eq!(rec_b.calls(), vec![(80.0, false)]);
    assert_eq!(sync.pane_offset(b), Some(80.0));

    sync.expand_header();
    assert_eq!(rec_a.calls(), vec![(80.0, true), (0.0, true)]);
    assert_eq!(rec_b.calls(), vec![(80.0, false), (0.0, false)]);
}

#[test]
fn test_snap_config_changes_rerun_the_pass() {
    let (mut sync, key, recorder) = focused_engine("feed");

    sync.pane(key).on_scroll_begin_drag();
    sync.pane(key).on_scroll(60.0);
    sync.pane(key).on_scroll_end_drag();
    sync.tick(150 * MS);
    assert_eq!(recorder.calls(), vec![(80.0, true)]); // snapped closed

    // Scroll back to a mid position, then widen the threshold: the re-run
    // snaps open without any new settle.
    sync.pane(key).on_scroll(60.0);
    sync.set_snap_threshold(0.9);
    assert_eq!(recorder.calls(), vec![(80.0, true), (0.0, true)]);
}
