//! Headless walkthrough of a collapsible-header session.
//!
//! Drives the engine through a scripted three-pane scroll session and prints
//! the header state after each phase. No toolkit required; pane handles just
//! log the repositionings a real scroll view would perform.

use std::time::Duration;

use foldview::{NavigationState, PaneKey, Route, ScrollHandle, ScrollSync, SyncConfig};
use foldview_core::logging;

struct LoggingPane {
    name: &'static str,
}

impl ScrollHandle for LoggingPane {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        let mode = if animated { "animated" } else { "jump" };
        println!("    [{}] scroll_to {offset} ({mode})", self.name);
    }
}

fn frame(sync: &mut ScrollSync, label: &str) {
    sync.tick(Duration::from_millis(150));
    println!(
        "{label}: value={} translate={} header={}",
        sync.scroll_value(),
        sync.header_translate(),
        sync.header_height(),
    );
}

fn main() {
    logging::init();

    let names = ["feed", "likes", "profile"];
    let mut sync = ScrollSync::new(SyncConfig::default());
    let routes: Vec<Route> = names.iter().map(|n| Route::new(*n, *n)).collect();
    sync.set_navigation(&NavigationState::new(0, routes.clone()));
    for name in names {
        sync.register_scroll_handle(PaneKey::new(name), Box::new(LoggingPane { name }));
    }

    // The host measures the header + tab bar container at 129px: an 80px
    // header above the default 49px tab bar.
    sync.on_header_layout(129.0);
    println!("content inset for panes: {}", sync.content_inset());

    let feed = PaneKey::new("feed");

    println!("\n-- drag the feed down to 30 and let go --");
    sync.pane(feed).on_scroll_begin_drag();
    for offset in [6.0, 14.0, 22.0, 30.0] {
        sync.pane(feed).on_scroll(offset);
    }
    sync.pane(feed).on_scroll_end_drag();
    frame(&mut sync, "settled"); // below threshold: everything snaps open

    println!("\n-- fling past the header --");
    sync.pane(feed).on_scroll_begin_drag();
    sync.pane(feed).on_scroll(45.0);
    sync.pane(feed).on_scroll_end_drag();
    sync.pane(feed).on_momentum_scroll_begin();
    for offset in [90.0, 150.0, 210.0] {
        sync.pane(feed).on_scroll(offset);
    }
    sync.pane(feed).on_momentum_scroll_end();
    frame(&mut sync, "settled"); // beyond the header: others pre-collapsed

    println!("\n-- switch to likes --");
    sync.set_navigation(&NavigationState::new(1, routes));
    frame(&mut sync, "after switch");
}
