//! `imgurl click <action>...` – replay button clicks against an in-memory page.

use imgurl_core::{dispatch, initialize, DemoSettings, Dispatch, RecordedView};

/// Replays `actions` on a freshly loaded view; returns the view and one
/// report line per click.
pub(crate) fn replay(settings: &DemoSettings, actions: &[String]) -> (RecordedView, Vec<String>) {
    let mut view = RecordedView::new();
    initialize(settings, &mut view);

    let lines = actions
        .iter()
        .map(|action| match dispatch(settings, action, &mut view) {
            Dispatch::Applied { url, .. } => format!("{action}: {url}"),
            Dispatch::Ignored => format!("{action}: ignored (unknown action)"),
        })
        .collect();
    (view, lines)
}

pub fn run_click(settings: &DemoSettings, actions: &[String]) {
    let (view, lines) = replay(settings, actions);
    for line in lines {
        println!("{line}");
    }
    println!();
    println!("image: {}", view.image_source.as_deref().unwrap_or("-"));
    println!("text:  {}", view.url_text.as_deref().unwrap_or("-"));
}
