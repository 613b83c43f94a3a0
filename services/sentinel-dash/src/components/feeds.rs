// services/sentinel-dash/src/components/feeds.rs
//
// Sentinel Console - Satellite/Drone Feed Grid
//

use leptos::*;

use opskit::data::REGIONS;
use opskit::filter::ALL_FEEDS;
use opskit::types::Feed;

use crate::config::ConsoleConfig;
use crate::sim::start_feed_simulation;
use crate::state::{now_utc, FeedBoard};

#[component]
pub fn FeedGrid(config: ConsoleConfig) -> impl IntoView {
    // Fresh board per mount; the tick loop dies with this scope.
    let board = FeedBoard::new(now_utc());
    start_feed_simulation(board, config);

    // Source toggle is presentational, both views watch the same posts.
    let source = create_rw_signal("satellite");

    let visible = move || board.visible();

    view! {
        <div class="feed-panel">
            <div class="feed-toolbar">
                <div class="source-tabs">
                    <button
                        class=move || tab_class(source.get() == "satellite")
                        on:click=move |_| source.set("satellite")
                    >
                        "Satellite View"
                    </button>
                    <button
                        class=move || tab_class(source.get() == "drone")
                        on:click=move |_| source.set("drone")
                    >
                        "Drone View"
                    </button>
                </div>

                <select
                    class="region-select"
                    prop:value=move || board.region.get()
                    on:change=move |ev| board.region.set(event_target_value(&ev))
                >
                    <option value=ALL_FEEDS>{ALL_FEEDS}</option>
                    {REGIONS
                        .iter()
                        .copied()
                        .map(|region| view! { <option value=region>{region}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="feed-grid">
                // Keyed so a card re-renders on every tick that touches
                // it and on manual alerts raised between ticks.
                <For
                    each=visible
                    key=|feed| format!("{}-{}-{:?}", feed.name, feed.last_updated, feed.last_alert)
                    children=move |feed| view! { <FeedCard feed=feed board=board /> }
                />
            </div>
        </div>
    }
}

#[component]
fn FeedCard(feed: Feed, board: FeedBoard) -> impl IntoView {
    let alert = feed.status.is_alert();
    let name = feed.name.clone();

    view! {
        <div class=format!("feed-card {}", if alert { "feed-card-alert" } else { "" })>
            <div class="feed-card-head">
                <span class="feed-name">{feed.name.clone()}</span>
                <span class=format!("feed-flag {}", if alert { "feed-flag-alert" } else { "" })>
                    "⚠"
                </span>
            </div>

            <div class="feed-screen">
                <span class="feed-screen-glyph">"📷"</span>
                <span class="feed-running-time">{feed.running_time_display()}</span>
            </div>

            <div class="feed-meta">
                <p class="feed-meta-line">"Region: "{feed.region.clone()}</p>
                <p class="feed-meta-line">
                    "Last updated: "{feed.last_updated.format("%H:%M:%S").to_string()}
                </p>
                {feed.last_motion.map(|at| view! {
                    <p class="feed-meta-line feed-motion">
                        "Last motion: "{at.format("%H:%M:%S").to_string()}
                    </p>
                })}
                {feed.last_alert.map(|at| view! {
                    <p class="feed-meta-line feed-alarm">
                        "Last alert: "{at.format("%H:%M:%S").to_string()}
                    </p>
                })}
            </div>

            <div class="feed-card-foot">
                <span class=format!("feed-status {}", if alert { "feed-status-alert" } else { "feed-status-normal" })>
                    {feed.status.to_string()}
                </span>
                <button class="btn btn-alert" on:click=move |_| board.manual_alert(&name)>
                    "🔔 Manual Alert"
                </button>
            </div>
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}
