// services/sentinel-dash/src/components/header.rs
//
// Sentinel Console - Header Component
//

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"🛰️"</span>
                <h1 class="header-title">"SENTINEL"</h1>
                <span class="header-subtitle">"Border Surveillance Console"</span>
            </div>

            <div class="header-status">
                <SourceIndicator name="Satellite" status="live" />
                <SourceIndicator name="Drone" status="live" />
                <SourceIndicator name="Intel" status="live" />
            </div>

            <div class="header-actions">
                <span class="connection-status connected">"● Live"</span>
            </div>
        </header>
    }
}

#[component]
fn SourceIndicator(
    name: &'static str,
    status: &'static str,
) -> impl IntoView {
    let status_class = match status {
        "live" => "status-live",
        "degraded" => "status-degraded",
        "offline" => "status-offline",
        _ => "status-unknown",
    };

    view! {
        <div class=format!("source-indicator {}", status_class)>
            <span class="source-dot"></span>
            <span class="source-name">{name}</span>
        </div>
    }
}
