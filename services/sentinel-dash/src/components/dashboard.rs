// services/sentinel-dash/src/components/dashboard.rs
//
// Sentinel Console - Tabbed console page
//

use leptos::*;

use crate::components::{FeedGrid, Header, MaintenancePanel, ThreatIntelPanel, WeatherPatrolPanel};
use crate::config;

const TABS: [(&str, &str, &str); 4] = [
    ("satellite-drone", "🛰", "Satellite & Drone"),
    ("weather-patrol", "🌤", "Weather & Patrol"),
    ("maintenance", "🔧", "Maintenance"),
    ("threat-intel", "📡", "Threat Intel"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = config::from_meta_tags();
    let tab = create_rw_signal(TABS[0].0);

    view! {
        <div class="console">
            <Header />

            <main class="console-main">
                <h1 class="console-title">"Security Dashboard"</h1>

                <div class="console-tabs">
                    {TABS
                        .iter()
                        .copied()
                        .map(|(value, icon, label)| {
                            view! {
                                <button
                                    class=move || tab_class(tab.get() == value)
                                    on:click=move |_| tab.set(value)
                                >
                                    <span class="tab-icon">{icon}</span>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Mounting one panel at a time scopes its timers to the
                // active tab.
                {move || match tab.get() {
                    "weather-patrol" => view! { <WeatherPatrolPanel /> }.into_view(),
                    "maintenance" => view! { <MaintenancePanel /> }.into_view(),
                    "threat-intel" => view! { <ThreatIntelPanel /> }.into_view(),
                    _ => view! { <FeedGrid config=config /> }.into_view(),
                }}
            </main>

            <footer class="footer">
                <span class="footer-brand">"🛰️ Sentinel"</span>
                <span class="footer-tagline">"Eyes on the northern frontier"</span>
                <span class="footer-version">"v0.1.0"</span>
            </footer>
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
