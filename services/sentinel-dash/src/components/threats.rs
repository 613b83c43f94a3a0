// services/sentinel-dash/src/components/threats.rs
//
// Sentinel Console - Social Media Threat Desk
//

use leptos::*;

use opskit::data::intelligence_summary;
use opskit::filter::ALL_THREATS;
use opskit::types::{Platform, Severity, Threat};

use crate::components::{ActivityTrend, LocationBars, SeverityDonut};
use crate::state::ThreatDesk;

#[component]
pub fn ThreatIntelPanel() -> impl IntoView {
    // One desk shared by every inner tab, so filter picks survive switching.
    let desk = ThreatDesk::new();
    let tab = create_rw_signal("overview");

    view! {
        <div class="threat-panel">
            <h2 class="threat-heading">"Social Media Threat Detection Dashboard"</h2>

            <div class="inner-tabs">
                <button
                    class=move || tab_class(tab.get() == "overview")
                    on:click=move |_| tab.set("overview")
                >
                    "Overview"
                </button>
                <button
                    class=move || tab_class(tab.get() == "threats")
                    on:click=move |_| tab.set("threats")
                >
                    "Threats"
                </button>
                <button
                    class=move || tab_class(tab.get() == "analytics")
                    on:click=move |_| tab.set("analytics")
                >
                    "Analytics"
                </button>
            </div>

            {move || match tab.get() {
                "threats" => view! { <ThreatsTab desk=desk /> }.into_view(),
                "analytics" => view! { <AnalyticsTab /> }.into_view(),
                _ => view! { <OverviewTab desk=desk /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn OverviewTab(desk: ThreatDesk) -> impl IntoView {
    view! {
        <div class="threat-overview">
            <div class="stats-grid">
                <StatCard
                    label="Total Threats"
                    value=move || desk.total().to_string()
                    icon="⚠"
                    class_name="stat-warning"
                />

                <StatCard
                    label="High Severity"
                    value=move || desk.high_severity().to_string()
                    icon="✗"
                    class_name="stat-error"
                />

                <StatCard
                    label="Most Active Platform"
                    value=|| "X".to_string()
                    icon="▶"
                    class_name="stat-info"
                />
            </div>

            <section class="panel">
                <h2 class="panel-title">"Recent Threats"</h2>
                <div class="threat-list">
                    <For
                        each=move || desk.visible()
                        key=|threat| threat.id
                        children=move |threat| view! { <ThreatCard threat=threat show_link=true /> }
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn ThreatsTab(desk: ThreatDesk) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"All Threats"</h2>

            <div class="threat-filters">
                <select
                    class="region-select"
                    prop:value=move || desk.platform.get()
                    on:change=move |ev| desk.platform.set(event_target_value(&ev))
                >
                    <option value=ALL_THREATS>"All Platforms"</option>
                    {Platform::ALL
                        .iter()
                        .copied()
                        .map(|platform| {
                            view! {
                                <option value=platform.to_string()>{platform.to_string()}</option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="region-select"
                    prop:value=move || desk.severity.get()
                    on:change=move |ev| desk.severity.set(event_target_value(&ev))
                >
                    <option value=ALL_THREATS>"All Severities"</option>
                    <option value="low">"Low"</option>
                    <option value="medium">"Medium"</option>
                    <option value="high">"High"</option>
                </select>

                <input
                    class="threat-search"
                    type="text"
                    placeholder="Search threats..."
                    prop:value=move || desk.search.get()
                    on:input=move |ev| desk.search.set(event_target_value(&ev))
                />
            </div>

            <div class="threat-list">
                <For
                    each=move || desk.visible()
                    key=|threat| threat.id
                    children=move |threat| view! { <ThreatCard threat=threat /> }
                />
            </div>
        </section>
    }
}

#[component]
fn AnalyticsTab() -> impl IntoView {
    // The range picker is presentational, the series behind it are fixtures.
    let time_range = create_rw_signal("7d".to_string());
    let summary = intelligence_summary();

    view! {
        <div class="analytics-grid">
            <section class="panel">
                <div class="panel-head">
                    <h2 class="panel-title">"Threat Trends"</h2>
                    <select
                        class="region-select"
                        prop:value=move || time_range.get()
                        on:change=move |ev| time_range.set(event_target_value(&ev))
                    >
                        <option value="7d">"Last 7 days"</option>
                        <option value="30d">"Last 30 days"</option>
                        <option value="90d">"Last 90 days"</option>
                    </select>
                </div>
                <ActivityTrend />
            </section>

            <section class="panel">
                <h2 class="panel-title">"Threat Severity Distribution"</h2>
                <SeverityDonut />
            </section>

            <section class="panel">
                <h2 class="panel-title">"Top Threat Locations"</h2>
                <LocationBars />
            </section>

            <section class="panel">
                <h2 class="panel-title">"Threat Intelligence Summary"</h2>
                <div class="summary-lists">
                    <div>
                        <h3 class="summary-head">"Key Insights:"</h3>
                        <ul>
                            {summary
                                .key_insights
                                .iter()
                                .copied()
                                .map(|line| view! { <li>{line}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="summary-head">"Emerging Trends:"</h3>
                        <ul>
                            {summary
                                .emerging_trends
                                .iter()
                                .copied()
                                .map(|line| view! { <li>{line}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="summary-head">"Recommended Actions:"</h3>
                        <ul>
                            {summary
                                .recommended_actions
                                .iter()
                                .copied()
                                .map(|line| view! { <li>{line}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ThreatCard(threat: Threat, #[prop(optional)] show_link: bool) -> impl IntoView {
    view! {
        <div class="threat-card">
            <div class="threat-card-head">
                <span class="threat-platform">{threat.platform.to_string()}</span>
                <span class=format!("severity-badge {}", severity_class(threat.severity))>
                    {threat.severity.to_string()}
                </span>
            </div>

            <p class="threat-content">{threat.content.clone()}</p>

            {show_link
                .then(|| view! {
                    <a
                        class="threat-link"
                        href=threat.link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View Post"
                    </a>
                })}

            <div class="threat-card-foot">
                <span>{threat.timestamp.format("%b %d, %Y %H:%M").to_string()}</span>
                <span class="threat-location">"📍 " {threat.location.clone()}</span>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: impl Fn() -> String + 'static,
    icon: &'static str,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class_name)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label}</span>
            </div>
        </div>
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "severity-low",
        Severity::Medium => "severity-medium",
        Severity::High => "severity-high",
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}
