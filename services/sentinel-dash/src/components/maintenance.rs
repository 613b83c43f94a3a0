// services/sentinel-dash/src/components/maintenance.rs
//
// Sentinel Console - Predictive Maintenance Panel
//

use leptos::*;

use opskit::data::{equipment_groups, infrastructure_statuses, resource_metrics, SECTORS};
use opskit::types::EquipmentItem;

#[component]
pub fn MaintenancePanel() -> impl IntoView {
    let sector = create_rw_signal(SECTORS[0]);

    let items = move || -> Vec<EquipmentItem> {
        equipment_groups()
            .into_iter()
            .find(|group| group.region == sector.get())
            .map(|group| group.items)
            .unwrap_or_default()
    };

    view! {
        <div class="maintenance-panel">
            <div class="sector-tabs">
                {SECTORS
                    .iter()
                    .copied()
                    .map(|name| {
                        view! {
                            <button
                                class=move || tab_class(sector.get() == name)
                                on:click=move |_| sector.set(name)
                            >
                                {format!("{} Region", name)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="panel">
                <h2 class="panel-title">
                    {move || format!("{} Region Equipment Health", sector.get())}
                </h2>
                <div class="meter-list">
                    {move || items()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="meter">
                                    <div class="meter-head">
                                        <span>{item.name}</span>
                                        <span>{format!("{}%", item.health)}</span>
                                    </div>
                                    <div class="meter-bar">
                                        <div
                                            class=format!("meter-fill {}", health_class(item.health))
                                            style=format!("width: {}%", item.health)
                                        />
                                    </div>
                                    <p class="meter-dates">
                                        "Received: "{item.received}" | Expires: "{item.expiry}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Resource Optimization"</h2>
                <div class="meter-list">
                    {resource_metrics()
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <div class="meter">
                                    <div class="meter-head">
                                        <span>{metric.label}</span>
                                        <span>{metric.note}</span>
                                    </div>
                                    <div class="meter-bar">
                                        <div
                                            class="meter-fill"
                                            style=format!("width: {}%", metric.level_pct)
                                        />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Infrastructure Status"</h2>
                <div class="infra-list">
                    {infrastructure_statuses()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <div class=format!(
                                    "infra-item {}",
                                    if status.needs_attention { "infra-warning" } else { "" },
                                )>
                                    <span class="infra-icon">
                                        {if status.needs_attention { "⚠" } else { "●" }}
                                    </span>
                                    <div class="infra-body">
                                        <h3 class="infra-name">{status.name}</h3>
                                        <p class="infra-condition">{status.condition}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Bars drop through warn/critical colors as predicted health decays.
fn health_class(health: u8) -> &'static str {
    if health >= 80 {
        "meter-good"
    } else if health >= 65 {
        "meter-warn"
    } else {
        "meter-low"
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}
