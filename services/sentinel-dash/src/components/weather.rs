// services/sentinel-dash/src/components/weather.rs
//
// Sentinel Console - Weather & Patrol Routes Panel
//

use leptos::*;

use opskit::data::{patrol_routes, weather_for, REGIONS};
use opskit::filter::{filter_by_region, RegionSelection, ALL_ROUTES};
use opskit::types::PatrolRoute;

use crate::components::RouteMap;

#[component]
pub fn WeatherPatrolPanel() -> impl IntoView {
    let region = create_rw_signal(ALL_ROUTES.to_string());

    let filtered = move || -> Vec<PatrolRoute> {
        let selection = RegionSelection::from_label(&region.get());
        let routes = patrol_routes();
        filter_by_region(&routes, &selection)
            .into_iter()
            .copied()
            .collect()
    };

    let weather = move || weather_for(&region.get());

    view! {
        <div class="patrol-layout">
            <div class="patrol-column">
                <section class="panel">
                    <div class="panel-head">
                        <h2 class="panel-title">"Weather Conditions"</h2>
                        <select
                            class="region-select"
                            prop:value=move || region.get()
                            on:change=move |ev| region.set(event_target_value(&ev))
                        >
                            <option value=ALL_ROUTES>{ALL_ROUTES}</option>
                            {REGIONS
                                .iter()
                                .copied()
                                .map(|r| view! { <option value=r>{r}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <Show
                        when=move || weather().is_some()
                        fallback=|| view! {
                            <p class="panel-note">
                                "Select a specific region to view weather conditions."
                            </p>
                        }
                    >
                        {move || weather().map(|w| view! {
                            <div class="weather-readings">
                                <p>"Temperature: "{w.temperature}</p>
                                <p>"Humidity: "{w.humidity}</p>
                                <p>"Wind Speed: "{w.wind_speed}</p>
                                <p>"Visibility: "{w.visibility}</p>
                            </div>
                        })}
                    </Show>
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Patrol Routes"</h2>
                    <div class="route-list">
                        <For
                            each=filtered
                            key=|route| route.name
                            children=move |route| view! {
                                <div class="route-item">
                                    <h3 class="route-name">{route.name}" - "{route.region}</h3>
                                    <p class="route-line">"Condition: "{route.condition}</p>
                                    <p class="route-line">
                                        "Recommendation: "{route.recommendation.to_string()}
                                    </p>
                                </div>
                            }
                        />
                    </div>
                </section>
            </div>

            <section class="panel map-panel">
                <h2 class="panel-title">"Patrol Map"</h2>
                <RouteMap routes=Signal::derive(filtered) />
            </section>
        </div>
    }
}
