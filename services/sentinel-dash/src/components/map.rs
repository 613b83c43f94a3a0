// services/sentinel-dash/src/components/map.rs
//
// Sentinel Console - Patrol Route Map
// Schematic SVG projection, refits to the filtered marker set
//

use leptos::*;

use opskit::geo::{GeoPoint, MapBounds};
use opskit::types::{PatrolRoute, Recommendation};

const MAP_WIDTH: f64 = 640.0;
const MAP_HEIGHT: f64 = 420.0;

#[component]
pub fn RouteMap(#[prop(into)] routes: Signal<Vec<PatrolRoute>>) -> impl IntoView {
    let selected = create_rw_signal(None::<&'static str>);

    let bounds = move || {
        let points: Vec<GeoPoint> = routes.get().iter().map(GeoPoint::from).collect();
        MapBounds::fit(&points)
    };

    // Popup record, dropped automatically when the pin filters out.
    let popup = move || {
        let name = selected.get()?;
        routes.get().iter().find(|r| r.name == name).copied()
    };

    view! {
        <div class="route-map">
            <svg
                class="map-svg"
                viewBox=format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
            >
                <rect class="map-backdrop" x="0" y="0" width=MAP_WIDTH height=MAP_HEIGHT />

                // Graticule
                <line class="map-grid" x1="0" y1="105" x2=MAP_WIDTH y2="105" />
                <line class="map-grid" x1="0" y1="210" x2=MAP_WIDTH y2="210" />
                <line class="map-grid" x1="0" y1="315" x2=MAP_WIDTH y2="315" />
                <line class="map-grid" x1="160" y1="0" x2="160" y2=MAP_HEIGHT />
                <line class="map-grid" x1="320" y1="0" x2="320" y2=MAP_HEIGHT />
                <line class="map-grid" x1="480" y1="0" x2="480" y2=MAP_HEIGHT />

                <For
                    each=move || routes.get()
                    key=|route| route.name
                    children=move |route| {
                        let pin = move || {
                            bounds().project(GeoPoint::from(&route), MAP_WIDTH, MAP_HEIGHT)
                        };
                        view! {
                            <g class="map-pin" on:click=move |_| selected.set(Some(route.name))>
                                <circle
                                    class=format!("pin {}", pin_class(route.recommendation))
                                    cx=move || pin().0
                                    cy=move || pin().1
                                    r="7"
                                />
                                <text
                                    class="pin-label"
                                    x=move || pin().0 + 11.0
                                    y=move || pin().1 + 4.0
                                >
                                    {route.name}
                                </text>
                            </g>
                        }
                    }
                />
            </svg>

            {move || popup().map(|route| view! {
                <div class="map-popup">
                    <div class="map-popup-head">
                        <h3 class="map-popup-title">{route.name}</h3>
                        <button class="map-popup-close" on:click=move |_| selected.set(None)>
                            "×"
                        </button>
                    </div>
                    <p>"Region: "{route.region}</p>
                    <p>"Condition: "{route.condition}</p>
                    <p>"Recommendation: "{route.recommendation.to_string()}</p>
                </div>
            })}
        </div>
    }
}

fn pin_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Recommended => "pin-clear",
        Recommendation::Caution => "pin-caution",
        Recommendation::NotRecommended => "pin-blocked",
    }
}
