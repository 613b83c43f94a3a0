// services/sentinel-dash/src/app.rs
//
// Sentinel Console - Main Application Component
//

use leptos::*;
use leptos_router::*;

use crate::components::{DashboardPage, LoginPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="sentinel-app">
                <Routes>
                    <Route path="/" view=LoginPage />
                    <Route path="/dashboard" view=DashboardPage />
                </Routes>
            </div>
        </Router>
    }
}
