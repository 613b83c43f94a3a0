// services/sentinel-dash/src/components/login.rs
//
// Sentinel Console - Operator Login
//

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::use_navigate;

use opskit::auth::{self, ScanPhase};

#[component]
pub fn LoginPage() -> impl IntoView {
    let phase = create_rw_signal(ScanPhase::Idle);
    let message = create_rw_signal(ScanPhase::Idle.status_message().to_string());
    let use_biometric = create_rw_signal(true);
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let navigate = use_navigate();

    // Pending scan/check futures outlive a toggle of the form, but not
    // the page itself.
    let alive = store_value(true);
    on_cleanup(move || {
        alive.try_update_value(|flag| *flag = false);
    });

    // Each click starts a fresh scan, even mid-scan. The slowest draw
    // wins the status line, which is how the hardware demo behaved.
    let handle_scan = move |_| {
        phase.set(ScanPhase::Scanning);
        message.set(ScanPhase::Scanning.status_message().to_string());
        let navigate = navigate.clone();

        spawn_local(async move {
            TimeoutFuture::new(auth::SCAN_DURATION_MS).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }

            let outcome = auth::draw_scan_outcome(&mut rand::thread_rng());
            phase.set(outcome);
            message.set(outcome.status_message().to_string());

            if outcome == ScanPhase::Success {
                TimeoutFuture::new(auth::REDIRECT_DELAY_MS).await;
                if alive.try_get_value().unwrap_or(false) {
                    navigate("/dashboard", Default::default());
                }
            }
        });
    };

    // Credential path reports the outcome but stays on the page.
    let handle_credentials = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        message.set(auth::CREDENTIAL_PENDING_MESSAGE.to_string());

        spawn_local(async move {
            TimeoutFuture::new(auth::CREDENTIAL_CHECK_DELAY_MS).await;
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }

            let accepted =
                auth::verify_credentials(&username.get_untracked(), &password.get_untracked());
            let outcome = if accepted {
                ScanPhase::Success
            } else {
                ScanPhase::Failed
            };
            phase.set(outcome);
            message.set(outcome.status_message().to_string());
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <h1 class="login-title">"Login Dashboard"</h1>
                <p class="login-subtitle">"Choose your login method"</p>

                <div class="login-toggle">
                    <label for="biometric-toggle">"Use Biometric"</label>
                    <input
                        id="biometric-toggle"
                        class="toggle"
                        type="checkbox"
                        prop:checked=move || use_biometric.get()
                        on:change=move |ev| use_biometric.set(event_target_checked(&ev))
                    />
                </div>

                <Show
                    when=move || use_biometric.get()
                    fallback=move || view! {
                        <form class="login-form" on:submit=handle_credentials>
                            <div class="login-field">
                                <label for="username">"Username"</label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="Enter your username"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="login-field">
                                <label for="password">"Password"</label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Enter your password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn btn-login">"Login"</button>
                        </form>
                    }
                >
                    <div
                        class=move || format!("scan-ring {}", scan_ring_class(phase.get()))
                        on:click=handle_scan.clone()
                    >
                        <span class="scan-glyph">"◉"</span>
                    </div>
                    <div class="scan-extras">
                        <button class="btn btn-icon" title="Retina Scan">
                            <span>"👁"</span>
                            <span class="sr-only">"Retina Scan"</span>
                        </button>
                        <button class="btn btn-icon" title="Voice Recognition">
                            <span>"🎤"</span>
                            <span class="sr-only">"Voice Recognition"</span>
                        </button>
                    </div>
                </Show>

                <p class="login-status" aria-live="polite">{move || message.get()}</p>

                <div class="login-footer">
                    <button class="btn btn-ghost">"ⓘ Need help?"</button>
                </div>
            </div>
        </div>
    }
}

/// Ring styling for each phase of the scan animation.
fn scan_ring_class(phase: ScanPhase) -> &'static str {
    match phase {
        ScanPhase::Idle => "scan-idle",
        ScanPhase::Scanning => "scan-scanning",
        ScanPhase::Success => "scan-success",
        ScanPhase::Failed => "scan-failed",
    }
}
