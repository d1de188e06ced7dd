// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketchwerk: photo to pencil sketch converter
//
// Desktop entry point: logging, then the Dioxus app.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::home::Home;
use pages::settings::Settings;

use services::app_services::AppServices;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Sketchwerk starting");

    dioxus::launch(app);
}

/// Pages, rendered inside [`AppShell`].
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings {},
}

/// Root component: wires services and state into context, then routes.
fn app() -> Element {
    let svc = use_hook(AppServices::init);

    // Pages read both through `use_context`.
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Header navigation above the active page.
#[component]
fn AppShell() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #f5f5f7; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "display: flex; align-items: center; gap: 24px; padding: 12px 24px; background: white; border-bottom: 1px solid #e0e0e0;",
                strong { style: "font-size: 18px; margin-right: auto;", "Sketchwerk" }
                HeaderLink { to: Route::Home {}, label: "Convert" }
                HeaderLink { to: Route::Settings {}, label: "Settings" }
            }

            main {
                style: "max-width: 720px; margin: 0 auto; padding: 24px 16px;",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn HeaderLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "text-decoration: none; color: #007aff; font-size: 15px;",
            "{label}"
        }
    }
}
