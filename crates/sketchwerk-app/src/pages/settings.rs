// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page: sketch parameters and output location.

use std::path::PathBuf;

use dioxus::prelude::*;

use sketchwerk_core::MAX_CACHE_CAPACITY;
use sketchwerk_core::human_errors::humanize_error;
use sketchwerk_core::types::{BoundaryMode, ChannelPolicy};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<(String, &'static str)>::None);

    let config = state.read().config.clone();
    let output_path = config.output_path.display().to_string();
    let data_dir = svc.data_dir().display().to_string();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Sketch" }
                // Blur strength
                Row { label: "Blur sigma (pixels)",
                    input {
                        r#type: "number",
                        step: "0.5",
                        min: "0.5",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{config.sigma}",
                        onchange: move |evt| {
                            if let Ok(sigma) = evt.value().parse::<f32>() {
                                state.write().config.sigma = sigma;
                            }
                        },
                    }
                }
                Row { label: "Kernel size (x sigma)",
                    input {
                        r#type: "number",
                        step: "0.5",
                        min: "0.5",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{config.truncate}",
                        onchange: move |evt| {
                            if let Ok(truncate) = evt.value().parse::<f32>() {
                                state.write().config.truncate = truncate;
                            }
                        },
                    }
                }
                Row { label: "Edge handling",
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: config.boundary.label(),
                        onchange: move |evt| {
                            if let Some(mode) = BoundaryMode::from_label(&evt.value()) {
                                state.write().config.boundary = mode;
                            }
                        },
                        for mode in BoundaryMode::ALL {
                            option { value: mode.label(), selected: mode == config.boundary, "{mode.label()}" }
                        }
                    }
                }
                Row { label: "Grayscale uploads",
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: config.channel_policy.label(),
                        onchange: move |evt| {
                            if let Some(policy) = ChannelPolicy::from_label(&evt.value()) {
                                state.write().config.channel_policy = policy;
                            }
                        },
                        for policy in ChannelPolicy::ALL {
                            option {
                                value: policy.label(),
                                selected: policy == config.channel_policy,
                                "{channel_policy_text(policy)}"
                            }
                        }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Output" }
                Row { label: "Save sketch to",
                    input {
                        r#type: "text",
                        style: "width: 200px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{output_path}",
                        onchange: move |evt| {
                            let value = evt.value();
                            if !value.trim().is_empty() {
                                state.write().config.output_path = PathBuf::from(value.trim());
                            }
                        },
                    }
                }
                Row { label: "Remembered sketches",
                    input {
                        r#type: "number",
                        min: "0",
                        max: "{MAX_CACHE_CAPACITY}",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{config.cache_capacity}",
                        onchange: move |evt| {
                            if let Ok(capacity) = evt.value().parse::<usize>() {
                                state.write().config.cache_capacity = capacity;
                            }
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some(("Settings saved.".into(), "#34c759")));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                let human = humanize_error(&e);
                                save_msg.set(Some((format!("{} {}", human.message, human.suggestion), human.colour())));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some((ref msg, colour)) = *save_msg.read() {
                p { style: "color: {colour}; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Sketchwerk v0.1.0"
                    br {}
                    "Photo to pencil sketch (dodge blend)"
                    br {}
                    "Settings stored in {data_dir}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn Row(label: &'static str, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            {children}
        }
    }
}

fn channel_policy_text(policy: ChannelPolicy) -> &'static str {
    match policy {
        ChannelPolicy::TreatAsGray => "Use as-is",
        ChannelPolicy::Reject => "Reject",
    }
}
