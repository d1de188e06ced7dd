// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: upload a photo, convert it to a sketch, save the sketch.
//
// On desktop, the upload button opens a file dialog filtered to JPEG/PNG.

use dioxus::prelude::*;

use sketchwerk_core::SourceFormat;

use crate::services::app_services::AppServices;
use crate::services::upload::SketchView;
use crate::state::{AppState, Status};

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let uploaded = state
        .read()
        .upload
        .as_ref()
        .map(|u| (u.name.clone(), u.data_url.clone()));
    let sketched = state.read().sketch.as_ref().map(|view| {
        let r = &view.response;
        (view.data_url.clone(), r.width, r.height, r.from_cache)
    });
    let has_upload = uploaded.is_some();

    rsx! {
        div {
            h1 { "Image to Sketch Converter" }
            p { style: "color: #666;", "Turn a photo into a pencil sketch." }

            // Upload button
            button {
                style: "width: 100%; padding: 16px; border-radius: 12px; border: 2px dashed #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        #[cfg(not(any(target_os = "ios", target_os = "android")))]
                        {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", &SourceFormat::UPLOAD_EXTENSIONS)
                                .pick_file()
                            {
                                match svc.load_upload(&path) {
                                    Ok(upload) => state.write().set_upload(upload),
                                    Err(e) => {
                                        tracing::warn!(path = %path.display(), error = %e, "upload rejected");
                                        state.write().status = Some(Status::problem(&e));
                                    }
                                }
                            }
                        }
                        #[cfg(any(target_os = "ios", target_os = "android"))]
                        {
                            let _ = &svc;
                            state.write().status = Some(Status::Info("File picker not yet wired on mobile".into()));
                        }
                    }
                },
                "\u{1F4C2} Upload an image..."
            }

            if let Some((name, url)) = uploaded {
                figure { style: "margin: 0 0 16px 0;",
                    img { style: "width: 100%; border-radius: 8px;", src: "{url}", alt: "Uploaded Image" }
                    figcaption { style: "color: #888; font-size: 13px; text-align: center;", "Uploaded Image: {name}" }
                }
            } else {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "No image uploaded yet."
                }
            }

            // Convert
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                disabled: !has_upload,
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let result = {
                            let current = state.read();
                            current.upload.as_ref().map(|upload| svc.convert(upload))
                        };
                        match result {
                            Some(Ok(response)) => {
                                let msg = if response.from_cache {
                                    "Sketch ready (from cache).".to_string()
                                } else {
                                    format!("Sketch ready ({}x{}).", response.width, response.height)
                                };
                                let mut current = state.write();
                                current.sketch = Some(SketchView::new(response));
                                current.status = Some(Status::Success(msg));
                            }
                            Some(Err(e)) => {
                                tracing::warn!(error = %e, "conversion failed");
                                let mut current = state.write();
                                current.sketch = None;
                                current.status = Some(Status::problem(&e));
                            }
                            None => {}
                        }
                    }
                },
                "Convert to Sketch"
            }

            if let Some((url, width, height, from_cache)) = sketched {
                figure { style: "margin: 16px 0;",
                    img { style: "width: 100%; border-radius: 8px; border: 1px solid #e0e0e0;", src: "{url}", alt: "Sketch" }
                    figcaption { style: "color: #888; font-size: 13px; text-align: center;",
                        "Sketch ({width}x{height})"
                        if from_cache { " \u{00B7} cached" }
                    }
                }

                // Download
                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #34c759; color: white; font-size: 16px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let result = {
                                let current = state.read();
                                current.sketch.as_ref().map(|view| svc.download(&view.response))
                            };
                            match result {
                                Some(Ok(path)) => {
                                    state.write().status = Some(Status::Success(format!(
                                        "Sketch downloaded successfully as '{}'",
                                        path.display()
                                    )));
                                }
                                Some(Err(e)) => {
                                    tracing::warn!(error = %e, "sketch download failed");
                                    state.write().status = Some(Status::problem(&e));
                                }
                                None => {}
                            }
                        }
                    },
                    "Download Sketch"
                }
            }

            StatusLine {}
        }
    }
}

/// Renders the current `Status`, if any.
#[component]
fn StatusLine() -> Element {
    let state = use_context::<Signal<AppState>>();
    let status = state.read().status.clone();

    match status {
        None => rsx! {},
        Some(Status::Info(msg)) => rsx! {
            p { style: "margin-top: 12px; color: #666; font-size: 14px; text-align: center;", "{msg}" }
        },
        Some(Status::Success(msg)) => rsx! {
            p { style: "margin-top: 12px; color: #34c759; font-size: 14px; text-align: center;", "{msg}" }
        },
        Some(Status::Problem(human)) => {
            let colour = human.colour();
            rsx! {
                div { style: "margin-top: 12px; padding: 12px; border-radius: 8px; border-left: 4px solid {colour}; background: #fafafa;",
                    strong { "{human.message}" }
                    p { style: "margin: 4px 0 0 0; color: #666; font-size: 14px;", "{human.suggestion}" }
                }
            }
        }
    }
}
