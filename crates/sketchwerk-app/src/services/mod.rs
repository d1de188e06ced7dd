// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer: bridges the Dioxus UI to the sketchwerk backend crates.
//
// Each service wraps backend crate APIs in a way that is convenient for the
// UI to call (returns data the UI can display directly).

pub mod app_services;
pub mod data_dir;
pub mod upload;
