// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bounded memo cache for finished sketches.
//
// The transform is a pure function of (input bytes, settings), so a cached
// response is indistinguishable from a fresh one. Eviction is least recently
// used; a capacity of zero disables caching entirely.

use std::collections::VecDeque;

use tracing::debug;

use crate::fingerprint::CacheKey;
use crate::handler::SketchResponse;

#[derive(Debug)]
pub struct SketchCache {
    capacity: usize,
    /// Oldest first; hits are moved to the back.
    entries: VecDeque<(CacheKey, SketchResponse)>,
}

impl SketchCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &CacheKey) -> Option<&SketchResponse> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        let entry = self.entries.remove(pos)?;
        self.entries.push_back(entry);
        self.entries.back().map(|(_, response)| response)
    }

    /// Store `response` under `key`, evicting the least recently used entry
    /// when full.
    pub fn insert(&mut self, key: CacheKey, response: SketchResponse) {
        if self.capacity == 0 {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        }
        while self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.pop_front() {
                debug!(input = %evicted.input, "Evicted cached sketch");
            }
        }
        self.entries.push_back((key, response));
    }

    /// Change the capacity, dropping the oldest entries if it shrank.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }
}
