// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A query adapter that replays captured driver answers.
//!
//! Useful for headless runs and tests: capture a live driver once with
//! [`RecordedQuery::capture`], then replay it anywhere without a GL context.

use anyhow::{Context, Result};
use glcaps_core::{NativeLimit, NativeQuery};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// Answers native queries from a fixed table.
///
/// Limits missing from the table behave like an unrecognized native query:
/// the answer is zero and the limit is pushed onto an error channel that the
/// caller drains with [`RecordedQuery::take_errors`].
#[derive(Debug, Default)]
pub struct RecordedQuery {
    answers: HashMap<NativeLimit, i32>,
    errors: RefCell<Vec<NativeLimit>>,
}

impl RecordedQuery {
    /// Creates an adapter with no recorded answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for `limit`, returning the adapter for chaining.
    pub fn with(mut self, limit: NativeLimit, value: i32) -> Self {
        self.insert(limit, value);
        self
    }

    /// Records the answer for `limit`, replacing any earlier one.
    pub fn insert(&mut self, limit: NativeLimit, value: i32) {
        self.answers.insert(limit, value);
    }

    /// Asks `source` for every known limit and records its answers.
    pub fn capture<Q: NativeQuery + ?Sized>(source: &Q) -> Self {
        let answers = NativeLimit::ALL
            .into_iter()
            .map(|limit| (limit, source.get_integer(limit)))
            .collect();
        Self {
            answers,
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Parses a JSON object mapping limit names to integers, e.g.
    /// `{ "MAX_TEXTURE_SIZE": 4096 }`. Names may carry a `GL_` prefix.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, i32> =
            serde_json::from_str(json).context("Failed to parse recorded limits document")?;

        let mut query = Self::new();
        for (name, value) in raw {
            let limit: NativeLimit = name
                .parse()
                .with_context(|| format!("Invalid entry '{name}' in recorded limits"))?;
            query.insert(limit, value);
        }
        log::debug!("Loaded {} recorded native limits.", query.answers.len());
        Ok(query)
    }

    /// Serializes the recorded answers as a JSON object keyed by limit name.
    pub fn to_json(&self) -> Result<String> {
        let named: BTreeMap<&'static str, i32> = self
            .answers
            .iter()
            .map(|(limit, value)| (limit.name(), *value))
            .collect();
        serde_json::to_string_pretty(&named).context("Failed to serialize recorded limits")
    }

    /// Returns every limit that was queried without a recorded answer, and
    /// clears the channel.
    pub fn take_errors(&self) -> Vec<NativeLimit> {
        self.errors.take()
    }
}

impl NativeQuery for RecordedQuery {
    fn get_integer(&self, limit: NativeLimit) -> i32 {
        match self.answers.get(&limit) {
            Some(value) => *value,
            None => {
                log::warn!("No recorded answer for {limit}; reporting 0.");
                self.errors.borrow_mut().push(limit);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_answers_are_returned() {
        let query = RecordedQuery::new().with(NativeLimit::MaxTextureSize, 4096);
        assert_eq!(query.get_integer(NativeLimit::MaxTextureSize), 4096);
        assert!(query.take_errors().is_empty());
    }

    #[test]
    fn missing_answer_is_zero_and_recorded() {
        let query = RecordedQuery::new();
        assert_eq!(query.get_integer(NativeLimit::MaxDrawBuffers), 0);
        assert_eq!(query.get_integer(NativeLimit::MaxColorAttachments), 0);
        assert_eq!(
            query.take_errors(),
            vec![NativeLimit::MaxDrawBuffers, NativeLimit::MaxColorAttachments]
        );
        assert!(query.take_errors().is_empty());
    }

    #[test]
    fn capture_asks_for_every_limit() {
        let source = |limit: NativeLimit| -> i32 { 10 * (limit as i32 + 1) };
        let query = RecordedQuery::capture(&source);
        for limit in NativeLimit::ALL {
            assert_eq!(query.get_integer(limit), source(limit));
        }
    }

    #[test]
    fn json_accepts_prefixed_names() -> Result<()> {
        let query = RecordedQuery::from_json(r#"{ "GL_MAX_DRAW_BUFFERS": 8, "MAX_TEXTURE_SIZE": 2048 }"#)?;
        assert_eq!(query.get_integer(NativeLimit::MaxDrawBuffers), 8);
        assert_eq!(query.get_integer(NativeLimit::MaxTextureSize), 2048);
        Ok(())
    }

    #[test]
    fn json_rejects_unknown_limits() {
        let err = RecordedQuery::from_json(r#"{ "MAX_SAMPLES": 4 }"#).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown native limit 'MAX_SAMPLES'"));
    }

    #[test]
    fn json_round_trip() -> Result<()> {
        let query = RecordedQuery::new()
            .with(NativeLimit::Max3DTextureSize, 256)
            .with(NativeLimit::MaxTextureImageUnits, 16);
        let replayed = RecordedQuery::from_json(&query.to_json()?)?;
        assert_eq!(replayed.get_integer(NativeLimit::Max3DTextureSize), 256);
        assert_eq!(replayed.get_integer(NativeLimit::MaxTextureImageUnits), 16);
        Ok(())
    }
}
