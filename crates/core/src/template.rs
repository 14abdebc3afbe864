// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Narrative template expansion.
//!
//! Slots are written in braces:
//!
//! - `{a|b|c}` picks one alternative
//! - `{lo-hi}` draws an integer in `lo..=hi`
//! - `{@pool}` expands a random fragment of a named pool
//! - `{$name}` inserts a caller binding
//!
//! Anything outside braces is copied verbatim.

use std::collections::BTreeMap;

use crate::error::GenerationError;
use crate::random::RandomStream;

/// Fragments may reference other fragments up to this depth.
const MAX_DEPTH: usize = 4;

/// Expands templates against a set of fragment pools.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    fragments: &'a BTreeMap<String, Vec<String>>,
    bindings: &'a [(&'a str, &'a str)],
}

impl<'a> Expander<'a> {
    #[must_use]
    pub const fn new(fragments: &'a BTreeMap<String, Vec<String>>) -> Self {
        Self {
            fragments,
            bindings: &[],
        }
    }

    /// Returns an expander that resolves `{$name}` slots from `bindings`.
    #[must_use]
    pub const fn with_bindings(self, bindings: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            fragments: self.fragments,
            bindings,
        }
    }

    /// Expands one template.
    ///
    /// # Errors
    ///
    /// Returns an error if a brace is unclosed, a pool or binding is
    /// unknown, or fragments nest too deeply.
    pub fn expand(
        &self,
        template: &str,
        rng: &mut RandomStream,
    ) -> Result<String, GenerationError> {
        self.expand_at(template, rng, 0)
    }

    /// Picks one template from `templates` and expands it.
    ///
    /// # Errors
    ///
    /// Returns an error if `templates` is empty or expansion fails.
    pub fn expand_any(
        &self,
        pool: &str,
        templates: &[String],
        rng: &mut RandomStream,
    ) -> Result<String, GenerationError> {
        let template: &String = rng.pick(pool, templates)?;
        self.expand(template, rng)
    }

    fn expand_at(
        &self,
        template: &str,
        rng: &mut RandomStream,
        depth: usize,
    ) -> Result<String, GenerationError> {
        if depth > MAX_DEPTH {
            return Err(malformed(template, "fragments nest too deeply"));
        }

        let mut out: String = String::with_capacity(template.len() + 16);
        let mut rest: &str = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after: &str = &rest[open + 1..];
            let close: usize = after
                .find('}')
                .ok_or_else(|| malformed(template, "unclosed slot"))?;
            let slot: &str = &after[..close];
            out.push_str(&self.fill(template, slot, rng, depth)?);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    fn fill(
        &self,
        template: &str,
        slot: &str,
        rng: &mut RandomStream,
        depth: usize,
    ) -> Result<String, GenerationError> {
        if let Some(pool) = slot.strip_prefix('@') {
            let fragments: &Vec<String> = self
                .fragments
                .get(pool)
                .ok_or_else(|| malformed(template, &format!("unknown fragment pool '{pool}'")))?;
            let fragment: &String = rng.pick(pool, fragments)?;
            return self.expand_at(fragment, rng, depth + 1);
        }

        if let Some(name) = slot.strip_prefix('$') {
            return self
                .bindings
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .ok_or_else(|| malformed(template, &format!("unbound name '{name}'")));
        }

        if let Some((low, high)) = numeric_range(slot) {
            return Ok(rng.int(low, high).to_string());
        }

        let alternatives: Vec<&str> = slot.split('|').collect();
        Ok((*rng.pick(template, &alternatives)?).to_string())
    }
}

fn numeric_range(slot: &str) -> Option<(i64, i64)> {
    let (low, high) = slot.split_once('-')?;
    let low: i64 = low.trim().parse().ok()?;
    let high: i64 = high.trim().parse().ok()?;
    (low <= high).then_some((low, high))
}

fn malformed(template: &str, reason: &str) -> GenerationError {
    GenerationError::Template {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
