// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional mapping between attribute strings and [`TermId`]s.
//!
//! Identifiers are handed out densely in insertion order, so the reverse
//! table is a plain `Vec<String>` indexed by id. The interner is append-only
//! while the corpus loads and read-only afterwards; nothing here is
//! concurrency-safe and nothing needs to be.

use crate::types::TermId;
use std::collections::HashMap;

/// Append-only string pool with O(1) lookup in both directions.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    strings: Vec<String>,
    ids: HashMap<String, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its identifier. Idempotent.
    ///
    /// Never returns [`TermId::NONE`]; the id space is capped one below it.
    pub fn intern(&mut self, s: &str) -> TermId {
        if let Some(&id) = self.ids.get(s) {
            return TermId(id);
        }
        let id = self.strings.len() as u32;
        assert!(id < u32::MAX, "interner exhausted the 32-bit id space");
        self.strings.push(s.to_string());
        self.ids.insert(s.to_string(), id);
        TermId(id)
    }

    /// Look up an already-interned string.
    #[inline]
    pub fn lookup(&self, s: &str) -> Option<TermId> {
        self.ids.get(s).copied().map(TermId)
    }

    /// Resolve an identifier back to its string.
    ///
    /// `id` must have been produced by this interner; [`TermId::NONE`] has
    /// no string form.
    #[inline]
    pub fn resolve(&self, id: TermId) -> &str {
        &self.strings[id.as_usize()]
    }

    /// Number of distinct interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
