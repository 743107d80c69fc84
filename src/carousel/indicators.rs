// SPDX-License-Identifier: MPL-2.0
//! Page indicator dots.

/// One dot in the indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    page: usize,
    active: bool,
}

impl Indicator {
    /// Zero-based page this dot selects.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// One-based page number, used for the accessible label.
    #[must_use]
    pub fn number(&self) -> usize {
        self.page + 1
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The indicator strip: exactly one dot per page, exactly one active.
///
/// `generation` counts rebuilds so callers (and tests) can tell a full
/// regeneration apart from a plain active-state sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    items: Vec<Indicator>,
    generation: u64,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            items: vec![Indicator {
                page: 0,
                active: true,
            }],
            generation: 0,
        }
    }
}

impl Indicators {
    /// Builds a strip of `page_count` dots with the first one active.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        let mut indicators = Self::default();
        indicators.rebuild(page_count);
        indicators
    }

    /// Discards every dot and creates `max(1, page_count)` fresh ones.
    pub fn rebuild(&mut self, page_count: usize) {
        self.items = (0..page_count.max(1))
            .map(|page| Indicator { page, active: false })
            .collect();
        self.generation += 1;
        self.sync(0);
    }

    /// Marks the dot for `current` as the only active one.
    ///
    /// Out-of-range indices activate the last dot.
    pub fn sync(&mut self, current: usize) {
        let active = current.min(self.items.len().saturating_sub(1));
        for item in &mut self.items {
            item.active = item.page == active;
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Indicator] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the strip never shrinks below one dot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Page of the active dot.
    #[must_use]
    pub fn active_page(&self) -> usize {
        self.items
            .iter()
            .find(|item| item.active)
            .map_or(0, Indicator::page)
    }
}
