/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Open-set state for the FAQ accordion and its category filter.

use std::collections::BTreeSet;

use crate::content::FaqCategory;

/// Which FAQ items are currently expanded. Membership is the only state;
/// items expand independently of each other and of the active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSet {
    open: BTreeSet<u32>,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accordion mounts with one item expanded.
    pub fn with_open(id: u32) -> Self {
        let mut set = Self::new();
        set.open.insert(id);
        set
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open.contains(&id)
    }

    /// Remove `id` if present, insert it otherwise.
    pub fn toggle(&mut self, id: u32) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Category filter over the FAQ list. Filtering selects what is shown and
/// never touches the open-set, so a hidden item stays expanded if re-shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqFilter {
    #[default]
    All,
    Category(FaqCategory),
}

impl FaqFilter {
    pub fn matches(self, category: FaqCategory) -> bool {
        match self {
            FaqFilter::All => true,
            FaqFilter::Category(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaqFilter::All => "All Questions",
            FaqFilter::Category(category) => category.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn test_default_open_item_toggles_closed_and_back() {
        let mut set = OpenSet::with_open(1);
        assert!(set.is_open(1));
        set.toggle(1);
        assert!(!set.is_open(1));
        set.toggle(1);
        assert!(set.is_open(1));
    }

    #[test]
    fn test_items_toggle_independently() {
        let mut set = OpenSet::with_open(1);
        set.toggle(2);
        assert!(set.is_open(1));
        assert!(set.is_open(2));
        set.toggle(2);
        assert!(set.is_open(1), "closing item 2 must not close item 1");
        assert!(!set.is_open(2));
    }

    #[test]
    fn test_multiple_items_open_concurrently() {
        let mut set = OpenSet::new();
        for id in [3, 5, 8] {
            set.toggle(id);
        }
        assert_eq!(set.open_count(), 3);
    }

    #[test]
    fn test_filter_selects_subset_without_touching_open_set() {
        let mut set = OpenSet::with_open(1);
        let filter = FaqFilter::Category(FaqCategory::Pricing);
        let visible: Vec<_> = FAQS
            .iter()
            .filter(|faq| filter.matches(faq.category))
            .collect();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|faq| faq.category == FaqCategory::Pricing));
        // item 1 is a General question, hidden by this filter, still open
        assert!(visible.iter().all(|faq| faq.id != 1));
        assert!(set.is_open(1));
        // toggling a visible item leaves the hidden one open
        set.toggle(visible[0].id);
        assert!(set.is_open(1));
        assert!(set.is_open(visible[0].id));
    }

    #[test]
    fn test_all_filter_matches_every_category() {
        assert!(FAQS.iter().all(|faq| FaqFilter::All.matches(faq.category)));
    }
}
