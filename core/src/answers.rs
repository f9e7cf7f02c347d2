//! Per-category rating storage.

use std::collections::BTreeMap;

use restreveal_types::{Category, CategoryId, Rating};

/// Ratings keyed by category, one slot per statement in that category's bank.
///
/// An absent entry and an entry of empty slots are both "unanswered". A slot
/// only ever holds a validated [`Rating`], so range checks happen once, at the
/// boundary where raw input becomes a `Rating`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<CategoryId, Vec<Option<Rating>>>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one slot, growing the entry to `bank_len` slots if needed.
    /// Other slots are left as they were.
    pub(crate) fn upsert(
        &mut self,
        category: CategoryId,
        question: usize,
        bank_len: usize,
        rating: Rating,
    ) {
        let slots = self.entries.entry(category).or_default();
        if slots.len() < bank_len {
            slots.resize(bank_len, None);
        }
        slots[question] = Some(rating);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, category: CategoryId, question: usize) -> Option<Rating> {
        self.entries
            .get(&category)
            .and_then(|slots| slots.get(question).copied().flatten())
    }

    /// Slots for `category`, unanswered ones as `None`.
    #[must_use]
    pub fn entry(&self, category: CategoryId) -> Option<&[Option<Rating>]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn answered_count(&self, category: CategoryId) -> usize {
        self.entries
            .get(&category)
            .map_or(0, |slots| slots.iter().flatten().count())
    }

    /// True when every statement in the bank has a rating and nothing else does.
    #[must_use]
    pub fn is_complete(&self, category: &Category) -> bool {
        let Some(slots) = self.entries.get(&category.id()) else {
            return false;
        };
        slots.len() == category.question_count() && slots.iter().all(Option::is_some)
    }

    /// Sum of the recorded ratings; missing entries count as zero.
    #[must_use]
    pub fn total(&self, category: CategoryId) -> u32 {
        self.entries.get(&category).map_or(0, |slots| {
            slots.iter().flatten().map(|rating| u32::from(*rating)).sum()
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|slots| slots.iter().all(Option::is_none))
    }
}

impl FromIterator<(CategoryId, Vec<Rating>)> for AnswerSet {
    /// Build fully answered entries, e.g. to score a finished questionnaire
    /// that came from somewhere other than a [`Quiz`](crate::Quiz).
    fn from_iter<I: IntoIterator<Item = (CategoryId, Vec<Rating>)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(category, ratings)| (category, ratings.into_iter().map(Some).collect()))
            .collect();
        Self { entries }
    }
}
