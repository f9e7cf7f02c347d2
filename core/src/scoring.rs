//! Per-category totals and the top-two ranking.
//!
//! Ranking is a stable sort on descending total over catalog order, so a tie
//! always goes to the category that appears first in the catalog.

use restreveal_types::{Category, CategoryId};

use crate::answers::AnswerSet;

/// How many categories a result reports.
pub const TOP_N: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,
    pub total: u32,
}

impl CategoryScore {
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.category.id()
    }

    /// Best possible total for this category's bank.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.category.max_score()
    }
}

/// Label for a slot in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedRank {
    Primary,
    Secondary,
}

impl NeedRank {
    #[must_use]
    pub const fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(NeedRank::Primary),
            1 => Some(NeedRank::Secondary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NeedRank::Primary => "Primary Need",
            NeedRank::Secondary => "Secondary Need",
        }
    }

    #[must_use]
    pub const fn medal(self) -> &'static str {
        match self {
            NeedRank::Primary => "🥇",
            NeedRank::Secondary => "🥈",
        }
    }
}

/// The highest-scoring categories, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    ranked: Vec<CategoryScore>,
}

impl ScoreResult {
    #[must_use]
    pub fn entries(&self) -> &[CategoryScore] {
        &self.ranked
    }

    #[must_use]
    pub fn primary(&self) -> Option<&CategoryScore> {
        self.ranked.first()
    }

    #[must_use]
    pub fn secondary(&self) -> Option<&CategoryScore> {
        self.ranked.get(1)
    }

    /// Entries paired with their rank label.
    pub fn ranked(&self) -> impl Iterator<Item = (NeedRank, &CategoryScore)> {
        self.ranked
            .iter()
            .enumerate()
            .filter_map(|(position, score)| NeedRank::from_position(position).map(|r| (r, score)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Every category with its total, highest first, ties in catalog order.
///
/// Total over any input: a category with no entry scores 0.
#[must_use]
pub fn rank_categories(answers: &AnswerSet, categories: &[Category]) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = categories
        .iter()
        .map(|category| CategoryScore {
            category: *category,
            total: answers.total(category.id()),
        })
        .collect();
    // `sort_by` is stable; equal totals keep catalog order.
    scores.sort_by(|a, b| b.total.cmp(&a.total));
    scores
}

#[must_use]
pub fn compute_results(answers: &AnswerSet, categories: &[Category]) -> ScoreResult {
    let mut ranked = rank_categories(answers, categories);
    ranked.truncate(TOP_N);
    ScoreResult { ranked }
}
