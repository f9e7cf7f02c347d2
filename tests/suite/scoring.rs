//! Scoring through the core crate's public API.

use restreveal_core::{AnswerSet, NeedRank, compute_results, rank_categories};
use restreveal_types::{Catalog, CategoryId, Edition, Rating};

fn ratings(values: &[u8]) -> Vec<Rating> {
    values.iter().map(|v| Rating::new(*v).expect("on scale")).collect()
}

#[test]
fn three_statement_example() {
    let catalog = Catalog::new(Edition::Quick);
    let answers: AnswerSet = CategoryId::ALL
        .iter()
        .map(|id| {
            let value = if *id == CategoryId::Mental { 5 } else { 1 };
            (*id, ratings(&[value; 3]))
        })
        .collect();

    let result = compute_results(&answers, catalog.categories());
    let summary: Vec<_> = result.ranked().map(|(rank, s)| (rank, s.id(), s.total)).collect();
    assert_eq!(
        summary,
        [
            (NeedRank::Primary, CategoryId::Mental, 15),
            (NeedRank::Secondary, CategoryId::Physical, 3),
        ]
    );
}

#[test]
fn bounds_follow_bank_length() {
    for edition in [Edition::Standard, Edition::Quick] {
        let catalog = Catalog::new(edition);
        let n = edition.questions_per_category() as u32;
        for category in catalog.categories() {
            assert_eq!(category.max_score(), 5 * n);
            assert_eq!(category.min_score(), n);
        }
    }
}

#[test]
fn ranking_is_total_and_stable() {
    let catalog = Catalog::new(Edition::Standard);
    let answers: AnswerSet = [
        (CategoryId::Intellectual, ratings(&[4, 4, 4, 4, 4])),
        (CategoryId::Spiritual, ratings(&[4, 4, 4, 4, 4])),
    ]
    .into_iter()
    .collect();

    let ranked: Vec<_> = rank_categories(&answers, catalog.categories())
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(
        ranked,
        [
            CategoryId::Spiritual,
            CategoryId::Intellectual,
            CategoryId::Mental,
            CategoryId::Physical,
            CategoryId::Emotional,
            CategoryId::Social,
            CategoryId::Sensory,
        ]
    );
}
