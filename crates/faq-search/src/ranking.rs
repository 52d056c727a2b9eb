//! Popularity, sort options, and histogram ordering.

use std::cmp::Ordering;

use faq_core::entities::{CategoryCount, Faq};
use faq_core::enums::{SortDirection, SortField, SortOption};
use faq_core::responses::CategoryEntry;

/// Top `limit` entries by `helpful_count` (absent counts as 0), highest first.
/// Ties keep collection order.
#[must_use]
pub fn popular(all: &[Faq], limit: usize) -> Vec<Faq> {
    let mut ranked = all.to_vec();
    ranked.sort_by(|a, b| b.helpful_count.unwrap_or(0).cmp(&a.helpful_count.unwrap_or(0)));
    ranked.truncate(limit);
    ranked
}

/// Stable in-place sort. Entries without a timestamp sort as the oldest.
pub fn sort(faqs: &mut [Faq], option: SortOption) {
    faqs.sort_by(|a, b| {
        let ordering = compare(a, b, option.field);
        match option.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Faq, b: &Faq, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Likes => a.likes.cmp(&b.likes),
        SortField::Dislikes => a.dislikes.cmp(&b.dislikes),
        SortField::HelpfulCount => a
            .helpful_count
            .unwrap_or(0)
            .cmp(&b.helpful_count.unwrap_or(0)),
        SortField::HelpfulRatio => a.helpful_ratio().total_cmp(&b.helpful_ratio()),
        SortField::Question => a.question.to_lowercase().cmp(&b.question.to_lowercase()),
    }
}

/// Histogram as rows, count descending; equal counts keep key order.
#[must_use]
pub fn sorted_categories(categories: &CategoryCount) -> Vec<CategoryEntry> {
    let mut entries: Vec<CategoryEntry> = categories
        .iter()
        .map(|(tag, count)| CategoryEntry {
            tag: tag.clone(),
            count: *count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::compute_categories;
    use crate::fixtures::faq;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn ids(faqs: &[Faq]) -> Vec<&str> {
        faqs.iter().map(|f| f.id.as_str()).collect()
    }

    fn with_helpful(id: &str, helpful: Option<u64>) -> Faq {
        Faq {
            helpful_count: helpful,
            ..faq(id, id, &[], 0, 0)
        }
    }

    #[test]
    fn popular_takes_top_by_helpful_count() {
        let all = vec![
            with_helpful("a", Some(3)),
            with_helpful("b", None),
            with_helpful("c", Some(10)),
            with_helpful("d", Some(3)),
        ];
        assert_eq!(ids(&popular(&all, 3)), vec!["c", "a", "d"]);
    }

    #[test]
    fn popular_on_empty_is_empty() {
        assert!(popular(&[], 5).is_empty());
    }

    #[test]
    fn sort_by_likes_desc() {
        let mut all = vec![
            faq("a", "a", &[], 1, 0),
            faq("b", "b", &[], 5, 0),
            faq("c", "c", &[], 3, 0),
        ];
        sort(&mut all, SortOption::new(SortField::Likes, SortDirection::Desc));
        assert_eq!(ids(&all), vec!["b", "c", "a"]);
    }

    #[test]
    fn sort_by_ratio_handles_no_votes() {
        let mut all = vec![
            faq("none", "n", &[], 0, 0),
            faq("half", "h", &[], 1, 1),
            faq("all", "a", &[], 4, 0),
        ];
        sort(&mut all, SortOption::new(SortField::HelpfulRatio, SortDirection::Desc));
        assert_eq!(ids(&all), vec!["all", "half", "none"]);
    }

    #[test]
    fn missing_timestamps_sort_oldest() {
        let dated = |id: &str, day: u32| Faq {
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap()),
            ..faq(id, id, &[], 0, 0)
        };
        let mut all = vec![dated("mid", 2), faq("undated", "u", &[], 0, 0), dated("new", 9)];

        sort(&mut all, SortOption::default());
        assert_eq!(ids(&all), vec!["new", "mid", "undated"]);

        sort(&mut all, SortOption::new(SortField::CreatedAt, SortDirection::Asc));
        assert_eq!(ids(&all), vec!["undated", "mid", "new"]);
    }

    #[test]
    fn sort_by_question_ignores_case() {
        let mut all = vec![
            faq("1", "billing", &[], 0, 0),
            faq("2", "Account", &[], 0, 0),
        ];
        sort(&mut all, SortOption::new(SortField::Question, SortDirection::Asc));
        assert_eq!(ids(&all), vec!["2", "1"]);
    }

    #[test]
    fn histogram_sorted_by_count_then_key() {
        let all = vec![
            faq("1", "q", &["shipping", "billing"], 0, 0),
            faq("2", "q", &["billing", "account"], 0, 0),
            faq("3", "q", &["account", "billing"], 0, 0),
        ];
        let rows = sorted_categories(&compute_categories(&all));
        let tags: Vec<&str> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["billing", "account", "shipping"]);
        assert_eq!(rows[0].count, 3);
    }
}
