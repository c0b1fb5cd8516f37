/*
    engine.rs - Pure view derivation

    Filtering and sorting over the raw collection. No side effects and no
    memory of prior results: identical inputs give identical output, and
    the source slice is never mutated.
*/

use crate::core_roster::model::UserRecord;
use crate::core_roster::query::criteria::{FilterCriteria, SortCriteria, SortKey, SortOrder};
use std::cmp::Ordering;

/// Apply all active filters, producing a fresh list
pub fn filter_records(records: &[UserRecord], criteria: &FilterCriteria) -> Vec<UserRecord> {
    records.iter().filter(|r| criteria.matches(r)).cloned().collect()
}

/// Sort into a fresh list. An unrecognized column key leaves the input
/// order unchanged. The sort is stable, so ties keep their relative
/// order from the input.
pub fn sort_records(records: &[UserRecord], sort: &SortCriteria) -> Vec<UserRecord> {
    let mut view = records.to_vec();
    let Some(key) = SortKey::parse(&sort.key) else {
        return view;
    };
    view.sort_by(|a, b| compare_records(a, b, key, sort.order));
    view
}

/// Filter then sort: the displayed view for the given criteria
pub fn derive_view(
    records: &[UserRecord],
    filter: &FilterCriteria,
    sort: &SortCriteria,
) -> Vec<UserRecord> {
    sort_records(&filter_records(records, filter), sort)
}

fn compare_records(a: &UserRecord, b: &UserRecord, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Name => directed(compare_text(&a.name, &b.name), order),
        SortKey::Email => directed(compare_text(&a.email, &b.email), order),
        SortKey::Gender => directed(compare_text(a.gender.as_str(), b.gender.as_str()), order),
        SortKey::DateOfBirth => directed(a.date_of_birth.cmp(&b.date_of_birth), order),
        SortKey::CreatedAt => directed(a.created_at.cmp(&b.created_at), order),
        SortKey::UpdatedAt => directed(a.updated_at.cmp(&b.updated_at), order),
        // Records without a picture sink to the end under either
        // direction; the direction applies only among present values
        SortKey::ProfilePicture => match (a.picture_trimmed(), b.picture_trimmed()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => directed(compare_text(x, y), order),
        },
    }
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

/// Case-insensitive comparison with a byte-order tiebreak, standing in
/// for locale collation
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, ts};
    use crate::core_roster::model::Gender;
    use crate::core_roster::query::criteria::PictureFilter;

    #[test]
    fn test_filter_produces_fresh_list() {
        let records = vec![
            record("Bob", Gender::Male, None),
            record("Ann", Gender::Female, Some("http://x")),
        ];
        let criteria = FilterCriteria::new().with_picture(PictureFilter::With);

        let view = filter_records(&records, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Ann");
        // Source is untouched
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let records = vec![
            record("bob", Gender::Male, None),
            record("Ann", Gender::Female, None),
            record("carol", Gender::Female, None),
        ];
        let view = sort_records(&records, &SortCriteria::ascending("name"));
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "bob", "carol"]);
    }

    #[test]
    fn test_sort_direction_flips_order() {
        let records = vec![
            record("Ann", Gender::Female, None),
            record("Bob", Gender::Male, None),
        ];
        let asc = sort_records(&records, &SortCriteria::ascending("name"));
        let desc = sort_records(&records, &SortCriteria::descending("name"));
        assert_eq!(asc[0].name, "Ann");
        assert_eq!(desc[0].name, "Bob");
    }

    #[test]
    fn test_missing_pictures_sink_in_both_directions() {
        let records = vec![
            record("NoPic", Gender::Male, None),
            record("Blank", Gender::Male, Some("   ")),
            record("B", Gender::Female, Some("http://b")),
            record("A", Gender::Female, Some("http://a")),
        ];

        let asc = sort_records(&records, &SortCriteria::ascending("profilePicture"));
        let names: Vec<&str> = asc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "NoPic", "Blank"]);

        let desc = sort_records(&records, &SortCriteria::descending("profilePicture"));
        let names: Vec<&str> = desc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "NoPic", "Blank"]);
    }

    #[test]
    fn test_unrecognized_key_keeps_order() {
        let records = vec![
            record("Zed", Gender::Male, None),
            record("Ann", Gender::Female, None),
        ];
        let view = sort_records(&records, &SortCriteria::ascending("favoriteColor"));
        assert_eq!(view, records);
    }

    #[test]
    fn test_date_sort_is_numeric() {
        let mut early = record("Early", Gender::Male, None);
        early.created_at = ts(2024, 1, 1, 0, 0, 0);
        let mut late = record("Late", Gender::Male, None);
        late.created_at = ts(2024, 6, 1, 0, 0, 0);

        let view = sort_records(&[late.clone(), early.clone()], &SortCriteria::ascending("createdAt"));
        assert_eq!(view[0].name, "Early");

        let view = sort_records(&[early, late], &SortCriteria::descending("createdAt"));
        assert_eq!(view[0].name, "Late");
    }

    #[test]
    fn test_derive_view_filters_then_sorts() {
        let records = vec![
            record("Bob", Gender::Male, Some("http://b")),
            record("Ann", Gender::Female, Some("http://a")),
            record("Cid", Gender::Male, None),
        ];
        let filter = FilterCriteria::new().with_picture(PictureFilter::With);
        let view = derive_view(&records, &filter, &SortCriteria::ascending("name"));
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }
}
