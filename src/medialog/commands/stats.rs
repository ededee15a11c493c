use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;

#[derive(Debug, Clone, PartialEq)]
pub enum Statistics {
    NoData,
    NoValidRatings,
    Summary(Summary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Every entry in the catalog, including those without a numeric rating.
    pub count: usize,
    /// Mean over numeric ratings only.
    pub average: f64,
    pub highest: Entry,
    pub lowest: Entry,
}

/// Aggregates ratings over the catalog.
///
/// Entries whose rating text is not all digits are left out of the average and the
/// extremes but still counted. Ties for highest or lowest go to the earliest entry.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let statistics = compute(catalog);
    let result = match &statistics {
        Statistics::NoData => {
            CmdResult::default().with_message(CmdMessage::info("No data available."))
        }
        Statistics::NoValidRatings => {
            CmdResult::default().with_message(CmdMessage::info("No valid ratings in the data."))
        }
        Statistics::Summary(_) => CmdResult::default(),
    };
    Ok(result.with_statistics(statistics))
}

pub fn compute(catalog: &Catalog) -> Statistics {
    if catalog.is_empty() {
        return Statistics::NoData;
    }

    let rated: Vec<(f64, &Entry)> = catalog
        .iter()
        .filter_map(|e| e.rating.numeric_value().map(|r| (r, e)))
        .collect();

    let Some(&(first_rating, first_entry)) = rated.first() else {
        return Statistics::NoValidRatings;
    };

    let mut total = 0f64;
    let (mut high, mut low) = ((first_rating, first_entry), (first_rating, first_entry));
    for &(rating, entry) in &rated {
        total += rating;
        if rating > high.0 {
            high = (rating, entry);
        }
        if rating < low.0 {
            low = (rating, entry);
        }
    }

    Statistics::Summary(Summary {
        count: catalog.len(),
        average: total / rated.len() as f64,
        highest: high.1.clone(),
        lowest: low.1.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn catalog_of(fixture: StoreFixture) -> Catalog {
        Catalog::from_entries(fixture.entries().to_vec())
    }

    fn summary(catalog: &Catalog) -> Summary {
        match compute(catalog) {
            Statistics::Summary(summary) => summary,
            other => panic!("expected a summary, got {:?}", other),
        }
    }

    #[test]
    fn empty_catalog_has_no_data() {
        let result = run(&Catalog::new()).unwrap();
        assert_eq!(result.statistics, Some(Statistics::NoData));
        assert_eq!(result.messages[0].content, "No data available.");
    }

    #[test]
    fn all_non_numeric_ratings() {
        let catalog = catalog_of(
            StoreFixture::new()
                .with_unrated("A", 2000, "x")
                .with_unrated("B", 2001, ""),
        );
        let result = run(&catalog).unwrap();
        assert_eq!(result.statistics, Some(Statistics::NoValidRatings));
        assert_eq!(result.messages[0].content, "No valid ratings in the data.");
    }

    #[test]
    fn skips_non_numeric_ratings_but_counts_them() {
        let catalog = catalog_of(
            StoreFixture::new()
                .with_movie("Seven", 1995, "Crime", 7)
                .with_movie("Nine", 2009, "Animation", 9)
                .with_unrated("Mystery", 2000, "x")
                .with_movie("Three", 1999, "Comedy", 3),
        );
        let summary = summary(&catalog);
        assert_eq!(summary.count, 4);
        assert_eq!(format!("{:.2}", summary.average), "6.33");
        assert_eq!(summary.highest.name, "Nine");
        assert_eq!(summary.lowest.name, "Three");
        assert!(run(&catalog).unwrap().messages.is_empty());
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let catalog = catalog_of(
            StoreFixture::new()
                .with_movie("First High", 2000, "A", 9)
                .with_movie("First Low", 2001, "B", 2)
                .with_movie("Second High", 2002, "C", 9)
                .with_movie("Second Low", 2003, "D", 2),
        );
        let summary = summary(&catalog);
        assert_eq!(summary.highest.name, "First High");
        assert_eq!(summary.lowest.name, "First Low");
    }

    #[test]
    fn digit_only_raw_ratings_are_included() {
        let catalog = catalog_of(
            StoreFixture::new()
                .with_unrated("Padded", 2000, "08")
                .with_movie("Plain", 2001, "B", 4),
        );
        let summary = summary(&catalog);
        assert_eq!(summary.average, 6.0);
        assert_eq!(summary.highest.name, "Padded");
    }

    #[test]
    fn digit_only_ratings_beyond_u64_still_count() {
        let catalog = catalog_of(
            StoreFixture::new()
                .with_movie("Plain", 2001, "B", 4)
                .with_unrated("Huge", 2000, "100000000000000000000"),
        );
        let summary = summary(&catalog);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.highest.name, "Huge");
        assert_eq!(summary.lowest.name, "Plain");
        assert_eq!(summary.average, (1e20 + 4.0) / 2.0);
    }

    #[test]
    fn single_entry_is_both_extremes() {
        let catalog = catalog_of(StoreFixture::new().with_show("Dark", 2017, "Thriller", 10));
        let summary = summary(&catalog);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average, 10.0);
        assert_eq!(summary.highest, summary.lowest);
    }
}
