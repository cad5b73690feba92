//! Substring matching over titles and descriptions.

use shared_types::Publication;

/// Maximum number of suggestions shown in the dropdown.
pub const DEFAULT_SUGGESTION_CAP: usize = 5;

/// Anything the search box can look through.
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

impl Searchable for Publication {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

fn matches_lowered<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item
            .description()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// Case-insensitive substring match on the title or the description.
///
/// The term is not trimmed, so `"sensus "` only matches text containing the
/// trailing space.
pub fn matches<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    matches_lowered(item, &term.to_lowercase())
}

/// Titles of the first `cap` matching items, in collection order.
///
/// A blank term yields no suggestions.
pub fn suggest<T: Searchable>(items: &[T], term: &str, cap: usize) -> Vec<String> {
    if term.trim().is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowered(*item, &needle))
        .map(|item| item.title().to_string())
        .take(cap)
        .collect()
}

/// Items shown in the list for `term`. A blank term shows everything.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.trim().is_empty() {
        return items.iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowered(*item, &needle))
        .collect()
}

/// Newest release first; equal dates fall back to the higher id first.
pub fn sort_newest_first(publications: &mut [Publication]) {
    publications.sort_by(|a, b| {
        b.release_date
            .cmp(&a.release_date)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::PublicationId;

    fn publication(id: u64, title: &str, description: Option<&str>, day: u32) -> Publication {
        Publication {
            id: PublicationId(id),
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            description: description.map(str::to_string),
            cover_url: String::new(),
        }
    }

    fn collection() -> Vec<Publication> {
        vec![
            publication(1, "Statistik Daerah Gorontalo", None, 10),
            publication(2, "Hasil Sensus Penduduk 2020", None, 9),
            publication(3, "Indikator Kesejahteraan Rakyat", None, 8),
            publication(4, "Profil Kemiskinan", Some("Ringkasan hasil SENSUS ekonomi"), 7),
            publication(5, "Produk Domestik Regional Bruto", None, 6),
            publication(6, "Gorontalo Dalam Angka", None, 5),
            publication(7, "Statistik Harga Produsen", Some("Survei harga bulanan"), 4),
            publication(8, "Sensus Pertanian 2023", None, 3),
            publication(9, "Keadaan Angkatan Kerja", None, 2),
            publication(10, "Statistik Kesejahteraan", Some("Data kesejahteraan"), 1),
        ]
    }

    #[test]
    fn test_suggest_matches_title_or_description_in_order() {
        let items = collection();
        let titles = suggest(&items, "SENSUS", DEFAULT_SUGGESTION_CAP);
        assert_eq!(
            titles,
            vec![
                "Hasil Sensus Penduduk 2020",
                "Profil Kemiskinan",
                "Sensus Pertanian 2023",
            ]
        );
    }

    #[test]
    fn test_suggest_is_capped() {
        let items = collection();
        // "a" appears in every title
        let titles = suggest(&items, "a", DEFAULT_SUGGESTION_CAP);
        assert_eq!(titles.len(), 5);
        assert_eq!(titles[0], "Statistik Daerah Gorontalo");
    }

    #[test]
    fn test_blank_term_has_no_suggestions() {
        let items = collection();
        assert!(suggest(&items, "", 5).is_empty());
        assert!(suggest(&items, "   ", 5).is_empty());
    }

    #[test]
    fn test_filter_items_blank_term_returns_all() {
        let items = collection();
        assert_eq!(filter_items(&items, " ").len(), 10);
        assert_eq!(filter_items(&items, "kesejahteraan").len(), 2);
    }

    #[test]
    fn test_matches_ignores_missing_description() {
        let item = publication(1, "Gorontalo Dalam Angka", None, 1);
        assert!(matches(&item, "dalam"));
        assert!(!matches(&item, "sensus"));
    }

    #[test]
    fn test_sort_newest_first_with_id_fallback() {
        let mut items = vec![
            publication(1, "a", None, 1),
            publication(2, "b", None, 5),
            publication(3, "c", None, 5),
        ];
        sort_newest_first(&mut items);
        let ids: Vec<u64> = items.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
