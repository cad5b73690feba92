//! # Catalogue Flows
//!
//! The publication mirror (bps-04) feeding search (bps-02), with the form
//! gate (bps-03) in front of every write.
//!
//! 1. **Search**: newest-first ordering, suggestion cap, filter
//! 2. **Submit**: validation before upload, upload before save
//! 3. **Delete**: soft success for vanished records, failures keep the row

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use bps_02_search::{
        filter_items, sort_newest_first, suggest, DEFAULT_SUGGESTION_CAP,
    };
    use bps_03_validation::FormKind;
    use bps_04_publication_api::{
        DeleteOutcome, InMemoryBackend, PublicationStore, PublicationSubmitter, SubmitError,
    };
    use shared_types::{CoverSource, Publication, PublicationDraft, PublicationId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn publication(id: u64, title: &str, date: (i32, u32, u32), description: &str) -> Publication {
        Publication {
            id: PublicationId(id),
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: Some(description.to_string()),
            cover_url: format!("https://example.org/{id}.png"),
        }
    }

    /// Ten publications; three mention the census.
    fn catalogue() -> Vec<Publication> {
        vec![
            publication(1, "Gorontalo Dalam Angka 2024", (2024, 2, 28), "Statistik sektoral"),
            publication(2, "Hasil SENSUS Pertanian 2023", (2024, 6, 1), "Tahap pertama"),
            publication(3, "Indeks Harga Konsumen", (2024, 1, 15), "Inflasi bulanan"),
            publication(4, "Profil Kemiskinan", (2023, 7, 17), "Garis kemiskinan"),
            publication(5, "Sensus Penduduk 2020", (2021, 1, 21), "Hasil akhir"),
            publication(6, "Statistik Kesejahteraan Rakyat", (2024, 11, 30), "Susenas"),
            publication(7, "Produk Domestik Regional Bruto", (2025, 2, 5), "Pertumbuhan ekonomi"),
            publication(8, "Keadaan Angkatan Kerja", (2024, 12, 2), "Data dari sensus ekonomi"),
            publication(9, "Statistik Transportasi", (2023, 5, 9), "Arus penumpang"),
            publication(10, "Nilai Tukar Petani", (2025, 1, 3), "Indeks bulanan"),
        ]
    }

    fn draft(title: &str, date: &str) -> PublicationDraft {
        PublicationDraft {
            title: title.to_string(),
            release_date: date.to_string(),
            description: "Ringkasan".to_string(),
            cover: CoverSource::None,
        }
    }

    fn setup() -> (Arc<InMemoryBackend>, Arc<PublicationStore>, PublicationSubmitter) {
        let backend = Arc::new(InMemoryBackend::with_publications(catalogue()));
        let store = Arc::new(PublicationStore::new(backend.clone()));
        let submitter = PublicationSubmitter::new(store.clone(), backend.clone());
        (backend, store, submitter)
    }

    // =============================================================================
    // SEARCH
    // =============================================================================

    #[test]
    fn test_census_search_returns_three_newest_first() {
        let mut publications = catalogue();
        sort_newest_first(&mut publications);

        let suggestions = suggest(&publications, "sensus", DEFAULT_SUGGESTION_CAP);
        assert_eq!(
            suggestions,
            vec![
                "Keadaan Angkatan Kerja",
                "Hasil SENSUS Pertanian 2023",
                "Sensus Penduduk 2020",
            ]
        );

        let shown: Vec<u64> = filter_items(&publications, "SENSUS")
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(shown, vec![8, 2, 5]);
    }

    #[test]
    fn test_suggestions_are_capped() {
        let mut publications = catalogue();
        sort_newest_first(&mut publications);

        // every entry contains an "a"
        let suggestions = suggest(&publications, "a", DEFAULT_SUGGESTION_CAP);
        assert_eq!(suggestions.len(), DEFAULT_SUGGESTION_CAP);
        assert_eq!(suggestions[0], "Produk Domestik Regional Bruto");
        assert_eq!(filter_items(&publications, "a").len(), 10);
    }

    // =============================================================================
    // SUBMIT
    // =============================================================================

    #[tokio::test]
    async fn test_added_publication_is_searchable() {
        let (backend, store, submitter) = setup();
        store.load().await.unwrap();

        let added = submitter
            .add(&draft("Statistik Pariwisata 2025", "2025-05-01"))
            .await
            .unwrap();

        assert_eq!(backend.calls("create"), 1);
        assert_eq!(store.len(), 11);
        assert!(added.cover_url.starts_with("http"));

        let mut publications = store.publications();
        sort_newest_first(&mut publications);
        assert_eq!(publications[0].id, added.id);
        assert_eq!(
            suggest(&publications, "pariwisata", DEFAULT_SUGGESTION_CAP),
            vec!["Statistik Pariwisata 2025"]
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_server() {
        let (backend, store, submitter) = setup();
        store.load().await.unwrap();

        let result = submitter.add(&draft("", "01/05/2025")).await;

        let Err(SubmitError::Validation(errors)) = result else {
            panic!("expected validation errors, got {result:?}");
        };
        assert_eq!(errors.messages().len(), 2);
        assert_eq!(backend.calls("create"), 0);
        assert_eq!(backend.calls("upload"), 0);
        assert_eq!(store.len(), 10);
    }

    #[tokio::test]
    async fn test_local_cover_is_uploaded_before_save() {
        let (backend, store, submitter) = setup();
        store.load().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sampul.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut form = draft("Statistik Pariwisata 2025", "2025-05-01");
        form.cover = CoverSource::LocalFile(path);
        let added = submitter.add(&form).await.unwrap();

        assert_eq!(backend.uploads(), vec!["sampul.png".to_string()]);
        assert!(added.cover_url.ends_with("sampul.png"));
        assert_eq!(store.get(added.id).unwrap().cover_url, added.cover_url);
    }

    #[tokio::test]
    async fn test_edit_keeps_cover_when_none_chosen() {
        let (_, store, submitter) = setup();
        store.load().await.unwrap();
        let before = store.get(PublicationId(3)).unwrap();

        let mut form = PublicationDraft::from_publication(&before);
        form.title = "  Indeks Harga Konsumen 2024  ".to_string();
        form.cover = CoverSource::None;
        let updated = submitter.edit(PublicationId(3), &form).await.unwrap();

        assert_eq!(updated.title, "Indeks Harga Konsumen 2024");
        assert_eq!(updated.cover_url, before.cover_url);
        assert_eq!(store.get(PublicationId(3)).unwrap().title, updated.title);
    }

    #[tokio::test]
    async fn test_gif_cover_accepted_on_edit_only() {
        let (backend, store, submitter) = setup();
        store.load().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animasi.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let mut added = draft("Statistik Pariwisata 2025", "2025-05-01");
        added.cover = CoverSource::LocalFile(path.clone());
        let result = submitter.add(&added).await;
        let Err(SubmitError::Upload(_)) = result else {
            panic!("expected the add form to reject a GIF, got {result:?}");
        };
        assert_eq!(backend.calls("create"), 0);

        let mut edited = PublicationDraft::from_publication(&store.get(PublicationId(3)).unwrap());
        edited.cover = CoverSource::LocalFile(path);
        let updated = submitter.edit(PublicationId(3), &edited).await.unwrap();

        assert_eq!(backend.uploads(), vec!["animasi.gif".to_string()]);
        assert!(updated.cover_url.ends_with("animasi.gif"));
        assert!(FormKind::Edit.accepts("image/gif"));
        assert!(!FormKind::Add.accepts("image/gif"));
    }

    // =============================================================================
    // DELETE
    // =============================================================================

    #[tokio::test]
    async fn test_delete_of_vanished_record_is_soft_success() {
        let (backend, store, _) = setup();
        store.load().await.unwrap();

        backend.remove_remote(PublicationId(4));
        let outcome = store.delete(PublicationId(4)).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::AlreadyGone);
        assert!(store.get(PublicationId(4)).is_none());
        assert!(store.error().is_none());
        assert!(!store.is_deleting(PublicationId(4)));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_the_row() {
        let (backend, store, _) = setup();
        store.load().await.unwrap();

        backend.fail_next(500, "Internal Server Error");
        let err = store.delete(PublicationId(4)).await.unwrap_err();

        assert_eq!(
            err.delete_message(),
            "Terjadi kesalahan server. Silakan coba lagi nanti"
        );
        assert!(store.get(PublicationId(4)).is_some());
        assert!(store.error().is_some());
        assert_eq!(backend.remote_publications().len(), 10);
    }
}
