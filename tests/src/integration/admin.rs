//! # Admin Client Flows
//!
//! Key presses through `App::handle_key`, commands through
//! `services::execute`, all against the seeded in-memory backend:
//!
//! 1. **Login → list**: guarded start, typed credentials, redirect
//! 2. **Add**: form typed in, saved, back on the list with a notice
//! 3. **Search**: debounced dropdown, committed suggestion filters the list
//! 4. **Delete**: confirmation, success, server failure banner

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::Mutex;

    use bps_04_publication_api::{
        messages, InMemoryBackend, MemoryTokenStore, DEMO_EMAIL, DEMO_PASSWORD,
    };
    use bps_admin::domain::{App, AppState, Key, NoticeKind, Route};
    use bps_admin::services::{execute, Services, SharedApp};
    use bps_admin::AdminConfig;
    use shared_types::PublicationId;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Harness {
        services: Services,
        app: SharedApp,
        backend: Arc<InMemoryBackend>,
        _watchers: Vec<tokio::task::JoinHandle<()>>,
    }

    impl Harness {
        async fn start(path: &str) -> Self {
            let config = AdminConfig::default();
            let backend = Arc::new(InMemoryBackend::demo());
            let services = Services::from_parts(
                &config,
                backend.clone(),
                backend.clone(),
                backend.clone(),
                Arc::new(MemoryTokenStore::new()),
            );
            let app = Arc::new(Mutex::new(App::new(config.suggester())));
            services.bootstrap(&app, path).await;
            let watchers = services.spawn_watchers(&app);
            Self {
                services,
                app,
                backend,
                _watchers: watchers,
            }
        }

        async fn press(&self, key: Key) {
            let command = self.app.lock().await.handle_key(key);
            if let Some(command) = command {
                execute(self.services.clone(), self.app.clone(), command).await;
            }
        }

        async fn type_text(&self, text: &str) {
            for c in text.chars() {
                self.press(Key::Char(c)).await;
            }
        }

        /// Let spawned follow-ups, transitions and watchers run out.
        async fn settle(&self) {
            tokio::time::sleep(Duration::from_secs(3)).await;
        }

        async fn login(&self) {
            self.type_text(DEMO_EMAIL).await;
            self.press(Key::Tab).await;
            self.type_text(DEMO_PASSWORD).await;
            self.press(Key::Enter).await;
            self.settle().await;
        }
    }

    // =============================================================================
    // LOGIN
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_typed_login_lands_on_sorted_list() {
        let harness = Harness::start("/daftar-publikasi").await;
        assert_eq!(harness.app.lock().await.route, Route::Login);

        harness.login().await;

        let app = harness.app.lock().await;
        assert_eq!(app.route, Route::Publications);
        assert!(app.authenticated);
        assert_eq!(app.user_name, "Admin BPS");
        assert_eq!(app.publications.len(), 7);
        let ids: Vec<u64> = app.publications.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![6, 7, 1, 4, 2, 3, 5]);
        assert!(!harness.services.input_lock.is_locked());
        assert_eq!(harness.backend.calls("list"), 1);
    }

    // =============================================================================
    // ADD
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_add_form_saves_and_returns_to_list() {
        let harness = Harness::start("/").await;
        harness.login().await;

        harness.press(Key::Char('a')).await;
        harness.settle().await;
        assert_eq!(harness.app.lock().await.route, Route::AddPublication);

        harness.type_text("Statistik Pariwisata 2025").await;
        harness.press(Key::Tab).await;
        harness.type_text("2025-05-01").await;
        harness.press(Key::Enter).await;
        harness.settle().await;

        let app = harness.app.lock().await;
        assert_eq!(app.route, Route::Publications);
        assert_eq!(app.publications.len(), 8);
        assert_eq!(app.publications[0].title, "Statistik Pariwisata 2025");
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, messages::ADD_SUCCESS);
        assert_eq!(harness.backend.calls("create"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_form_with_bad_date_stays_open() {
        let harness = Harness::start("/").await;
        harness.login().await;
        harness.press(Key::Char('3')).await;
        harness.settle().await;

        harness.type_text("Statistik Pariwisata 2025").await;
        harness.press(Key::Tab).await;
        harness.type_text("1 Mei 2025").await;
        harness.press(Key::Enter).await;

        let app = harness.app.lock().await;
        assert_eq!(app.route, Route::AddPublication);
        assert!(!app.form.errors.is_empty());
        assert!(!app.form.submitting);
        assert_eq!(app.form.title.as_str(), "Statistik Pariwisata 2025");
        assert_eq!(harness.backend.calls("create"), 0);
    }

    // =============================================================================
    // SEARCH
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_committed_suggestion_filters_the_list() {
        let harness = Harness::start("/publications").await;
        harness.login().await;

        harness.press(Key::Char('/')).await;
        harness.type_text("sensus").await;
        tokio::time::sleep(Duration::from_millis(400)).await;

        {
            let app = harness.app.lock().await;
            let query = app.search_query();
            assert!(query.is_open());
            assert_eq!(
                query.candidates(),
                [
                    "Hasil Sensus Pertanian 2023 Tahap I".to_string(),
                    "Sensus Penduduk 2020: Hasil Long Form".to_string(),
                ]
            );
            let shown: Vec<u64> = app.filtered().iter().map(|p| p.id.0).collect();
            assert_eq!(shown, vec![3, 5]);
        }

        harness.press(Key::Down).await;
        harness.press(Key::Down).await;
        harness.press(Key::Enter).await;
        tokio::time::sleep(Duration::from_millis(400)).await;

        let app = harness.app.lock().await;
        assert_eq!(app.search_term(), "Sensus Penduduk 2020: Hasil Long Form");
        assert!(!app.search_query().is_open());
        let shown: Vec<u64> = app.filtered().iter().map(|p| p.id.0).collect();
        assert_eq!(shown, vec![5]);
    }

    // =============================================================================
    // DELETE
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_delete_asks_then_removes_the_row() {
        let harness = Harness::start("/publications").await;
        harness.login().await;

        harness.press(Key::Char('d')).await;
        assert_eq!(
            harness.app.lock().await.state,
            AppState::ConfirmDelete(PublicationId(6))
        );
        harness.press(Key::Char('y')).await;
        harness.settle().await;

        let app = harness.app.lock().await;
        assert_eq!(app.publications.len(), 6);
        assert!(app.publications.iter().all(|p| p.id != PublicationId(6)));
        assert_eq!(app.notice.as_ref().unwrap().text, messages::DELETE_SUCCESS);
        assert!(app.deleting.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_delete_keeps_the_row() {
        let harness = Harness::start("/publications").await;
        harness.login().await;

        harness.press(Key::Char('d')).await;
        harness.press(Key::Char('n')).await;
        harness.settle().await;

        let app = harness.app.lock().await;
        assert_eq!(app.state, AppState::Browsing);
        assert_eq!(app.publications.len(), 7);
        assert_eq!(harness.backend.calls("delete"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_on_delete_shows_banner() {
        let harness = Harness::start("/publications").await;
        harness.login().await;

        harness.backend.fail_next(500, "Internal Server Error");
        harness.press(Key::Char('d')).await;
        harness.press(Key::Enter).await;
        harness.settle().await;

        let app = harness.app.lock().await;
        assert_eq!(app.publications.len(), 7);
        assert_eq!(
            app.delete_error.as_deref(),
            Some("Terjadi kesalahan server. Silakan coba lagi nanti")
        );
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, messages::DELETE_FAILED_NOTICE);
    }
}
