//! Application state management.
//!
//! `App` is a plain state machine: keys and service results go in, and
//! [`Command`]s for the async side come out. It never awaits.

use bps_01_page_transition::{Direction, TransitionState};
use bps_02_search::{
    filter_items, sort_newest_first, DebouncedSuggester, SuggesterConfig, SuggestionKey,
    SuggestionQuery,
};
use bps_03_validation::{FormKind, RegistrationForm};
use bps_04_publication_api::{
    messages, ApiError, DeleteOutcome, PublicationStore, SessionError, SubmitError, SubmitKind,
};
use shared_types::{Publication, PublicationDraft, PublicationId, User};

use super::forms::{AuthForm, AuthMode, PublicationForm};
use super::gallery::GalleryState;
use super::route::{direction_for, nav_item_for, Route};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal screen interaction.
    #[default]
    Browsing,
    /// Help overlay.
    Help,
    /// Waiting for the operator to confirm a delete.
    ConfirmDelete(PublicationId),
    /// Quitting.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

/// Terminal-independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

/// Work for the async side.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Animated navigation through the transition engine.
    Navigate { to: Route, direction: Direction },
    /// Immediate location change without history (guards).
    Redirect(Route),
    LoadPublications,
    Delete(PublicationId),
    SubmitAdd(PublicationDraft),
    SubmitEdit(PublicationId, PublicationDraft),
    Login { email: String, password: String },
    Register(RegistrationForm),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Popup message, dismissed by the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Screen being shown.
    pub route: Route,
    pub authenticated: bool,
    /// Header label.
    pub user_name: String,
    /// Local mirror, newest release first.
    pub publications: Vec<Publication>,
    pub loading: bool,
    pub loaded: bool,
    /// Last store failure.
    pub list_error: Option<String>,
    /// Message of the last failed delete.
    pub delete_error: Option<String>,
    pub deleting: Vec<PublicationId>,
    pub view_mode: ViewMode,
    /// Row in the filtered list.
    pub selected: usize,
    pub search_focused: bool,
    search: DebouncedSuggester<Publication>,
    pub form: PublicationForm,
    pub auth: AuthForm,
    pub gallery: GalleryState,
    pub transition: TransitionState,
    pub notice: Option<Notice>,
    pub logging_out: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(search: SuggesterConfig) -> Self {
        Self {
            state: AppState::Browsing,
            route: Route::Home,
            authenticated: false,
            user_name: "User".to_string(),
            publications: Vec::new(),
            loading: false,
            loaded: false,
            list_error: None,
            delete_error: None,
            deleting: Vec::new(),
            view_mode: ViewMode::Table,
            selected: 0,
            search_focused: false,
            search: DebouncedSuggester::new(search),
            form: PublicationForm::for_add(),
            auth: AuthForm::default(),
            gallery: GalleryState::default(),
            transition: TransitionState::IDLE,
            notice: None,
            logging_out: false,
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    pub fn quit(&mut self) {
        self.state = AppState::Quit;
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    pub fn search_query(&self) -> SuggestionQuery {
        self.search.snapshot()
    }

    pub fn search_term(&self) -> String {
        self.search.snapshot().term().to_string()
    }

    /// Publications matching the search term, in display order.
    pub fn filtered(&self) -> Vec<&Publication> {
        filter_items(&self.publications, &self.search_term())
    }

    pub fn selected_publication(&self) -> Option<&Publication> {
        self.filtered().get(self.selected).copied()
    }

    pub fn is_deleting(&self, id: PublicationId) -> bool {
        self.deleting.contains(&id)
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // =========================================================================
    // INPUTS FROM SERVICES
    // =========================================================================

    pub fn set_transition(&mut self, state: TransitionState) {
        self.transition = state;
    }

    pub fn set_session(&mut self, user: Option<&User>) {
        self.authenticated = user.is_some();
        self.user_name = user
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "User".to_string());
    }

    /// Copy the store's mirror into the view.
    pub fn sync_store(&mut self, store: &PublicationStore) {
        let mut publications = store.publications();
        sort_newest_first(&mut publications);
        self.search.set_collection(publications.clone());
        self.publications = publications;
        self.loading = store.is_loading();
        self.loaded = store.is_loaded();
        self.list_error = store.error();
        self.deleting = store.deleting_ids();
        self.clamp_selection();

        if let Route::EditPublication(id) = self.route {
            if self.form.not_found {
                if let Some(found) = self.publications.iter().find(|p| p.id == id) {
                    self.form = PublicationForm::for_edit(found);
                }
            }
        }
    }

    /// The location changed. Returns a follow-up (redirect or load).
    pub fn enter_location(&mut self, path: &str) -> Option<Command> {
        let route = Route::parse(path);
        if route.requires_auth() && !self.authenticated {
            self.route = Route::Login;
            return Some(Command::Redirect(Route::Login));
        }

        let changed = route != self.route;
        self.route = route;
        self.state = AppState::Browsing;
        if !changed {
            return None;
        }

        match route {
            Route::Login => {
                let mode = if path.contains("tab=register") {
                    AuthMode::Register
                } else {
                    AuthMode::Login
                };
                self.auth.switch_mode(mode);
                None
            }
            Route::Publications => {
                self.search_focused = false;
                self.delete_error = None;
                self.needs_load()
            }
            Route::AddPublication => {
                self.form = PublicationForm::for_add();
                None
            }
            Route::EditPublication(id) => {
                self.form = match self.publications.iter().find(|p| p.id == id) {
                    Some(publication) => PublicationForm::for_edit(publication),
                    None => PublicationForm::missing(id),
                };
                self.needs_load()
            }
            Route::Gallery => {
                self.gallery = GalleryState::default();
                None
            }
            Route::Home => None,
        }
    }

    fn needs_load(&self) -> Option<Command> {
        (!self.loaded && !self.loading).then_some(Command::LoadPublications)
    }

    pub fn on_delete_result(&mut self, result: Result<DeleteOutcome, ApiError>) {
        match result {
            Ok(_) => {
                self.delete_error = None;
                self.notice = Some(Notice::success(messages::DELETE_SUCCESS));
            }
            Err(err) => {
                self.delete_error = Some(err.delete_message());
                self.notice = Some(Notice::error(messages::DELETE_FAILED_NOTICE));
            }
        }
    }

    /// Returns the navigation back to the list on success.
    pub fn on_submit_result(
        &mut self,
        kind: FormKind,
        result: Result<Publication, SubmitError>,
    ) -> Option<Command> {
        self.form.submitting = false;
        let submit_kind = match kind {
            FormKind::Add => SubmitKind::Add,
            FormKind::Edit => SubmitKind::Edit,
        };
        match result {
            Ok(_) => {
                let text = match kind {
                    FormKind::Add => messages::ADD_SUCCESS,
                    FormKind::Edit => messages::EDIT_SUCCESS,
                };
                self.notice = Some(Notice::success(text));
                self.form.errors.clear();
                Some(Command::Navigate {
                    to: Route::Publications,
                    direction: direction_for(false),
                })
            }
            Err(err) => {
                self.form.errors = err.messages(submit_kind);
                None
            }
        }
    }

    pub fn on_login_result(&mut self, result: Result<User, SessionError>) {
        self.auth.busy = false;
        match result {
            Ok(user) => {
                self.set_session(Some(&user));
                self.auth.errors.clear();
                self.auth.success = Some(messages::LOGIN_SUCCESS.to_string());
            }
            Err(err) => self.auth.errors = vec![err.login_message()],
        }
    }

    pub fn on_register_result(&mut self, result: Result<User, SessionError>) {
        self.auth.busy = false;
        match result {
            Ok(_) => {
                self.auth.errors.clear();
                self.auth.success = Some(messages::REGISTER_SUCCESS.to_string());
            }
            Err(SessionError::Validation(errors)) => self.auth.errors = errors.messages(),
            Err(err) => self.auth.errors = vec![err.register_message()],
        }
    }

    /// Returns the redirect to the login screen on success.
    pub fn on_logout_result(&mut self, result: Result<(), SessionError>) -> Option<Command> {
        self.logging_out = false;
        match result {
            Ok(()) => {
                self.set_session(None);
                self.auth = AuthForm::default();
                self.loaded = false;
                self.route = Route::Login;
                Some(Command::Redirect(Route::Login))
            }
            Err(err) => {
                self.notice = Some(Notice::error(format!("Logout gagal: {err}")));
                None
            }
        }
    }

    // =========================================================================
    // KEYBOARD
    // =========================================================================

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        if self.transition.is_transitioning {
            return None;
        }
        if self.notice.take().is_some() {
            return None;
        }

        match self.state {
            AppState::Browsing => self.handle_screen_key(key),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Browsing;
                None
            }
            AppState::ConfirmDelete(id) => {
                self.state = AppState::Browsing;
                match key {
                    Key::Enter | Key::Char('y') | Key::Char('Y') => {
                        self.delete_error = None;
                        Some(Command::Delete(id))
                    }
                    _ => None,
                }
            }
            AppState::Quit => None,
        }
    }

    fn navigate(&self, to: Route, back: bool) -> Option<Command> {
        (to != self.route).then_some(Command::Navigate {
            to,
            direction: direction_for(back),
        })
    }

    fn go_back(&self) -> Option<Command> {
        self.route.parent().and_then(|to| self.navigate(to, true))
    }

    /// Keys shared by screens without a focused text field.
    fn handle_global_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char('q') | Key::Char('Q') => {
                self.quit();
                None
            }
            Key::Char('?') => {
                self.state = AppState::Help;
                None
            }
            Key::Char('l') | Key::Char('L') if !self.logging_out => {
                self.logging_out = true;
                Some(Command::Logout)
            }
            Key::Char(c) => nav_item_for(c).and_then(|item| self.navigate(item.route, false)),
            Key::Esc => self.go_back(),
            _ => None,
        }
    }

    fn handle_screen_key(&mut self, key: Key) -> Option<Command> {
        match self.route {
            Route::Login => self.handle_auth_key(key),
            Route::Publications => self.handle_list_key(key),
            Route::AddPublication | Route::EditPublication(_) => self.handle_form_key(key),
            Route::Gallery => self.handle_gallery_key(key),
            Route::Home => self.handle_global_key(key),
        }
    }

    fn handle_list_key(&mut self, key: Key) -> Option<Command> {
        if self.search_focused {
            return self.handle_search_key(key);
        }

        match key {
            Key::Char('/') | Key::Char('s') => {
                self.search_focused = true;
                None
            }
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Key::Down => {
                self.selected += 1;
                self.clamp_selection();
                None
            }
            Key::Char('v') | Key::Char('V') => {
                self.view_mode = match self.view_mode {
                    ViewMode::Table => ViewMode::Grid,
                    ViewMode::Grid => ViewMode::Table,
                };
                None
            }
            Key::Char('a') | Key::Char('A') => self.navigate(Route::AddPublication, false),
            Key::Char('e') | Key::Char('E') | Key::Enter => {
                let id = self.selected_publication()?.id;
                self.navigate(Route::EditPublication(id), false)
            }
            Key::Char('d') | Key::Char('D') => {
                let id = self.selected_publication()?.id;
                if !self.is_deleting(id) {
                    self.state = AppState::ConfirmDelete(id);
                }
                None
            }
            Key::Char('r') | Key::Char('R') if !self.loading => Some(Command::LoadPublications),
            Key::Char('c') | Key::Char('C') => {
                self.search.clear();
                self.selected = 0;
                None
            }
            other => self.handle_global_key(other),
        }
    }

    fn handle_search_key(&mut self, key: Key) -> Option<Command> {
        let routed = match key {
            Key::Up => Some(SuggestionKey::Up),
            Key::Down => Some(SuggestionKey::Down),
            Key::Enter => Some(SuggestionKey::Enter),
            Key::Esc => Some(SuggestionKey::Escape),
            _ => None,
        };
        if let Some(suggestion_key) = routed {
            if self.search.handle_key(suggestion_key) {
                self.selected = 0;
                return None;
            }
        }

        match key {
            Key::Char(c) => {
                let mut term = self.search_term();
                term.push(c);
                self.search.set_term(term);
                self.selected = 0;
            }
            Key::Backspace => {
                let mut term = self.search_term();
                term.pop();
                self.search.set_term(term);
                self.selected = 0;
            }
            Key::Esc | Key::Enter | Key::Tab | Key::Down => self.search_focused = false,
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: Key) -> Option<Command> {
        if self.form.not_found {
            return match key {
                Key::Esc | Key::Enter => self.go_back(),
                other => self.handle_global_key(other),
            };
        }
        if self.form.submitting {
            return None;
        }

        match key {
            Key::Char(c) => self.form.input(c),
            Key::Backspace => self.form.backspace(),
            Key::Tab | Key::Down => self.form.focus_next(),
            Key::BackTab | Key::Up => self.form.focus_prev(),
            Key::Enter => {
                self.form.errors.clear();
                self.form.submitting = true;
                let draft = self.form.to_draft();
                return Some(match (self.form.kind, self.form.target) {
                    (FormKind::Edit, Some(id)) => Command::SubmitEdit(id, draft),
                    _ => Command::SubmitAdd(draft),
                });
            }
            Key::Esc => return self.go_back(),
            Key::Left | Key::Right => {}
        }
        None
    }

    fn handle_auth_key(&mut self, key: Key) -> Option<Command> {
        if self.auth.busy {
            return None;
        }

        match key {
            Key::Char(c) => self.auth.input(c),
            Key::Backspace => self.auth.backspace(),
            Key::Tab | Key::Down => self.auth.focus_next(),
            Key::BackTab | Key::Up => self.auth.focus_prev(),
            Key::Left => self.auth.switch_mode(AuthMode::Login),
            Key::Right => self.auth.switch_mode(AuthMode::Register),
            Key::Esc => self.quit(),
            Key::Enter => {
                self.auth.errors.clear();
                self.auth.success = None;
                self.auth.busy = true;
                return Some(match self.auth.mode {
                    AuthMode::Login => {
                        let (email, password) = self.auth.credentials();
                        Command::Login { email, password }
                    }
                    AuthMode::Register => Command::Register(self.auth.registration()),
                });
            }
        }
        None
    }

    fn handle_gallery_key(&mut self, key: Key) -> Option<Command> {
        if self.gallery.popup_open {
            if matches!(key, Key::Esc | Key::Enter) {
                self.gallery.close_popup();
            }
            return None;
        }

        match key {
            Key::Up | Key::Left => self.gallery.cursor_prev(),
            Key::Down | Key::Right => self.gallery.cursor_next(),
            Key::Enter => {
                self.gallery.select();
                self.gallery.open_popup();
            }
            other => return self.handle_global_key(other),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bps_04_publication_api::{sample_publications, InMemoryBackend};
    use std::sync::Arc;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn signed_in_app() -> App {
        let mut app = App::new(SuggesterConfig::default());
        app.set_session(Some(&User {
            id: Some(1),
            name: "Admin BPS".to_string(),
            email: "admin@bps.go.id".to_string(),
        }));
        app
    }

    async fn loaded_store() -> PublicationStore {
        let store = PublicationStore::new(Arc::new(InMemoryBackend::with_publications(
            sample_publications(),
        )));
        store.load().await.unwrap();
        store
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(Key::Char(c));
        }
    }

    // =========================================================================
    // ROUTING
    // =========================================================================

    #[test]
    fn test_guard_redirects_to_login() {
        let mut app = App::new(SuggesterConfig::default());
        assert_eq!(
            app.enter_location("/publications"),
            Some(Command::Redirect(Route::Login))
        );
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.enter_location("/login?tab=register"), None);
        assert_eq!(app.auth.mode, AuthMode::Login);
    }

    #[test]
    fn test_register_tab_from_query() {
        let mut app = App::new(SuggesterConfig::default());
        app.route = Route::Home;
        app.enter_location("/login?tab=register");
        assert_eq!(app.auth.mode, AuthMode::Register);
    }

    #[test]
    fn test_entering_list_requests_load_once() {
        let mut app = signed_in_app();
        assert_eq!(
            app.enter_location("/publications"),
            Some(Command::LoadPublications)
        );
        assert_eq!(app.enter_location("/publications"), None);
    }

    #[test]
    fn test_nav_hotkeys_slide_up_and_back_slides_down() {
        let mut app = signed_in_app();
        app.enter_location("/");
        assert_eq!(
            app.handle_key(Key::Char('4')),
            Some(Command::Navigate {
                to: Route::Gallery,
                direction: Direction::Up
            })
        );
        assert_eq!(app.handle_key(Key::Char('1')), None);

        app.enter_location("/publications/add");
        assert_eq!(
            app.handle_key(Key::Esc),
            Some(Command::Navigate {
                to: Route::Publications,
                direction: Direction::Down
            })
        );
    }

    #[test]
    fn test_keys_ignored_while_transitioning() {
        let mut app = signed_in_app();
        app.enter_location("/");
        app.transition.is_transitioning = true;
        assert_eq!(app.handle_key(Key::Char('2')), None);
        assert_eq!(app.handle_key(Key::Char('q')), None);
        assert!(!app.should_quit());
    }

    // =========================================================================
    // LIST
    // =========================================================================

    #[tokio::test]
    async fn test_sync_sorts_newest_first_and_filters() {
        let store = loaded_store().await;
        let mut app = signed_in_app();
        app.enter_location("/publications");
        app.sync_store(&store);

        assert_eq!(app.publications.len(), 7);
        assert_eq!(app.publications[0].id, PublicationId(6));

        app.handle_key(Key::Char('/'));
        type_text(&mut app, "sensus");
        let titles: Vec<_> = app.filtered().iter().map(|p| p.id).collect();
        assert_eq!(titles, vec![PublicationId(3), PublicationId(5)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_suggestions_commit_with_enter() {
        let store = loaded_store().await;
        let mut app = signed_in_app();
        app.enter_location("/publications");
        app.sync_store(&store);

        app.handle_key(Key::Char('/'));
        type_text(&mut app, "sensus");
        tokio::time::sleep(std::time::Duration::from_millis(350)).await;
        assert!(app.search_query().is_open());

        app.handle_key(Key::Down);
        app.handle_key(Key::Enter);
        assert_eq!(app.search_term(), "Hasil Sensus Pertanian 2023 Tahap I");
        assert!(!app.search_query().is_open());
        assert!(app.search_focused);

        app.handle_key(Key::Esc);
        assert!(!app.search_focused);
        assert_eq!(app.filtered().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let store = loaded_store().await;
        let mut app = signed_in_app();
        app.enter_location("/publications");
        app.sync_store(&store);

        assert_eq!(app.handle_key(Key::Char('d')), None);
        assert_eq!(app.state, AppState::ConfirmDelete(PublicationId(6)));
        assert_eq!(app.handle_key(Key::Char('n')), None);
        assert_eq!(app.state, AppState::Browsing);

        app.handle_key(Key::Char('d'));
        assert_eq!(
            app.handle_key(Key::Char('y')),
            Some(Command::Delete(PublicationId(6)))
        );
    }

    #[test]
    fn test_delete_failure_sets_banner_and_notice() {
        let mut app = signed_in_app();
        app.on_delete_result(Err(ApiError::Status {
            status: 500,
            message: "Server Error".to_string(),
        }));
        assert_eq!(
            app.delete_error.as_deref(),
            Some("Terjadi kesalahan server. Silakan coba lagi nanti")
        );
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);

        // The next key only dismisses the notice.
        assert_eq!(app.handle_key(Key::Char('q')), None);
        assert!(app.notice.is_none());
        assert!(!app.should_quit());
    }

    // =========================================================================
    // FORMS
    // =========================================================================

    #[tokio::test]
    async fn test_edit_form_prefills_after_late_load() {
        let store = loaded_store().await;
        let mut app = signed_in_app();
        assert_eq!(
            app.enter_location("/publications/edit/4"),
            Some(Command::LoadPublications)
        );
        assert!(app.form.not_found);

        app.sync_store(&store);
        assert!(!app.form.not_found);
        assert_eq!(app.form.title.as_str(), "Indikator Kesejahteraan Rakyat 2024");
    }

    #[test]
    fn test_add_form_submit_and_failure_keeps_fields() {
        let mut app = signed_in_app();
        app.enter_location("/publications/add");
        type_text(&mut app, "Statistik 2025");

        let command = app.handle_key(Key::Enter).unwrap();
        assert!(matches!(command, Command::SubmitAdd(ref d) if d.title == "Statistik 2025"));
        assert!(app.form.submitting);
        assert_eq!(app.handle_key(Key::Char('x')), None);

        let err = SubmitError::NotFound("1".to_string());
        assert_eq!(app.on_submit_result(FormKind::Add, Err(err)), None);
        assert!(!app.form.submitting);
        assert_eq!(app.form.errors, vec!["Publikasi tidak ditemukan"]);
        assert_eq!(app.form.title.as_str(), "Statistik 2025");
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    #[test]
    fn test_login_enter_emits_command() {
        let mut app = App::new(SuggesterConfig::default());
        app.enter_location("/login");
        type_text(&mut app, "admin@bps.go.id");
        app.handle_key(Key::Tab);
        type_text(&mut app, "password123");

        assert_eq!(
            app.handle_key(Key::Enter),
            Some(Command::Login {
                email: "admin@bps.go.id".to_string(),
                password: "password123".to_string()
            })
        );
        assert!(app.auth.busy);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut app = signed_in_app();
        app.enter_location("/");
        assert_eq!(app.handle_key(Key::Char('l')), Some(Command::Logout));
        assert_eq!(app.handle_key(Key::Char('l')), None);

        assert_eq!(
            app.on_logout_result(Ok(())),
            Some(Command::Redirect(Route::Login))
        );
        assert!(!app.authenticated);
        assert_eq!(app.user_name, "User");
    }
}
