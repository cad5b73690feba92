//! Service wiring and command execution.
//!
//! ```text
//!  key ─▶ App::handle_key ─▶ Command ─▶ dispatch ─▶ execute (task)
//!                                                      │
//!        ┌──────────── PublicationStore / Submitter / AuthSession / PageNavigator
//!        ▼
//!  App::on_*_result ─▶ follow-up Command ─▶ dispatch
//!
//!  watchers: engine state ─▶ App::set_transition
//!            location     ─▶ App::enter_location
//!            store rev    ─▶ App::sync_store
//! ```

use std::sync::Arc;
use std::time::Duration;

use bps_01_page_transition::{
    InputLock, Navigator, PageNavigator, TransitionEngine, TransitionOptions, TransitionTiming,
};
use bps_03_validation::FormKind;
use bps_04_publication_api::{
    AuthGateway, AuthSession, FileTokenStore, HttpApiClient, ImageHost, ImageHostClient,
    InMemoryBackend, MemoryTokenStore, PublicationGateway, PublicationStore,
    PublicationSubmitter, TokenStore,
};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AdminConfig;
use crate::domain::{App, AuthMode, Command, Route, RouteNavigator};

/// Pause between a successful login and the jump to the list.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1000);
/// Pause between a successful registration and the flip to the login form.
pub const REGISTER_FLIP_DELAY: Duration = Duration::from_millis(1500);

pub type SharedApp = Arc<Mutex<App>>;

#[derive(Clone)]
pub struct Services {
    pub store: Arc<PublicationStore>,
    pub submitter: Arc<PublicationSubmitter>,
    pub session: Arc<AuthSession>,
    pub router: Arc<RouteNavigator>,
    pub input_lock: Arc<InputLock>,
    pub navigator: PageNavigator,
    transition_duration: Duration,
}

impl Services {
    /// Remote services, or the in-memory backend when `demo` is set.
    pub fn build(config: &AdminConfig, demo: bool) -> anyhow::Result<Self> {
        if demo {
            info!("[bps-admin] Demo mode: using in-memory backend");
            let backend = Arc::new(InMemoryBackend::demo());
            return Ok(Self::from_parts(
                config,
                backend.clone(),
                backend.clone(),
                backend,
                Arc::new(MemoryTokenStore::new()),
            ));
        }

        let tokens: Arc<dyn TokenStore> =
            Arc::new(FileTokenStore::open(config.storage.token_file.clone())?);
        let client = Arc::new(HttpApiClient::new(config.api.clone(), tokens.clone())?);
        let images = Arc::new(ImageHostClient::new(config.upload.clone())?);
        info!(api = %config.api.base_url, "[bps-admin] Using remote API");
        Ok(Self::from_parts(config, client.clone(), client, images, tokens))
    }

    pub fn from_parts(
        config: &AdminConfig,
        publications: Arc<dyn PublicationGateway>,
        auth: Arc<dyn AuthGateway>,
        images: Arc<dyn ImageHost>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let store = Arc::new(PublicationStore::new(publications));
        let submitter = Arc::new(PublicationSubmitter::new(store.clone(), images));
        let session = Arc::new(AuthSession::new(auth, tokens));

        let input_lock = Arc::new(InputLock::new());
        let timing = TransitionTiming::default().with_duration(config.transition_duration());
        let engine = TransitionEngine::with_timing(input_lock.clone(), timing);
        let router = Arc::new(RouteNavigator::new(Route::Home));
        let navigator = PageNavigator::new(engine, router.clone() as Arc<dyn Navigator>);

        Self {
            store,
            submitter,
            session,
            router,
            input_lock,
            navigator,
            transition_duration: config.transition_duration(),
        }
    }

    pub fn transition_options(&self) -> TransitionOptions {
        TransitionOptions::new().duration(self.transition_duration)
    }

    /// Restore the session and show `start`, redirecting when needed.
    pub async fn bootstrap(&self, app: &SharedApp, start: &str) {
        let user = self.session.restore();
        let follow = {
            let mut app = app.lock().await;
            app.set_session(user.as_ref());
            let follow = app.enter_location(start);
            self.router.replace(app.route);
            follow
        };
        if let Some(command) = follow {
            dispatch(self, app, command);
        }
    }

    /// Keep `app` in sync with the engine, the location and the store.
    pub fn spawn_watchers(&self, app: &SharedApp) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(3);

        let mut transitions = self.navigator.engine().subscribe();
        let target = app.clone();
        handles.push(tokio::spawn(async move {
            while transitions.changed().await.is_ok() {
                let state = *transitions.borrow_and_update();
                target.lock().await.set_transition(state);
            }
        }));

        let mut locations = self.router.subscribe();
        let (services, target) = (self.clone(), app.clone());
        handles.push(tokio::spawn(async move {
            while locations.changed().await.is_ok() {
                let path = locations.borrow_and_update().clone();
                let follow = target.lock().await.enter_location(&path);
                if let Some(command) = follow {
                    dispatch(&services, &target, command);
                }
            }
        }));

        let mut revisions = self.store.subscribe();
        let (store, target) = (self.store.clone(), app.clone());
        handles.push(tokio::spawn(async move {
            while revisions.changed().await.is_ok() {
                revisions.borrow_and_update();
                target.lock().await.sync_store(&store);
            }
        }));

        handles
    }
}

/// Run `command` on its own task.
pub fn dispatch(services: &Services, app: &SharedApp, command: Command) {
    tokio::spawn(execute(services.clone(), app.clone(), command));
}

pub async fn execute(services: Services, app: SharedApp, command: Command) {
    debug!(?command, "[bps-admin] Executing command");
    match command {
        Command::Navigate { to, direction } => {
            let started =
                services
                    .navigator
                    .begin(&to.path(), direction, services.transition_options());
            match started {
                Ok(start) => {
                    if let Err(err) = start.finish().await {
                        debug!(%to, %err, "[bps-admin] Navigation did not finish");
                    }
                }
                Err(err) => debug!(%to, %err, "[bps-admin] Navigation ignored"),
            }
        }

        Command::Redirect(route) => services.router.replace(route),

        Command::LoadPublications => {
            if let Err(err) = services.store.load().await {
                warn!(%err, "[bps-admin] Could not load publications");
            }
        }

        Command::Delete(id) => {
            let result = services.store.delete(id).await;
            app.lock().await.on_delete_result(result);
        }

        Command::SubmitAdd(draft) => {
            let result = services.submitter.add(&draft).await;
            let follow = app.lock().await.on_submit_result(FormKind::Add, result);
            if let Some(command) = follow {
                dispatch(&services, &app, command);
            }
        }

        Command::SubmitEdit(id, draft) => {
            let result = services.submitter.edit(id, &draft).await;
            let follow = app.lock().await.on_submit_result(FormKind::Edit, result);
            if let Some(command) = follow {
                dispatch(&services, &app, command);
            }
        }

        Command::Login { email, password } => {
            let result = services.session.login(&email, &password).await;
            let success = result.is_ok();
            app.lock().await.on_login_result(result);
            if success {
                tokio::time::sleep(LOGIN_REDIRECT_DELAY).await;
                dispatch(
                    &services,
                    &app,
                    Command::Navigate {
                        to: Route::Publications,
                        direction: crate::domain::direction_for(false),
                    },
                );
            }
        }

        Command::Register(form) => {
            let result = services.session.register(&form).await;
            let success = result.is_ok();
            app.lock().await.on_register_result(result);
            if success {
                tokio::time::sleep(REGISTER_FLIP_DELAY).await;
                app.lock().await.auth.switch_mode(AuthMode::Login);
            }
        }

        Command::Logout => {
            let result = services.session.logout().await;
            if result.is_ok() {
                services.store.clear();
            }
            let follow = app.lock().await.on_logout_result(result);
            if let Some(command) = follow {
                dispatch(&services, &app, command);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoticeKind;
    use bps_04_publication_api::{messages, DEMO_EMAIL, DEMO_PASSWORD};
    use shared_types::{CoverSource, PublicationDraft, PublicationId};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn setup() -> (Services, SharedApp, Arc<InMemoryBackend>) {
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
        (services, app, backend)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_secs(3)).await;
    }

    // =========================================================================
    // FLOWS
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_login_then_redirect_to_list() {
        let (services, app, _) = setup();
        services.bootstrap(&app, "/publications").await;
        let _watchers = services.spawn_watchers(&app);
        assert_eq!(app.lock().await.route, Route::Login);
        assert_eq!(services.router.route(), Route::Login);

        execute(
            services.clone(),
            app.clone(),
            Command::Login {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            },
        )
        .await;
        settle().await;

        let app = app.lock().await;
        assert_eq!(app.user_name, "Admin BPS");
        assert_eq!(app.route, Route::Publications);
        assert_eq!(app.publications.len(), 7);
        assert!(app.transition.is_idle());
        assert!(!services.input_lock.is_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_password_stays_on_login() {
        let (services, app, _) = setup();
        services.bootstrap(&app, "/login").await;

        execute(
            services.clone(),
            app.clone(),
            Command::Login {
                email: DEMO_EMAIL.to_string(),
                password: "salah".to_string(),
            },
        )
        .await;

        let app = app.lock().await;
        assert_eq!(app.auth.errors, vec!["Email atau password salah"]);
        assert!(!app.auth.busy);
        assert_eq!(services.router.route(), Route::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_publication_returns_to_list() {
        let (services, app, backend) = setup();
        services.session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        services.bootstrap(&app, "/publications/add").await;
        let _watchers = services.spawn_watchers(&app);
        assert_eq!(app.lock().await.route, Route::AddPublication);

        let draft = PublicationDraft {
            title: "Statistik Kesejahteraan 2025".to_string(),
            release_date: "2025-06-30".to_string(),
            description: String::new(),
            cover: CoverSource::None,
        };
        execute(services.clone(), app.clone(), Command::SubmitAdd(draft)).await;
        settle().await;

        let app = app.lock().await;
        assert_eq!(app.route, Route::Publications);
        assert_eq!(app.publications[0].title, "Statistik Kesejahteraan 2025");
        assert_eq!(backend.calls("create"), 1);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.text, messages::ADD_SUCCESS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_of_vanished_record_is_reported_as_success() {
        let (services, app, backend) = setup();
        services.session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        services.bootstrap(&app, "/publications").await;
        let _watchers = services.spawn_watchers(&app);
        settle().await;

        backend.remove_remote(PublicationId(2));
        execute(services.clone(), app.clone(), Command::Delete(PublicationId(2))).await;
        settle().await;

        let app = app.lock().await;
        assert!(app.publications.iter().all(|p| p.id != PublicationId(2)));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Success);
        assert_eq!(app.delete_error, None);
        assert_eq!(app.list_error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_redirects_and_clears_list() {
        let (services, app, _) = setup();
        services.session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        services.bootstrap(&app, "/publications").await;
        let _watchers = services.spawn_watchers(&app);
        settle().await;

        execute(services.clone(), app.clone(), Command::Logout).await;
        settle().await;

        let app = app.lock().await;
        assert_eq!(app.route, Route::Login);
        assert!(!app.authenticated);
        assert!(app.publications.is_empty());
        assert!(!services.session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_flips_back_to_login() {
        let (services, app, _) = setup();
        services.bootstrap(&app, "/login").await;
        {
            let mut app = app.lock().await;
            app.auth.switch_mode(AuthMode::Register);
        }
        let form = bps_03_validation::RegistrationForm {
            name: "Operator".to_string(),
            email: "operator@bps.go.id".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            terms_accepted: true,
        };
        execute(services.clone(), app.clone(), Command::Register(form)).await;

        let app = app.lock().await;
        assert_eq!(app.auth.mode, AuthMode::Login);
        assert!(app.auth.errors.is_empty());
        assert!(!app.authenticated);
        assert!(!services.session.is_authenticated());
        assert_eq!(services.session.token(), None);
    }
}
