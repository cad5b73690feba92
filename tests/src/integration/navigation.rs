//! # Navigation Flows
//!
//! Directional page navigation (bps-01) driving a navigator and an input
//! lock together:
//!
//! ```text
//! begin ─▶ lock input ─▶ 40%: set location ─▶ settle: release input
//! ```

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use bps_01_page_transition::{
        Direction, InputLock, MemoryNavigator, NavigationOutcome, Navigator, PageNavigator,
        Phase, TransitionEngine, TransitionError, TransitionOptions,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn setup() -> (PageNavigator, Arc<MemoryNavigator>, Arc<InputLock>) {
        let lock = Arc::new(InputLock::new());
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let engine = TransitionEngine::new(lock.clone());
        let pages = PageNavigator::new(engine, navigator.clone() as Arc<dyn Navigator>);
        (pages, navigator, lock)
    }

    // =============================================================================
    // FULL RUN
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_location_changes_mid_run_and_input_unlocks_after() {
        let (pages, navigator, lock) = setup();

        let start = pages
            .begin("/publications", Direction::Up, TransitionOptions::new().preload(true))
            .unwrap();
        assert!(lock.is_locked());
        assert!(pages.engine().is_navigating());
        assert_eq!(navigator.prefetched(), vec!["/publications".to_string()]);
        assert_eq!(navigator.current_location(), "/");

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(navigator.current_location(), "/publications");
        assert!(pages.engine().state().is_transitioning);
        assert!(lock.is_locked());

        assert_eq!(start.finish().await.unwrap(), NavigationOutcome::Completed);
        assert!(!lock.is_locked());
        assert!(pages.engine().state().is_idle());
        assert_eq!(pages.engine().state().phase, Phase::Idle);
        assert_eq!(navigator.history(), vec!["/publications".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hooks_run_in_order() {
        let (pages, _, _) = setup();
        let log = Arc::new(Mutex::new(Vec::new()));

        let (on_start, on_complete) = (log.clone(), log.clone());
        let options = TransitionOptions::new()
            .duration(Duration::from_millis(200))
            .on_start(move || on_start.lock().unwrap().push("start"))
            .on_complete(move || on_complete.lock().unwrap().push("complete"));

        pages.slide_left("/gallery", options).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["start", "complete"]);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_second_navigation_rejected_while_running() {
        let (pages, navigator, _) = setup();

        let first = pages
            .begin("/publications", Direction::Up, TransitionOptions::new())
            .unwrap();
        let second = pages.begin("/gallery", Direction::Down, TransitionOptions::new());
        assert!(matches!(second, Err(TransitionError::InProgress)));

        first.finish().await.unwrap();
        assert_eq!(navigator.history(), vec!["/publications".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_current_and_placeholder_targets_are_skipped() {
        let (pages, navigator, lock) = setup();

        let same = pages.slide_up("/", TransitionOptions::new()).await.unwrap();
        let placeholder = pages.slide_up("#", TransitionOptions::new()).await.unwrap();

        assert_eq!(same, NavigationOutcome::Skipped);
        assert_eq!(placeholder, NavigationOutcome::Skipped);
        assert_eq!(lock.acquisitions(), 0);
        assert!(navigator.history().is_empty());
    }

    // =============================================================================
    // CANCELLATION
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_midpoint_keeps_location() {
        let (pages, navigator, lock) = setup();

        let start = pages
            .begin("/publications", Direction::Right, TransitionOptions::new())
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(pages.engine().cancel_transition());
        assert!(matches!(start.finish().await, Err(TransitionError::Cancelled)));
        assert!(!lock.is_locked());
        assert!(pages.engine().state().is_idle());

        // Nothing fires after the cancel.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(navigator.current_location(), "/");

        // The engine accepts the next run.
        pages
            .slide_right("/publications", TransitionOptions::new())
            .await
            .unwrap();
        assert_eq!(navigator.current_location(), "/publications");
        assert_eq!(lock.acquisitions(), 2);
    }
}
