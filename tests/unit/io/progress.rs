//! Tests for the throttled progress bar

#[cfg(test)]
mod tests {
    use dominotile::algorithm::GenerationStats;
    use dominotile::io::configuration::PROGRESS_REFRESH_INTERVAL;
    use dominotile::io::progress::ProgressManager;

    // Tests the first update is drawn and the next ones are throttled
    // Verified by redrawing on every update
    #[test]
    fn test_update_throttled() {
        let stats = GenerationStats::default();
        let mut pm = ProgressManager::hidden(32);
        pm.start_attempt(0, 42);

        pm.update(3, &stats);
        assert_eq!(pm.position(), 3);

        pm.update(4, &stats);
        assert_eq!(pm.position(), 3);

        for _ in 2..PROGRESS_REFRESH_INTERVAL {
            pm.update(5, &stats);
        }
        assert_eq!(pm.position(), 3);

        pm.update(6, &stats);
        assert_eq!(pm.position(), 6);
    }

    // Tests a new attempt resets position and throttling
    // Verified by keeping the update counter across attempts
    #[test]
    fn test_start_attempt_resets() {
        let stats = GenerationStats::default();
        let mut pm = ProgressManager::hidden(8);
        pm.start_attempt(0, 1);
        pm.update(7, &stats);
        pm.update(2, &stats);

        pm.start_attempt(1, 2);
        assert_eq!(pm.position(), 0);
        pm.update(2, &stats);
        assert_eq!(pm.position(), 2);
    }

    // Tests finishing records the final tile count
    // Verified by leaving the position unchanged on finish
    #[test]
    fn test_finish() {
        let pm = ProgressManager::hidden(4);
        pm.finish(4, "done");
        assert_eq!(pm.position(), 4);
    }

    // Tests a visible manager can be created and driven
    #[test]
    fn test_visible_manager() {
        let mut pm = ProgressManager::new(2);
        pm.start_attempt(0, 0);
        pm.update(1, &GenerationStats::default());
        pm.finish(2, "done");
        assert_eq!(pm.position(), 2);
    }
}
