use std::time::{Duration, Instant};

/// In-session bookkeeping shown alongside the board. Nothing here outlives the process.
pub struct GameMetrics {
    pub started_at: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub last_score: Option<u32>,
    pub games_played: u32,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            last_score: None,
            games_played: 0,
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    /// Refresh the elapsed time of the current game. Frozen while paused.
    pub fn update(&mut self) {
        if self.paused_at.is_some() {
            return;
        }
        self.elapsed = self.started_at.elapsed().saturating_sub(self.paused_total);
    }

    /// Stop or restart the game clock; time spent paused is not counted
    pub fn set_paused(&mut self, paused: bool) {
        match (paused, self.paused_at) {
            (true, None) => {
                self.update();
                self.paused_at = Some(Instant::now());
            }
            (false, Some(since)) => {
                self.paused_total += since.elapsed();
                self.paused_at = None;
            }
            _ => {}
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
        self.paused_at = None;
        self.paused_total = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.games_played += 1;
        self.last_score = Some(final_score);
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.last_score, None);

        metrics.on_game_over(17);
        assert_eq!(metrics.best_score, 17);
        assert_eq!(metrics.last_score, Some(17));
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 17);
        assert_eq!(metrics.last_score, Some(5));
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_paused_time_not_counted() {
        let mut metrics = GameMetrics::new();
        metrics.set_paused(true);
        assert!(metrics.is_paused());

        std::thread::sleep(Duration::from_millis(80));
        metrics.update();
        assert!(metrics.elapsed.as_millis() < 40);

        metrics.set_paused(false);
        metrics.update();
        assert!(!metrics.is_paused());
        assert!(metrics.elapsed.as_millis() < 40);
    }

    #[test]
    fn test_set_paused_is_idempotent() {
        let mut metrics = GameMetrics::new();
        metrics.set_paused(false);
        assert!(!metrics.is_paused());

        metrics.set_paused(true);
        metrics.set_paused(true);
        assert!(metrics.is_paused());

        metrics.on_game_start();
        assert!(!metrics.is_paused());
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert!(metrics.elapsed.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed.as_millis() < 50);
    }
}
