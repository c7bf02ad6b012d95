use chrono::Utc;

use pairdash_core::derived::DerivedMetrics;
use pairdash_core::runtime::FeedRuntime;

/// Badge text for the combined connection state: LIVE when at least one
/// feed reached its backend, ACTIVE when everything is fallback data.
pub fn connection_badge(stats_live: bool, observations_live: bool) -> &'static str {
    if stats_live || observations_live {
        "LIVE"
    } else {
        "ACTIVE"
    }
}

pub struct App {
    pub running: bool,
    pub feeds: FeedRuntime,
    /// Offset into the observation log, 0 = newest at top
    pub scroll_offset: usize,
    /// First Ctrl+C arms this; the second one quits
    pub pending_quit: bool,
    frame: u64,
}

impl App {
    pub fn new(feeds: FeedRuntime) -> Self {
        Self {
            running: true,
            feeds,
            scroll_offset: 0,
            pending_quit: false,
            frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Frame counter for the blinking cursor in the header
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn badge(&self) -> &'static str {
        connection_badge(
            self.feeds.stats().is_live(),
            self.feeds.observations().is_live(),
        )
    }

    /// Recomputed every render from the current snapshot and wall clock
    pub fn derived(&self) -> DerivedMetrics {
        DerivedMetrics::since(self.feeds.stats().snapshot().first_commit, Utc::now())
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.feeds.observations().entries().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.feeds.observations().entries().len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_is_live_when_either_feed_is_live() {
        assert_eq!(connection_badge(true, true), "LIVE");
        assert_eq!(connection_badge(true, false), "LIVE");
        assert_eq!(connection_badge(false, true), "LIVE");
    }

    #[test]
    fn test_badge_is_active_only_when_both_are_fallback() {
        assert_eq!(connection_badge(false, false), "ACTIVE");
    }
}
