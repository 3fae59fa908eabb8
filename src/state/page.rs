/// Page-level state machine
///
/// The page root owns the only mutable state on screen: the active tab and
/// the slideshow position. Everything else is derived from it at render time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::data::IMAGES;
use super::timer::SlideTimer;

/// The three tab panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Breeds,
    Care,
}

impl Tab {
    /// All tabs in trigger order
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Breeds, Tab::Care];

    /// Trigger label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Breeds => "Breeds",
            Tab::Care => "Care Tips",
        }
    }
}

/// How the image presenter moves between pictures
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresenterMode {
    /// Previous/next controls, no timer
    Manual,
    /// Fixed-interval slideshow with dot indicators
    #[default]
    AutoAdvance,
}

/// State owned by the page root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    tab: Tab,
    /// Always `< image_count`
    position: usize,
    image_count: usize,
    mode: PresenterMode,
    slide_interval: Duration,
    /// Armed only while mounted in auto-advance mode
    timer: Option<SlideTimer>,
}

impl PageState {
    /// Create an unmounted page over the built-in image list
    pub fn new(mode: PresenterMode, slide_interval: Duration) -> Self {
        Self::with_image_count(mode, slide_interval, IMAGES.len())
    }

    /// Create an unmounted page over `image_count` images (at least one)
    pub fn with_image_count(mode: PresenterMode, slide_interval: Duration, image_count: usize) -> Self {
        Self {
            tab: Tab::default(),
            position: 0,
            image_count: image_count.max(1),
            mode,
            slide_interval,
            timer: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn mode(&self) -> PresenterMode {
        self.mode
    }

    /// Interval of the armed timer, None when no timer is running
    pub fn timer_interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(SlideTimer::interval)
    }

    /// Arm the slideshow timer (auto-advance mode only)
    pub fn mount(&mut self) {
        if self.mode == PresenterMode::AutoAdvance && self.timer.is_none() {
            self.timer = Some(SlideTimer::new(self.slide_interval));
            tracing::debug!("⏱️  Slideshow timer armed ({:?})", self.slide_interval);
        }
    }

    /// Drop the slideshow timer. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!("⏱️  Slideshow timer released");
        }
    }

    /// Switch the active tab. Returns true if the selection changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        tracing::debug!("Tab {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
        true
    }

    /// Step forward one image, wrapping at the end
    pub fn advance_image(&mut self) {
        self.position = (self.position + 1) % self.image_count;
    }

    /// Step back one image, wrapping at the start
    pub fn previous_image(&mut self) {
        self.position = (self.position + self.image_count - 1) % self.image_count;
    }

    /// Feed elapsed clock time to the slideshow and apply every firing it
    /// causes. Ignored unless the timer is armed, so ticks queued before an
    /// unmount cannot move the slideshow.
    pub fn elapse(&mut self, elapsed: Duration) -> u32 {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.elapse(elapsed),
            None => 0,
        };
        for _ in 0..fired {
            self.advance_image();
        }
        if fired > 0 {
            tracing::debug!("🖼️  Slide advanced to {}", self.position);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timer::DEFAULT_SLIDE_INTERVAL;

    fn auto_page() -> PageState {
        PageState::new(PresenterMode::AutoAdvance, DEFAULT_SLIDE_INTERVAL)
    }

    #[test]
    fn test_initial_state() {
        let page = auto_page();
        assert_eq!(page.tab(), Tab::Overview);
        assert_eq!(page.position(), 0);
        assert!(page.timer_interval().is_none());
    }

    #[test]
    fn test_select_tab_reads_back() {
        let mut page = auto_page();
        for tab in Tab::ALL {
            page.select_tab(tab);
            assert_eq!(page.tab(), tab);
        }
    }

    #[test]
    fn test_select_tab_is_idempotent() {
        let mut page = auto_page();
        assert!(page.select_tab(Tab::Care));
        assert!(!page.select_tab(Tab::Care));
        assert_eq!(page.tab(), Tab::Care);
    }

    #[test]
    fn test_advance_is_cyclic() {
        let mut page = auto_page();
        page.advance_image();
        let start = page.position();

        for _ in 0..page.image_count() {
            page.advance_image();
        }
        assert_eq!(page.position(), start);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut page = PageState::new(PresenterMode::Manual, DEFAULT_SLIDE_INTERVAL);
        page.previous_image();
        assert_eq!(page.position(), 2);
        page.advance_image();
        assert_eq!(page.position(), 0);
    }

    #[test]
    fn test_position_stays_in_range() {
        let mut page = auto_page();
        for step in 0..20 {
            if step % 3 == 0 {
                page.previous_image();
            } else {
                page.advance_image();
            }
            assert!(page.position() < page.image_count());
        }
    }

    #[test]
    fn test_mount_then_select_breeds() {
        let mut page = auto_page();
        page.mount();
        assert_eq!((page.tab(), page.position()), (Tab::Overview, 0));

        page.select_tab(Tab::Breeds);
        assert_eq!((page.tab(), page.position()), (Tab::Breeds, 0));
    }

    #[test]
    fn test_fifteen_seconds_returns_to_start() {
        let mut page = auto_page();
        page.mount();

        let fired = page.elapse(Duration::from_millis(15000));
        assert_eq!(fired, 3);
        assert_eq!(page.position(), 0);
    }

    #[test]
    fn test_slideshow_steps_every_interval() {
        let mut page = auto_page();
        page.mount();

        page.elapse(Duration::from_millis(5000));
        assert_eq!(page.position(), 1);
        page.elapse(Duration::from_millis(2500));
        assert_eq!(page.position(), 1);
        page.elapse(Duration::from_millis(2500));
        assert_eq!(page.position(), 2);
    }

    #[test]
    fn test_unmount_stops_mutation() {
        let mut page = auto_page();
        page.mount();
        page.elapse(Duration::from_millis(3000));

        page.unmount();
        assert_eq!(page.elapse(Duration::from_millis(60000)), 0);
        assert_eq!(page.position(), 0);
    }

    #[test]
    fn test_manual_mode_never_arms_timer() {
        let mut page = PageState::new(PresenterMode::Manual, DEFAULT_SLIDE_INTERVAL);
        page.mount();

        assert!(page.timer_interval().is_none());
        assert_eq!(page.elapse(Duration::from_millis(20000)), 0);
    }

    #[test]
    fn test_remount_restarts_interval() {
        let mut page = auto_page();
        page.mount();
        page.elapse(Duration::from_millis(4000));

        page.unmount();
        page.mount();
        assert_eq!(page.elapse(Duration::from_millis(4000)), 0);
        assert_eq!(page.elapse(Duration::from_millis(1000)), 1);
        assert_eq!(page.position(), 1);
    }

    #[test]
    fn test_presenter_mode_serde_names() {
        let mode: PresenterMode = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(mode, PresenterMode::Manual);
        assert_eq!(
            serde_json::to_string(&PresenterMode::AutoAdvance).unwrap(),
            "\"auto_advance\""
        );
    }
}
