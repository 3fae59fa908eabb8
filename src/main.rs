use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod gallery;
mod state;
mod ui;

use config::PageConfig;
use error::FetchError;
use gallery::Gallery;
use state::data::{BADGES, IMAGES};
use state::page::{PageState, Tab};
use ui::style::Palette;
use ui::transition::{self, Transition};

/// Enter transitions currently on screen
#[derive(Debug, Clone, Copy)]
struct Animations {
    hero: Transition,
    panel: Transition,
    cards: Transition,
}

impl Animations {
    fn new(now: Instant) -> Self {
        Self {
            hero: Transition::enter(now, transition::HERO),
            panel: Transition::enter(now, transition::PANEL),
            cards: Transition::enter(now, transition::CARD),
        }
    }

    fn is_running(&self, now: Instant) -> bool {
        self.hero.is_running(now) || self.panel.is_running(now) || self.cards.is_running(now)
    }
}

/// Main application state
struct CatPage {
    /// Active tab and slideshow position
    page: PageState,
    /// Slideshow pictures
    gallery: Gallery,
    animations: Animations,
    /// Time of the latest animation frame
    now: Instant,
    /// Time of the latest slideshow tick (or mount)
    slide_clock: Instant,
    palette: Palette,
    dark_theme: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a tab trigger
    SelectTab(Tab),
    /// Manual carousel controls
    NextImage,
    PreviousImage,
    /// Slideshow clock tick
    SlideTick(Instant),
    /// Animation frame while a transition is running
    Frame(Instant),
    /// Background fetch of picture `usize` finished
    ImageLoaded(usize, Result<Handle, FetchError>),
    /// Badge clicked (visual feedback only)
    BadgePressed(&'static str),
    /// User asked to close the window
    CloseRequested(window::Id),
}

impl CatPage {
    /// Mount the page: arm the slideshow and start fetching pictures
    fn new(config: PageConfig) -> (Self, Task<Message>) {
        let mut page = PageState::new(config.presenter, config.slide_interval());
        page.mount();

        tracing::info!("🐈 All About Cats ready ({:?} presenter)", page.mode());

        let loads = IMAGES.iter().enumerate().map(|(index, record)| {
            Task::perform(
                gallery::fetch::fetch_picture(record.url.to_string()),
                move |result| Message::ImageLoaded(index, result),
            )
        });

        let now = Instant::now();
        (
            CatPage {
                page,
                gallery: Gallery::new(&IMAGES),
                animations: Animations::new(now),
                now,
                slide_clock: now,
                palette: Palette::for_theme(config.dark_theme),
                dark_theme: config.dark_theme,
            },
            Task::batch(loads),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                if self.page.select_tab(tab) {
                    self.now = Instant::now();
                    self.animations.panel = Transition::enter(self.now, transition::PANEL);
                    self.animations.cards = Transition::enter(self.now, transition::CARD);
                }
            }
            Message::NextImage => self.page.advance_image(),
            Message::PreviousImage => self.page.previous_image(),
            Message::SlideTick(at) => {
                let elapsed = at.saturating_duration_since(self.slide_clock);
                self.slide_clock = at;
                self.page.elapse(elapsed);
            }
            Message::Frame(now) => self.now = now,
            Message::ImageLoaded(index, result) => {
                self.gallery.finish(index, result);
                if self.gallery.ready_count() == self.gallery.len() {
                    tracing::info!("✅ All {} pictures loaded", self.gallery.len());
                }
            }
            Message::BadgePressed(label) => {
                tracing::debug!("Badge pressed: {}", label);
            }
            Message::CloseRequested(id) => {
                self.page.unmount();
                tracing::info!("👋 Page unmounted, closing window");
                return window::close(id);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tab = self.page.tab();

        let content = column![
            ui::hero::hero(self.animations.hero.motion(self.now), self.palette),
            ui::presenter::presenter(&self.page, &self.gallery, self.palette),
            column![
                ui::tabs::triggers(tab, self.palette),
                ui::tabs::panel(
                    tab,
                    self.animations.panel.motion(self.now),
                    self.animations.cards.motion(self.now),
                    self.palette,
                ),
            ],
            ui::breeds::badge_row(&BADGES, self.palette),
        ]
        .spacing(24)
        .max_width(896);

        let page = container(content).center_x(Length::Fill).padding(32);

        container(scrollable(page))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::page(self.palette))
            .into()
    }

    /// Timer, animation frames and close requests
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![window::close_requests().map(Message::CloseRequested)];

        // Only exists while the page holds an armed timer
        if let Some(interval) = self.page.timer_interval() {
            subscriptions.push(iced::time::every(interval).map(Message::SlideTick));
        }

        if self.animations.is_running(self.now) {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,cat_page=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = PageConfig::load();

    iced::application(ui::hero::TITLE, CatPage::update, CatPage::view)
        .subscription(CatPage::subscription)
        .theme(CatPage::theme)
        .exit_on_close_request(false)
        .centered()
        .run_with(move || CatPage::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::page::PresenterMode;
    use std::time::Duration;

    fn mounted(presenter: PresenterMode) -> CatPage {
        let config = PageConfig {
            presenter,
            ..PageConfig::default()
        };
        CatPage::new(config).0
    }

    #[test]
    fn test_mount_defaults() {
        let app = mounted(PresenterMode::AutoAdvance);

        assert_eq!(app.page.tab(), Tab::Overview);
        assert_eq!(app.page.position(), 0);
        assert_eq!(app.page.timer_interval(), Some(Duration::from_millis(5000)));
        assert_eq!(app.gallery.len(), IMAGES.len());
    }

    #[test]
    fn test_select_tab_restarts_panel_transition() {
        let mut app = mounted(PresenterMode::AutoAdvance);
        let later = app.now + Duration::from_secs(2);
        let _ = app.update(Message::Frame(later));
        assert!(!app.animations.is_running(later));

        let _ = app.update(Message::SelectTab(Tab::Breeds));

        assert_eq!(app.page.tab(), Tab::Breeds);
        assert_eq!(app.page.position(), 0);
        assert!(app.animations.panel.is_running(app.now));
    }

    #[test]
    fn test_reselecting_active_tab_does_not_animate() {
        let mut app = mounted(PresenterMode::AutoAdvance);
        let later = app.now + Duration::from_secs(2);
        let _ = app.update(Message::Frame(later));

        let _ = app.update(Message::SelectTab(Tab::Overview));
        assert!(!app.animations.is_running(app.now));
    }

    #[test]
    fn test_slide_ticks_advance_until_close() {
        let mut app = mounted(PresenterMode::AutoAdvance);
        let mount = app.slide_clock;

        let _ = app.update(Message::SlideTick(mount + Duration::from_millis(5000)));
        assert_eq!(app.page.position(), 1);
        let _ = app.update(Message::SlideTick(mount + Duration::from_millis(10000)));
        assert_eq!(app.page.position(), 2);

        let _ = app.update(Message::CloseRequested(window::Id::unique()));
        assert_eq!(app.page.timer_interval(), None);

        let _ = app.update(Message::SlideTick(mount + Duration::from_millis(15000)));
        assert_eq!(app.page.position(), 2);
    }

    #[test]
    fn test_manual_controls() {
        let mut app = mounted(PresenterMode::Manual);
        assert_eq!(app.page.timer_interval(), None);

        let _ = app.update(Message::PreviousImage);
        assert_eq!(app.page.position(), 2);
        let _ = app.update(Message::NextImage);
        let _ = app.update(Message::NextImage);
        assert_eq!(app.page.position(), 1);
    }

    #[test]
    fn test_failed_picture_is_recorded() {
        let mut app = mounted(PresenterMode::AutoAdvance);
        let _ = app.update(Message::ImageLoaded(
            2,
            Err(FetchError::Status {
                status: 403,
                url: IMAGES[2].url.to_string(),
            }),
        ));

        assert!(matches!(app.gallery.slot(2), Some(gallery::Slot::Failed(_))));
        assert_eq!(app.gallery.ready_count(), 0);
    }

    #[test]
    fn test_badge_press_changes_nothing() {
        let mut app = mounted(PresenterMode::AutoAdvance);
        let before = app.page.clone();

        let _ = app.update(Message::BadgePressed("Playful"));
        assert_eq!(app.page, before);
    }
}
