// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the carousel to its host window: it loads the
//! configuration and the slide source at boot, mounts the carousel once the
//! slides arrive, forwards window and input events to it, and destroys it
//! before the window closes.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{Carousel, CarouselConfig, Controls};
use crate::domain::carousel::AutoplayInterval;
use crate::i18n::fluent::I18n;
use crate::slides::{self, SlideDeck};
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Where the slide content is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SlideState {
    #[default]
    Loading,
    Ready(SlideDeck),
    Failed,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    carousel_config: CarouselConfig,
    controls: Controls,
    window_width: f32,
    slides: SlideState,
    carousel: Option<Carousel>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_width", &self.window_width)
            .field("carousel_mounted", &self.carousel.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme: Theme::Dark,
            carousel_config: CarouselConfig::default(),
            controls: Controls::default(),
            window_width: config::DEFAULT_WINDOW_WIDTH,
            slides: SlideState::default(),
            carousel: None,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .exit_on_close_request(false)
        .run()
}

impl App {
    /// Loads config and translations, then starts loading the slide source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut carousel_config = config.to_carousel_config();
        if let Some(millis) = flags.autoplay_ms {
            carousel_config.autoplay_interval = AutoplayInterval::new(millis);
        }
        if flags.no_autoplay {
            carousel_config.autoplay = false;
        }

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.theme(),
            carousel_config,
            controls: if flags.no_controls {
                Controls::NONE
            } else {
                Controls::BOTH
            },
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let source = flags.source.map(PathBuf::from);
        let sort_order = config.sort_order();
        let load = Task::perform(slides::load(source, sort_order), Message::SlidesLoaded);
        let measure = window::latest()
            .and_then(window::size)
            .map(Message::WindowResized);

        (app, Task::batch([load, measure]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.carousel {
            Some(carousel) if carousel.slide_count() > 0 => {
                let current = (carousel.current_index() + 1).to_string();
                let total = carousel.page_count().to_string();
                self.i18n.tr_with_args(
                    "window-title-with-page",
                    &[
                        ("app", app_name.as_str()),
                        ("current", current.as_str()),
                        ("total", total.as_str()),
                    ],
                )
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_carousel_subscription(self.carousel.as_ref()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            carousel: &mut self.carousel,
            carousel_config: self.carousel_config,
            controls: self.controls,
            slides: &mut self.slides,
            window_width: &mut self.window_width,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(&mut ctx, carousel_message)
            }
            Message::SlidesLoaded(result) => update::handle_slides_loaded(&mut ctx, result),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            slides: &self.slides,
            carousel: self.carousel.as_ref(),
            notifications: &self.notifications,
        })
    }
}
