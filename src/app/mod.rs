// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! viewer and the media loaders.
//!
//! The `App` struct owns the catalog selection model and everything the
//! models do not: decoded pixels, HTTP access, the playback
//! clock and persisted preferences. Component effects are turned into
//! load tasks here, and load results are fed back as tagged callbacks.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::catalog_loader;
use crate::config::{self, Config};
use crate::domain::catalog::CategoryFilter;
use crate::domain::viewer::{LoadTicket, Magnification, PixelRegion};
use crate::i18n::fluent::I18n;
use crate::media::{FetchConfig, ImageCache, ImageData, MediaFetcher, PlaybackClock};
use crate::ui::gallery::{scroll_lock::ScrollLock, selection};
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Notification key shown when the HTTP client cannot be built.
const HTTP_CLIENT_WARNING: &str = "notification-http-client-error";

/// Pixels decoded for the opened project, tagged with the load they
/// answer.
#[derive(Debug, Clone)]
pub(crate) struct ViewerMedia {
    pub ticket: LoadTicket,
    pub image: ImageData,
    /// Crop of `image` around the zoom focus, present while zoomed.
    pub magnified: Option<ImageData>,
    /// Source region `magnified` was cut from.
    pub region: Option<PixelRegion>,
}

/// Root Iced application state that bridges the gallery, localization,
/// media loading and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    gallery: selection::State,
    /// Shared with `gallery`; locked while a project is open.
    scroll_lock: Arc<ScrollLock>,
    thumbnails: ImageCache,
    /// `None` when the HTTP client could not be built.
    fetcher: Option<MediaFetcher>,
    magnification: Magnification,
    media: Option<ViewerMedia>,
    /// Present while a video project is opened and its source answered.
    clock: Option<PlaybackClock>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("filter", &self.gallery.active_filter())
            .field("open", &self.gallery.open_project_ref().map(|p| p.id))
            .field("has_media", &self.media.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
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
        .run()
}

impl App {
    /// Initializes application state and starts loading the thumbnails of
    /// the initially visible projects.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (loaded, catalog_warning) = catalog_loader::load_or_embedded(flags.catalog.as_deref());

        let fetch_config = FetchConfig {
            timeout: config.request_timeout(),
            max_bytes: config.max_download_bytes(),
            base_dir: loaded.base_dir.clone(),
        };

        let mut app = Self::with_catalog(i18n, config, loaded.catalog);
        app.fetcher = match MediaFetcher::new(fetch_config) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                log::error!("HTTP client unavailable: {err}");
                app.notifications
                    .push(notifications::Notification::error(HTTP_CLIENT_WARNING));
                None
            }
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = catalog_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let filter = match flags.category.as_deref() {
            Some(raw) => raw.parse::<CategoryFilter>().unwrap_or_else(|err| {
                log::warn!("Ignoring --category: {err}");
                app.notifications.push(
                    notifications::Notification::warning("notification-unknown-category")
                        .with_arg("category", raw),
                );
                CategoryFilter::All
            }),
            None => app.config.default_filter(),
        };
        // Selecting the startup filter is not a user choice; nothing is saved.
        let _ = app.gallery.set_category(filter);

        let task = update::request_thumbnails(&mut app.update_context());
        (app, task)
    }

    /// Builds the application around an already loaded catalog, without
    /// touching the disk or the network.
    fn with_catalog(i18n: I18n, config: Config, catalog: crate::domain::catalog::Catalog) -> Self {
        let scroll_lock = Arc::new(ScrollLock::new());
        let gallery = selection::State::new(catalog, scroll_lock.clone());
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            thumbnails: ImageCache::new(config.thumbnail_cache_mb()),
            magnification: config.magnification(),
            config,
            gallery,
            scroll_lock,
            fetcher: None,
            media: None,
            clock: None,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.gallery.open_project_ref() {
            Some(project) => format!("{} - {app_name}", project.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let playback_sub = subscription::create_playback_subscription(
            self.clock.as_ref().is_some_and(PlaybackClock::is_running),
        );
        let notification_sub =
            subscription::create_notification_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, playback_sub, notification_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::update(&mut ctx, message)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &mut self.config,
            gallery: &mut self.gallery,
            thumbnails: &mut self.thumbnails,
            fetcher: self.fetcher.as_ref(),
            magnification: self.magnification,
            media: &mut self.media,
            clock: &mut self.clock,
            notifications: &mut self.notifications,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            locked: self.scroll_lock.is_locked(),
            thumbnails: &self.thumbnails,
            media: self.media.as_ref(),
            notifications: &self.notifications,
        })
    }
}
