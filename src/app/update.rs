// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery and viewer effects become load tasks or clock changes here.
//! Load results come back as tagged messages and are forwarded to the
//! viewer, which decides whether they are still current.

use super::message::Shortcut;
use super::persistence;
use super::{Message, ViewerMedia};
use crate::config::Config;
use crate::domain::viewer::{magnified_region, LoadTicket, Magnification};
use crate::error::MediaLoadError;
use crate::media::image::THUMBNAIL_EDGE;
use crate::media::{ImageCache, ImageData, MediaFetcher, PlaybackClock, VideoProbe};
use crate::ui::gallery::selection;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::{self, LoadRequest, MediaKind};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub gallery: &'a mut selection::State,
    pub thumbnails: &'a mut ImageCache,
    pub fetcher: Option<&'a MediaFetcher>,
    pub magnification: Magnification,
    pub media: &'a mut Option<ViewerMedia>,
    pub clock: &'a mut Option<PlaybackClock>,
    pub notifications: &'a mut notifications::Manager,
}

/// Main update dispatch.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => {
            let effect = ctx.gallery.handle(message);
            handle_gallery_effect(ctx, effect)
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::ThumbnailLoaded { url, result } => handle_thumbnail_loaded(ctx, url, result),
        Message::ImageLoaded { ticket, result } => handle_image_loaded(ctx, ticket, result),
        Message::VideoProbed { ticket, result } => handle_video_probed(ctx, ticket, result),
        Message::PlaybackTick => handle_playback_tick(ctx),
        Message::Shortcut(shortcut) => handle_shortcut(ctx, shortcut),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GALLERY
// ═══════════════════════════════════════════════════════════════════════════

fn handle_gallery_effect(ctx: &mut UpdateContext<'_>, effect: selection::Effect) -> Task<Message> {
    match effect {
        selection::Effect::None => Task::none(),
        selection::Effect::FilterChanged(filter) => {
            log::info!("gallery filter set to {}", filter.slug());
            if let Some(key) = persistence::persist_category(ctx.config, filter) {
                ctx.notifications.push(Notification::warning(key));
            }
            request_thumbnails(ctx)
        }
        selection::Effect::ProjectOpened { id, request } => {
            log::debug!("opened project {id}");
            *ctx.media = None;
            *ctx.clock = None;
            Task::batch([load_media(ctx.fetcher, request), request_poster(ctx)])
        }
        selection::Effect::ProjectClosed(id) => {
            log::debug!("closed project {id}");
            *ctx.media = None;
            *ctx.clock = None;
            Task::none()
        }
        selection::Effect::UnknownProject(id) => {
            log::warn!("project {id} is not in the catalog");
            ctx.notifications
                .push(Notification::warning("notification-unknown-project"));
            Task::none()
        }
        selection::Effect::Viewer(effect) => handle_viewer_effect(ctx, effect),
    }
}

/// Starts thumbnail loads for visible projects not cached or in flight.
pub fn request_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let thumbnails = &*ctx.thumbnails;
    let urls: Vec<&str> = ctx
        .gallery
        .visible_projects()
        .map(|project| thumbnails.cover_url(project))
        .collect();
    let missing = ctx.thumbnails.claim_missing(urls);
    if missing.is_empty() {
        return Task::none();
    }
    log::debug!("loading {} thumbnail(s)", missing.len());
    Task::batch(
        missing
            .into_iter()
            .map(|url| load_thumbnail(ctx.fetcher, url)),
    )
}

/// The video poster is the project's cover thumbnail.
fn request_poster(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(project) = ctx.gallery.open_project_ref() else {
        return Task::none();
    };
    if project.video_url.is_none() {
        return Task::none();
    }
    let url = ctx.thumbnails.cover_url(project);
    let missing = ctx.thumbnails.claim_missing(std::iter::once(url));
    Task::batch(
        missing
            .into_iter()
            .map(|url| load_thumbnail(ctx.fetcher, url)),
    )
}

fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<ImageData, MediaLoadError>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            if !ctx.thumbnails.insert(url.clone(), image) {
                log::debug!("thumbnail {url} exceeds the cache budget");
            }
            Task::none()
        }
        Err(err) => {
            log::warn!("thumbnail {url} failed: {err}");
            ctx.thumbnails.mark_failed(&url);
            // Covers of the failed URL now resolve to their fallback.
            Task::batch([request_thumbnails(ctx), request_poster(ctx)])
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWER
// ═══════════════════════════════════════════════════════════════════════════

fn forward_to_viewer(ctx: &mut UpdateContext<'_>, message: viewer::Message) -> Task<Message> {
    let effect = ctx.gallery.handle(selection::Message::Viewer(message));
    handle_gallery_effect(ctx, effect)
}

fn handle_viewer_effect(ctx: &mut UpdateContext<'_>, effect: viewer::Effect) -> Task<Message> {
    match effect {
        viewer::Effect::None | viewer::Effect::ProgressChanged(_) => Task::none(),
        viewer::Effect::LoadMedia(request) => {
            *ctx.media = None;
            load_media(ctx.fetcher, request)
        }
        viewer::Effect::ZoomChanged => {
            refresh_magnifier(ctx);
            Task::none()
        }
        viewer::Effect::MediaReady => {
            let Some(viewer) = ctx.gallery.viewer() else {
                return Task::none();
            };
            if viewer.mode().is_video() {
                let duration = viewer.duration_secs().unwrap_or(0.0);
                log::debug!("video ready, {duration:.1}s");
                *ctx.clock = Some(PlaybackClock::new(duration));
            } else {
                refresh_magnifier(ctx);
            }
            Task::none()
        }
        viewer::Effect::MediaFailed(err) => {
            log::warn!("media failed: {err}");
            *ctx.media = None;
            if let Some(clock) = ctx.clock.as_mut() {
                clock.pause();
            }
            Task::none()
        }
        viewer::Effect::StaleCallback(ticket) => {
            log::debug!("dropped stale callback {ticket:?}");
            Task::none()
        }
        viewer::Effect::PlaybackChanged { is_playing } => {
            if let Some(clock) = ctx.clock.as_mut() {
                if is_playing {
                    clock.play(Instant::now());
                } else {
                    clock.pause();
                }
            }
            Task::none()
        }
        viewer::Effect::MuteChanged { is_muted } => {
            log::debug!("muted: {is_muted}");
            Task::none()
        }
        viewer::Effect::SeekTo { position_secs } => {
            if let Some(clock) = ctx.clock.as_mut() {
                clock.seek(position_secs, Instant::now());
            }
            Task::none()
        }
    }
}

fn load_media(fetcher: Option<&MediaFetcher>, request: LoadRequest) -> Task<Message> {
    let LoadRequest { ticket, url, kind } = request;
    log::debug!("loading {url} ({kind:?}) for {ticket:?}");
    let fetcher = fetcher.cloned();

    match kind {
        MediaKind::Image => Task::perform(
            async move {
                match fetcher {
                    Some(fetcher) => fetcher.load_image(&url).await,
                    None => Err(client_unavailable()),
                }
            },
            move |result| Message::ImageLoaded { ticket, result },
        ),
        MediaKind::Video => Task::perform(
            async move {
                match fetcher {
                    Some(fetcher) => fetcher.probe_video(&url).await,
                    None => Err(client_unavailable()),
                }
            },
            move |result| Message::VideoProbed { ticket, result },
        ),
    }
}

fn load_thumbnail(fetcher: Option<&MediaFetcher>, url: String) -> Task<Message> {
    let fetcher = fetcher.cloned();
    Task::perform(
        async move {
            let result = match fetcher {
                Some(fetcher) => fetcher.load_thumbnail(&url, THUMBNAIL_EDGE).await,
                None => Err(client_unavailable()),
            };
            (url, result)
        },
        |(url, result)| Message::ThumbnailLoaded { url, result },
    )
}

fn client_unavailable() -> MediaLoadError {
    MediaLoadError::Network("HTTP client unavailable".to_string())
}

fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<ImageData, MediaLoadError>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            let is_current = ctx
                .gallery
                .viewer()
                .is_some_and(|viewer| viewer.current_ticket() == ticket);
            if is_current {
                *ctx.media = Some(ViewerMedia {
                    ticket,
                    image,
                    magnified: None,
                    region: None,
                });
            }
            forward_to_viewer(ctx, viewer::Message::MediaLoaded(ticket))
        }
        Err(error) => forward_to_viewer(ctx, viewer::Message::MediaFailed { ticket, error }),
    }
}

fn handle_video_probed(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<VideoProbe, MediaLoadError>,
) -> Task<Message> {
    match result {
        Ok(probe) => {
            log::debug!("video probe for {ticket:?}: {:?} bytes", probe.size_bytes);
            forward_to_viewer(ctx, viewer::Message::MetadataLoaded(ticket))
        }
        Err(error) => forward_to_viewer(ctx, viewer::Message::MediaFailed { ticket, error }),
    }
}

fn handle_playback_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some((current_secs, duration_secs)) =
        ctx.clock.as_mut().and_then(|clock| clock.tick(Instant::now()))
    else {
        return Task::none();
    };
    let Some(ticket) = ctx.gallery.viewer().map(viewer::State::current_ticket) else {
        return Task::none();
    };
    forward_to_viewer(
        ctx,
        viewer::Message::TimeUpdate {
            ticket,
            current_secs,
            duration_secs,
        },
    )
}

/// Recomputes the magnified crop from the viewer's zoom state.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn refresh_magnifier(ctx: &mut UpdateContext<'_>) {
    let Some(media) = ctx.media.as_mut() else {
        return;
    };
    let zoom = ctx
        .gallery
        .viewer()
        .filter(|viewer| viewer.is_zoomed() && viewer.current_ticket() == media.ticket)
        .map(viewer::State::zoom_focus);

    let Some(focus) = zoom else {
        media.magnified = None;
        media.region = None;
        return;
    };
    let region = magnified_region(
        focus,
        media.image.width,
        media.image.height,
        ctx.magnification,
    );
    // Pointer moves within one source pixel keep the current crop.
    if media.magnified.is_some() && media.region == Some(region) {
        return;
    }
    let panel = viewer::panel_bounds();
    media.magnified = media
        .image
        .magnified(region, panel.width as u32, panel.height as u32);
    media.region = media.magnified.as_ref().map(|_| region);
}

// ═══════════════════════════════════════════════════════════════════════════
// KEYBOARD
// ═══════════════════════════════════════════════════════════════════════════

fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    if !ctx.gallery.is_open() {
        return Task::none();
    }
    let message = match shortcut {
        Shortcut::CloseProject => {
            let effect = ctx.gallery.close_project();
            return handle_gallery_effect(ctx, effect);
        }
        Shortcut::TogglePlayback => viewer::Message::TogglePlayback,
        Shortcut::ToggleVariant => viewer::Message::ToggleVariant,
        Shortcut::ToggleMute => viewer::Message::ToggleMute,
    };
    forward_to_viewer(ctx, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Category, Project, ProjectId};
    use crate::ui::gallery::ScrollLock;
    use std::sync::Arc;

    struct Fixture {
        config: Config,
        gallery: selection::State,
        thumbnails: ImageCache,
        media: Option<ViewerMedia>,
        clock: Option<PlaybackClock>,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Catalog::new(vec![
                Project::new(1, "Lobby", Category::ArchitectureInterior, "lobby.jpg"),
                Project::new(2, "Reel", Category::Commercial, "reel.jpg")
                    .with_video("reel.mp4", None),
            ]);
            Self {
                config: Config::default(),
                gallery: selection::State::new(catalog, Arc::new(ScrollLock::new())),
                thumbnails: ImageCache::default(),
                media: None,
                clock: None,
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                config: &mut self.config,
                gallery: &mut self.gallery,
                thumbnails: &mut self.thumbnails,
                fetcher: None,
                magnification: Magnification::default(),
                media: &mut self.media,
                clock: &mut self.clock,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn request_thumbnails_claims_each_url_once() {
        let mut fixture = Fixture::new();
        let _ = request_thumbnails(&mut fixture.ctx());
        assert!(fixture.thumbnails.is_pending("lobby.jpg"));
        assert!(fixture.thumbnails.is_pending("reel.jpg"));

        let again = fixture
            .thumbnails
            .claim_missing(["lobby.jpg", "reel.jpg"]);
        assert!(again.is_empty());
    }

    #[test]
    fn shortcuts_are_ignored_without_open_project() {
        let mut fixture = Fixture::new();
        let _ = handle_shortcut(&mut fixture.ctx(), Shortcut::CloseProject);
        assert!(!fixture.gallery.is_open());
        assert!(fixture.notifications.visible().next().is_none());
    }

    #[test]
    fn video_without_catalog_duration_gets_zero_length_clock() {
        let mut fixture = Fixture::new();
        let _ = update(
            &mut fixture.ctx(),
            Message::Gallery(selection::Message::OpenProject(ProjectId(2))),
        );
        let ticket = fixture
            .gallery
            .viewer()
            .map(viewer::State::current_ticket)
            .expect("open");

        let _ = update(
            &mut fixture.ctx(),
            Message::VideoProbed {
                ticket,
                result: Ok(VideoProbe { size_bytes: Some(1024) }),
            },
        );
        assert!(fixture.clock.as_ref().is_some_and(|c| c.duration_secs() == 0.0));
    }

    #[test]
    fn failed_probe_reports_error() {
        let mut fixture = Fixture::new();
        let _ = update(
            &mut fixture.ctx(),
            Message::Gallery(selection::Message::OpenProject(ProjectId(2))),
        );
        let ticket = fixture
            .gallery
            .viewer()
            .map(viewer::State::current_ticket)
            .expect("open");

        let _ = update(
            &mut fixture.ctx(),
            Message::VideoProbed {
                ticket,
                result: Err(MediaLoadError::Http(404)),
            },
        );
        let viewer = fixture.gallery.viewer().expect("open");
        assert!(viewer.load_state().is_error());
        assert!(fixture.clock.is_none());
    }

    #[test]
    fn tick_without_clock_does_nothing() {
        let mut fixture = Fixture::new();
        let _ = handle_playback_tick(&mut fixture.ctx());
        assert!(fixture.clock.is_none());
    }
}
