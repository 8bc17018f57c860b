// SPDX-License-Identifier: MPL-2.0
//! Rendering of the media panel of an opened project.
//!
//! The panel has a fixed size so that pointer positions reported by the
//! surrounding `mouse_area` map directly onto [`panel_bounds`].

use crate::domain::viewer::{LoadState, MediaMode, Pointer, Rect};
use crate::error::MediaLoadError;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{Message, State};
use crate::ui::viewer::video_controls::{self, ControlsState};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, image, mouse_area, stack, text};
use iced::{mouse, ContentFit, Element, Length};

/// Pixels the viewer needs to render an opened project.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Decoded current image (image modes).
    pub media: Option<&'a ImageData>,
    /// Magnified crop of `media`, when zoomed.
    pub magnified: Option<&'a ImageData>,
    /// Still frame shown behind the video controls.
    pub poster: Option<&'a ImageData>,
}

/// Bounds of the media panel, relative to itself.
#[must_use]
pub fn panel_bounds() -> Rect {
    Rect::sized(sizing::MEDIA_PANEL_WIDTH, sizing::MEDIA_PANEL_HEIGHT)
}

/// Renders the media panel: the media surface plus its overlays.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bounds = panel_bounds();

    let surface: Element<'a, Message> = match state.load_state() {
        LoadState::Loading => placeholder(ctx.i18n.tr("viewer-loading")),
        LoadState::Error => error_view(ctx.i18n, state.load_error()),
        LoadState::Loaded => loaded_surface(state, &ctx),
    };

    let interaction = if state.mode().is_video() || state.load_state() != LoadState::Loaded {
        mouse::Interaction::Pointer
    } else if state.is_zoomed() {
        mouse::Interaction::ZoomOut
    } else {
        mouse::Interaction::ZoomIn
    };

    let tracked = mouse_area(surface)
        .on_move(move |point| Message::PointerMoved {
            pointer: Pointer::new(point.x, point.y),
            bounds,
        })
        .on_press(Message::MediaPressed {
            pointer: state.press_position(bounds),
            bounds,
        })
        .interaction(interaction);

    let mut layers = stack![tracked]
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height));

    match state.mode() {
        MediaMode::BeforeAfter { .. } => {
            layers = layers.push(variant_overlay(state, ctx.i18n));
        }
        MediaMode::Video { .. } => {
            layers = layers.push(controls_overlay(state, ctx.i18n));
        }
        MediaMode::Single { .. } => {}
    }
    if state.mode().supports_zoom() && state.load_state() == LoadState::Loaded {
        layers = layers.push(zoom_hint(state, ctx.i18n));
    }

    layers.into()
}

fn loaded_surface<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let shown = if state.mode().is_video() {
        ctx.poster
    } else if state.is_zoomed() {
        ctx.magnified.or(ctx.media)
    } else {
        ctx.media
    };

    match shown {
        Some(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None if state.mode().is_video() => container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
        None => placeholder(ctx.i18n.tr("viewer-loading")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn error_view<'a>(i18n: &I18n, error: Option<&MediaLoadError>) -> Element<'a, Message> {
    let detail = error.map(|error| match error {
        MediaLoadError::Http(status) => {
            i18n.tr_with_args(error.i18n_key(), &[("status", &status.to_string())])
        }
        _ => i18n.tr(error.i18n_key()),
    });

    let mut content = column![text(i18n.tr("error-media-title")).size(typography::TITLE_SM)]
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);
    if let Some(detail) = detail {
        content = content.push(text(detail).size(typography::BODY));
    }

    container(
        container(content)
            .padding(spacing::LG)
            .style(styles::container::error),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}

/// "Before"/"After" badge and the variant toggle.
fn variant_overlay<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let (badge_key, toggle_key) = if state.showing_alternate() {
        ("viewer-badge-before", "viewer-view-edited")
    } else {
        ("viewer-badge-after", "viewer-view-original")
    };

    let badge = container(text(i18n.tr(badge_key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge);

    let toggle = button(text(i18n.tr(toggle_key)).size(typography::CAPTION))
        .on_press(Message::ToggleVariant)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::overlay);

    column![
        container(badge).width(Length::Fill).height(Length::Fill),
        container(toggle)
            .width(Length::Fill)
            .align_x(Horizontal::Right),
    ]
    .padding(spacing::MD)
    .into()
}

fn zoom_hint<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let key = if state.is_zoomed() {
        "viewer-zoom-out-hint"
    } else {
        "viewer-zoom-hint"
    };
    container(
        container(text(i18n.tr(key)).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(spacing::MD)
    .into()
}

fn controls_overlay<'a>(state: &State, i18n: &'a I18n) -> Element<'a, Message> {
    let controls = match (state.playback(), state.displayed_progress()) {
        (Some(playback), Some(displayed_progress)) => video_controls::view(
            video_controls::ViewContext { i18n },
            ControlsState {
                playback,
                displayed_progress,
                duration_secs: state.duration_secs().unwrap_or(0.0),
                enabled: state.load_state() == LoadState::Loaded,
            },
        ),
        _ => return container(text("")).into(),
    };

    container(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Category, Project};
    use crate::domain::viewer::SessionCounter;

    fn open(project: &Project) -> State {
        State::open(project, SessionCounter::new().issue()).0
    }

    #[test]
    fn panel_bounds_match_design_tokens() {
        let bounds = panel_bounds();
        assert_eq!(bounds.width, sizing::MEDIA_PANEL_WIDTH);
        assert_eq!(bounds.height, sizing::MEDIA_PANEL_HEIGHT);
        assert_eq!((bounds.left, bounds.top), (0.0, 0.0));
    }

    #[test]
    fn every_mode_and_status_renders() {
        let i18n = I18n::default();
        let image = ImageData::from_rgba(2, 2, vec![255; 16]);
        let projects = [
            Project::new(1, "Single", Category::Food, "a.jpg"),
            Project::new(2, "Pair", Category::Food, "a.jpg").with_alternate("b.jpg"),
            Project::new(3, "Reel", Category::Food, "a.jpg").with_video("a.mp4", Some(4.0)),
        ];

        for project in &projects {
            let mut state = open(project);
            let ctx = || ViewContext {
                i18n: &i18n,
                media: Some(&image),
                magnified: None,
                poster: Some(&image),
            };
            drop(view(&state, ctx()));

            let ticket = state.current_ticket();
            state.on_load(ticket);
            drop(view(&state, ctx()));

            let mut failed = open(project);
            let ticket = failed.current_ticket();
            failed.on_error(ticket, MediaLoadError::Http(404));
            drop(view(&failed, ctx()));
        }
    }
}
