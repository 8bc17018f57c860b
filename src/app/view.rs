// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery page is always drawn; the opened project's modal layer and
//! the toasts are stacked on top of it.

use super::{Message, ViewerMedia};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery::{details, grid, selection};
use crate::ui::notifications;
use crate::ui::styles;
use crate::ui::viewer;
use iced::widget::{container, stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a selection::State,
    /// Whether background scrolling is suspended.
    pub locked: bool,
    pub thumbnails: &'a ImageCache,
    pub media: Option<&'a ViewerMedia>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the gallery, the opened project and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = container(
        grid::view(
            ctx.gallery,
            grid::ViewContext {
                i18n: ctx.i18n,
                thumbnails: ctx.thumbnails,
                locked: ctx.locked,
            },
        )
        .map(Message::Gallery),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = stack![page].width(Length::Fill).height(Length::Fill);

    if let (Some(project), Some(viewer_state)) =
        (ctx.gallery.open_project_ref(), ctx.gallery.viewer())
    {
        // Pixels decoded for a superseded load are never shown.
        let media = ctx
            .media
            .filter(|media| media.ticket == viewer_state.current_ticket());
        let sheet = details::view(
            project,
            viewer_state,
            details::ViewContext {
                i18n: ctx.i18n,
                media: viewer::ViewContext {
                    i18n: ctx.i18n,
                    media: media.map(|m| &m.image),
                    magnified: media.and_then(|m| m.magnified.as_ref()),
                    poster: ctx.thumbnails.peek(ctx.thumbnails.cover_url(project)),
                },
            },
        );
        layers = layers.push(sheet.map(Message::Gallery));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    layers.into()
}
