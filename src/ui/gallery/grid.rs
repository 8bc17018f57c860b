// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: heading, category chips and project cards.

use crate::domain::catalog::{CategoryFilter, Project};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::selection::{Message, State};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, image, mouse_area, row, scrollable, stack, text};
use iced::{mouse, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Decoded thumbnails keyed by media URL.
    pub thumbnails: &'a ImageCache,
    /// While a project is open, cards ignore hover and press input.
    pub locked: bool,
}

/// Renders the scrollable gallery page.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let visible: Vec<&Project> = state.visible_projects().collect();

    let header = column![
        text(ctx.i18n.tr("gallery-heading")).size(typography::DISPLAY),
        text(ctx.i18n.tr("gallery-subtitle")).size(typography::BODY),
        text(ctx.i18n.tr_count("gallery-count", "count", visible.len()))
            .size(typography::CAPTION),
    ]
    .spacing(spacing::XS);

    let body: Element<'a, Message> = if visible.is_empty() {
        container(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .into()
    } else {
        let mut grid = column![].spacing(spacing::XL);
        for chunk in visible.chunks(sizing::GRID_COLUMNS) {
            let mut line = row![].spacing(spacing::LG);
            for &project in chunk {
                line = line.push(card(project, state, &ctx));
            }
            grid = grid.push(line);
        }
        grid.into()
    };

    let page = column![header, chips(state.active_filter(), ctx.i18n), body]
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn chips<'a>(active: CategoryFilter, i18n: &I18n) -> Element<'a, Message> {
    let mut chips = row![].spacing(spacing::XS);
    for filter in CategoryFilter::chips() {
        chips = chips.push(
            button(text(i18n.tr(filter.i18n_key())).size(typography::CAPTION))
                .on_press(Message::SetCategory(filter))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::chip(filter == active)),
        );
    }
    chips.wrap().into()
}

fn card<'a>(project: &'a Project, state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let url = ctx.thumbnails.cover_url(project);
    let picture: Element<'a, Message> = match ctx.thumbnails.peek(url) {
        Some(thumbnail) => image(thumbnail.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let key = if ctx.thumbnails.has_failed(url) {
                "gallery-thumbnail-unavailable"
            } else {
                "gallery-thumbnail-loading"
            };
            container(text(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let hovered = !ctx.locked && state.hovered() == Some(project.id);
    let mut frame = stack![picture]
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT));
    if hovered {
        frame = frame.push(
            container(text(project.title.as_str()).size(typography::TITLE_SM))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_y(Vertical::Bottom)
                .style(styles::container::hover_veil),
        );
    }

    let caption = column![
        text(ctx.i18n.tr(project.category.i18n_key()).to_uppercase()).size(typography::CAPTION),
        text(project.title.as_str()).size(typography::TITLE_SM),
        text(project.description.as_str()).size(typography::BODY),
    ]
    .spacing(spacing::XXS)
    .width(Length::Fixed(sizing::CARD_WIDTH));

    let content = column![frame, caption].spacing(spacing::SM);

    if ctx.locked {
        return content.into();
    }
    mouse_area(content)
        .on_enter(Message::Hover(project.id))
        .on_exit(Message::Unhover)
        .on_press(Message::OpenProject(project.id))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Category};
    use crate::ui::gallery::scroll_lock::ScrollLock;
    use std::sync::Arc;

    #[test]
    fn renders_full_and_empty_listings() {
        let catalog = Catalog::new(vec![
            Project::new(1, "Cake", Category::CafeBeverage, "cake.jpg"),
            Project::new(2, "Plate", Category::Food, "plate.jpg"),
        ]);
        let mut state = State::new(catalog, Arc::new(ScrollLock::new()));
        let i18n = I18n::default();
        let thumbnails = ImageCache::default();

        state.hover(crate::domain::catalog::ProjectId(1));
        drop(view(
            &state,
            ViewContext {
                i18n: &i18n,
                thumbnails: &thumbnails,
                locked: false,
            },
        ));

        state.set_category(CategoryFilter::Only(Category::Animal));
        drop(view(
            &state,
            ViewContext {
                i18n: &i18n,
                thumbnails: &thumbnails,
                locked: true,
            },
        ));
    }
}
