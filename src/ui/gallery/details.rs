// SPDX-License-Identifier: MPL-2.0
//! Detail sheet of the opened project: media panel and project facts.

use crate::domain::catalog::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::selection::Message;
use crate::ui::styles;
use crate::ui::viewer;
use iced::alignment::Horizontal;
use iced::widget::{button, column, container, mouse_area, opaque, row, scrollable, text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: viewer::ViewContext<'a>,
}

/// Renders the modal layer: a backdrop that closes on press, with the sheet
/// on top. The layer is opaque, so nothing below receives input.
pub fn view<'a>(
    project: &'a Project,
    viewer_state: &'a viewer::State,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let media = viewer::view::view(viewer_state, ctx.media).map(Message::Viewer);

    let sheet = container(
        row![media, facts(project, i18n)]
            .spacing(spacing::XL)
            .padding(spacing::LG),
    )
    .style(styles::container::sheet);

    // The inner `opaque` keeps presses on the sheet from reaching the
    // backdrop's close handler.
    let centered = container(opaque(sheet))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);

    let backdrop = mouse_area(
        container(scrollable(centered).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseProject);

    opaque(backdrop)
}

fn facts<'a>(project: &'a Project, i18n: &I18n) -> Element<'a, Message> {
    let client = project
        .client
        .clone()
        .unwrap_or_else(|| i18n.tr("details-client-confidential"));

    let meta = row![
        labelled(i18n.tr("details-client"), client),
        labelled(i18n.tr("details-year"), project.year.clone()),
    ]
    .spacing(spacing::LG);

    let mut tags = row![].spacing(spacing::XS);
    for tag in &project.tags {
        tags = tags.push(
            container(text(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::placeholder),
        );
    }

    let close = button(text(i18n.tr("details-close")).size(typography::BODY))
        .on_press(Message::CloseProject)
        .style(styles::button::link);

    column![
        text(i18n.tr(project.category.i18n_key()).to_uppercase()).size(typography::CAPTION),
        text(project.title.as_str()).size(typography::TITLE_LG),
        meta,
        text(i18n.tr("details-about")).size(typography::TITLE_SM),
        text(project.long_text()).size(typography::BODY),
        tags.wrap(),
        close,
    ]
    .spacing(spacing::MD)
    .width(Length::Fixed(sizing::DETAILS_WIDTH))
    .into()
}

fn labelled<'a>(label: String, value: String) -> Element<'a, Message> {
    column![
        text(label.to_uppercase()).size(typography::CAPTION),
        text(value).size(typography::BODY),
    ]
    .spacing(spacing::XXS)
    .into()
}
