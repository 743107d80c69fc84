// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, SlideState};
use crate::carousel::{self, Carousel};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use iced::widget::{center, column, stack, text, Container};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slides: &'a SlideState,
    pub carousel: Option<&'a Carousel>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the carousel (or an empty state) with toasts layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match (ctx.slides, ctx.carousel) {
        (SlideState::Ready(deck), Some(carousel)) => carousel::view(
            carousel,
            carousel::ViewContext {
                i18n: ctx.i18n,
                slides: deck,
            },
        )
        .map(Message::Carousel),
        (SlideState::Loading, _) => empty_state(ctx.i18n.tr("empty-state-loading"), None),
        _ => empty_state(
            ctx.i18n.tr("empty-state-title"),
            Some(ctx.i18n.tr("empty-state-subtitle")),
        ),
    };

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![page, toasts].into()
}

fn empty_state<'a>(title: String, subtitle: Option<String>) -> Element<'a, Message> {
    let mut content = column![text(title).size(typography::TITLE_LG)]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);
    if let Some(subtitle) = subtitle {
        content = content.push(text(subtitle).size(typography::BODY));
    }
    center(content).into()
}
