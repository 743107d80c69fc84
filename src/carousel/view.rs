// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering.
//!
//! ```text
//! ┌ frame ─────────────────────────────────────────────┐
//! │ [‹] ┌ viewport (clipped) ───────────────────┐ [›]  │
//! │     │ track: slide slide slide slide ...    │      │
//! │     └───────────────────────────────────────┘      │
//! │                 ● ○ ○      2 / 3                   │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Only the viewport reports pointer movement, so drag coordinates are
//! relative to its left edge. The whole frame reports hover.

use super::layout::{CONTROL_GUTTER, FRAME_PADDING};
use super::{Carousel, Indicator, Message};
use crate::i18n::fluent::I18n;
use crate::slides::SlideDeck;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{slide, styles};
use iced::widget::{button, column, container, mouse_area, pin, space, text, tooltip, Row};
use iced::{alignment, mouse, Element, Length};

/// Borrowed data the carousel needs for rendering but does not own.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slides: &'a SlideDeck,
}

/// Renders the carousel frame, its controls and its indicators.
pub fn view<'a>(carousel: &'a Carousel, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let controls = carousel.controls();
    let viewport_width = carousel.viewport_width();

    let mut row = Row::new().align_y(alignment::Vertical::Center);
    if controls.previous {
        row = row.push(nav_control(
            "‹",
            ctx.i18n.tr("carousel-previous"),
            Message::Previous,
        ));
    }
    row = row.push(viewport(carousel, ctx, viewport_width));
    if controls.next {
        row = row.push(nav_control(
            "›",
            ctx.i18n.tr("carousel-next"),
            Message::Next,
        ));
    }

    let content = column![row, footer(carousel, ctx.i18n)]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    let frame = container(content)
        .width(Length::Fill)
        .padding([spacing::MD, FRAME_PADDING])
        .style(styles::container::frame(carousel.is_focused()));

    mouse_area(frame)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}

fn viewport<'a>(
    carousel: &'a Carousel,
    ctx: ViewContext<'a>,
    viewport_width: f32,
) -> Element<'a, Message> {
    let slide_width = carousel.slide_width_percent() / 100.0 * viewport_width;

    let track = ctx
        .slides
        .iter()
        .fold(Row::new().height(Length::Fill), |track, s| {
            track.push(slide::view(s, slide_width))
        });

    let clipped = container(pin(track).x(carousel.track().offset_px(viewport_width)))
        .width(Length::Fixed(viewport_width))
        .height(Length::Fixed(sizing::VIEWPORT_HEIGHT))
        .clip(true);

    let interaction = if carousel.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(clipped)
        .on_move(|point| Message::ViewportMoved(point.x))
        .on_press(Message::ViewportPressed)
        .on_release(Message::ViewportReleased)
        .on_exit(Message::ViewportExited)
        .interaction(interaction)
        .into()
}

fn nav_control<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let control = button(
        text(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .on_press(message)
    .style(styles::button::nav);

    container(tooltip(
        control,
        container(text(label).size(typography::CAPTION)).padding(spacing::XXS),
        tooltip::Position::Bottom,
    ))
    .center_x(Length::Fixed(CONTROL_GUTTER))
    .into()
}

fn footer<'a>(carousel: &'a Carousel, i18n: &'a I18n) -> Element<'a, Message> {
    let dots = carousel
        .indicators()
        .items()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |dots, indicator| {
            dots.push(indicator_dot(*indicator, i18n))
        })
        .align_y(alignment::Vertical::Center);

    let current = (carousel.current_index() + 1).to_string();
    let total = carousel.page_count().to_string();
    let counter = text(i18n.tr_with_args(
        "carousel-slide-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(dots)
        .push(counter)
        .into()
}

fn indicator_dot<'a>(indicator: Indicator, i18n: &I18n) -> Element<'a, Message> {
    let size = if indicator.is_active() {
        sizing::INDICATOR_DOT_ACTIVE
    } else {
        sizing::INDICATOR_DOT
    };
    let number = indicator.number().to_string();
    let label = i18n.tr_with_args("carousel-indicator-label", &[("number", number.as_str())]);

    let dot = button(space().width(size).height(size))
        .padding(0)
        .on_press(Message::GoToPage(indicator.page()))
        .style(styles::button::indicator(indicator.is_active()));

    tooltip(
        dot,
        container(text(label).size(typography::CAPTION)).padding(spacing::XXS),
        tooltip::Position::Top,
    )
    .into()
}
