// SPDX-License-Identifier: MPL-2.0
//! Slide card rendering.

use crate::slides::Slide;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, image, text, Column};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Renders one slide as a card exactly `width` pixels wide.
///
/// The card is generic over the message type; slides never emit messages.
pub fn view<'a, Message: 'a>(slide: &'a Slide, width: f32) -> Element<'a, Message> {
    let body: Element<'a, Message> = match slide {
        Slide::Testimonial {
            quote,
            author,
            role,
        } => testimonial(quote, author, role.as_deref()),
        Slide::Image { path, caption } => {
            let picture = image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill);

            let mut content = Column::new().spacing(spacing::XS).push(picture);
            if let Some(caption) = caption {
                content = content.push(
                    text(caption.as_str())
                        .size(typography::CAPTION)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                );
            }
            content.into()
        }
    };

    // Gutter between cards.
    container(
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::slide_card),
    )
    .width(Length::Fixed(width.max(0.0)))
    .height(Length::Fill)
    .padding(spacing::XS)
    .into()
}

fn testimonial<'a, Message: 'a>(
    quote: &'a str,
    author: &'a str,
    role: Option<&'a str>,
) -> Element<'a, Message> {
    let mut attribution = column![text(author).size(typography::BODY_LG)].spacing(spacing::XXS);
    if let Some(role) = role {
        attribution = attribution.push(text(role).size(typography::BODY).style(
            |theme: &Theme| text::Style {
                color: Some(iced::Color {
                    a: opacity::OVERLAY_STRONG,
                    ..theme.palette().text
                }),
            },
        ));
    }

    column![
        text(format!("\u{201C}{quote}\u{201D}")).size(typography::TITLE_MD),
        attribution,
    ]
    .spacing(spacing::LG)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Left)
    .into()
}
