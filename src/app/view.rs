// SPDX-License-Identifier: MPL-2.0
//! View rendering: the thumbnail grid, and while a session is open the
//! glass backdrop plus the centered image frame stacked above it.

use super::Message;
use crate::config::Config;
use crate::layout::{LayoutResult, Viewport};
use crate::lightbox::{ControlKind, Lightbox};
use crate::loader::ImageData;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, Column, Container, Image, Row, Space, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

const THUMBNAIL_SIZE: f32 = 120.0;
const GRID_COLUMNS: usize = 4;
const GRID_SPACING: f32 = 12.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub lightbox: &'a Lightbox,
    pub thumbnails: &'a [Option<ImageData>],
    pub viewport: Viewport,
    pub config: &'a Config,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = gallery_grid(&ctx);

    match ctx.lightbox.layout(ctx.viewport) {
        Some(frame_layout) => Stack::new()
            .push(grid)
            .push(glass())
            .push(frame(&ctx, frame_layout))
            .into(),
        None => grid,
    }
}

fn gallery_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.lightbox.gallery().items();

    if items.is_empty() {
        return Container::new(Text::new("No gallery items found"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    let mut column = Column::new().spacing(GRID_SPACING).padding(GRID_SPACING);

    for (row_index, chunk) in items.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(GRID_SPACING);

        for (col_index, item) in chunk.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col_index;

            let thumbnail: Element<'a, Message> = match ctx
                .thumbnails
                .get(index)
                .and_then(|slot| slot.as_ref())
            {
                Some(data) => Image::new(data.handle.clone())
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE))
                    .into(),
                None => Container::new(Text::new(item.caption.as_str()).size(14))
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .into(),
            };

            let cell = Column::new()
                .spacing(4)
                .push(button(thumbnail).on_press(Message::ItemClicked(index)))
                .push(Text::new(item.caption.as_str()).size(14));

            row = row.push(cell);
        }

        column = column.push(row);
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Half-transparent backdrop covering the whole viewport; clicking it
/// closes the viewer.
fn glass<'a>() -> Element<'a, Message> {
    mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(glass_style),
    )
    .on_press(Message::GlassClicked)
    .into()
}

fn frame<'a>(ctx: &ViewContext<'a>, frame_layout: LayoutResult) -> Element<'a, Message> {
    let overlay = ctx.lightbox.overlay();
    let caption_height = overlay.caption_height();
    let figure_height = (frame_layout.height - caption_height).max(0.0);

    let figure: Element<'a, Message> = match overlay.image() {
        Some(data) => mouse_area(
            Image::new(data.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(figure_height)),
        )
        .on_press(Message::FigureClicked)
        .into(),
        None => Container::new(Text::new("Loading\u{2026}").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(figure_height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let mut controls = Row::new().spacing(8);
    for kind in ControlKind::ALL {
        controls = controls.push(control_button(kind, ctx.config));
    }

    let strip = Row::new()
        .height(Length::Fixed(caption_height))
        .align_y(Vertical::Center)
        .push(Text::new(overlay.caption()).size(14))
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(controls);

    let frame_box = Container::new(Column::new().push(figure).push(strip))
        .width(Length::Fixed(frame_layout.width))
        .height(Length::Fixed(frame_layout.height))
        .style(frame_style);

    // position the frame with the computed offsets; the outer container
    // spans the viewport so padding acts as left/top placement
    Container::new(frame_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: frame_layout.top.max(0.0),
            left: frame_layout.left.max(0.0),
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

/// One builder renders every control variant (previous, next, close).
fn control_button<'a>(kind: ControlKind, config: &'a Config) -> Element<'a, Message> {
    button(Text::new(kind.label(config)).size(13))
        .padding([2, 8])
        .on_press(Message::Control(kind))
        .into()
}

fn glass_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

fn frame_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Some(Color::BLACK),
        border: Border {
            color: Color::BLACK,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}
