//! Result panel: media preview, title and download actions

use crate::controller::{DownloadAction, MediaPreview, ResultView};
use crate::gui::app::Message;
use crate::gui::theme::{self, Palette};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

const PREVIEW_WIDTH: f32 = 240.0;

pub fn result_card(
    palette: Palette,
    view: &ResultView,
    preview: Option<&Handle>,
) -> Element<'static, Message> {
    let still: Element<'static, Message> = match preview {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fixed(PREVIEW_WIDTH))
            .into(),
        None => container(text("Loading preview...").size(13).style(palette.text_muted))
            .width(Length::Fixed(PREVIEW_WIDTH))
            .height(Length::Fixed(PREVIEW_WIDTH))
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(theme::ChipContainer(
                palette,
            ))))
            .into(),
    };

    // Only one of the two preview kinds is ever built
    let media: Element<'static, Message> = match &view.preview {
        MediaPreview::Video { looped, muted, .. } => {
            let mut flags = vec!["VIDEO"];
            if *looped {
                flags.push("loop");
            }
            if *muted {
                flags.push("muted");
            }
            column![
                still,
                row![
                    text(flags.join(" · ")).size(11).style(palette.text_muted),
                    Space::with_width(Length::Fill),
                    button(text("▶ Play").size(12))
                        .on_press(Message::PlayVideo)
                        .padding([6, 12])
                        .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                            palette
                        )))),
                ]
                .align_items(Alignment::Center)
                .width(Length::Fixed(PREVIEW_WIDTH)),
            ]
            .spacing(8)
            .into()
        }
        MediaPreview::Image { .. } => still,
    };

    let mut actions = Column::new().spacing(10);
    if view.actions.is_empty() {
        actions = actions.push(
            text("The server returned no downloadable files.")
                .size(14)
                .style(palette.text_muted),
        );
    }
    for (index, action) in view.actions.iter().enumerate() {
        actions = actions.push(action_row(palette, index, action));
    }

    let details = column![
        text(view.title.clone()).size(22).style(palette.text_primary),
        actions,
    ]
    .spacing(16)
    .width(Length::Fill);

    container(row![media, details].spacing(24))
        .padding(24)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer(
            palette,
        ))))
        .into()
}

fn action_row(palette: Palette, index: usize, action: &DownloadAction) -> Element<'static, Message> {
    row![
        container(text(action.ext_badge.clone()).size(12))
            .padding([4, 10])
            .style(iced::theme::Container::Custom(Box::new(theme::ChipContainer(
                palette
            )))),
        text(action.quality_label.clone())
            .size(14)
            .style(palette.text_secondary),
        Space::with_width(Length::Fill),
        button(text("⬇ Download").size(13))
            .on_press(Message::StartDownload(index))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
