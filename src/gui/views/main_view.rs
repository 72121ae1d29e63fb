//! Main view implementation

use crate::controller::{ResultView, UiController, UiState};
use crate::downloader::DownloadTask;
use crate::gui::app::Message;
use crate::gui::components::{download_item, result_card, url_input};
use crate::gui::theme::{self, Palette};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Create the main view
pub fn main_view(
    palette: Palette,
    url_value: &str,
    controller: &UiController,
    result_view: Option<&ResultView>,
    preview: Option<&Handle>,
    downloads: &[DownloadTask],
) -> Element<'static, Message> {
    let can_submit = controller.can_submit();

    // Hero Input Section
    let hero_section = container(
        column![
            text("Download from Pinterest")
                .size(30)
                .style(palette.text_primary),
            url_input(palette, url_value, can_submit, controller.notice()),
            row![
                Space::with_width(Length::Fill),
                button(
                    text(if can_submit { "Download" } else { "Extracting..." }).size(16)
                )
                .on_press_maybe(can_submit.then_some(Message::Submit))
                .padding([16, 32])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ],
        ]
        .spacing(20),
    )
    .padding(32)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer(
        palette,
    ))));

    let mut body = Column::new().spacing(24).width(Length::Fill);

    // Panels: the state decides which single one is shown
    match controller.state() {
        UiState::Idle => {}
        UiState::Loading => {
            body = body.push(
                container(
                    text("Extracting media links...")
                        .size(16)
                        .style(palette.text_secondary),
                )
                .padding(24)
                .width(Length::Fill)
                .center_x()
                .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer(
                    palette,
                )))),
            );
        }
        UiState::Result(_) => {
            if let Some(view) = result_view {
                body = body.push(result_card(palette, view, preview));
            }
        }
        UiState::Error(message) => {
            body = body.push(error_panel(palette, message));
        }
    }

    if !downloads.is_empty() {
        let mut downloads_col = column![text("Downloads").size(20).style(palette.text_primary)]
            .spacing(12);
        for task in downloads.iter().rev() {
            downloads_col = downloads_col.push(download_item(palette, task));
        }
        body = body.push(downloads_col);
    }

    let body = scrollable(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)));

    column![hero_section, body]
        .spacing(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([32, 32, 32, 32])
        .into()
}

fn error_panel(palette: Palette, message: &str) -> Element<'static, Message> {
    container(
        row![
            column![
                text("Something went wrong").size(16),
                text(message.to_string()).size(14),
            ]
            .spacing(6)
            .width(Length::Fill),
            button(text("Dismiss").size(13))
                .on_press(Message::DismissError)
                .padding([8, 14])
                .style(iced::theme::Button::Custom(Box::new(theme::DestructiveButton(
                    palette
                )))),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::DangerContainer(
        palette,
    ))))
    .into()
}
