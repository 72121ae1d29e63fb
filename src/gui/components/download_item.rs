//! Download item component

use crate::downloader::{DownloadStatus, DownloadTask};
use crate::gui::app::Message;
use crate::gui::theme::{self, Palette};
use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{Alignment, Element, Length};

/// Create a download item widget
pub fn download_item(palette: Palette, task: &DownloadTask) -> Element<'static, Message> {
    let status_color = match task.status {
        DownloadStatus::InProgress => theme::AMBER_500,
        DownloadStatus::Completed { .. } => theme::EMERALD_500,
        DownloadStatus::Failed(_) => theme::RED_500,
    };

    let detail = match &task.status {
        DownloadStatus::InProgress => task.destination.to_string_lossy().into_owned(),
        DownloadStatus::Completed { path, bytes } => format!(
            "{:.1} MB • {}",
            *bytes as f64 / (1024.0 * 1024.0),
            path.to_string_lossy()
        ),
        DownloadStatus::Failed(error) => error.clone(),
    };

    let controls: Row<'static, Message> = match task.status {
        DownloadStatus::InProgress => row![],
        DownloadStatus::Completed { .. } => row![
            button(text("Open File").size(12))
                .on_press(Message::OpenFile(task.id.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            button(text("Show in Folder").size(12))
                .on_press(Message::OpenDownloadFolder(task.id.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                    palette
                )))),
            button(text("Remove").size(12))
                .on_press(Message::RemoveDownload(task.id.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton(palette)))),
        ],
        DownloadStatus::Failed(_) => row![button(text("Remove").size(12))
            .on_press(Message::RemoveDownload(task.id.clone()))
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton(palette))))],
    };

    let content = column![
        row![
            text(task.filename.clone())
                .size(15)
                .width(Length::Fill)
                .style(palette.text_primary),
            text(task.status.label()).size(12).style(status_color),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
        row![
            text(detail).size(12).style(palette.text_secondary),
            Space::with_width(Length::Fill),
            controls.spacing(8),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    ]
    .spacing(10)
    .width(Length::Fill);

    container(content)
        .padding(14)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::ChipContainer(
            palette,
        ))))
        .into()
}
