//! Settings view implementation

use crate::gui::app::{Message, SettingsDraft};
use crate::gui::theme::{self, Palette};
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

/// Create the settings view
pub fn settings_view(
    palette: Palette,
    draft: &SettingsDraft,
    api_base: &str,
    api_base_locked: bool,
) -> Element<'static, Message> {
    let input_style = || {
        iced::theme::TextInput::Custom(Box::new(theme::InputStyle {
            palette,
            invalid: false,
        }))
    };

    // Header with back button
    let header = row![
        button(text("← Back").size(16))
            .on_press(Message::SwitchToMain)
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                palette
            )))),
        Space::with_width(Length::Fill),
        text("Settings").size(24).style(palette.text_primary),
        Space::with_width(Length::Fill),
        Space::with_width(Length::Fixed(80.0)), // Balance the back button
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let api_hint = if api_base_locked {
        format!("API base fixed on the command line: {}", api_base)
    } else {
        format!("Requests currently go to {}", api_base)
    };

    let server_section = column![
        text("Server").size(16).style(palette.text_primary),
        text_input("Leave empty to use the local backend", &draft.server_url)
            .on_input(Message::ServerUrlChanged)
            .padding(12)
            .width(Length::Fill)
            .style(input_style()),
        text(api_hint).size(12).style(palette.text_muted),
    ]
    .spacing(10);

    let download_location_section = column![
        text("Download Location").size(16).style(palette.text_primary),
        row![
            text_input("", &draft.download_location)
                .on_input(Message::DownloadLocationChanged)
                .padding(12)
                .width(Length::Fill)
                .style(input_style()),
            button(text("Browse...").size(14))
                .on_press(Message::BrowseDownloadLocation)
                .padding([10, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                    palette
                )))),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    ]
    .spacing(10);

    let referer_section = row![
        column![
            text("Forward pin URL as referer").size(16).style(palette.text_primary),
            text("Some media hosts reject downloads that do not come from the pin page")
                .size(12)
                .style(palette.text_muted),
        ]
        .spacing(4)
        .width(Length::Fill),
        button(text(if draft.forward_referer { "On" } else { "Off" }).size(14))
            .on_press(Message::ToggleForwardReferer)
            .padding([8, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                palette
            )))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let save_button = button(text("Save Settings").size(16))
        .on_press(Message::SaveSettings)
        .padding([12, 24])
        .width(Length::Fill)
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    column![
        header,
        container(
            column![server_section, download_location_section, referer_section].spacing(24)
        )
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer(
            palette
        )))),
        Space::with_height(Length::Fill),
        save_button,
    ]
    .spacing(24)
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
