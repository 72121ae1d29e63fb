//! URL input component

use crate::gui::app::Message;
use crate::gui::theme::{self, Palette};
use iced::widget::{button, column, container, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length};

/// URL field with paste and clear buttons, plus the dismissible notice
/// (validation or clipboard problems) underneath.
pub fn url_input(
    palette: Palette,
    value: &str,
    can_submit: bool,
    notice: Option<&str>,
) -> Element<'static, Message> {
    let mut input = text_input("Paste a Pinterest link here...", value)
        .on_input(Message::UrlInputChanged)
        .padding(15)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle {
            palette,
            invalid: notice.is_some(),
        })));
    // Enter submits, same as the button
    if can_submit {
        input = input.on_submit(Message::Submit);
    }

    let input_row = row![
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton(palette)))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton(palette)))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    match notice {
        Some(notice) => column![
            input_row,
            container(
                row![
                    text(notice).size(14),
                    Space::with_width(Length::Fill),
                    button(text("✕").size(12))
                        .on_press(Message::DismissNotice)
                        .padding([4, 8])
                        .style(iced::theme::Button::Custom(Box::new(
                            theme::DestructiveButton(palette)
                        ))),
                ]
                .align_items(Alignment::Center)
            )
            .padding([8, 12])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::DangerContainer(palette)
            ))),
        ]
        .spacing(8)
        .into(),
        None => input_row.into(),
    }
}
