//! History view

use crate::gui::app::Message;
use crate::gui::components::history_item;
use crate::gui::theme::{self, Palette};
use crate::history::HistoryEntry;
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

/// History list. Re-running an entry is disabled while a request is in flight.
pub fn history_view(
    palette: Palette,
    history: &[HistoryEntry],
    can_rerun: bool,
) -> Element<'static, Message> {
    let header = row![
        text("Download History").size(24).style(palette.text_primary),
        Space::with_width(Length::Fill),
        button(text("Clear History").size(14))
            .on_press_maybe((!history.is_empty()).then_some(Message::ClearHistory))
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::DestructiveButton(
                palette
            )))),
        button(text("Close").size(14))
            .on_press(Message::SwitchToMain)
            .padding([10, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                palette
            )))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let list: Element<'static, Message> = if history.is_empty() {
        container(
            text("No download history yet.")
                .size(16)
                .style(palette.text_muted),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        let items = history
            .iter()
            .fold(Column::new().spacing(10), |col, entry| {
                col.push(history_item(palette, entry, can_rerun))
            });
        scrollable(items)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)))
            .into()
    };

    column![
        header,
        container(list)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer(
                palette
            )))),
    ]
    .spacing(24)
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
