//! History row component

use crate::gui::app::Message;
use crate::gui::theme::{self, Palette};
use crate::history::HistoryEntry;
use iced::widget::{button, column, container, row, text, tooltip};
use iced::{Alignment, Element, Length};

pub fn history_item(palette: Palette, entry: &HistoryEntry, can_rerun: bool) -> Element<'static, Message> {
    let info = column![
        text(entry.title.clone()).size(15).style(palette.text_primary),
        row![
            text(entry.date.clone()).size(12).style(palette.text_muted),
            text(entry.url.clone()).size(12).style(palette.text_muted),
        ]
        .spacing(12),
    ]
    .spacing(4)
    .width(Length::Fill);

    container(
        row![
            info,
            tooltip(
                button(text("🔄").size(14))
                    .on_press_maybe(can_rerun.then(|| Message::LoadHistoryItem(entry.url.clone())))
                    .padding([6, 10])
                    .style(iced::theme::Button::Custom(Box::new(theme::IconButton(palette)))),
                "Download again",
                tooltip::Position::Left,
            ),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::ChipContainer(
        palette,
    ))))
    .into()
}
