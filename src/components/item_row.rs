use cosmic::iced::{Alignment, ContentFit, Length, Padding};
use cosmic::widget::{button, column, container, image, mouse_area, row, text};
use cosmic::{Element, theme};

use crate::core::date::format_date;
use crate::core::item::Item;
use crate::core::pop;
use crate::message::Message;

const PHOTO_HEIGHT: f32 = 160.0;
/// Side margin the pop-in shake moves within. Rows keep a constant outer
/// width for the whole animation.
const SHAKE_MARGIN: f32 = 12.0;
/// Extra card padding at full swell.
const SWELL_PADDING: f32 = 4.0;

/// One to-do entry: numbered title, optional photo, date, an edit button, and
/// the hold-to-delete hint. `progress` drives the entrance animation; settled
/// rows pass 1.0.
pub fn item_row<'a>(item: &Item, index: usize, progress: f32) -> Element<'a, Message> {
    let id = item.id;

    let mut card = column().spacing(6);

    let mut title_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::caption(format!("{}.", index + 1)));
    if !item.title.is_empty() {
        title_row = title_row.push(text::body(item.title.clone()));
    }
    card = card.push(title_row);

    if let Some(ref photo) = item.photo {
        card = card.push(
            image(image::Handle::from_path(photo))
                .width(Length::Fill)
                .height(Length::Fixed(PHOTO_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }

    card = card.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(format_date(item.date)).width(Length::Fill))
            .push(button::standard("Edit").on_press(Message::EditItem(id)))
            .push(text::caption("Hold to delete").size(11.0)),
    );

    let surface = container(card)
        .padding(12.0 + SWELL_PADDING * pop::swell(progress))
        .width(Length::Fill)
        .class(theme::Container::Card);

    // The shake shifts the card inside the fixed side margins.
    let offset = pop::shake(progress) * SHAKE_MARGIN;
    let shaken = container(surface).width(Length::Fill).padding(Padding {
        top: 0.0,
        right: SHAKE_MARGIN - offset,
        bottom: 0.0,
        left: SHAKE_MARGIN + offset,
    });

    mouse_area(shaken)
        .on_press(Message::RowPressed(id))
        .on_release(Message::RowReleased)
        .on_exit(Message::RowReleased)
        .into()
}
