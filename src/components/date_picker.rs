use chrono::{Datelike, NaiveDate, Weekday};

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct DatePickerState {
    /// First day of the displayed month.
    pub displayed_month: NaiveDate,
}

impl DatePickerState {
    /// Open the picker on the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self {
            displayed_month: first,
        }
    }

    pub fn prev_month(&mut self) {
        self.displayed_month = self
            .displayed_month
            .checked_sub_months(chrono::Months::new(1))
            .unwrap_or(self.displayed_month);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = self
            .displayed_month
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(self.displayed_month);
    }
}

/// Whether picking a day dismisses the picker on its own. macOS keeps it open
/// until the explicit Done press, matching its inline picker convention.
pub fn closes_on_select() -> bool {
    !cfg!(target_os = "macos")
}

/// Render the month grid with prev/next navigation and the selected day
/// highlighted. Month navigation never changes the selection.
pub fn date_picker<'a>(
    state: &DatePickerState,
    selected: NaiveDate,
    today: NaiveDate,
) -> Element<'a, Message> {
    let first = state.displayed_month;
    let year = first.year();
    let month = first.month();

    // Header: < Month Year >
    let month_label = first.format("%B %Y").to_string();

    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(Message::PickerPrevMonth),
        )
        .push(text::body(month_label).width(Length::Fill).center())
        .push(button::icon(icon::from_name("go-next-symbolic")).on_press(Message::PickerNextMonth));

    let day_labels = row()
        .spacing(0)
        .push(day_label("Mo"))
        .push(day_label("Tu"))
        .push(day_label("We"))
        .push(day_label("Th"))
        .push(day_label("Fr"))
        .push(day_label("Sa"))
        .push(day_label("Su"));

    let mut grid = column().spacing(2).push(header).push(day_labels);

    // Find the Monday on or before the first of the month
    let weekday_offset = match first.weekday() {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    };
    let grid_start = first - chrono::Duration::days(weekday_offset as i64);

    // Render 6 rows of 7 days, skipping rows entirely outside the month
    for week in 0..6 {
        let mut week_row = row().spacing(0);
        let mut any_in_month = false;

        for day_of_week in 0..7 {
            let date = grid_start + chrono::Duration::days(week * 7 + day_of_week);
            let in_month = date.month() == month && date.year() == year;

            if in_month {
                any_in_month = true;
            }

            let cell: Element<'a, Message> = if !in_month {
                container(text::body(" "))
                    .width(Length::FillPortion(1))
                    .center_x(Length::FillPortion(1))
                    .into()
            } else {
                let day_num = date.day().to_string();

                let txt = if date == today {
                    text::body(day_num).font(cosmic::iced::Font {
                        weight: cosmic::iced::font::Weight::Bold,
                        ..Default::default()
                    })
                } else {
                    text::body(day_num)
                };

                let cell_content = container(txt.center()).center_x(Length::Fill);

                let class = if date == selected {
                    theme::Button::Suggested
                } else {
                    theme::Button::Text
                };

                button::custom(cell_content)
                    .class(class)
                    .on_press(Message::PickerSelectDay(date))
                    .width(Length::FillPortion(1))
                    .into()
            };

            week_row = week_row.push(cell);
        }

        if any_in_month {
            grid = grid.push(week_row);
        }
    }

    let mut content = column().spacing(8).push(
        container(grid)
            .width(Length::Fill)
            .padding(8)
            .class(theme::Container::Card),
    );

    if !closes_on_select() {
        content = content.push(
            container(button::suggested("Done").on_press(Message::CloseDatePicker))
                .width(Length::Fill)
                .align_x(Alignment::End),
        );
    }

    content.into()
}

fn day_label(label: &str) -> Element<'_, Message> {
    container(text::caption(label).center())
        .width(Length::FillPortion(1))
        .center_x(Length::FillPortion(1))
        .into()
}
