use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::widget::{button, column, container, icon, image, row, scrollable, text, text_input};
use cosmic::{Application, Element, executor, theme};

use uuid::Uuid;

use crate::components::date_picker::{self, DatePickerState};
use crate::components::item_row::item_row;
use crate::config::SnapdoConfig;
use crate::core::date::format_date;
use crate::core::form::ItemForm;
use crate::core::item::Item;
use crate::core::list::{self, Commit};
use crate::core::pop::PopIn;
use crate::media;
use crate::message::Message;

/// How long a press must be sustained before it deletes the row.
const HOLD_TO_DELETE: Duration = Duration::from_millis(500);
/// Timer granularity for the pop-in animation and the hold timer.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const PREVIEW_SIZE: f32 = 96.0;

/// An in-progress press on a list row.
struct RowHold {
    id: Uuid,
    since: Instant,
}

pub struct Snapdo {
    core: Core,
    config: SnapdoConfig,

    // Data
    items: Vec<Item>,
    form: ItemForm,

    // UI state
    pop_ins: HashMap<Uuid, PopIn>,
    row_hold: Option<RowHold>,
    date_picker: Option<DatePickerState>,
    alert: Option<String>,
    /// An acquisition is in flight; further requests are ignored until it lands.
    media_busy: bool,
}

pub struct Flags {
    pub config: SnapdoConfig,
}

impl Application for Snapdo {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.snapdo.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        if let Err(e) = config.ensure_dirs() {
            log::error!("Failed to create photo directory: {}", e);
        }
        media::sweep_photo_dir(&config.photo_directory);

        let today = chrono::Local::now().date_naive();

        let app = Self {
            core,
            config,
            items: Vec::new(),
            form: ItemForm::new(today),
            pop_ins: HashMap::new(),
            row_hold: None,
            date_picker: None,
            alert: None,
            media_busy: false,
        };

        (app, CosmicTask::none())
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::TitleChanged(value) => {
                self.form.title = value;
            }

            Message::Submit => {
                // The commit can drop either of these references; capture them first.
                let replaced = self
                    .form
                    .editing
                    .and_then(|id| self.items.iter().find(|item| item.id == id))
                    .and_then(|item| item.photo.clone());
                let pending = self.form.photo.clone();

                match list::commit(&mut self.items, &mut self.form) {
                    Commit::Added(id) => {
                        self.pop_ins.insert(id, PopIn::start(Instant::now()));
                        log::debug!("added item {}", id);
                    }
                    Commit::Updated(id) => {
                        log::debug!("updated item {}", id);
                        if let Some(replaced) = replaced {
                            self.discard_photo_if_unused(&replaced);
                        }
                    }
                    Commit::Stale => {
                        log::debug!("edit target no longer exists, nothing committed");
                        if let Some(pending) = pending {
                            self.discard_photo_if_unused(&pending);
                        }
                    }
                    Commit::Rejected => {
                        // Empty title and no photo; keep the form as typed.
                    }
                }
            }

            Message::CapturePhoto => {
                if self.media_busy {
                    return CosmicTask::none();
                }
                self.media_busy = true;
                let photo_dir = self.config.photo_directory.clone();
                return CosmicTask::perform(
                    async move {
                        media::capture_photo(photo_dir)
                            .await
                            .map_err(|e| format!("Couldn't capture a photo: {}", e))
                    },
                    |result| cosmic::Action::App(Message::PhotoAcquired(result)),
                );
            }

            Message::PickPhoto => {
                if self.media_busy {
                    return CosmicTask::none();
                }
                self.media_busy = true;
                let photo_dir = self.config.photo_directory.clone();
                return CosmicTask::perform(
                    async move {
                        media::pick_photo(photo_dir)
                            .await
                            .map_err(|e| format!("Couldn't add that photo: {}", e))
                    },
                    |result| cosmic::Action::App(Message::PhotoAcquired(result)),
                );
            }

            Message::PhotoAcquired(result) => {
                self.media_busy = false;
                match result {
                    Ok(Some(path)) => {
                        log::debug!("photo imported to {}", path.display());
                        if let Some(previous) = self.form.photo.replace(path) {
                            self.discard_photo_if_unused(&previous);
                        }
                    }
                    Ok(None) => {
                        // User backed out; stay silent.
                    }
                    Err(err) => {
                        log::warn!("photo acquisition failed: {}", err);
                        self.alert = Some(err);
                    }
                }
            }

            Message::ToggleDatePicker => {
                self.date_picker = match self.date_picker {
                    Some(_) => None,
                    None => Some(DatePickerState::for_date(self.form.date)),
                };
            }

            Message::PickerPrevMonth => {
                if let Some(picker) = &mut self.date_picker {
                    picker.prev_month();
                }
            }

            Message::PickerNextMonth => {
                if let Some(picker) = &mut self.date_picker {
                    picker.next_month();
                }
            }

            Message::PickerSelectDay(date) => {
                self.form.date = date;
                if date_picker::closes_on_select() {
                    self.date_picker = None;
                }
            }

            Message::CloseDatePicker => {
                self.date_picker = None;
            }

            Message::EditItem(id) => {
                if let Some(item) = self.items.iter().find(|item| item.id == id) {
                    // Loading overwrites whatever import was pending.
                    let pending = self.form.photo.clone();
                    self.form.load(item);
                    if self.date_picker.is_some() {
                        self.date_picker = Some(DatePickerState::for_date(self.form.date));
                    }
                    if let Some(pending) = pending {
                        self.discard_photo_if_unused(&pending);
                    }
                }
            }

            Message::RowPressed(id) => {
                self.row_hold = Some(RowHold {
                    id,
                    since: Instant::now(),
                });
            }

            Message::RowReleased => {
                self.row_hold = None;
            }

            Message::Tick => {
                let now = Instant::now();

                // A press held long enough deletes the row, no confirmation.
                if let Some(hold) = &self.row_hold {
                    if now.duration_since(hold.since) >= HOLD_TO_DELETE {
                        let id = hold.id;
                        self.row_hold = None;
                        let photo = self
                            .items
                            .iter()
                            .find(|item| item.id == id)
                            .and_then(|item| item.photo.clone());
                        if list::remove(&mut self.items, id) {
                            self.pop_ins.remove(&id);
                            log::info!("deleted item {}", id);
                            if let Some(photo) = photo {
                                self.discard_photo_if_unused(&photo);
                            }
                        }
                    }
                }

                self.pop_ins.retain(|_, pop| !pop.finished(now));
            }

            Message::DismissAlert => {
                self.alert = None;
            }
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        // Only tick while something is time-dependent.
        if self.pop_ins.is_empty() && self.row_hold.is_none() {
            return cosmic::iced::Subscription::none();
        }
        cosmic::iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.alert.is_some() {
            self.alert = None;
        } else if self.date_picker.is_some() {
            self.date_picker = None;
        }
        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let mut top = column().spacing(12).push(self.form_view());

        if let Some(ref message) = self.alert {
            top = top.push(alert_banner(message));
        }

        if let Some(ref picker) = self.date_picker {
            let today = chrono::Local::now().date_naive();
            top = top.push(date_picker::date_picker(picker, self.form.date, today));
        }

        let list: Element<'_, Message> = if self.items.is_empty() {
            container(text::body("Nothing to do yet"))
                .padding(32)
                .center_x(Length::Fill)
                .into()
        } else {
            let mut rows = column().spacing(8);
            for (index, item) in self.items.iter().enumerate() {
                let progress = self
                    .pop_ins
                    .get(&item.id)
                    .map_or(1.0, |pop| pop.progress(now));
                rows = rows.push(item_row(item, index, progress));
            }
            scrollable(rows.width(Length::Fill))
                .height(Length::Fill)
                .into()
        };

        container(
            column()
                .spacing(12)
                .push(top)
                .push(list)
                .padding(16)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

impl Snapdo {
    /// Unlink an imported photo once neither the form nor any item shows it.
    fn discard_photo_if_unused(&self, path: &Path) {
        if !list::photo_in_use(&self.items, &self.form, path) {
            media::discard_import(path, &self.config.photo_directory);
        }
    }

    fn form_view(&self) -> column::Column<'_, Message> {
        let form = &self.form;
        let mut content = column().spacing(8);

        let input_row = row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                text_input::text_input("What needs doing?", &form.title)
                    .on_input(Message::TitleChanged)
                    .on_submit(|_| Message::Submit)
                    .width(Length::Fill),
            )
            .push(
                button::icon(icon::from_name("camera-photo-symbolic"))
                    .on_press(Message::CapturePhoto),
            )
            .push(
                button::icon(icon::from_name("folder-pictures-symbolic"))
                    .on_press(Message::PickPhoto),
            )
            .push(button::standard(format_date(form.date)).on_press(Message::ToggleDatePicker));
        content = content.push(input_row);

        if self.media_busy {
            content = content.push(text::caption("Waiting for the photo dialog..."));
        }

        if let Some(ref photo) = form.photo {
            content = content.push(
                row()
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .push(text::caption("Attached photo"))
                    .push(
                        image(image::Handle::from_path(photo))
                            .width(Length::Fixed(PREVIEW_SIZE))
                            .height(Length::Fixed(PREVIEW_SIZE))
                            .content_fit(ContentFit::Cover),
                    ),
            );
        }

        let commit_label = if form.editing.is_some() {
            "Save changes"
        } else {
            "Add"
        };
        content = content.push(
            button::suggested(commit_label)
                .on_press(Message::Submit)
                .width(Length::Fill),
        );

        content
    }
}

fn alert_banner(message: &str) -> Element<'static, Message> {
    container(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(icon::from_name("dialog-warning-symbolic").icon())
            .push(text::body(message.to_string()).width(Length::Fill))
            .push(button::standard("Dismiss").on_press(Message::DismissAlert)),
    )
    .padding(12)
    .width(Length::Fill)
    .class(theme::Container::Card)
    .into()
}
