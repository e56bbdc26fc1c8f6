use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Message {
    // Form
    TitleChanged(String),
    Submit,

    // Photo acquisition
    CapturePhoto,
    PickPhoto,
    PhotoAcquired(Result<Option<PathBuf>, String>),

    // Date picker
    ToggleDatePicker,
    PickerPrevMonth,
    PickerNextMonth,
    PickerSelectDay(NaiveDate),
    CloseDatePicker,

    // List rows
    EditItem(Uuid),
    RowPressed(Uuid),
    RowReleased,

    // Drives the pop-in animation and the hold-to-delete timer
    Tick,

    // Alert banner
    DismissAlert,
}
