use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::item::Item;

/// Pending input that has not been committed to the list yet. One instance
/// serves both add mode and edit mode; `editing` selects between them.
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub title: String,
    pub photo: Option<PathBuf>,
    pub date: NaiveDate,
    /// Id of the item being edited, or `None` when adding.
    pub editing: Option<Uuid>,
}

impl ItemForm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            photo: None,
            date,
            editing: None,
        }
    }

    /// True when there is nothing worth committing.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.photo.is_none()
    }

    /// Copy an existing item into the form. The item itself stays untouched
    /// until the next commit.
    pub fn load(&mut self, item: &Item) {
        self.title = item.title.clone();
        self.photo = item.photo.clone();
        self.date = item.date;
        self.editing = Some(item.id);
    }

    /// Clear title, photo, and edit target. The date keeps its last value.
    pub fn reset(&mut self) {
        self.title.clear();
        self.photo = None;
        self.editing = None;
    }
}
