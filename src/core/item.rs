use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

/// A single to-do entry. Lives in memory only; the photo path points at an
/// imported copy inside the app's photo directory.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: Uuid,
    /// May be empty when a photo carries the entry.
    pub title: String,
    pub date: NaiveDate,
    pub photo: Option<PathBuf>,
}

impl Item {
    pub fn new(title: impl Into<String>, date: NaiveDate, photo: Option<PathBuf>) -> Self {
        let title = title.into();
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            date,
            photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_title() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let item = Item::new("  Buy milk  ", date, None);
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.date, date);
        assert!(item.photo.is_none());
    }

    #[test]
    fn fresh_ids_differ() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let a = Item::new("a", date, None);
        let b = Item::new("b", date, None);
        assert_ne!(a.id, b.id);
    }
}
