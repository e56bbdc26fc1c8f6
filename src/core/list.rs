use std::path::Path;

use uuid::Uuid;

use super::form::ItemForm;
use super::item::Item;

/// Outcome of applying the form to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new item was prepended.
    Added(Uuid),
    /// An existing item was overwritten in place.
    Updated(Uuid),
    /// The edit target no longer exists; the list stays as it is.
    Stale,
    /// Nothing worth committing; the form stays as it is too.
    Rejected,
}

/// Apply the form to the list: prepend a new item, or overwrite the one being
/// edited. A blank form (whitespace title and no photo) is rejected without
/// touching anything. Every other outcome resets the form.
pub fn commit(items: &mut Vec<Item>, form: &mut ItemForm) -> Commit {
    if form.is_blank() {
        return Commit::Rejected;
    }

    let outcome = match form.editing {
        Some(id) => match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.title = form.title.trim().to_string();
                item.date = form.date;
                item.photo = form.photo.clone();
                Commit::Updated(id)
            }
            // The edited item was deleted out from under the form.
            None => Commit::Stale,
        },
        None => {
            let item = Item::new(form.title.clone(), form.date, form.photo.clone());
            let id = item.id;
            items.insert(0, item);
            Commit::Added(id)
        }
    };

    form.reset();
    outcome
}

/// Remove the item with the given id. Unknown ids are a no-op.
pub fn remove(items: &mut Vec<Item>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// True while any item or the form still shows the photo at `path`. Imported
/// files may be unlinked once this goes false.
pub fn photo_in_use(items: &[Item], form: &ItemForm, path: &Path) -> bool {
    form.photo.as_deref() == Some(path)
        || items.iter().any(|item| item.photo.as_deref() == Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn form_with(title: &str, date: NaiveDate) -> ItemForm {
        let mut form = ItemForm::new(date);
        form.title = title.to_string();
        form
    }

    #[test]
    fn commit_adds_item_to_empty_list() {
        let mut items = Vec::new();
        let mut form = form_with("Buy milk", day(2024, 1, 5));

        let outcome = commit(&mut items, &mut form);

        assert!(matches!(outcome, Commit::Added(_)));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Buy milk");
        assert_eq!(items[0].date, day(2024, 1, 5));
        assert!(items[0].photo.is_none());
    }

    #[test]
    fn newest_item_goes_to_the_front() {
        let mut items = Vec::new();
        let mut form = form_with("first", day(2024, 1, 1));
        commit(&mut items, &mut form);
        form.title = "second".to_string();
        commit(&mut items, &mut form);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "second");
        assert_eq!(items[1].title, "first");
    }

    #[test]
    fn blank_commit_changes_nothing() {
        let mut items = vec![Item::new("existing", day(2024, 1, 1), None)];
        let mut form = form_with("   ", day(2024, 1, 5));
        form.editing = Some(items[0].id);

        let outcome = commit(&mut items, &mut form);

        assert_eq!(outcome, Commit::Rejected);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "existing");
        // A rejected commit must not reset the form either.
        assert_eq!(form.title, "   ");
        assert_eq!(form.editing, Some(items[0].id));
    }

    #[test]
    fn photo_alone_is_committable() {
        let mut items = Vec::new();
        let mut form = ItemForm::new(day(2024, 1, 5));
        form.photo = Some(PathBuf::from("/tmp/p.jpg"));

        let outcome = commit(&mut items, &mut form);

        assert!(matches!(outcome, Commit::Added(_)));
        assert_eq!(items.len(), 1);
        assert!(items[0].title.is_empty());
        assert_eq!(items[0].photo, Some(PathBuf::from("/tmp/p.jpg")));
    }

    #[test]
    fn edit_overwrites_in_place() {
        let mut items = vec![
            Item::new("newer", day(2024, 1, 2), None),
            Item::new("older", day(2024, 1, 1), None),
        ];
        let target = items[1].id;

        let mut form = ItemForm::new(day(2024, 1, 5));
        form.load(&items[1]);
        form.title = "older, revised".to_string();
        form.date = day(2024, 2, 1);

        let outcome = commit(&mut items, &mut form);

        assert_eq!(outcome, Commit::Updated(target));
        assert_eq!(items.len(), 2);
        // Same id, same position, new contents.
        assert_eq!(items[1].id, target);
        assert_eq!(items[1].title, "older, revised");
        assert_eq!(items[1].date, day(2024, 2, 1));
        assert_eq!(items[0].title, "newer");
    }

    #[test]
    fn edit_commit_resets_the_form() {
        let mut items = vec![Item::new("task", day(2024, 1, 1), None)];
        let mut form = ItemForm::new(day(2024, 1, 5));
        form.load(&items[0]);
        form.title = "task, revised".to_string();

        commit(&mut items, &mut form);

        assert!(form.title.is_empty());
        assert!(form.editing.is_none());
        // The date survives the reset.
        assert_eq!(form.date, day(2024, 1, 1));
    }

    #[test]
    fn stale_edit_leaves_list_but_resets_form() {
        let mut items = vec![Item::new("survivor", day(2024, 1, 1), None)];
        let victim = Item::new("victim", day(2024, 1, 2), None);
        let mut form = ItemForm::new(day(2024, 1, 5));
        form.load(&victim);
        form.title = "too late".to_string();

        let outcome = commit(&mut items, &mut form);

        assert_eq!(outcome, Commit::Stale);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "survivor");
        assert!(form.title.is_empty());
        assert!(form.editing.is_none());
    }

    #[test]
    fn remove_deletes_only_the_matching_item() {
        let mut items = vec![
            Item::new("a", day(2024, 1, 1), None),
            Item::new("b", day(2024, 1, 2), None),
        ];
        let target = items[0].id;

        assert!(remove(&mut items, target));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "b");
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut items = vec![Item::new("a", day(2024, 1, 1), None)];

        assert!(!remove(&mut items, Uuid::new_v4()));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn commit_trims_the_stored_title() {
        let mut items = Vec::new();
        let mut form = form_with("  Buy milk  ", day(2024, 1, 5));

        commit(&mut items, &mut form);

        assert_eq!(items[0].title, "Buy milk");
    }

    #[test]
    fn photo_in_use_sees_items_and_form() {
        let photo = PathBuf::from("/tmp/p.jpg");
        let items = vec![Item::new("pinned", day(2024, 1, 1), Some(photo.clone()))];
        let form = ItemForm::new(day(2024, 1, 5));

        assert!(photo_in_use(&items, &form, &photo));
        assert!(!photo_in_use(&items, &form, Path::new("/tmp/other.jpg")));

        // A photo only the form holds is still in use.
        let mut pending = ItemForm::new(day(2024, 1, 5));
        pending.photo = Some(photo.clone());
        assert!(photo_in_use(&[], &pending, &photo));
        assert!(!photo_in_use(&[], &form, &photo));
    }
}
