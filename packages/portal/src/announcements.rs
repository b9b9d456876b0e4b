//! # Announcements board
//!
//! In-memory CRUD behind the admin announcements tab. The list shown on
//! screen is a projection ([`AnnouncementBoard::visible`]) recomputed from
//! the filter and sort on every render; the underlying list keeps insertion
//! order with new items at the front.
//!
//! New ids are one more than the largest numeric id on the board, so
//! deleting the newest item frees its id for reuse.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::mock;
use crate::models::{Announcement, Category};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PublishFilter {
    #[default]
    All,
    Published,
    Drafts,
}

impl PublishFilter {
    pub const ALL: [PublishFilter; 3] = [
        PublishFilter::All,
        PublishFilter::Published,
        PublishFilter::Drafts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PublishFilter::All => "All",
            PublishFilter::Published => "Published",
            PublishFilter::Drafts => "Drafts",
        }
    }

    fn admits(self, item: &Announcement) -> bool {
        match self {
            PublishFilter::All => true,
            PublishFilter::Published => item.is_published,
            PublishFilter::Drafts => !item.is_published,
        }
    }

    /// Message for an empty projection.
    pub fn empty_message(self) -> &'static str {
        match self {
            PublishFilter::All => "No announcements found.",
            PublishFilter::Published => "No published announcements found.",
            PublishFilter::Drafts => "No draft announcements found.",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateSort {
    #[default]
    Newest,
    Oldest,
}

impl DateSort {
    pub fn toggled(self) -> Self {
        match self {
            DateSort::Newest => DateSort::Oldest,
            DateSort::Oldest => DateSort::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateSort::Newest => "Newest",
            DateSort::Oldest => "Oldest",
        }
    }
}

/// What the form is editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Editing {
    New,
    Existing(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub is_published: bool,
    pub is_new: bool,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: Category::General,
            is_published: true,
            is_new: true,
        }
    }
}

impl AnnouncementForm {
    fn from_announcement(item: &Announcement) -> Self {
        Self {
            title: item.title.clone(),
            content: item.content.clone(),
            category: item.category,
            is_published: item.is_published,
            is_new: item.is_new,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(ValidationError::IncompleteAnnouncement);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnouncementBoard {
    pub items: Vec<Announcement>,
    pub filter: PublishFilter,
    pub sort: DateSort,
    pub editing: Option<Editing>,
    pub expanded: Option<String>,
    pub form: AnnouncementForm,
}

impl Default for AnnouncementBoard {
    fn default() -> Self {
        Self::with_items(mock::announcements())
    }
}

impl AnnouncementBoard {
    pub fn with_items(items: Vec<Announcement>) -> Self {
        Self {
            items,
            filter: PublishFilter::default(),
            sort: DateSort::default(),
            editing: None,
            expanded: None,
            form: AnnouncementForm::default(),
        }
    }

    /// Filtered and date-sorted view of the board.
    pub fn visible(&self) -> Vec<&Announcement> {
        let mut items: Vec<&Announcement> =
            self.items.iter().filter(|a| self.filter.admits(a)).collect();
        match self.sort {
            DateSort::Newest => items.sort_by(|a, b| b.date.cmp(&a.date)),
            DateSort::Oldest => items.sort_by(|a, b| a.date.cmp(&b.date)),
        }
        items
    }

    /// Published items, newest first, for the student feed.
    pub fn published(&self) -> Vec<&Announcement> {
        let mut items: Vec<&Announcement> = self.items.iter().filter(|a| a.is_published).collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn new_announcement(&mut self) {
        self.form = AnnouncementForm::default();
        self.editing = Some(Editing::New);
    }

    /// Open the form for `id`. Returns false for unknown ids.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter().find(|a| a.id == id) else {
            return false;
        };
        self.form = AnnouncementForm::from_announcement(item);
        self.editing = Some(Editing::Existing(id.to_string()));
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    fn next_id(&self) -> String {
        let max = self
            .items
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        if let Some(next) = max.checked_add(1) {
            return next.to_string();
        }
        let mut n = 1u64;
        while self.items.iter().any(|a| a.id == n.to_string()) {
            n += 1;
        }
        n.to_string()
    }

    /// Save the form, returning the id of the created or updated item.
    /// A failed validation leaves the board untouched.
    pub fn submit(&mut self, today: NaiveDate) -> Result<String, ValidationError> {
        self.form.validate()?;
        let id = match self.editing.take() {
            Some(Editing::Existing(id)) => {
                if let Some(item) = self.items.iter_mut().find(|a| a.id == id) {
                    item.title = self.form.title.clone();
                    item.content = self.form.content.clone();
                    item.category = self.form.category;
                    item.is_published = self.form.is_published;
                    item.is_new = self.form.is_new;
                }
                tracing::info!("Updated announcement {id}");
                id
            }
            _ => {
                let id = self.next_id();
                self.items.insert(
                    0,
                    Announcement {
                        id: id.clone(),
                        title: self.form.title.clone(),
                        content: self.form.content.clone(),
                        date: today,
                        category: self.form.category,
                        is_published: self.form.is_published,
                        is_new: self.form.is_new,
                        author: "Admin".to_string(),
                    },
                );
                tracing::info!("Created announcement {id}");
                id
            }
        };
        Ok(id)
    }

    /// Remove the item with `id`, closing its form if open.
    pub fn delete(&mut self, id: &str) -> Option<Announcement> {
        let index = self.items.iter().position(|a| a.id == id)?;
        if self.editing == Some(Editing::Existing(id.to_string())) {
            self.editing = None;
        }
        tracing::info!("Deleted announcement {id}");
        Some(self.items.remove(index))
    }

    /// Flip the published flag. Returns the new value.
    pub fn toggle_publish(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|a| a.id == id)?;
        item.is_published = !item.is_published;
        Some(item.is_published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::date;

    fn ids(items: Vec<&Announcement>) -> Vec<&str> {
        items.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_filter_and_sort_projection() {
        let mut board = AnnouncementBoard::default();
        assert_eq!(ids(board.visible()), vec!["5", "1", "2", "3", "4"]);

        board.toggle_sort();
        assert_eq!(ids(board.visible()), vec!["4", "3", "2", "1", "5"]);

        board.filter = PublishFilter::Drafts;
        assert_eq!(ids(board.visible()), vec!["5"]);

        board.filter = PublishFilter::Published;
        assert_eq!(board.visible().len(), 4);
        assert_eq!(board.items.len(), 5);
    }

    #[test]
    fn test_create_prepends_with_next_id() {
        let mut board = AnnouncementBoard::default();
        board.new_announcement();
        board.form.title = "Exam week".into();
        board.form.content = "Schedules are out.".into();
        board.form.category = Category::ExamUpdates;

        let id = board.submit(date(2025, 3, 12)).unwrap();
        assert_eq!(id, "6");
        let first = &board.items[0];
        assert_eq!(first.id, "6");
        assert_eq!(first.author, "Admin");
        assert_eq!(first.date, date(2025, 3, 12));
        assert!(first.is_published && first.is_new);
        assert!(board.editing.is_none());
    }

    #[test]
    fn test_blank_form_is_rejected() {
        let mut board = AnnouncementBoard::default();
        board.new_announcement();
        board.form.title = "Only a title".into();
        let snapshot = board.clone();
        assert_eq!(
            board.submit(date(2025, 1, 1)),
            Err(ValidationError::IncompleteAnnouncement)
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_update_merges_form() {
        let mut board = AnnouncementBoard::default();
        assert!(board.edit("3"));
        assert_eq!(board.form.category, Category::SystemMaintenance);
        board.form.title = "Maintenance moved to Saturday".into();
        board.form.is_new = true;

        assert_eq!(board.submit(date(2030, 1, 1)).unwrap(), "3");
        let item = board.items.iter().find(|a| a.id == "3").unwrap();
        assert_eq!(item.title, "Maintenance moved to Saturday");
        assert!(item.is_new);
        assert_eq!(item.date, date(2025, 3, 5));
        assert_eq!(item.author, "System");
        assert_eq!(board.items.len(), 5);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut board = AnnouncementBoard::default();
        board.edit("2");
        let removed = board.delete("2").unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(ids(board.items.iter().collect()), vec!["1", "3", "4", "5"]);
        assert!(board.editing.is_none());
        assert!(board.delete("2").is_none());
        assert_eq!(board.items.len(), 4);
    }

    #[test]
    fn test_max_id_reused_after_deleting_max() {
        let mut board = AnnouncementBoard::default();
        board.delete("5");
        board.new_announcement();
        board.form.title = "t".into();
        board.form.content = "c".into();
        assert_eq!(board.submit(date(2025, 1, 1)).unwrap(), "5");

        let mut empty = AnnouncementBoard::with_items(Vec::new());
        empty.new_announcement();
        empty.form.title = "t".into();
        empty.form.content = "c".into();
        assert_eq!(empty.submit(date(2025, 1, 1)).unwrap(), "1");
    }

    #[test]
    fn test_new_id_after_largest_possible_id() {
        let mut items = mock::announcements();
        items[0].id = u64::MAX.to_string();
        let mut board = AnnouncementBoard::with_items(items);
        board.new_announcement();
        board.form.title = "t".into();
        board.form.content = "c".into();
        let id = board.submit(date(2025, 1, 1)).unwrap();
        assert_ne!(id, u64::MAX.to_string());
        let ids: std::collections::HashSet<_> = board.items.iter().map(|a| &a.id).collect();
        assert_eq!(ids.len(), board.items.len());
    }

    #[test]
    fn test_toggle_publish_and_expand() {
        let mut board = AnnouncementBoard::default();
        assert_eq!(board.toggle_publish("5"), Some(true));
        assert_eq!(board.published().len(), 5);
        assert_eq!(board.toggle_publish("5"), Some(false));
        assert_eq!(board.toggle_publish("99"), None);

        board.toggle_expand("1");
        assert_eq!(board.expanded.as_deref(), Some("1"));
        board.toggle_expand("2");
        assert_eq!(board.expanded.as_deref(), Some("2"));
        board.toggle_expand("2");
        assert!(board.expanded.is_none());
    }
}
