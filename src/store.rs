//! # NoteStore: The Single Ownership Root
//!
//! [`NoteStore`] holds every note for the lifetime of the process. It is the
//! only authoritative state in the system: presentation layers read from it,
//! call a mutation method, and re-render from the updated snapshot. State is
//! process-lifetime only; there is no persistence layer behind it.
//!
//! ## Design
//!
//! - **Explicit instance, no globals.** The store is a plain struct passed
//!   to whoever drives it. All mutation goes through `&mut self` methods.
//! - **Single actor.** One interaction/render cycle at a time, so there is
//!   no interior mutability and no locking. A multi-actor variant would need
//!   one mutual-exclusion boundary around the whole store.
//! - **Insertion order is display order.** Notes are kept in a
//!   `HashMap<Uuid, Note>` for lookup plus a `Vec<Uuid>` recording creation
//!   order, which [`NoteStore::list_notes`] follows.
//!
//! ## Mutation Surface
//!
//! Everything the presentation layer may do to a note goes through a store
//! method taking the note id: the store resolves the id and delegates the
//! list semantics to [`Note`]. Unknown ids fail with
//! [`NotsError::NoteNotFound`]; item positions are validated per call (see
//! the index-shift note in [`crate::model`]).

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{NotsError, Result};
use crate::model::{ListKind, MediaBlob, Note};

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: HashMap<Uuid, Note>,
    // Creation order; kept in sync with `notes` on insert and delete.
    order: Vec<Uuid>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty note and returns its id. Never fails.
    pub fn create_note(&mut self) -> Uuid {
        let note = Note::new();
        let id = note.id;
        self.notes.insert(id, note);
        self.order.push(id);
        id
    }

    /// Removes a note and everything it owns: items, media, reminder.
    pub fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        if self.notes.remove(id).is_none() {
            return Err(NotsError::NoteNotFound(*id));
        }
        self.order.retain(|existing| existing != id);
        Ok(())
    }

    pub fn get_note(&self, id: &Uuid) -> Result<&Note> {
        self.notes.get(id).ok_or(NotsError::NoteNotFound(*id))
    }

    fn get_note_mut(&mut self, id: &Uuid) -> Result<&mut Note> {
        self.notes.get_mut(id).ok_or(NotsError::NoteNotFound(*id))
    }

    /// All notes in creation order, for rendering.
    pub fn list_notes(&self) -> Vec<&Note> {
        self.order
            .iter()
            .filter_map(|id| self.notes.get(id))
            .collect()
    }

    pub fn note_count(&self) -> usize {
        self.order.len()
    }

    /// Replaces the note's free text. Empty text is allowed.
    pub fn set_text(&mut self, id: &Uuid, text: &str) -> Result<()> {
        let note = self.get_note_mut(id)?;
        note.text = text.to_string();
        Ok(())
    }

    pub fn add_todo(&mut self, id: &Uuid, text: &str) -> Result<()> {
        self.get_note_mut(id)?.add_item(ListKind::Todos, text)
    }

    pub fn toggle_todo(&mut self, id: &Uuid, index: usize) -> Result<()> {
        self.get_note_mut(id)?.toggle_item(ListKind::Todos, index)
    }

    pub fn remove_todo(&mut self, id: &Uuid, index: usize) -> Result<()> {
        self.get_note_mut(id)?.remove_item(ListKind::Todos, index)?;
        Ok(())
    }

    pub fn add_checklist_item(&mut self, id: &Uuid, text: &str) -> Result<()> {
        self.get_note_mut(id)?.add_item(ListKind::Checklist, text)
    }

    pub fn toggle_checklist_item(&mut self, id: &Uuid, index: usize) -> Result<()> {
        self.get_note_mut(id)?.toggle_item(ListKind::Checklist, index)
    }

    pub fn remove_checklist_item(&mut self, id: &Uuid, index: usize) -> Result<()> {
        self.get_note_mut(id)?
            .remove_item(ListKind::Checklist, index)?;
        Ok(())
    }

    /// Appends an image attachment. Only png/jpg/jpeg pass the allow-list.
    pub fn attach_image(&mut self, id: &Uuid, content_type: &str, data: Vec<u8>) -> Result<()> {
        // Validate the format before touching the note, so a rejected
        // attach leaves the note unchanged.
        let blob = MediaBlob::image(content_type, data)?;
        self.get_note_mut(id)?.images.push(blob);
        Ok(())
    }

    /// Appends an audio attachment. Only mp3/wav pass the allow-list.
    pub fn attach_audio(&mut self, id: &Uuid, content_type: &str, data: Vec<u8>) -> Result<()> {
        let blob = MediaBlob::audio(content_type, data)?;
        self.get_note_mut(id)?.audio.push(blob);
        Ok(())
    }

    /// Sets the reminder date. Any valid date is accepted, past included.
    pub fn set_reminder(&mut self, id: &Uuid, date: NaiveDate) -> Result<()> {
        self.get_note_mut(id)?.reminder = Some(date);
        Ok(())
    }

    pub fn clear_reminder(&mut self, id: &Uuid) -> Result<()> {
        self.get_note_mut(id)?.reminder = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: NoteStore,
        pub ids: Vec<Uuid>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(),
                ids: Vec::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.store.create_note();
                self.store
                    .set_text(&id, &format!("Note {}", i + 1))
                    .unwrap();
                self.ids.push(id);
            }
            self
        }

        pub fn with_todo_note(mut self, todos: &[&str]) -> Self {
            let id = self.store.create_note();
            for todo in todos {
                self.store.add_todo(&id, todo).unwrap();
            }
            self.ids.push(id);
            self
        }

        pub fn last_id(&self) -> Uuid {
            *self.ids.last().expect("fixture has no notes")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_returns_unique_ids() {
        let mut store = NoteStore::new();
        let ids: HashSet<Uuid> = (0..50).map(|_| store.create_note()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(store.note_count(), 50);
    }

    #[test]
    fn test_count_tracks_creates_minus_deletes() {
        let mut store = NoteStore::new();
        let a = store.create_note();
        let _b = store.create_note();
        let c = store.create_note();

        store.delete_note(&a).unwrap();
        store.delete_note(&c).unwrap();

        assert_eq!(store.note_count(), 1);
        assert_eq!(store.list_notes().len(), 1);
    }

    #[test]
    fn test_delete_then_get_fails_not_found() {
        let mut store = NoteStore::new();
        let id = store.create_note();
        store.delete_note(&id).unwrap();

        match store.get_note(&id) {
            Err(NotsError::NoteNotFound(err_id)) => assert_eq!(err_id, id),
            other => panic!("Expected NoteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_unknown_id_fails() {
        let mut store = NoteStore::new();
        let result = store.delete_note(&Uuid::new_v4());
        assert!(matches!(result, Err(NotsError::NoteNotFound(_))));
    }

    #[test]
    fn test_mutation_on_unknown_id_fails() {
        let mut store = NoteStore::new();
        let ghost = Uuid::new_v4();

        assert!(store.set_text(&ghost, "hello").is_err());
        assert!(store.add_todo(&ghost, "x").is_err());
        assert!(store.toggle_todo(&ghost, 0).is_err());
        assert!(store.attach_image(&ghost, "png", vec![]).is_err());
        assert!(store
            .set_reminder(&ghost, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .is_err());
    }

    #[test]
    fn test_list_notes_keeps_insertion_order() {
        let fixture = StoreFixture::new().with_notes(3);
        let notes = fixture.store.list_notes();

        let texts: Vec<&str> = notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Note 1", "Note 2", "Note 3"]);
    }

    #[test]
    fn test_order_survives_middle_delete() {
        let mut fixture = StoreFixture::new().with_notes(3);
        let middle = fixture.ids[1];
        fixture.store.delete_note(&middle).unwrap();

        let texts: Vec<&str> = fixture
            .store
            .list_notes()
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Note 1", "Note 3"]);
    }

    #[test]
    fn test_set_text_allows_empty() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        store.set_text(&id, "draft").unwrap();
        store.set_text(&id, "").unwrap();
        assert_eq!(store.get_note(&id).unwrap().text, "");
    }

    #[test]
    fn test_add_blank_todo_rejected_list_unchanged() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        assert!(matches!(
            store.add_todo(&id, ""),
            Err(NotsError::EmptyInput(_))
        ));
        assert!(matches!(
            store.add_todo(&id, "   "),
            Err(NotsError::EmptyInput(_))
        ));
        assert!(store.get_note(&id).unwrap().todos.is_empty());
    }

    #[test]
    fn test_double_remove_same_index_hits_shifted_item() {
        let fixture = StoreFixture::new().with_todo_note(&["a", "b", "c"]);
        let id = fixture.last_id();
        let mut store = fixture.store;

        // First removal at 1 takes "b"; second at 1 must take the shifted "c".
        store.remove_todo(&id, 1).unwrap();
        store.remove_todo(&id, 1).unwrap();

        let note = store.get_note(&id).unwrap();
        assert_eq!(note.todos.len(), 1);
        assert_eq!(note.todos[0].text, "a");

        // List is now shorter than index + 1: same call fails.
        let result = store.remove_todo(&id, 1);
        assert!(matches!(
            result,
            Err(NotsError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_checklist_ops_mirror_todo_contract() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        assert!(store.add_checklist_item(&id, "  ").is_err());
        store.add_checklist_item(&id, "pack bags").unwrap();
        store.toggle_checklist_item(&id, 0).unwrap();
        assert!(store.get_note(&id).unwrap().checklist[0].done);

        store.remove_checklist_item(&id, 0).unwrap();
        match store.toggle_checklist_item(&id, 0) {
            Err(NotsError::IndexOutOfRange { list, .. }) => {
                assert_eq!(list, ListKind::Checklist)
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_attach_image_appends_exactly_one() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        store.attach_image(&id, "png", vec![0x89, 0x50]).unwrap();
        assert_eq!(store.get_note(&id).unwrap().images.len(), 1);
    }

    #[test]
    fn test_attach_image_gif_rejected_nothing_appended() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        let result = store.attach_image(&id, "gif", vec![0x47, 0x49]);
        match result {
            Err(NotsError::UnsupportedFormat(got)) => assert_eq!(got, "gif"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
        assert!(store.get_note(&id).unwrap().images.is_empty());
    }

    #[test]
    fn test_attach_audio_allow_list() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        store.attach_audio(&id, "mp3", vec![1]).unwrap();
        store.attach_audio(&id, "wav", vec![2]).unwrap();
        assert!(store.attach_audio(&id, "ogg", vec![3]).is_err());

        assert_eq!(store.get_note(&id).unwrap().audio.len(), 2);
    }

    #[test]
    fn test_reminder_accepts_past_dates() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        let past = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        store.set_reminder(&id, past).unwrap();
        assert_eq!(store.get_note(&id).unwrap().reminder, Some(past));
    }

    #[test]
    fn test_clear_reminder_resets_to_none() {
        let mut store = NoteStore::new();
        let id = store.create_note();

        store
            .set_reminder(&id, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap())
            .unwrap();
        store.clear_reminder(&id).unwrap();
        assert!(store.get_note(&id).unwrap().reminder.is_none());
    }

    #[test]
    fn test_delete_cascades_to_contents() {
        let mut store = NoteStore::new();
        let id = store.create_note();
        store.add_todo(&id, "orphan-to-be").unwrap();
        store.attach_image(&id, "jpeg", vec![0xff]).unwrap();

        store.delete_note(&id).unwrap();

        assert_eq!(store.note_count(), 0);
        assert!(store.list_notes().is_empty());
    }
}
