//! Notes collection model, kept free of view concerns.

/// One note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Stable note identifier.
    pub id: u64,
    /// Note title.
    pub title: String,
    /// Note body text.
    pub body: String,
}

/// Ordered note collection with a selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesModel {
    notes: Vec<Note>,
    selected: Option<u64>,
    next_id: u64,
}

impl Default for NotesModel {
    fn default() -> Self {
        Self::seeded()
    }
}

impl NotesModel {
    /// Creates the collection with the selected welcome note.
    pub fn seeded() -> Self {
        Self {
            notes: vec![Note {
                id: 1,
                title: "Welcome".to_string(),
                body: "Welcome to your notes app! Create, edit, and organize your thoughts."
                    .to_string(),
            }],
            selected: Some(1),
            next_id: 2,
        }
    }

    /// Notes in display order (newest first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Currently selected note id.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// Currently selected note.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected
            .and_then(|id| self.notes.iter().find(|note| note.id == id))
    }

    /// Creates an empty note at the top of the list and selects it.
    pub fn add(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(
            0,
            Note {
                id,
                title: "New Note".to_string(),
                body: String::new(),
            },
        );
        self.selected = Some(id);
        id
    }

    /// Deletes a note; when it was selected, selection falls back to the
    /// first remaining note.
    pub fn delete(&mut self, id: u64) {
        self.notes.retain(|note| note.id != id);
        if self.selected == Some(id) {
            self.selected = self.notes.first().map(|note| note.id);
        }
    }

    /// Moves the selection cursor.
    pub fn select(&mut self, id: u64) {
        if self.notes.iter().any(|note| note.id == id) {
            self.selected = Some(id);
        }
    }

    /// Replaces the selected note's title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let selected = self.selected;
        if let Some(note) = self
            .notes
            .iter_mut()
            .find(|note| Some(note.id) == selected)
        {
            note.title = title.into();
        }
    }

    /// Replaces the selected note's body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        let selected = self.selected;
        if let Some(note) = self
            .notes
            .iter_mut()
            .find(|note| Some(note.id) == selected)
        {
            note.body = body.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeded_collection_selects_the_welcome_note() {
        let model = NotesModel::seeded();
        assert_eq!(model.notes().len(), 1);
        assert_eq!(model.selected_note().map(|note| note.title.as_str()), Some("Welcome"));
    }

    #[test]
    fn add_prepends_and_selects_the_new_note() {
        let mut model = NotesModel::seeded();
        let id = model.add();

        assert_eq!(model.notes()[0].id, id);
        assert_eq!(model.selected_id(), Some(id));
        assert_eq!(model.notes().len(), 2);
    }

    #[test]
    fn deleting_the_selected_note_falls_back_to_the_first_remaining() {
        let mut model = NotesModel::seeded();
        let second = model.add();
        model.delete(second);

        assert_eq!(model.selected_id(), Some(1));

        model.delete(1);
        assert_eq!(model.selected_id(), None);
        assert!(model.notes().is_empty());
    }

    #[test]
    fn deleting_an_unselected_note_keeps_the_selection() {
        let mut model = NotesModel::seeded();
        let second = model.add();
        model.select(1);
        model.delete(second);

        assert_eq!(model.selected_id(), Some(1));
    }

    #[test]
    fn edits_apply_to_the_selected_note_only() {
        let mut model = NotesModel::seeded();
        let second = model.add();
        model.set_title("Groceries");
        model.set_body("milk");

        let edited = model.notes().iter().find(|note| note.id == second).unwrap();
        assert_eq!(edited.title, "Groceries");
        assert_eq!(edited.body, "milk");

        let welcome = model.notes().iter().find(|note| note.id == 1).unwrap();
        assert_eq!(welcome.title, "Welcome");
    }
}
