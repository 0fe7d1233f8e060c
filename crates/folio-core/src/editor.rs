//! Content editor: an in-memory draft of the ContentDocument, mutated
//! field-by-field and submitted as one atomic full-document save.
//!
//! The draft is independent of the live displayed copy until `save`. On a
//! store failure the draft is retained for retry; dropping the editor
//! without saving discards it. There is no undo and no partial persistence.

use crate::content::{ContentDocument, ProcessStep, Project, SoftwareTool};
use crate::store::{ContentStore, StoreError};
use chrono::Utc;

const NEW_PROJECT_TITLE: &str = "New Project";
const NEW_PROJECT_CATEGORY: &str = "uiux";
const NEW_PROJECT_DESC: &str = "Project description goes here.";
const NEW_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1616469829941-c7200edec809?auto=format&fit=crop&q=80&w=800";

const NEW_SOFTWARE_NAME: &str = "New Software";
const NEW_SOFTWARE_CATEGORY: &str = "Design";
const NEW_SOFTWARE_LEVEL: u8 = 50;

/// One scalar of the profile, with its replacement value.
#[derive(Debug, Clone)]
pub enum ProfileField {
    Name(String),
    ShortBio(String),
    Email(String),
    Linkedin(String),
    Location(String),
    ResumeLink(String),
}

/// One field of one portfolio entry, with its replacement value.
#[derive(Debug, Clone)]
pub enum ProjectField {
    Title(String),
    Category(String),
    Image(String),
    Desc(String),
}

/// One field of one software entry, with its replacement value.
#[derive(Debug, Clone)]
pub enum SoftwareField {
    Name(String),
    Category(String),
    Level(u8),
}

/// The admin's working copy. All mutations target the draft only; nothing
/// reaches the store until [`ContentEditor::save`].
#[derive(Debug, Clone)]
pub struct ContentEditor {
    draft: ContentDocument,
}

impl ContentEditor {
    /// Opens the editor over a copy of the live document.
    pub fn new(live: ContentDocument) -> Self {
        Self { draft: live }
    }

    pub fn draft(&self) -> &ContentDocument {
        &self.draft
    }

    pub fn update_profile_field(&mut self, field: ProfileField) {
        let profile = &mut self.draft.profile;
        match field {
            ProfileField::Name(v) => profile.name = v,
            ProfileField::ShortBio(v) => profile.short_bio = v,
            ProfileField::Email(v) => profile.email = v,
            ProfileField::Linkedin(v) => profile.linkedin = v,
            ProfileField::Location(v) => profile.location = v,
            ProfileField::ResumeLink(v) => profile.resume_link = v,
        }
    }

    /// Replaces `stats[index].value`; the label is fixed. Out-of-range
    /// indices are ignored.
    pub fn update_stat(&mut self, index: usize, value: impl Into<String>) {
        if let Some(stat) = self.draft.stats.get_mut(index) {
            stat.value = value.into();
        }
    }

    /// Prepends a placeholder project with a fresh timestamp-derived id and
    /// an empty process list. Returns the new id.
    pub fn add_project(&mut self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        // Timestamp collisions are possible within one millisecond; ids must
        // stay unique within the sequence.
        while self.draft.portfolio.iter().any(|p| p.id == id) {
            id += 1;
        }
        self.draft.portfolio.insert(
            0,
            Project {
                id,
                title: NEW_PROJECT_TITLE.to_string(),
                category: NEW_PROJECT_CATEGORY.to_string(),
                image: NEW_PROJECT_IMAGE.to_string(),
                desc: NEW_PROJECT_DESC.to_string(),
                process: Vec::new(),
            },
        );
        id
    }

    /// Removes the project with the matching id; no-op if absent.
    pub fn delete_project(&mut self, id: i64) {
        self.draft.portfolio.retain(|p| p.id != id);
    }

    pub fn update_project_field(&mut self, index: usize, field: ProjectField) {
        if let Some(project) = self.draft.portfolio.get_mut(index) {
            match field {
                ProjectField::Title(v) => project.title = v,
                ProjectField::Category(v) => project.category = v,
                ProjectField::Image(v) => project.image = v,
                ProjectField::Desc(v) => project.desc = v,
            }
        }
    }

    /// Replaces one step of a project's process breakdown, or appends when
    /// `step_index` is past the end.
    pub fn set_process_step(&mut self, project_index: usize, step_index: usize, step: ProcessStep) {
        if let Some(project) = self.draft.portfolio.get_mut(project_index) {
            if let Some(slot) = project.process.get_mut(step_index) {
                *slot = step;
            } else {
                project.process.push(step);
            }
        }
    }

    /// Appends a placeholder software entry.
    pub fn add_software(&mut self) {
        self.draft.software.push(SoftwareTool {
            name: NEW_SOFTWARE_NAME.to_string(),
            category: NEW_SOFTWARE_CATEGORY.to_string(),
            level: NEW_SOFTWARE_LEVEL,
        });
    }

    /// Removes the software entry at `index`; no-op if out of range.
    pub fn delete_software(&mut self, index: usize) {
        if index < self.draft.software.len() {
            self.draft.software.remove(index);
        }
    }

    pub fn update_software_field(&mut self, index: usize, field: SoftwareField) {
        if let Some(tool) = self.draft.software.get_mut(index) {
            match field {
                SoftwareField::Name(v) => tool.name = v,
                SoftwareField::Category(v) => tool.category = v,
                SoftwareField::Level(v) => tool.level = v.min(100),
            }
        }
    }

    /// Submits the entire draft as one full-document overwrite. On success
    /// the returned document is the new live copy; on failure the draft is
    /// untouched so the admin can retry.
    pub async fn save<S: ContentStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<ContentDocument, StoreError> {
        store.save(&self.draft).await?;
        Ok(self.draft.clone())
    }
}
