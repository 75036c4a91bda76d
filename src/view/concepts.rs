//! Concepts screen — list, create, inline edit, delete.

use super::ViewStatus;
use crate::client::LearningClient;
use crate::domain::concept::client::DEFAULT_CONCEPT_LIMIT;
use crate::domain::concept::wire::{ConceptDeleted, ConceptUpdated};
use crate::domain::concept::{parse_tags, Concept, ConceptPatch, NewConcept};
use crate::error::SdkError;
use crate::mutation::Mutation;
use crate::query::QueryObserver;
use crate::shared::ConceptId;
use std::sync::Arc;

/// Create form inputs. Tags are typed comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptForm {
    pub name: String,
    pub description: String,
    pub tags: String,
}

impl ConceptForm {
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_new_concept(&self) -> NewConcept {
        NewConcept {
            name: self.name.trim().to_string(),
            description: Some(self.description.trim().to_string()).filter(|d| !d.is_empty()),
            tags: parse_tags(&self.tags),
        }
    }
}

/// The row being edited inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptEdit {
    pub id: ConceptId,
    pub name: String,
    pub description: String,
}

impl ConceptEdit {
    pub fn of(concept: &Concept) -> Self {
        Self {
            id: concept.id.clone(),
            name: concept.name.clone(),
            description: concept.description.clone().unwrap_or_default(),
        }
    }

    /// Name and description are always sent; an emptied description clears it.
    pub fn to_patch(&self) -> ConceptPatch {
        ConceptPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            ..ConceptPatch::default()
        }
    }
}

pub struct ConceptsView {
    client: LearningClient,
    concepts: QueryObserver<Vec<Concept>>,
    form: ConceptForm,
    editing: Option<ConceptEdit>,
    create: Mutation<Concept>,
    update: Mutation<ConceptUpdated>,
    delete: Mutation<ConceptDeleted>,
}

impl ConceptsView {
    pub fn new(client: &LearningClient) -> Self {
        let concepts = client.concepts();
        Self {
            concepts: concepts.watch_page(DEFAULT_CONCEPT_LIMIT, 0),
            create: concepts.create_mutation(),
            update: concepts.update_mutation(),
            delete: concepts.delete_mutation(),
            client: client.clone(),
            form: ConceptForm::default(),
            editing: None,
        }
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus::of(&self.concepts.state())
    }

    pub async fn ready(&self) -> Result<(), Arc<SdkError>> {
        self.concepts.wait().await.map(|_| ())
    }

    pub fn concepts(&self) -> Arc<Vec<Concept>> {
        self.concepts.data().unwrap_or_default()
    }

    // ── Create ───────────────────────────────────────────────────────────

    pub fn form(&self) -> &ConceptForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ConceptForm {
        &mut self.form
    }

    /// Create from the form. The form is cleared only on success.
    pub async fn create(&mut self) -> Result<Arc<Concept>, Arc<SdkError>> {
        let new_concept = self.form.to_new_concept();
        let concept = self
            .create
            .run(self.client.concepts().create(&new_concept))
            .await?;
        self.form = ConceptForm::default();
        Ok(concept)
    }

    // ── Inline edit ──────────────────────────────────────────────────────

    pub fn editing(&self) -> Option<&ConceptEdit> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut ConceptEdit> {
        self.editing.as_mut()
    }

    pub fn start_edit(&mut self, concept: &Concept) {
        self.editing = Some(ConceptEdit::of(concept));
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the inline edit. Edit state is kept on failure so the user can retry.
    pub async fn save_edit(&mut self) -> Result<Arc<ConceptUpdated>, Arc<SdkError>> {
        let Some(edit) = self.editing.clone() else {
            return Err(Arc::new(SdkError::Validation("no concept is being edited".to_string())));
        };
        let updated = self
            .update
            .run(self.client.concepts().update(&edit.id, &edit.to_patch()))
            .await?;
        self.editing = None;
        Ok(updated)
    }

    // ── Delete ───────────────────────────────────────────────────────────

    pub async fn delete(&mut self, id: &ConceptId) -> Result<Arc<ConceptDeleted>, Arc<SdkError>> {
        let deleted = self.delete.run(self.client.concepts().delete(id)).await?;
        if self.editing.as_ref().is_some_and(|e| &e.id == id) {
            self.editing = None;
        }
        Ok(deleted)
    }

    pub fn is_busy(&self) -> bool {
        self.create.is_pending() || self.update.is_pending() || self.delete.is_pending()
    }

    /// Most relevant write error for the banner.
    pub fn write_error(&self) -> Option<String> {
        self.create
            .error()
            .or_else(|| self.update.error())
            .or_else(|| self.delete.error())
            .map(|e| e.user_message())
    }
}
