//! Concepts sub-client — CRUD.

use crate::client::LearningClient;
use crate::domain::concept::wire::{ConceptDeleted, ConceptResponse, ConceptUpdated};
use crate::domain::concept::{Concept, ConceptPatch, NewConcept};
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};
use crate::shared::{require_non_blank, ConceptId};

/// Page size the concepts screen loads.
pub const DEFAULT_CONCEPT_LIMIT: u32 = 100;

/// Sub-client for grammatical concepts.
pub struct Concepts<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Concepts<'a> {
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Concept>, SdkError> {
        let url = with_query(
            self.client.http.url("/concepts"),
            &[
                ("limit", Some(limit.to_string())),
                ("offset", Some(offset.to_string())),
            ],
        );
        let rows: Vec<ConceptResponse> = self.client.http.get(&url).await?;
        Ok(rows.into_iter().map(Concept::from).collect())
    }

    pub async fn get(&self, id: &ConceptId) -> Result<Concept, SdkError> {
        let resp: ConceptResponse = self.client.http.get(&self.concept_url(id)).await?;
        Ok(resp.into())
    }

    /// Create a concept. A blank name is rejected without a request.
    pub async fn create(&self, new_concept: &NewConcept) -> Result<Concept, SdkError> {
        let body = NewConcept {
            name: require_non_blank("name", &new_concept.name)?,
            description: new_concept
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            tags: new_concept.tags.clone(),
        };
        let url = self.client.http.url("/concepts");
        let resp: ConceptResponse = self.client.http.post(&url, Some(&body)).await?;

        // The create response omits tags; the backend stored what was sent.
        let mut concept = Concept::from(resp);
        if concept.tags.is_empty() {
            concept.tags = body.tags;
        }
        Ok(concept)
    }

    pub async fn update(&self, id: &ConceptId, patch: &ConceptPatch) -> Result<ConceptUpdated, SdkError> {
        if patch.is_empty() {
            return Err(SdkError::Validation("nothing to update".to_string()));
        }
        let mut patch = patch.clone();
        if let Some(name) = &patch.name {
            patch.name = Some(require_non_blank("name", name)?);
        }
        Ok(self.client.http.put(&self.concept_url(id), &patch).await?)
    }

    pub async fn delete(&self, id: &ConceptId) -> Result<ConceptDeleted, SdkError> {
        Ok(self.client.http.delete(&self.concept_url(id)).await?)
    }

    fn concept_url(&self, id: &ConceptId) -> String {
        self.client
            .http
            .url(&format!("/concepts/{}", segment(id.as_str())))
    }

    // ── Cached reads ─────────────────────────────────────────────────────

    pub fn watch_page(&self, limit: u32, offset: u32) -> QueryObserver<Vec<Concept>> {
        let client = self.client.clone();
        self.client
            .queries
            .observe(keys::concept_page(limit, offset), move || {
                let client = client.clone();
                async move { client.concepts().list(limit, offset).await }
            })
    }

    pub fn watch(&self, id: &ConceptId) -> QueryObserver<Concept> {
        let client = self.client.clone();
        let id = id.clone();
        self.client
            .queries
            .observe(keys::concept(&id), move || {
                let client = client.clone();
                let id = id.clone();
                async move { client.concepts().get(&id).await }
            })
    }

    // ── Mutations ────────────────────────────────────────────────────────

    pub fn create_mutation(&self) -> Mutation<Concept> {
        self.client.mutation(vec![keys::concepts()])
    }

    pub fn update_mutation(&self) -> Mutation<ConceptUpdated> {
        self.client
            .mutation(vec![keys::concepts(), keys::concept_details()])
    }

    pub fn delete_mutation(&self) -> Mutation<ConceptDeleted> {
        self.client
            .mutation(vec![keys::concepts(), keys::concept_details()])
    }
}
