//! Add-word form.
//!
//! A created word clears the inputs and starts observing its inflections,
//! which may still be empty while the backend generates them.

use crate::client::LearningClient;
use crate::domain::word::{AddWordResponse, AddWordStatus, Inflections, NewWord, WordType};
use crate::error::SdkError;
use crate::mutation::Mutation;
use crate::query::QueryObserver;
use std::sync::Arc;

/// Editable inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddWordForm {
    pub finnish: String,
    pub danish: String,
    pub english: String,
    pub word_type: WordType,
}

impl AddWordForm {
    pub fn is_submittable(&self) -> bool {
        !self.finnish.trim().is_empty()
    }

    pub fn to_new_word(&self) -> NewWord {
        let optional = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        NewWord {
            finnish: self.finnish.trim().to_string(),
            danish: optional(&self.danish),
            english: optional(&self.english),
            word_type: self.word_type,
        }
    }

    /// Keeps the chosen word type.
    pub fn clear(&mut self) {
        *self = Self {
            word_type: self.word_type,
            ..Self::default()
        };
    }
}

pub struct AddWordView {
    client: LearningClient,
    form: AddWordForm,
    add: Mutation<AddWordResponse>,
    inflections: Option<QueryObserver<Inflections>>,
}

impl AddWordView {
    pub fn new(client: &LearningClient) -> Self {
        Self {
            add: client.words().add_mutation(),
            client: client.clone(),
            form: AddWordForm::default(),
            inflections: None,
        }
    }

    pub fn form(&self) -> &AddWordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddWordForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.add.is_pending()
    }

    pub async fn submit(&mut self) -> Result<Arc<AddWordResponse>, Arc<SdkError>> {
        if !self.form.is_submittable() {
            return Err(Arc::new(SdkError::Validation(
                "finnish must not be blank".to_string(),
            )));
        }
        let new_word = self.form.to_new_word();
        let resp = self.add.run(self.client.words().add(&new_word)).await?;

        if resp.status == AddWordStatus::Created {
            self.form.clear();
        }
        self.inflections = Some(self.client.words().watch_inflections(&resp.word_id));
        Ok(resp)
    }

    /// Banner text for the last submission.
    pub fn message(&self) -> Option<String> {
        if let Some(e) = self.add.error() {
            return Some(e.user_message());
        }
        let resp = self.add.data()?;
        Some(match resp.status {
            AddWordStatus::Created => match resp.inflections_generated {
                Some(counts) => format!(
                    "Added \"{}\" ({} inflections, {} verb forms)",
                    resp.finnish, counts.inflections, counts.verb_forms
                ),
                None => format!("Added \"{}\"", resp.finnish),
            },
            AddWordStatus::Exists => format!("\"{}\" is already in the word list", resp.finnish),
        })
    }

    /// Grammar data of the last submitted word.
    pub fn inflections(&self) -> Option<Arc<Inflections>> {
        self.inflections.as_ref()?.data()
    }

    pub async fn inflections_ready(&self) -> Result<(), Arc<SdkError>> {
        match &self.inflections {
            Some(observer) => observer.wait().await.map(|_| ()),
            None => Ok(()),
        }
    }
}
