//! Vocabulary sub-client.

use crate::client::LearningClient;
use crate::domain::vocabulary::{Difficulty, VocabularyList, VocabularyWord};
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::shared::LessonId;

pub struct Vocabulary<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Vocabulary<'a> {
    pub async fn all(&self, difficulty: Option<Difficulty>) -> Result<Vec<VocabularyList>, SdkError> {
        let url = with_query(
            self.client.http.url("/vocabulary"),
            &[("difficulty", difficulty.map(|d| d.as_str().to_string()))],
        );
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn by_lesson(&self, lesson_id: &LessonId) -> Result<Vec<VocabularyWord>, SdkError> {
        let url = self
            .client
            .http
            .url(&format!("/vocabulary/lesson/{}", segment(lesson_id.as_str())));
        Ok(self.client.http.get(&url).await?)
    }
}
