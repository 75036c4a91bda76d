//! Lessons sub-client.

use crate::client::LearningClient;
use crate::domain::lesson::{Lesson, LessonCreated, LessonPreview};
use crate::domain::vocabulary::Difficulty;
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};
use crate::shared::{require_non_blank, LessonId};

pub struct Lessons<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Lessons<'a> {
    pub async fn all(&self, difficulty: Option<Difficulty>) -> Result<Vec<LessonPreview>, SdkError> {
        let url = with_query(
            self.client.http.url("/lessons"),
            &[("difficulty", difficulty.map(|d| d.as_str().to_string()))],
        );
        let mut lessons: Vec<LessonPreview> = self.client.http.get(&url).await?;
        lessons.sort_by_key(|l| l.order);
        Ok(lessons)
    }

    pub async fn get(&self, id: &LessonId) -> Result<Lesson, SdkError> {
        let url = self
            .client
            .http
            .url(&format!("/lessons/{}", segment(id.as_str())));
        Ok(self.client.http.get(&url).await?)
    }

    /// Admin endpoint; the backend assigns the id.
    pub async fn create(&self, lesson: &Lesson) -> Result<LessonCreated, SdkError> {
        require_non_blank("title", &lesson.title)?;
        let url = self.client.http.url("/lessons");
        Ok(self.client.http.post(&url, Some(lesson)).await?)
    }

    pub fn watch_all(&self, difficulty: Option<Difficulty>) -> QueryObserver<Vec<LessonPreview>> {
        let client = self.client.clone();
        self.client.queries.observe(
            keys::lessons(difficulty.map(|d| d.as_str())),
            move || {
                let client = client.clone();
                async move { client.lessons().all(difficulty).await }
            },
        )
    }

    pub fn create_mutation(&self) -> Mutation<LessonCreated> {
        self.client.mutation(vec![keys::lessons(None)])
    }
}
