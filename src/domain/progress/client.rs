//! Progress sub-client.

use crate::client::LearningClient;
use crate::domain::progress::{LessonProgress, LessonProgressRequest, UserProgress};
use crate::error::SdkError;
use crate::http::client::{segment, with_query};
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};
use crate::shared::{LessonId, UserId};

pub struct ProgressClient<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> ProgressClient<'a> {
    pub async fn user(&self, user_id: &UserId) -> Result<UserProgress, SdkError> {
        let url = self
            .client
            .http
            .url(&format!("/progress/user/{}", segment(user_id.as_str())));
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn start_lesson(
        &self,
        lesson_id: &LessonId,
        user_id: &UserId,
    ) -> Result<LessonProgress, SdkError> {
        self.lesson_transition(lesson_id, user_id, "start").await
    }

    /// Fails with `NotFound` when the lesson was never started.
    pub async fn complete_lesson(
        &self,
        lesson_id: &LessonId,
        user_id: &UserId,
    ) -> Result<LessonProgress, SdkError> {
        self.lesson_transition(lesson_id, user_id, "complete").await
    }

    // The backend reads `user_id` from the query string; it is sent in the body too.
    async fn lesson_transition(
        &self,
        lesson_id: &LessonId,
        user_id: &UserId,
        action: &str,
    ) -> Result<LessonProgress, SdkError> {
        let url = with_query(
            self.client.http.url(&format!(
                "/progress/lessons/{}/{}",
                segment(lesson_id.as_str()),
                action
            )),
            &[("user_id", Some(user_id.to_string()))],
        );
        let body = LessonProgressRequest { user_id };
        Ok(self.client.http.post(&url, Some(&body)).await?)
    }

    pub fn watch(&self, user_id: &UserId) -> QueryObserver<UserProgress> {
        let client = self.client.clone();
        let user = user_id.clone();
        self.client
            .queries
            .observe(keys::progress(user_id), move || {
                let client = client.clone();
                let user = user.clone();
                async move { client.progress().user(&user).await }
            })
    }

    pub fn lesson_mutation(&self, user_id: &UserId) -> Mutation<LessonProgress> {
        self.client.mutation(vec![keys::progress(user_id)])
    }
}
