//! Exercise sub-client.

use crate::client::LearningClient;
use crate::domain::concept::Concept;
use crate::domain::exercise::wire::NextExerciseResponse;
use crate::domain::exercise::{ExerciseHistoryEntry, ExerciseResult, NextExercise, ResultAccepted};
use crate::domain::stats::DEFAULT_LEVEL;
use crate::domain::word::{self, Word};
use crate::error::SdkError;
use crate::http::client::with_query;
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};

/// Words per exercise when the backend does not say.
const DEFAULT_EXERCISE_WORD_COUNT: u32 = 6;

pub struct Exercises<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Exercises<'a> {
    pub async fn next(&self) -> Result<NextExercise, SdkError> {
        let url = self.client.http.url("/exercise/next");
        let resp: NextExerciseResponse = self.client.http.get(&url).await?;
        let words = resp
            .words
            .into_iter()
            .map(|w| {
                Word::try_from(w)
                    .map_err(|e: word::ValidationError| SdkError::InvalidResponse(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NextExercise {
            words,
            concepts: resp.concepts.into_iter().map(Concept::from).collect(),
            level: resp.level.unwrap_or(DEFAULT_LEVEL),
            exercise_word_count: resp
                .exercise_word_count
                .unwrap_or(DEFAULT_EXERCISE_WORD_COUNT),
        })
    }

    /// Submit graded scores. The backend reprioritises the scored words.
    pub async fn submit_result(&self, result: &ExerciseResult) -> Result<ResultAccepted, SdkError> {
        result.validate().map_err(SdkError::Validation)?;
        let url = self.client.http.url("/exercise/result");
        Ok(self.client.http.post(&url, Some(result)).await?)
    }

    /// Most recent first.
    pub async fn history(&self, limit: u32, offset: u32) -> Result<Vec<ExerciseHistoryEntry>, SdkError> {
        let url = with_query(
            self.client.http.url("/exercise/history"),
            &[
                ("limit", Some(limit.to_string())),
                ("offset", Some(offset.to_string())),
            ],
        );
        Ok(self.client.http.get(&url).await?)
    }

    pub fn watch_history(&self, limit: u32, offset: u32) -> QueryObserver<Vec<ExerciseHistoryEntry>> {
        let client = self.client.clone();
        self.client
            .queries
            .observe(keys::exercise_history(limit, offset), move || {
                let client = client.clone();
                async move { client.exercise().history(limit, offset).await }
            })
    }

    /// Scores move word priorities, so every derived read is invalidated.
    pub fn result_mutation(&self) -> Mutation<ResultAccepted> {
        self.client.mutation(vec![
            keys::words_all(),
            keys::concepts(),
            keys::stats(),
            keys::stats_charts(),
            keys::exercise_history_all(),
        ])
    }
}
