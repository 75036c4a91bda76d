//! Bulk import — paste CSV, send rows, show what happened to each.

use crate::client::LearningClient;
use crate::domain::word::BulkAddResult;
use crate::error::SdkError;
use crate::mutation::Mutation;
use std::sync::Arc;

/// Split pasted text into rows of trimmed cells. Rows whose cells are all
/// empty are dropped; column count is left for the backend to judge.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| {
            line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

pub struct BulkImportView {
    client: LearningClient,
    text: String,
    import: Mutation<BulkAddResult>,
}

impl BulkImportView {
    pub fn new(client: &LearningClient) -> Self {
        Self {
            import: client.words().bulk_add_mutation(),
            client: client.clone(),
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        parse_csv(&self.text)
    }

    pub fn can_submit(&self) -> bool {
        !self.import.is_pending() && !self.rows().is_empty()
    }

    pub fn is_importing(&self) -> bool {
        self.import.is_pending()
    }

    pub async fn submit(&self) -> Result<Arc<BulkAddResult>, Arc<SdkError>> {
        let rows = self.rows();
        tracing::debug!(rows = rows.len(), "submitting bulk import");
        self.import.run(self.client.words().bulk_add(rows)).await
    }

    /// Outcome of the last successful import.
    pub fn result(&self) -> Option<Arc<BulkAddResult>> {
        self.import.data()
    }

    pub fn error(&self) -> Option<String> {
        self.import.error().map(|e| e.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_trims_and_skips_blank_lines() {
        let rows = parse_csv("talo, hus, house, noun\n\n  \nkala,fisk,fish,noun  \n");
        assert_eq!(
            rows,
            vec![
                vec!["talo", "hus", "house", "noun"],
                vec!["kala", "fisk", "fish", "noun"],
            ]
        );
    }

    #[test]
    fn test_parse_csv_keeps_short_rows() {
        let rows = parse_csv("kissa\n,kat");
        assert_eq!(rows, vec![vec!["kissa".to_string()], vec![String::new(), "kat".to_string()]]);
    }

    #[test]
    fn test_parse_csv_drops_rows_of_empty_cells() {
        let rows = parse_csv(",,,
talo,hus,house,noun
 , ,
");
        assert_eq!(rows, vec![vec!["talo", "hus", "house", "noun"]]);
    }
}
