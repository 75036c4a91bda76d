//! Look a word up, save it, advance its status, and print the wordbook.
//!
//! Needs a running backend. Configure with `LEARNING_FINNISH_*` variables
//! (a `.env` file is read if present), e.g.
//! `LEARNING_FINNISH_API_URL=http://localhost:8001/api`.
//!
//! ```bash
//! RUST_LOG=learning_finnish_sdk=debug cargo run --example wordbook_walkthrough -- kissa
//! ```

use learning_finnish_sdk::prelude::*;
use learning_finnish_sdk::view::wordbook::WordbookView;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let word = std::env::args().nth(1).unwrap_or_else(|| "kissa".to_string());
    let client = LearningClient::builder().from_env()?.build()?;
    println!("Backend: {}", client.base_url());

    let health = client.health().check().await?;
    println!("Health: {}", health.status);

    let result = client.words().search(&word).await?;
    println!(
        "{} ({}) — {}",
        result.finnish_word, result.part_of_speech, result.english_translation
    );
    for form in &result.grammatical_forms {
        println!("  {:<12} {}", form.case, form.finnish);
    }

    let user = UserId::default_user();
    let view = WordbookView::new(&client, user.clone());
    view.ready().await.map_err(|e| e.user_message())?;

    let saved = client
        .wordbook()
        .save_mutation(&user)
        .run(client.wordbook().save(&user, &result.finnish_word))
        .await
        .map_err(|e| e.user_message())?;
    view.advance(&saved).await.map_err(|e| e.user_message())?;

    let counts = view.counts();
    println!(
        "Wordbook: {} words ({} recent, {} learning, {} mastered)",
        counts.all, counts.recent, counts.learning, counts.mastered
    );
    for w in view.words() {
        println!("  {:<16} {:<10} {:>3}%", w.finnish_word, w.status, w.proficiency);
    }
    Ok(())
}
