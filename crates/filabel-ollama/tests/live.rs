//! Integration tests against a locally running Ollama.
//!
//! Ignored by default; run with `cargo test -p filabel-ollama -- --ignored`
//! while an Ollama instance is listening on localhost:11434 with the
//! `llama3.2` model pulled.

use filabel_core::ChatBackend;
use filabel_ollama::{DEFAULT_BASE_URL, OllamaChat};

#[tokio::test]
#[ignore = "requires a local Ollama instance"]
async fn generate_text_round_trip() {
    let chat = OllamaChat::new(DEFAULT_BASE_URL, "llama3.2");

    let response = chat
        .generate_text("Reply with the single word: pong")
        .await
        .expect("generation failed");

    assert!(!response.trim().is_empty());
}
