//! CLI entry point: classify one file against a local Ollama backend.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use filabel_core::{
    ClassificationResult, ClassifyError, Dispatcher, FileKind, ImageClassifier, LabelCatalog,
    TextClassifier,
};
use filabel_ollama::{DEFAULT_BASE_URL, OllamaChat};

// Exit codes per failure class. Invalid arguments exit with clap's own
// code 2; success is 0 even when no label matched.
const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 3;
const EXIT_UNSUPPORTED: u8 = 4;

/// Classify a file into labels using an Ollama model.
#[derive(Parser)]
#[command(name = "filabel", version, about)]
struct Cli {
    /// Path to the file to classify.
    file: PathBuf,

    /// Vision model used for image files.
    #[arg(long, default_value = "llama3.2-vision")]
    vision_model: String,

    /// Text model used for text files.
    #[arg(long, default_value = "llama3.2")]
    text_model: String,

    /// Path to a custom image labels JSON file.
    #[arg(long)]
    image_labels: Option<PathBuf>,

    /// Path to a custom text labels JSON file.
    #[arg(long)]
    text_labels: Option<PathBuf>,

    /// Base URL of the Ollama server.
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    tracing::debug!("filabel v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    match run(cli).await {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<ClassificationResult, ClassifyError> {
    let mut catalog = LabelCatalog::new();
    if let Some(path) = cli.image_labels {
        catalog = catalog.with_override(FileKind::Image, path);
    }
    if let Some(path) = cli.text_labels {
        catalog = catalog.with_override(FileKind::Text, path);
    }
    let catalog = Arc::new(catalog);

    let vision = Arc::new(OllamaChat::new(&cli.base_url, &cli.vision_model));
    let text = Arc::new(OllamaChat::new(&cli.base_url, &cli.text_model));

    // Image before text: ambiguous files resolve to the image classifier.
    let dispatcher = Dispatcher::new(vec![
        Arc::new(ImageClassifier::new(vision, catalog.clone())),
        Arc::new(TextClassifier::new(text, catalog)),
    ]);

    dispatcher.classify_file(&cli.file).await
}

fn print_result(result: &ClassificationResult) {
    if result.labels().is_empty() {
        println!(
            "Classification Result: No matching label found (Model returned: {}).",
            result.raw()
        );
    } else {
        println!("Classification Result: {}", result.labels().join(", "));
    }
}

fn exit_code(err: &ClassifyError) -> u8 {
    match err {
        ClassifyError::FileNotFound(_) => EXIT_NOT_FOUND,
        ClassifyError::UnsupportedFileType(_) => EXIT_UNSUPPORTED,
        ClassifyError::UnsupportedFile { .. }
        | ClassifyError::Labels(_)
        | ClassifyError::Backend(_)
        | ClassifyError::Io(_) => EXIT_FAILURE,
    }
}
