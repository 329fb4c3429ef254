use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use cinemeta::{DeclaredType, ExtractionOutcome, IngestConfig, Payload, RawSubmission, dispatch};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: cinemeta <file> [mime-type]");
        return ExitCode::FAILURE;
    };
    let declared = args
        .next()
        .or_else(|| mime_for(&path))
        .unwrap_or_default();

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut submission = RawSubmission::new(Payload::Bytes(bytes), declared);
    submission.filename = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    match dispatch(submission, &IngestConfig::default()) {
        ExtractionOutcome::Success(record) => {
            println!("Title: {}", record.title);
            println!("Director: {}", record.director);
            println!("Producer: {}", record.producer);
            println!("Music Composer: {}", record.music_composer);
            ExitCode::SUCCESS
        }
        failure => {
            eprintln!(
                "{}",
                failure
                    .message()
                    .unwrap_or_else(|| "extraction failed".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Infers the declared MIME type from the file extension, the way the legacy
/// picker's accept list did.
fn mime_for(path: &str) -> Option<String> {
    let extension = Path::new(path).extension()?.to_str()?;
    DeclaredType::from_extension(extension).map(|format| format.mime().to_string())
}
