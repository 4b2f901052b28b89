use std::process::ExitCode;

use quizshare::errors::{AppError, AppResult};
use quizshare::models::domain::Quiz;
use quizshare::services::ShareCodeService;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.as_slice() {
        [command, path] if command == "encode" => encode(path),
        [command, token] if command == "decode" => decode(token),
        _ => {
            eprintln!("usage: quizshare encode <quiz.json> | decode <token>");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", err.error_code(), err);
            ExitCode::FAILURE
        }
    }
}

fn encode(path: &str) -> AppResult<String> {
    let json = std::fs::read_to_string(path)
        .map_err(|err| AppError::EncodeFailure(format!("could not read {path}: {err}")))?;
    let quiz: Quiz = serde_json::from_str(&json)
        .map_err(|err| AppError::EncodeFailure(format!("{path} is not a quiz: {err}")))?;
    ShareCodeService::encode(&quiz)
}

fn decode(token: &str) -> AppResult<String> {
    let quiz = ShareCodeService::decode(token)?;
    serde_json::to_string_pretty(&quiz)
        .map_err(|err| AppError::DecodeFailure(format!("could not render quiz: {err}")))
}
