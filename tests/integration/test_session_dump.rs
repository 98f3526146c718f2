#[path = "../common/mod.rs"]
mod common;

use clap::Parser;
use common::*;
use opamp::cli::{render_session, write_session, Cli, CliHandler, DumpFormat, UserPrompter};
use opamp::{DifferenceEngine, OpampError, OutputStyle};
use std::io::Cursor;
use tempfile::TempDir;

async fn analyzed_engine() -> DifferenceEngine {
    let client = ScriptedLlmClient::scenario();
    client.push_reply(Ok(PRESS_RELEASE_RESPONSE));
    client.push_reply(Ok(HAIKU_RESPONSE));

    let mut engine = DifferenceEngine::new(client);
    engine.analyze(TOPIC, POSITIVE, NEGATIVE).await.unwrap();
    engine.reformat("Press Release").await.unwrap();
    engine.reformat("Haiku").await.unwrap();
    engine
}

fn quiet_cli() -> Cli {
    Cli::try_parse_from(["opamp", "--no-color"]).unwrap()
}

fn scripted_prompter(input: &str) -> UserPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    UserPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

#[tokio::test]
async fn text_dump_contains_every_stage() {
    let engine = analyzed_engine().await;
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("results.txt");

    write_session(engine.session().unwrap(), &path, DumpFormat::Text).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.starts_with("CONCEPTUAL OP-AMP ANALYSIS RESULTS"));
    assert!(content.contains(&format!("Context: {}", TOPIC)));
    assert!(content.contains(&format!("Positive Input (Opinion 1): {}", POSITIVE)));
    assert!(content.contains(&format!("Negative Input (Opinion 2): {}", NEGATIVE)));
    assert!(content.contains("  Ethos: Draws on balanced workplace research"));
    assert!(content.contains("Energeia Delta:\n  Tone rises from caution to liberation"));
    assert!(content.contains(SYNTHESIS_RESPONSE));
    assert!(content.contains(&format!("Final Output (Press Release):\n{}", PRESS_RELEASE_RESPONSE)));
    assert!(content.contains(&format!("Final Output (Haiku):\n{}", HAIKU_RESPONSE)));
}

#[tokio::test]
async fn json_dump_is_machine_readable() {
    let engine = analyzed_engine().await;
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("results.json");

    write_session(engine.session().unwrap(), &path, DumpFormat::Json).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["topic"], TOPIC);
    assert_eq!(value["positive_profile"]["energeia"], "Liberating and optimistic");
    assert_eq!(value["deltas"]["logos"], "Causation moves from supervision to self-direction");
    assert_eq!(value["synthesized"], SYNTHESIS_RESPONSE);
    assert_eq!(value["outputs"].as_array().unwrap().len(), 2);
    assert_eq!(value["outputs"][1]["style"]["Custom"], "Haiku");
}

#[tokio::test]
async fn render_matches_written_file() {
    let engine = analyzed_engine().await;
    let session = engine.session().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("results.txt");

    write_session(session, &path, DumpFormat::Text).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        render_session(session, DumpFormat::Text).unwrap()
    );
}

#[tokio::test]
async fn writing_into_missing_directory_is_io_error() {
    let engine = analyzed_engine().await;
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("results.txt");

    let err = write_session(engine.session().unwrap(), &path, DumpFormat::Text).unwrap_err();

    assert!(matches!(err, OpampError::IoError(_)));
    assert_eq!(err.exit_code(), 6);
}

#[tokio::test]
async fn interactive_cycle_restyles_and_saves() {
    let client = ScriptedLlmClient::scenario();
    client.push_reply(Ok(PRESS_RELEASE_RESPONSE));
    client.push_reply(Ok(HAIKU_RESPONSE));
    let mut engine = DifferenceEngine::new(client.clone());

    let temp_dir = TempDir::new().unwrap();
    let stem = temp_dir.path().join("run1");
    let input = format!(
        "{}\n{}\n\n{}\n\n5\ny\n11\nHaiku\nn\ny\n{}\n",
        TOPIC,
        POSITIVE,
        NEGATIVE,
        stem.display()
    );
    let mut prompter = scripted_prompter(&input);

    let handler = CliHandler::new(quiet_cli());
    handler
        .run_interactive(&mut engine, &mut prompter)
        .await
        .unwrap();

    assert_eq!(client.call_count(), 7);

    let session = engine.session().unwrap();
    assert_eq!(session.topic, TOPIC);
    assert_eq!(session.outputs.len(), 2);
    assert_eq!(session.outputs[0].style, OutputStyle::PressRelease);
    assert_eq!(session.current_style, Some(OutputStyle::Custom("Haiku".to_string())));

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert!(shown.contains("CONCEPTUAL OP-AMP ANALYSIS RESULTS"));
    assert!(shown.contains("FINAL OUTPUT (Press Release)"));
    assert!(shown.contains("FINAL OUTPUT (Haiku)"));
    assert!(shown.contains("Results saved to"));

    let saved = std::fs::read_to_string(temp_dir.path().join("run1.txt")).unwrap();
    assert!(saved.contains(HAIKU_RESPONSE));
}

#[tokio::test]
async fn interactive_analysis_can_be_retried_after_model_error() {
    let mut replies = vec![Err("service unavailable")];
    replies.extend(analysis_replies());
    replies.push(Ok(PRESS_RELEASE_RESPONSE));
    let client = ScriptedLlmClient::new(replies);
    let mut engine = DifferenceEngine::new(client.clone());

    let input = format!("{}\n{}\n\n{}\n\n5\ny\nn\nn\n", TOPIC, POSITIVE, NEGATIVE);
    let mut prompter = scripted_prompter(&input);

    CliHandler::new(quiet_cli())
        .run_interactive(&mut engine, &mut prompter)
        .await
        .unwrap();

    assert_eq!(client.call_count(), 7);
    assert_eq!(engine.session().unwrap().outputs.len(), 1);

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert!(shown.contains("service unavailable"));
    assert!(shown.contains("Retry the analysis?"));
}

#[tokio::test]
async fn declined_retry_returns_the_model_error() {
    let client = ScriptedLlmClient::new(vec![Err("service unavailable")]);
    let mut engine = DifferenceEngine::new(client.clone());

    let input = format!("{}\n{}\n\n{}\n\n1\nn\n", TOPIC, POSITIVE, NEGATIVE);
    let mut prompter = scripted_prompter(&input);

    let err = CliHandler::new(quiet_cli())
        .run_interactive(&mut engine, &mut prompter)
        .await
        .unwrap_err();

    assert!(matches!(err, OpampError::LlmClientError(_)));
    assert!(engine.session().is_none());
}

#[tokio::test]
async fn interactive_restyle_failure_keeps_analysis() {
    let mut replies = analysis_replies();
    replies.push(Err("quota exceeded"));
    replies.push(Ok(PRESS_RELEASE_RESPONSE));
    let client = ScriptedLlmClient::new(replies);
    let mut engine = DifferenceEngine::new(client.clone());

    let input = format!("{}\n{}\n\n{}\n\n9\ny\n5\nn\nn\n", TOPIC, POSITIVE, NEGATIVE);
    let mut prompter = scripted_prompter(&input);

    CliHandler::new(quiet_cli())
        .run_interactive(&mut engine, &mut prompter)
        .await
        .unwrap();

    let session = engine.session().unwrap();
    assert_eq!(session.synthesized, SYNTHESIS_RESPONSE);
    assert_eq!(session.outputs.len(), 1);
    assert_eq!(session.outputs[0].style, OutputStyle::PressRelease);

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert!(shown.contains("quota exceeded"));
}
