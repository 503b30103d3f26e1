//! End-to-end tests against a mock TTS server

use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::tempdir;
use tts_client::{HttpTtsClientConfig, SynthesisError, SynthesizeToLibrary, TtsClient};

fn default_payload(text: &str) -> serde_json::Value {
    json!({
        "text": text,
        "format": "wav",
        "normalize": true,
        "streaming": false,
        "chunk_length": 200,
        "max_new_tokens": 1024
    })
}

fn client_for(base_url: &str, output_dir: &std::path::Path) -> TtsClient {
    TtsClient::new(HttpTtsClientConfig::new(base_url), output_dir).unwrap()
}

#[tokio::test]
async fn test_default_voice_example_scenario() {
    let mut server = Server::new_async().await;
    let text = "(excited) Hello again from the default S1-mini voice.";
    let mock = server
        .mock("POST", "/v1/tts")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(default_payload(text)))
        .with_status(200)
        .with_body(b"RIFF....")
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("random_voice.wav");
    let client = client_for(&server.url(), temp_dir.path());

    let outcome = client.synthesize(text, &output, None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(std::fs::read(&output).unwrap(), b"RIFF....");
    assert_eq!(outcome.size, 8);
}

#[tokio::test]
async fn test_binary_body_round_trips_exactly() {
    let mut server = Server::new_async().await;
    let body: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let mock = server
        .mock("POST", "/v1/tts")
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(&body)
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.wav");
    let client = client_for(&server.url(), temp_dir.path());

    client.synthesize("hello", &output, None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(std::fs::read(&output).unwrap(), body);
}

#[tokio::test]
async fn test_reference_id_and_format_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/tts")
        .match_body(Matcher::Json(json!({
            "text": "hello",
            "format": "mp3",
            "normalize": true,
            "streaming": false,
            "chunk_length": 200,
            "max_new_tokens": 1024,
            "reference_id": "narrator-01"
        })))
        .with_status(200)
        .with_body("ID3")
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.mp3");
    let client = client_for(&server.url(), temp_dir.path());

    client
        .synthesize("hello", &output, Some("narrator-01"), Some("mp3"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_writes_no_file() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/tts")
        .with_status(503)
        .with_body("model is loading")
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.wav");
    let client = client_for(&server.url(), temp_dir.path());

    let err = client
        .synthesize("hello", &output, None, None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        SynthesisError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "model is loading");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_http_error_keeps_existing_file() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/tts")
        .with_status(422)
        .with_body(r#"{"detail":"text too long"}"#)
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.wav");
    std::fs::write(&output, b"previous audio").unwrap();
    let client = client_for(&server.url(), temp_dir.path());

    let err = client
        .synthesize("hello", &output, None, None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous audio");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // 绑定后立即释放，得到一个没有监听者的端口
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.wav");
    let client = client_for(&format!("http://127.0.0.1:{}", port), temp_dir.path());

    let err = client
        .synthesize("hello", &output, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, SynthesisError::Transport(_)), "got {err:?}");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/tts")
        .match_body(Matcher::Json(default_payload("same text")))
        .with_status(200)
        .with_body(b"RIFFdeterministic")
        .expect(2)
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let first = temp_dir.path().join("first.wav");
    let second = temp_dir.path().join("second.wav");
    let client = client_for(&server.url(), temp_dir.path());

    client.synthesize("same text", &first, None, None).await.unwrap();
    client.synthesize("same text", &second, None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[tokio::test]
async fn test_successful_call_overwrites_existing_file() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/tts")
        .with_status(200)
        .with_body("new")
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("out.wav");
    std::fs::write(&output, b"old and much longer content").unwrap();
    let client = client_for(&server.url(), temp_dir.path());

    client.synthesize("hello", &output, None, None).await.unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"new");
}

#[tokio::test]
async fn test_library_mode_estimates_tokens() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/tts")
        .match_body(Matcher::PartialJson(json!({
            "format": "opus",
            "max_new_tokens": 2048,
            "reference_id": "voice-3"
        })))
        .with_status(200)
        .with_body("OggS")
        .create_async()
        .await;

    let temp_dir = tempdir().unwrap();
    let output_dir = temp_dir.path().join("mp3");
    let client = client_for(&server.url(), &output_dir);

    let mut command = SynthesizeToLibrary::new("b".repeat(1000));
    command.reference_id = Some("voice-3".to_string());
    command.format = Some("opus".to_string());
    let outcome = client.synthesize_to_library(command).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome.path.parent(), Some(output_dir.as_path()));
    assert_eq!(std::fs::read(&outcome.path).unwrap(), b"OggS");
}
