//! HTTP-level tests for `BotClient` against a mockito server.
//!
//! Paths follow the Bot API layout `/bot<token>/<method>`.

use std::io::Write;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use tba_client::{
    BotClient, GetUpdatesOptions, ReplyOptions, SendAudioOptions, SendMessageOptions,
    SendPhotoOptions, SendVideoOptions, SendVoiceOptions, UserProfilePhotosOptions,
};
use tba_core::{
    config::Config,
    domain::{ChatId, MessageId, UserId},
    errors::Error,
    fields::FieldValue,
    types::{ChatAction, InputFile, ParseMode, ReplyMarkup},
};

const TOKEN: &str = "123456:TEST-token";

fn client_for(server: &ServerGuard) -> BotClient {
    let cfg = Config::new(TOKEN).unwrap().with_api_base_url(server.url());
    BotClient::from_config(cfg).unwrap()
}

fn path(method: &str) -> String {
    format!("/bot{TOKEN}/{method}")
}

fn ok_body(result: serde_json::Value) -> String {
    json!({ "ok": true, "result": result }).to_string()
}

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

#[tokio::test]
async fn get_me_is_a_get_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", path("getMe").as_str())
        .match_body("")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(json!({"id": 1, "is_bot": true, "username": "testbot"})))
        .create_async()
        .await;

    let me = client_for(&server).get_me().await.unwrap();
    assert_eq!(me["username"], "testbot");
    mock.assert_async().await;
}

#[tokio::test]
async fn send_message_only_sends_supplied_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendMessage").as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("chat_id=42&text=hi")
        .with_status(200)
        .with_body(ok_body(json!({"message_id": 10, "text": "hi"})))
        .create_async()
        .await;

    let result = client_for(&server)
        .send_message(ChatId(42), "hi", SendMessageOptions::default())
        .await
        .unwrap();
    assert_eq!(result, json!({"message_id": 10, "text": "hi"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn send_message_with_options_serializes_markup() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendMessage").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::UrlEncoded("text".into(), "<b>hi</b>".into()),
            Matcher::UrlEncoded("parse_mode".into(), "HTML".into()),
            Matcher::UrlEncoded("reply_to_message_id".into(), "7".into()),
            Matcher::UrlEncoded("reply_markup".into(), r#"{"force_reply":true}"#.into()),
        ]))
        .with_status(200)
        .with_body(ok_body(json!({"message_id": 11})))
        .create_async()
        .await;

    let opts = SendMessageOptions {
        parse_mode: Some(ParseMode::Html),
        reply_to_message_id: Some(MessageId(7)),
        reply_markup: Some(ReplyMarkup::ForceReply),
        ..Default::default()
    };
    client_for(&server)
        .send_message(ChatId(42), "<b>hi</b>", opts)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn typed_methods_follow_declared_parameter_order() {
    let mut server = Server::new_async().await;
    let forward = server
        .mock("POST", path("forwardMessage").as_str())
        .match_body("chat_id=1&from_chat_id=2&message_id=3")
        .with_body(ok_body(json!({"message_id": 4})))
        .create_async()
        .await;
    let location = server
        .mock("POST", path("sendLocation").as_str())
        .match_body("chat_id=1&latitude=52.52&longitude=13.405")
        .with_body(ok_body(json!({"message_id": 5})))
        .create_async()
        .await;
    let action = server
        .mock("POST", path("sendChatAction").as_str())
        .match_body("chat_id=1&action=upload_photo")
        .with_body(ok_body(json!(true)))
        .create_async()
        .await;
    let photos = server
        .mock("POST", path("getUserProfilePhotos").as_str())
        .match_body("user_id=9&limit=5")
        .with_body(ok_body(json!({"total_count": 0, "photos": []})))
        .create_async()
        .await;
    let updates = server
        .mock("POST", path("getUpdates").as_str())
        .match_body("offset=100&timeout=30")
        .with_body(ok_body(json!([])))
        .create_async()
        .await;
    let sticker = server
        .mock("POST", path("sendSticker").as_str())
        .match_body("chat_id=1&sticker=CAADAgADQAADyIsGAAE7MpzFPFQX5QI")
        .with_body(ok_body(json!({"message_id": 6})))
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .forward_message(ChatId(1), ChatId(2), MessageId(3))
        .await
        .unwrap();
    client
        .send_location(ChatId(1), 52.52, 13.405, ReplyOptions::default())
        .await
        .unwrap();
    assert_eq!(
        client
            .send_chat_action(ChatId(1), ChatAction::UploadPhoto)
            .await
            .unwrap(),
        json!(true)
    );
    client
        .get_user_profile_photos(
            UserId(9),
            UserProfilePhotosOptions {
                limit: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        client
            .get_updates(GetUpdatesOptions {
                offset: Some(100),
                timeout: Some(30),
                ..Default::default()
            })
            .await
            .unwrap(),
        json!([])
    );
    client
        .send_sticker(
            ChatId(1),
            "CAADAgADQAADyIsGAAE7MpzFPFQX5QI",
            ReplyOptions::default(),
        )
        .await
        .unwrap();

    for m in [forward, location, action, photos, updates, sticker] {
        m.assert_async().await;
    }
}

#[tokio::test]
async fn get_updates_without_options_is_a_get() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", path("getUpdates").as_str())
        .with_body(ok_body(json!([{"update_id": 1}])))
        .create_async()
        .await;

    let updates = client_for(&server)
        .get_updates(GetUpdatesOptions::default())
        .await
        .unwrap();
    assert_eq!(updates[0]["update_id"], 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn local_photo_is_uploaded_as_multipart() {
    let file = temp_file(b"FAKE-PNG-BYTES");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendPhoto").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="chat_id"\r\n\r\n42\r\n"#.to_string()),
            Matcher::Regex(r#"name="photo"; filename="[^"]+""#.to_string()),
            Matcher::Regex("FAKE-PNG-BYTES".to_string()),
            Matcher::Regex(r#"name="caption"\r\n\r\nlook\r\n"#.to_string()),
        ]))
        .with_body(ok_body(json!({"message_id": 12})))
        .create_async()
        .await;

    client_for(&server)
        .send_photo(
            ChatId(42),
            InputFile::path(file.path()),
            SendPhotoOptions {
                caption: Some("look".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn attachment_is_read_from_the_matching_field() {
    let file = temp_file(b"%PDF-document-body");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendDocument").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="document"; filename="#.to_string()),
            Matcher::Regex("%PDF-document-body".to_string()),
        ]))
        .with_body(ok_body(json!({"message_id": 13})))
        .create_async()
        .await;

    client_for(&server)
        .send_document(
            ChatId(42),
            InputFile::path(file.path()),
            ReplyOptions::default(),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn remote_photo_id_is_form_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendPhoto").as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("chat_id=42&photo=AgADBAADq6cxG")
        .with_body(ok_body(json!({"message_id": 14})))
        .create_async()
        .await;

    client_for(&server)
        .send_photo(
            ChatId(42),
            InputFile::remote("AgADBAADq6cxG"),
            SendPhotoOptions::default(),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn send_audio_options_follow_declared_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendAudio").as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("chat_id=5&audio=CQADBAADAg&duration=215&performer=Artist&title=Song")
        .with_body(ok_body(json!({"message_id": 30})))
        .create_async()
        .await;

    client_for(&server)
        .send_audio(
            ChatId(5),
            InputFile::remote("CQADBAADAg"),
            SendAudioOptions {
                duration: Some(215),
                performer: Some("Artist".to_string()),
                title: Some("Song".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn send_video_sends_duration_before_caption() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendVideo").as_str())
        .match_body("chat_id=5&video=BAADBAADAw&duration=12&caption=clip&reply_to_message_id=8")
        .with_body(ok_body(json!({"message_id": 31})))
        .create_async()
        .await;

    client_for(&server)
        .send_video(
            ChatId(5),
            InputFile::remote("BAADBAADAw"),
            SendVideoOptions {
                duration: Some(12),
                caption: Some("clip".to_string()),
                reply_to_message_id: Some(MessageId(8)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn local_voice_is_uploaded_under_its_own_field() {
    let file = temp_file(b"OggS-voice-note");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendVoice").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="chat_id"\r\n\r\n5\r\n"#.to_string()),
            Matcher::Regex(r#"name="voice"; filename="[^"]+""#.to_string()),
            Matcher::Regex("OggS-voice-note".to_string()),
            Matcher::Regex(r#"name="duration"\r\n\r\n3\r\n"#.to_string()),
        ]))
        .with_body(ok_body(json!({"message_id": 32})))
        .create_async()
        .await;

    client_for(&server)
        .send_voice(
            ChatId(5),
            InputFile::path(file.path()),
            SendVoiceOptions {
                duration: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn local_video_is_uploaded_under_its_own_field() {
    let file = temp_file(b"MP4-video-bytes");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendVideo").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="video"; filename="[^"]+""#.to_string()),
            Matcher::Regex("MP4-video-bytes".to_string()),
            Matcher::Regex(r#"name="caption"\r\n\r\nclip\r\n"#.to_string()),
        ]))
        .with_body(ok_body(json!({"message_id": 33})))
        .create_async()
        .await;

    client_for(&server)
        .send_video(
            ChatId(5),
            InputFile::path(file.path()),
            SendVideoOptions {
                caption: Some("clip".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_local_file_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("sendVoice").as_str())
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server)
        .send_voice(
            ChatId(1),
            InputFile::path("/definitely/not/here.ogg"),
            Default::default(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }), "{err:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn set_webhook_without_certificate() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .match_body("url=https%3A%2F%2Fexample.com%2Fhook")
        .with_body(ok_body(json!(true)))
        .create_async()
        .await;

    let result = client_for(&server)
        .set_webhook("https://example.com/hook", None)
        .await
        .unwrap();
    assert_eq!(result, json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn set_webhook_uploads_certificate() {
    let cert = temp_file(b"-----BEGIN CERTIFICATE-----");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("setWebhook").as_str())
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="url"\r\n\r\nhttps://example.com/hook\r\n"#.to_string()),
            Matcher::Regex(r#"name="certificate"; filename="#.to_string()),
            Matcher::Regex("BEGIN CERTIFICATE".to_string()),
        ]))
        .with_body(ok_body(json!(true)))
        .create_async()
        .await;

    client_for(&server)
        .set_webhook("https://example.com/hook", Some(InputFile::path(cert.path())))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn generic_send_maps_positions_to_names() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", path("getFile").as_str())
        .match_body("file_id=abc")
        .with_body(ok_body(json!({"file_id": "abc", "file_path": "photos/file_1.jpg"})))
        .create_async()
        .await;

    let file = client_for(&server)
        .send("getFile", vec![Some(FieldValue::from("abc"))])
        .await
        .unwrap();
    assert_eq!(file["file_path"], "photos/file_1.jpg");
    mock.assert_async().await;
}

#[tokio::test]
async fn generic_send_rejects_unknown_operation() {
    let server = Server::new_async().await;
    let err = client_for(&server)
        .send("sendHologram", vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(_)));
}

#[tokio::test]
async fn non_accepted_status_is_transport_error_with_exact_code() {
    let mut server = Server::new_async().await;
    let _m404 = server
        .mock("GET", path("getMe").as_str())
        .with_status(404)
        .with_body(r#"{"ok":false,"error_code":404,"description":"Not Found"}"#)
        .create_async()
        .await;
    let _m429 = server
        .mock("POST", path("sendMessage").as_str())
        .with_status(429)
        .with_body(r#"{"ok":true,"result":{}}"#)
        .create_async()
        .await;
    let _m599 = server
        .mock("POST", path("getFile").as_str())
        .with_status(599)
        .create_async()
        .await;

    let client = client_for(&server);

    match client.get_me().await.unwrap_err() {
        Error::Transport { status, reason } => {
            assert_eq!(status, 404);
            assert_eq!(reason, Some("Not Found"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    match client
        .send_message(ChatId(1), "x", Default::default())
        .await
        .unwrap_err()
    {
        Error::Transport { status, reason } => {
            assert_eq!(status, 429);
            assert_eq!(reason, Some("Too Many Requests"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    let err = client.get_file("f").await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 599, reason: None }));
    assert!(err.to_string().contains("599"));
}

#[tokio::test]
async fn redirects_are_not_followed() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", path("getMe").as_str())
        .with_status(302)
        .with_header("location", "https://example.com/")
        .create_async()
        .await;

    let err = client_for(&server).get_me().await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 302, .. }));
}

#[tokio::test]
async fn not_modified_is_not_a_transport_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", path("getMe").as_str())
        .with_status(304)
        .create_async()
        .await;

    // 304 carries no body, so the envelope cannot be decoded.
    let err = client_for(&server).get_me().await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)), "{err:?}");
}

#[tokio::test]
async fn invalid_json_is_malformed_response() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", path("getMe").as_str())
        .with_status(200)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server).get_me().await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
    assert!(err.code().is_some());
}

#[tokio::test]
async fn ok_false_is_api_error_verbatim() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", path("sendMessage").as_str())
        .with_status(200)
        .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .send_message(ChatId(404), "hi", Default::default())
        .await
        .unwrap_err();
    match err {
        Error::Api {
            error_code,
            description,
        } => {
            assert_eq!(error_code, Some(400));
            assert_eq!(description.as_deref(), Some("Bad Request: chat not found"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_does_not_leak_token() {
    let cfg = Config::new(TOKEN)
        .unwrap()
        .with_api_base_url("http://127.0.0.1:1");
    let client = BotClient::from_config(cfg).unwrap();

    let err = client.get_me().await.unwrap_err();
    assert!(matches!(err, Error::External(_)), "{err:?}");
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn download_file_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let file_path = format!("/file/bot{TOKEN}/photos/file_1.jpg");
    let _ok = server
        .mock("GET", file_path.as_str())
        .with_body(b"\x89PNG-raw".to_vec())
        .create_async()
        .await;
    let gone = format!("/file/bot{TOKEN}/photos/gone.jpg");
    let _missing = server
        .mock("GET", gone.as_str())
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.download_file("photos/file_1.jpg").await.unwrap(),
        b"\x89PNG-raw".to_vec()
    );
    assert!(matches!(
        client.download_file("photos/gone.jpg").await,
        Err(Error::Transport { status: 404, .. })
    ));
}

#[test]
fn file_url_uses_file_prefix() {
    let client = BotClient::new("42:abc").unwrap();
    assert_eq!(
        client.file_url("documents/file_3.pdf"),
        "https://api.telegram.org/file/bot42:abc/documents/file_3.pdf"
    );
}

#[test]
fn inbound_accessors() {
    let client = BotClient::new("42:abc")
        .unwrap()
        .with_inbound(r#"{"message":{"chat":{"id":7},"text":"hello"}}"#);
    assert_eq!(client.chat_id().unwrap(), ChatId(7));
    assert_eq!(client.message_text().unwrap(), "hello");

    let bare = BotClient::new("42:abc").unwrap();
    assert!(matches!(bare.chat_id(), Err(Error::Inbound(_))));
    assert!(matches!(bare.message_text(), Err(Error::Inbound(_))));
}

#[test]
fn client_debug_masks_token() {
    let client = BotClient::new("123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw").unwrap();
    let dbg = format!("{client:?}");
    assert!(!dbg.contains("AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw"));
}
