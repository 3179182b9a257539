use courier::api::{ApiError, GetUpdatesParams, decode_updates};
use courier::engine::{Engine, EngineConfig};
use courier::handlers::KindRouter;
use courier::testing::RecordingHandler;
use courier::types::{Update, UpdateKind};
use courier::{BoxError, FetchRequest, Sequenced};
use serde_json::{Value, json};

mod common;
use common::{chat, message, update_json, user};

fn body(updates: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({"ok": true, "result": updates})).unwrap()
}

#[test]
fn decodes_mixed_batch() {
    let reaction = json!({
        "chat": chat(42),
        "message_id": 3,
        "user": user(1),
        "date": 1700000000,
        "old_reaction": [],
        "new_reaction": [{"type": "paid"}]
    });
    let query = json!({
        "id": "q1",
        "from": user(1),
        "chat_instance": "ci",
        "data": "yes",
        "message": message(3, 42, "pick one")
    });
    let batch = body(vec![
        update_json(1, "message", message(3, 42, "pick one")),
        update_json(2, "message_reaction", reaction),
        update_json(3, "callback_query", query),
        update_json(4, "poll_answer", json!({"poll_id": "p", "option_ids": [0]})),
    ]);

    let updates = decode_updates(&batch).unwrap();
    let kinds: Vec<&str> = updates.iter().map(Sequenced::kind).collect();
    assert_eq!(
        kinds,
        ["message", "message_reaction", "callback_query", "poll_answer"]
    );
    assert!(matches!(updates[1].kind, UpdateKind::MessageReaction(ref r) if r.new_reaction.len() == 1));
    assert_eq!(
        updates[2].message().and_then(|m| m.text.as_deref()),
        Some("pick one")
    );
}

#[test]
fn flood_limit_is_reported() {
    let reply = br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#;
    match decode_updates(reply) {
        Err(ApiError::Api {
            code,
            retry_after,
            description,
        }) => {
            assert_eq!(code, 429);
            assert_eq!(retry_after, Some(3));
            assert!(description.starts_with("Too Many Requests"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_codec_error() {
    assert!(matches!(decode_updates(b"<html>"), Err(ApiError::Codec(_))));
}

#[tokio::test]
async fn engine_runs_on_raw_bodies() {
    let engine = Engine::<Update>::new(EngineConfig::default().allowed_updates(["message"]))
        .unwrap();
    let handle = engine.handle();

    let fetcher = move |request: FetchRequest| {
        let handle = handle.clone();
        async move {
            let params = GetUpdatesParams::from(&request);
            assert_eq!(params.allowed_updates, Some(vec!["message".to_owned()]));
            let raw = match params.offset {
                Some(0) => body(vec![
                    update_json(100, "message", message(1, 42, "a")),
                    update_json(101, "message", message(2, 42, "b")),
                ]),
                _ => {
                    handle.cancel();
                    body(vec![])
                }
            };
            Ok::<_, BoxError>(decode_updates(&raw)?)
        }
    };

    let messages = RecordingHandler::<Update>::new();
    let mut router = KindRouter::<Update>::builder();
    router.route("message", messages.clone()).unwrap();

    let summary = engine.run(fetcher, router.build()).await.unwrap();
    assert_eq!(summary.cursor, 102);
    assert_eq!(messages.ids(), vec![100, 101]);
}
