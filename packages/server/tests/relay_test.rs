//! Integration tests: run the real router in-process and drive it over WebSocket.

use std::{sync::Arc, time::Duration};

use chatrelay_server::{
    app::build_server,
    infrastructure::dto::{
        http::ParticipantDetailDto,
        websocket::{ChatMessageInfo, ClientEvent, ParticipantInfo, ServerEvent},
    },
};
use chatrelay_shared::time::SystemClock;
use futures_util::{SinkExt, Stream, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, Message},
};

type Ws = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Start a relay on an ephemeral port and return its address
async fn start_server() -> String {
    let server = build_server(Arc::new(SystemClock));
    let app = server.router();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr.to_string()
}

async fn connect(addr: &str) -> Ws {
    let (ws, _response) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
    ws
}

async fn send_event(ws: &mut Ws, event: &ClientEvent) {
    let json = serde_json::to_string(event).unwrap();
    ws.send(Message::text(json)).await.unwrap();
}

async fn join(ws: &mut Ws, name: &str) {
    send_event(
        ws,
        &ClientEvent::AddParticipant {
            name: Some(name.to_string()),
        },
    )
    .await;
}

async fn say(ws: &mut Ws, text: &str) {
    send_event(
        ws,
        &ClientEvent::SendMessage {
            message: Some(text.to_string()),
            user: None,
        },
    )
    .await;
}

/// Next relay event, skipping control frames
async fn next_event<S>(ws: &mut S) -> ServerEvent
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for relay event")
            .expect("connection closed")
            .expect("websocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

async fn expect_log(ws: &mut Ws) -> Vec<ChatMessageInfo> {
    match next_event(ws).await {
        ServerEvent::MessageLog { messages } => messages,
        other => panic!("expected message-log, got {:?}", other),
    }
}

async fn expect_participants(ws: &mut Ws) -> Vec<ParticipantInfo> {
    match next_event(ws).await {
        ServerEvent::ParticipantList { participants } => participants,
        other => panic!("expected participant-list, got {:?}", other),
    }
}

async fn expect_message<S>(ws: &mut S) -> ChatMessageInfo
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    match next_event(ws).await {
        ServerEvent::NewMessage { message } => message,
        other => panic!("expected new-message, got {:?}", other),
    }
}

fn texts(messages: &[ChatMessageInfo]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.text.clone().unwrap_or_default())
        .collect()
}

fn names(participants: &[ParticipantInfo]) -> Vec<Option<&str>> {
    participants.iter().map(|p| p.name.as_deref()).collect()
}

#[tokio::test]
async fn test_join_send_leave_scenario() {
    // テスト項目: Alice と Bob の join・送信・切断の一連の流れ
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    assert!(expect_log(&mut alice).await.is_empty());
    join(&mut alice, "Alice").await;
    assert_eq!(names(&expect_participants(&mut alice).await), vec![Some("Alice")]);

    let mut bob = connect(&addr).await;
    assert!(expect_log(&mut bob).await.is_empty());
    join(&mut bob, "Bob").await;
    let expected = vec![Some("Alice"), Some("Bob")];
    assert_eq!(names(&expect_participants(&mut alice).await), expected);
    assert_eq!(names(&expect_participants(&mut bob).await), expected);

    // when (操作): Alice が送信
    say(&mut alice, "hi").await;

    // then (期待する結果): 送信者を含む両者に届く
    for ws in [&mut alice, &mut bob] {
        let message = expect_message(ws).await;
        assert_eq!(message.text.as_deref(), Some("hi"));
        assert_eq!(message.author.as_deref(), Some("Alice"));
        assert!(message.timestamp > 0);
    }

    // when (操作): Bob が切断
    bob.close(None).await.unwrap();

    // then (期待する結果): Alice に残りの参加者リストが届く
    assert_eq!(names(&expect_participants(&mut alice).await), vec![Some("Alice")]);
}

#[tokio::test]
async fn test_new_connection_receives_full_log_in_order() {
    // テスト項目: 新しい接続には過去の全メッセージが送信順で再送される
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;
    join(&mut alice, "Alice").await;
    expect_participants(&mut alice).await;
    for text in ["one", "two", "three"] {
        say(&mut alice, text).await;
        expect_message(&mut alice).await;
    }

    // when (操作):
    let mut carol = connect(&addr).await;

    // then (期待する結果):
    let log = expect_log(&mut carol).await;
    let texts: Vec<_> = log.iter().map(|m| m.text.as_deref()).collect();
    assert_eq!(texts, vec![Some("one"), Some("two"), Some("three")]);
    assert!(log.iter().all(|m| m.author.as_deref() == Some("Alice")));
}

#[tokio::test]
async fn test_malformed_frames_are_ignored() {
    // テスト項目: 不正なフレームは無視され、接続は維持される
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;

    // when (操作):
    alice.send(Message::text("not json")).await.unwrap();
    alice
        .send(Message::text(r#"{"type":"unknown-event"}"#))
        .await
        .unwrap();
    alice
        .send(Message::text(r#"{"type":"add-participant"}"#))
        .await
        .unwrap();

    // then (期待する結果): エラー応答は無く、名前なしの join だけが反映される
    let participants = expect_participants(&mut alice).await;
    assert_eq!(names(&participants), vec![None]);
}

#[tokio::test]
async fn test_http_views_follow_relay_state() {
    // テスト項目: HTTP API から現在の参加者とメッセージが取得できる
    // given (前提条件):
    let addr = start_server().await;
    let health: serde_json::Value = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, serde_json::json!({"status": "ok"}));

    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;
    join(&mut alice, "Alice").await;
    expect_participants(&mut alice).await;
    say(&mut alice, "hello").await;
    expect_message(&mut alice).await;

    // when (操作):
    let participants: Vec<ParticipantDetailDto> =
        reqwest::get(format!("http://{}/api/participants", addr))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    let messages: serde_json::Value = reqwest::get(format!("http://{}/api/messages", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].name.as_deref(), Some("Alice"));
    assert_eq!(messages[0]["text"], "hello");
    assert_eq!(messages[0]["author"], "Alice");
    assert!(messages[0]["sent_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_disconnected_participant_is_absent_from_registry() {
    // テスト項目: 切断した参加者は処理直後に参加者一覧から消える
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;
    join(&mut alice, "Alice").await;
    expect_participants(&mut alice).await;
    let mut bob = connect(&addr).await;
    expect_log(&mut bob).await;
    join(&mut bob, "Bob").await;
    expect_participants(&mut alice).await;

    // when (操作):
    drop(bob);
    expect_participants(&mut alice).await;

    // then (期待する結果):
    let relay: serde_json::Value = reqwest::get(format!("http://{}/debug/relay", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let participants = relay["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["name"], "Alice");
}

#[tokio::test]
async fn test_late_joiner_sees_each_message_once_in_global_order() {
    // テスト項目: 送信中に接続したクライアントでも、再送ログと新着メッセージを
    //             合わせると全メッセージが一度ずつ、全員と同じ順序で届く
    // given (前提条件):
    const MESSAGE_COUNT: usize = 200;
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;
    join(&mut alice, "Alice").await;
    expect_participants(&mut alice).await;
    let (mut alice_write, mut alice_read) = alice.split();

    let (halfway_tx, halfway_rx) = tokio::sync::oneshot::channel();
    let writer = tokio::spawn(async move {
        let mut halfway_tx = Some(halfway_tx);
        for i in 0..MESSAGE_COUNT {
            let event = ClientEvent::SendMessage {
                message: Some(format!("m{}", i)),
                user: None,
            };
            let json = serde_json::to_string(&event).unwrap();
            alice_write.send(Message::text(json)).await.unwrap();
            if i == MESSAGE_COUNT / 2
                && let Some(tx) = halfway_tx.take()
            {
                tx.send(()).ok();
            }
        }
        alice_write
    });

    // when (操作): 送信の途中で Bob が接続する
    halfway_rx.await.unwrap();
    let mut bob = connect(&addr).await;
    let replayed = texts(&expect_log(&mut bob).await);
    let mut bob_live = Vec::new();
    while replayed.len() + bob_live.len() < MESSAGE_COUNT {
        bob_live.push(expect_message(&mut bob).await.text.unwrap_or_default());
    }

    let mut alice_seen = Vec::new();
    for _ in 0..MESSAGE_COUNT {
        alice_seen.push(expect_message(&mut alice_read).await.text.unwrap_or_default());
    }
    let _alice_write = writer.await.unwrap();

    // then (期待する結果):
    let expected: Vec<String> = (0..MESSAGE_COUNT).map(|i| format!("m{}", i)).collect();
    assert_eq!(alice_seen, expected);

    let mut bob_seen = replayed.clone();
    bob_seen.extend(bob_live.iter().cloned());
    assert_eq!(bob_seen, expected);
    assert_eq!(bob_live, alice_seen[replayed.len()..].to_vec());

    let log: Vec<serde_json::Value> = reqwest::get(format!("http://{}/api/messages", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let log_texts: Vec<&str> = log
        .iter()
        .map(|m| m["text"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(log_texts, expected);
}

#[tokio::test]
async fn test_wrong_typed_message_field_is_relayed_as_text() {
    // テスト項目: 数値の message を含むフレームも拒否されず、テキストとして配信される
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = connect(&addr).await;
    expect_log(&mut alice).await;

    // when (操作):
    alice
        .send(Message::text(r#"{"type":"send-message","message":42,"user":7}"#))
        .await
        .unwrap();

    // then (期待する結果):
    let message = expect_message(&mut alice).await;
    assert_eq!(message.text.as_deref(), Some("42"));
    assert_eq!(message.author.as_deref(), Some("7"));
}
