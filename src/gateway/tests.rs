use super::*;
use async_trait::async_trait;
use slang_core::{error::SlangError, message::CallbackQuery};
use std::sync::Mutex;

/// Gateway over a temp-dir dictionary and no channels.
fn test_gateway() -> (tempfile::TempDir, Gateway) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slang_dict.json");
    std::fs::write(
        &path,
        r#"{
          "cap": {"normal": "lie", "explanation": "slang for lying"},
          "no cap": {"normal": "for real", "explanation": "honestly"},
          "lit": {"normal": "exciting", "explanation": "something great"}
        }"#,
    )
    .unwrap();
    let mut config = Config::default();
    config.admin.user_ids = vec![42];
    config.limits.history_limit = 3;
    let gateway = Gateway::new(Dictionary::load(&path), HashMap::new(), &config);
    (dir, gateway)
}

fn text(body: &str) -> IncomingMessage {
    IncomingMessage {
        id: uuid::Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: "7".to_string(),
        sender_name: Some("Tester".to_string()),
        text: body.to_string(),
        timestamp: chrono::Utc::now(),
        reply_target: Some("7".to_string()),
        is_group: false,
        callback: None,
    }
}

fn press(data: &str) -> IncomingMessage {
    let mut msg = text("");
    msg.callback = Some(CallbackQuery {
        id: "cb-1".to_string(),
        data: data.to_string(),
    });
    msg
}

fn state(gw: &mut Gateway) -> ConversationState {
    gw.conversation("telegram:7").state
}

#[test]
fn test_idle_text_translates_slang_to_normal() {
    let (_dir, mut gw) = test_gateway();
    let reply = gw.respond(&text("that is cap"));
    assert!(reply.text.contains("that is lie"));
    assert!(reply.text.contains("'cap' → 'lie': slang for lying"));
    assert_eq!(reply.keyboard, Some(keyboards::after_translation("English")));
}

#[test]
fn test_no_match_uses_localized_fallback() {
    let (_dir, mut gw) = test_gateway();
    let reply = gw.respond(&text("hello there"));
    assert!(reply.text.contains("hello there"));
    assert!(reply.text.contains("No slang words found in the dictionary."));
}

#[test]
fn test_direction_button_then_text() {
    let (_dir, mut gw) = test_gateway();
    let prompt = gw.respond(&press("translate_normal_to_slang"));
    assert_eq!(prompt.keyboard, Some(keyboards::cancel("English")));
    assert_eq!(
        state(&mut gw),
        ConversationState::WaitingForText(Direction::NormalToSlang)
    );

    let reply = gw.respond(&text("That is so exciting"));
    assert!(reply.text.contains("That is so lit"));
    assert_eq!(state(&mut gw), ConversationState::Idle);
}

#[test]
fn test_translate_again_reuses_last_direction() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("translate_normal_to_slang"));
    gw.respond(&text("for real"));
    gw.respond(&press("translate_again"));
    assert_eq!(
        state(&mut gw),
        ConversationState::WaitingForText(Direction::NormalToSlang)
    );
}

#[test]
fn test_search_flow_via_button() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("search_menu"));
    assert_eq!(state(&mut gw), ConversationState::WaitingForSearch);

    let reply = gw.respond(&text("great"));
    assert!(reply.text.contains("*lit* → exciting"));
    assert_eq!(state(&mut gw), ConversationState::Idle);
}

#[test]
fn test_cancel_returns_to_idle() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("search_menu"));
    let reply = gw.respond(&press("cancel"));
    assert_eq!(reply.text, "Cancelled.");
    assert_eq!(reply.keyboard, Some(keyboards::main_menu("English")));
    assert_eq!(state(&mut gw), ConversationState::Idle);

    gw.respond(&press("translate_slang_to_normal"));
    gw.respond(&text("/cancel"));
    assert_eq!(state(&mut gw), ConversationState::Idle);
}

#[test]
fn test_history_menu_and_items() {
    let (_dir, mut gw) = test_gateway();
    let empty = gw.respond(&press("history_menu"));
    assert_eq!(empty.text, "Your history is empty.");

    for body in ["cap", "lit", "hello", "no"] {
        gw.respond(&text(body));
    }
    let menu = gw.respond(&press("history_menu"));
    let kb = menu.keyboard.unwrap();
    // history_limit = 3 items plus "back".
    assert_eq!(kb.rows.len(), 4);
    assert_eq!(kb.rows[0][0].text, "1. no...");
    assert_eq!(kb.rows[2][0].text, "3. lit...");

    let item = gw.respond(&press("history_item_2"));
    assert!(item.text.contains("exciting"));

    let missing = gw.respond(&press("history_item_9"));
    assert_eq!(missing.text, "That entry is no longer available.");
}

#[test]
fn test_unknown_callback() {
    let (_dir, mut gw) = test_gateway();
    let reply = gw.respond(&press("bogus"));
    assert_eq!(reply.text, "Unknown action.");
}

#[test]
fn test_commands_route_before_state() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("translate_slang_to_normal"));
    let reply = gw.respond(&text("/stats"));
    assert!(reply.text.contains("Words in dictionary: 3"));
    // Non-state-changing command keeps waiting for text.
    assert_eq!(
        state(&mut gw),
        ConversationState::WaitingForText(Direction::SlangToNormal)
    );
}

#[test]
fn test_add_only_for_admins() {
    let (_dir, mut gw) = test_gateway();
    let denied = gw.respond(&text("/add bet | okay | agreement"));
    assert_eq!(denied.text, "This command is for administrators only.");

    let mut admin = text("/add bet | okay | agreement");
    admin.sender_id = "42".to_string();
    let added = gw.respond(&admin);
    assert_eq!(added.text, "Added \"bet\" to the dictionary.");
    assert!(gw.respond(&text("bet")).text.contains("okay"));
}

#[test]
fn test_conversations_are_per_sender() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("search_menu"));
    let mut other = text("cap");
    other.sender_id = "8".to_string();
    let reply = gw.respond(&other);
    assert!(reply.text.contains("lie"));
    assert_eq!(state(&mut gw), ConversationState::WaitingForSearch);
}

#[test]
fn test_markdown_in_user_text_is_escaped() {
    let (_dir, mut gw) = test_gateway();
    let reply = gw.respond(&text("no cap _fr_ snake_case"));
    assert!(reply
        .text
        .starts_with("*Translation:*\nno lie \\_fr\\_ snake\\_case\n"));

    // History keeps the raw text and escapes again on display.
    let item = gw.respond(&press("history_item_0"));
    assert!(item.text.contains("no lie \\_fr\\_ snake\\_case"));
}

#[test]
fn test_blank_conversations_are_dropped() {
    let (_dir, mut gw) = test_gateway();
    gw.respond(&press("back_to_main"));
    gw.respond(&text("/start"));
    assert!(gw.conversations.is_empty());

    gw.respond(&press("search_menu"));
    assert_eq!(gw.conversations.len(), 1);
    gw.respond(&text("great"));
    assert!(gw.conversations.is_empty());

    gw.respond(&text("cap"));
    assert_eq!(gw.conversations.len(), 1);
    assert_eq!(
        gw.conversations["telegram:7"].history_item(0).unwrap().original,
        "cap"
    );
}

#[test]
fn test_empty_text_shows_menu() {
    let (_dir, mut gw) = test_gateway();
    let reply = gw.respond(&text("   "));
    assert_eq!(reply.text, "Choose an action:");
    assert_eq!(reply.keyboard, Some(keyboards::main_menu("English")));
}

/// Channel that records what the gateway sends.
#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<OutgoingMessage>>,
    answered: Mutex<Vec<String>>,
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, SlangError> {
        let (_tx, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), SlangError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SlangError> {
        self.answered.lock().unwrap().push(callback_id.to_string());
        Ok(())
    }

    async fn stop(&self) -> Result<(), SlangError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_handle_message_sends_reply_and_answers_callback() {
    let (_dir, mut gw) = test_gateway();
    let channel = Arc::new(RecordingChannel::default());
    gw.channels
        .insert("telegram".to_string(), channel.clone() as Arc<dyn Channel>);

    gw.handle_message(press("help_menu")).await;
    gw.handle_message(text("cap")).await;

    assert_eq!(*channel.answered.lock().unwrap(), vec!["cb-1".to_string()]);
    let sent = channel.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].text.contains("/random"));
    assert_eq!(sent[0].keyboard, Some(keyboards::back_to_main("English")));
    assert_eq!(sent[1].reply_target.as_deref(), Some("7"));
    assert!(sent[1].text.contains("lie"));
}

#[tokio::test]
async fn test_run_stops_when_channels_close() {
    let (_dir, mut gw) = test_gateway();
    gw.channels.insert(
        "telegram".to_string(),
        Arc::new(RecordingChannel::default()) as Arc<dyn Channel>,
    );
    gw.run().await.unwrap();
}
