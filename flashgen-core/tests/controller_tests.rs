use flashgen_core::{
    build_prompt, Flashcard, Phase, RequestController, ScriptedClient, SubmitOutcome,
};
use std::sync::Arc;

fn controller(client: &Arc<ScriptedClient>) -> RequestController {
    RequestController::new(client.clone())
}

#[tokio::test]
async fn blank_topic_changes_nothing() {
    let client = Arc::new(ScriptedClient::new());
    let ctl = controller(&client);
    let before = ctl.snapshot();

    assert_eq!(ctl.submit("").await, SubmitOutcome::Ignored);
    assert_eq!(ctl.submit("   ").await, SubmitOutcome::Ignored);

    let after = ctl.snapshot();
    assert_eq!(after.phase, before.phase);
    assert_eq!(after.cards, before.cards);
    assert_eq!(after.last_error, before.last_error);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn success_replaces_cards_and_clears_error() {
    let client = Arc::new(ScriptedClient::new());
    client.push_failure("connection refused").push_reply("Q: x\nA: y");
    let ctl = controller(&client);

    assert!(matches!(ctl.submit("rust").await, SubmitOutcome::Failed { .. }));
    assert!(ctl.snapshot().last_error.is_some());

    let expected = vec![Flashcard::new("x", "y").unwrap()];
    assert_eq!(ctl.submit("rust").await, SubmitOutcome::Generated { cards: expected.clone() });
    let s = ctl.snapshot();
    assert_eq!(s.cards, expected);
    assert!(s.last_error.is_none());
    assert_eq!(s.phase, Phase::Idle);
    assert_eq!(s.generation, 1);
}

#[tokio::test]
async fn failure_keeps_previous_cards() {
    let client = Arc::new(ScriptedClient::new());
    client
        .push_reply("Q: a\nA: b\nQ: c\nA: d")
        .push_failure("500 Internal Server Error");
    let ctl = controller(&client);

    ctl.submit("history").await;
    let cards_before = ctl.snapshot().cards;
    assert_eq!(cards_before.len(), 2);

    let notice = match ctl.submit("geography").await {
        SubmitOutcome::Failed { notice } => notice,
        other => panic!("expected failure, got {other:?}"),
    };
    assert!(notice.contains("500"));

    let s = ctl.snapshot();
    assert_eq!(s.cards, cards_before);
    assert_eq!(s.last_error.as_deref(), Some(notice.as_str()));
    assert_eq!(s.phase, Phase::Idle);
    assert_eq!(s.generation, 1);
}

#[tokio::test]
async fn each_submission_sends_one_templated_prompt() {
    let client = Arc::new(ScriptedClient::new());
    client.push_reply("Q: a\nA: b").push_reply("nothing useful");
    let ctl = controller(&client);

    ctl.submit("photosynthesis").await;
    assert_eq!(ctl.submit("volcanoes").await, SubmitOutcome::Generated { cards: vec![] });

    let prompts = client.prompts();
    assert_eq!(prompts, vec![build_prompt("photosynthesis"), build_prompt("volcanoes")]);
    assert!(ctl.snapshot().cards.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn overlapping_submission_is_rejected_while_loading() {
    let client = Arc::new(ScriptedClient::gated());
    client.push_reply("Q: x\nA: y");
    let ctl = controller(&client);

    let first = {
        let ctl = ctl.clone();
        tokio::spawn(async move { ctl.submit("rust").await })
    };
    client.wait_for_call().await;

    let during = ctl.snapshot();
    assert_eq!(during.phase, Phase::Loading);
    assert_eq!(during.topic, "rust");

    assert_eq!(ctl.submit("go").await, SubmitOutcome::Busy);
    assert_eq!(client.calls(), 1);

    client.release(1);
    assert_eq!(
        first.await.unwrap(),
        SubmitOutcome::Generated { cards: vec![Flashcard::new("x", "y").unwrap()] }
    );
    assert_eq!(ctl.snapshot().phase, Phase::Idle);
    assert_eq!(ctl.snapshot().topic, "rust");
}

#[tokio::test]
async fn set_topic_edits_without_requesting() {
    let client = Arc::new(ScriptedClient::new());
    let ctl = controller(&client);
    ctl.set_topic("draft");
    let s = ctl.snapshot();
    assert_eq!(s.topic, "draft");
    assert_eq!(s.phase, Phase::Idle);
    assert_eq!(client.calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dropped_submission_returns_session_to_idle() {
    let client = Arc::new(ScriptedClient::gated());
    client.push_reply("Q: a\nA: b").push_reply("Q: x\nA: y");
    let ctl = controller(&client);

    let first = {
        let ctl = ctl.clone();
        tokio::spawn(async move { ctl.submit("rust").await })
    };
    client.wait_for_call().await;
    assert_eq!(ctl.snapshot().phase, Phase::Loading);

    first.abort();
    assert!(first.await.unwrap_err().is_cancelled());

    let s = ctl.snapshot();
    assert_eq!(s.phase, Phase::Idle);
    assert_eq!(s.last_error.as_deref(), Some("request cancelled"));
    assert!(s.cards.is_empty());

    client.release(5);
    let outcome = ctl.submit("rust").await;
    assert_ne!(outcome, SubmitOutcome::Busy);
    assert!(matches!(outcome, SubmitOutcome::Generated { .. }));
    assert!(ctl.snapshot().last_error.is_none());
}
