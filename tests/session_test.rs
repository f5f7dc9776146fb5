//! Session behaviour against a scripted generative opponent.

use noughts::{
    CompletionBackend, GameEvent, GameMode, GameState, GenerativeOpponent, LlmError, Marker,
    NoOpCause, Phase, Rejection, Session, TurnOutcome,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Backend replaying canned replies and recording every prompt it saw.
#[derive(Clone, Default)]
struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    fn with_replies(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            prompts: Arc::default(),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn generate(&self, _system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(user_message.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::new("script exhausted".to_string())))
    }
}

fn ai_session(
    backend: ScriptedBackend,
) -> (Session, mpsc::UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let ai = GenerativeOpponent::new("Scripted", backend);
    let session = Session::against(
        GameMode::HumanVsGenerative,
        Box::new(ai),
        GameState::default(),
        tx,
    );
    (session, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_ai_reply_is_applied() {
    let backend = ScriptedBackend::with_replies(vec![Ok("4".to_string())]);
    let (mut session, mut rx) = ai_session(backend.clone());

    session.human_move(0);
    let outcome = session.ai_turn().await.unwrap();

    assert!(outcome.is_move());
    assert_eq!(session.state().board().to_cells()[4], Some(Marker::O));
    assert_eq!(session.phase(), Phase::HumanTurn(Marker::X));
    assert_eq!(
        backend.prompts(),
        vec![
            "The current board state is [\"X\",null,null,null,null,null,null,null,null]. \
             Where do you want to place your O?"
                .to_string()
        ]
    );

    let events = drain(&mut rx);
    assert!(matches!(events[1], GameEvent::AiThinking));
    assert!(matches!(&events[2], GameEvent::StateChanged(s) if s.current_player() == Marker::X));
}

#[tokio::test]
async fn test_occupied_reply_is_noop_and_retryable() {
    let backend = ScriptedBackend::with_replies(vec![Ok("0".to_string()), Ok("8".to_string())]);
    let (mut session, mut rx) = ai_session(backend);

    session.human_move(0);
    let before = session.state().clone();

    let outcome = session.ai_turn().await.unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::NoOp(NoOpCause::Rejected(Rejection::CellOccupied(0)))
    );
    assert_eq!(session.state(), &before);
    assert_eq!(session.phase(), Phase::AwaitingAiMove);
    assert!(matches!(drain(&mut rx).last(), Some(GameEvent::AiTurnFailed(_))));

    assert!(session.ai_turn().await.unwrap().is_move());
    assert_eq!(session.state().board().to_cells()[8], Some(Marker::O));
}

#[tokio::test]
async fn test_out_of_range_and_unreadable_replies_are_noops() {
    let backend = ScriptedBackend::with_replies(vec![
        Ok("12".to_string()),
        Ok("I pick the centre".to_string()),
    ]);
    let (mut session, _rx) = ai_session(backend);
    session.human_move(0);

    assert_eq!(
        session.ai_turn().await.unwrap(),
        TurnOutcome::NoOp(NoOpCause::Rejected(Rejection::OutOfRange(12)))
    );
    assert_eq!(
        session.ai_turn().await.unwrap(),
        TurnOutcome::NoOp(NoOpCause::UnparseableReply("I pick the centre".to_string()))
    );
    assert_eq!(session.state().board().empty_cells().len(), 8);
}

#[tokio::test]
async fn test_backend_failure_is_reported() {
    let backend = ScriptedBackend::with_replies(vec![Err(LlmError::new("quota".to_string()))]);
    let (mut session, mut rx) = ai_session(backend);
    session.human_move(0);

    let err = session.ai_turn().await.unwrap_err();
    assert!(err.to_string().contains("quota"));
    assert_eq!(session.phase(), Phase::AwaitingAiMove);

    let events = drain(&mut rx);
    assert!(matches!(events.last(), Some(GameEvent::AiTurnFailed(msg)) if msg.contains("quota")));
}

#[tokio::test]
async fn test_ai_can_win() {
    let replies = ["3", "4", "5"].iter().map(|r| Ok(r.to_string())).collect();
    let (mut session, mut rx) = ai_session(ScriptedBackend::with_replies(replies));

    for human in [0, 1, 8] {
        session.human_move(human);
        session.ai_turn().await.unwrap();
    }

    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.state().winner(), Some(Marker::O));
    assert_eq!(
        session.state().winning_combination().map(|l| l.cells().to_vec()),
        Some(vec![3, 4, 5])
    );
    assert!(matches!(
        drain(&mut rx).last(),
        Some(GameEvent::GameOver { winner: Some(Marker::O) })
    ));

    assert_eq!(
        session.human_move(2),
        TurnOutcome::NoOp(NoOpCause::Rejected(Rejection::GameOver))
    );
}

#[tokio::test]
async fn test_reset_after_ai_game() {
    let backend = ScriptedBackend::with_replies(vec![Ok("4".to_string())]);
    let (mut session, _rx) = ai_session(backend);
    session.human_move(0);
    session.ai_turn().await.unwrap();

    session.reset();
    assert_eq!(session.state(), &GameState::default());
    assert_eq!(session.phase(), Phase::HumanTurn(Marker::X));
}
