//! Status Command Interpreter (Use Case)
//!
//! Turns the argument text of the status command into a status-service
//! call and a structured outcome. Does no logging and holds no state
//! besides the service handle; callers log `Failed` outcomes.

use std::sync::Arc;

use crate::domain::{CommandFailure, CommandOutcome, DomainError, FailureKind, StatusCommand};
use crate::ports::StatusService;

/// Application service interpreting custom status commands
pub struct StatusCommandInterpreter<S: StatusService> {
    service: Arc<S>,
}

impl<S: StatusService> StatusCommandInterpreter<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Interpret `message` on behalf of `user_id`.
    ///
    /// `message` is the text after the trigger, as typed.
    pub async fn interpret(&self, user_id: &str, message: &str) -> CommandOutcome {
        match StatusCommand::parse(message) {
            StatusCommand::Clear => match self.service.remove_custom_status(user_id).await {
                Ok(()) => CommandOutcome::Cleared,
                Err(e) => failed(FailureKind::Remove, e),
            },
            StatusCommand::RestorePrevious => self.restore_previous(user_id).await,
            StatusCommand::Set(mut status) => {
                status.text = self.service.trim_message(&status.text);
                match self.service.set_custom_status(user_id, &status).await {
                    Ok(()) => CommandOutcome::SetWithValue(status),
                    Err(e) => failed(FailureKind::Set, e),
                }
            }
        }
    }

    async fn restore_previous(&self, user_id: &str) -> CommandOutcome {
        if let Err(e) = self.service.set_prev_recent_custom_status(user_id).await {
            return failed(FailureKind::Restore, e);
        }

        match self.service.get_custom_status(user_id).await {
            Ok(Some(status)) => CommandOutcome::RestoredWithValue(status),
            Ok(None) => CommandOutcome::RestoredEmpty,
            Err(e) => failed(FailureKind::Fetch, e),
        }
    }
}

fn failed(kind: FailureKind, source: DomainError) -> CommandOutcome {
    CommandOutcome::Failed(CommandFailure::new(kind, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MockStatusService;
    use crate::domain::{CustomStatus, DEFAULT_EMOJI};

    fn interpreter(
        service: MockStatusService,
    ) -> (
        StatusCommandInterpreter<MockStatusService>,
        Arc<MockStatusService>,
    ) {
        let service = Arc::new(service);
        (StatusCommandInterpreter::new(service.clone()), service)
    }

    #[tokio::test]
    async fn test_clear() {
        let (interpreter, service) = interpreter(MockStatusService::default());
        service.seed("u1", CustomStatus::new("car", "Away"));

        let outcome = interpreter.interpret("u1", "clear").await;
        assert!(matches!(outcome, CommandOutcome::Cleared));
        assert_eq!(service.current("u1"), None);
    }

    #[tokio::test]
    async fn test_clear_prefix_never_sets() {
        let (interpreter, service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "clearance :tada: sale").await;
        assert!(matches!(outcome, CommandOutcome::Cleared));
        assert_eq!(service.calls(), vec!["remove"]);
    }

    #[tokio::test]
    async fn test_clear_twice_without_status() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        for _ in 0..2 {
            let outcome = interpreter.interpret("u1", "clear").await;
            assert!(matches!(outcome, CommandOutcome::Cleared));
        }
    }

    #[tokio::test]
    async fn test_clear_failure() {
        let (interpreter, _service) = interpreter(MockStatusService::default().failing("remove"));

        let outcome = interpreter.interpret("u1", "clear").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Remove));
    }

    #[tokio::test]
    async fn test_prev_restores_stored_values() {
        let (interpreter, service) = interpreter(MockStatusService::default());
        service.seed("u1", CustomStatus::new("car", "Away"));
        service.seed("u1", CustomStatus::new("office", "At the office"));

        let outcome = interpreter.interpret("u1", "prev").await;
        match outcome {
            CommandOutcome::RestoredWithValue(status) => {
                assert_eq!(status, CustomStatus::new("car", "Away"));
                assert_eq!(service.current("u1"), Some(status));
            }
            other => panic!("Expected RestoredWithValue, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_prev_without_history_is_empty() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "prev").await;
        assert!(matches!(outcome, CommandOutcome::RestoredEmpty));
    }

    #[tokio::test]
    async fn test_prev_restore_failure() {
        let (interpreter, service) = interpreter(MockStatusService::default().failing("restore"));

        let outcome = interpreter.interpret("u1", "prev").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Restore));
        assert_eq!(service.calls(), vec!["restore"]);
    }

    #[tokio::test]
    async fn test_prev_fetch_failure() {
        let (interpreter, _service) = interpreter(MockStatusService::default().failing("get"));

        let outcome = interpreter.interpret("u1", "prev").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Fetch));
    }

    #[tokio::test]
    async fn test_preset_without_remainder() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "away").await;
        assert_eq!(outcome.status(), Some(&CustomStatus::new("car", "Away")));
    }

    #[tokio::test]
    async fn test_preset_with_remainder() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "away   back by 5pm ").await;
        assert_eq!(
            outcome.status(),
            Some(&CustomStatus::new("car", "Away (back by 5pm)"))
        );
    }

    #[tokio::test]
    async fn test_leading_emoji() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", ":tada: Launch day!").await;
        assert_eq!(
            outcome.status(),
            Some(&CustomStatus::new("tada", "Launch day!"))
        );
    }

    #[tokio::test]
    async fn test_trailing_emoji_is_text() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "party time :tada:").await;
        assert_eq!(
            outcome.status(),
            Some(&CustomStatus::new(DEFAULT_EMOJI, "party time :tada:"))
        );
    }

    #[tokio::test]
    async fn test_empty_message() {
        let (interpreter, _service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "").await;
        assert_eq!(outcome.status(), Some(&CustomStatus::new(DEFAULT_EMOJI, "")));
    }

    #[tokio::test]
    async fn test_set_applies_trim_rule_before_persisting() {
        let (interpreter, service) = interpreter(MockStatusService::default());
        let long = "x".repeat(CustomStatus::MAX_TEXT_CHARS + 20);

        let outcome = interpreter.interpret("u1", &long).await;
        let status = outcome.status().cloned().expect("status set");
        assert_eq!(status.text.len(), CustomStatus::MAX_TEXT_CHARS);
        assert_eq!(service.current("u1"), Some(status));
    }

    #[tokio::test]
    async fn test_set_then_fetch_round_trips() {
        let (interpreter, service) = interpreter(MockStatusService::default());

        let outcome = interpreter.interpret("u1", "meeting 14:00 sync").await;
        let fetched = service.get_custom_status("u1").await.unwrap();
        assert_eq!(outcome.status().cloned(), fetched);
    }

    #[tokio::test]
    async fn test_set_failure() {
        let (interpreter, _service) = interpreter(MockStatusService::default().failing("set"));

        let outcome = interpreter.interpret("u1", "home").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Set));
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let (interpreter, service) = interpreter(MockStatusService::default());

        interpreter.interpret("u1", "away").await;
        interpreter.interpret("u2", "home").await;
        assert_eq!(service.current("u1"), Some(CustomStatus::new("car", "Away")));
        assert_eq!(
            service.current("u2"),
            Some(CustomStatus::new("house", "Working from home"))
        );
    }
}
