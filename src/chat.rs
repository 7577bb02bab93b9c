//! Verification Chat
//!
//! Transcript and state machine behind the chat assistant.
//!
//! The session is either [`ChatState::Idle`] or
//! [`ChatState::AwaitingVerdict`]. Submitting a claim while idle appends the
//! user turn and a pending "typing" placeholder and hands the claim back to
//! the caller to POST. When the POST resolves, the placeholder is removed and
//! exactly one assistant turn (verdict or error) is appended. Turns are only
//! ever appended or removed, never edited or reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

use crate::models::VerifyResponse;

pub const GREETING: &str = "Hello! I'm CrisisTruth AI, your trusted news verification assistant. \
I can help you verify news articles, social media posts, images, and claims. \
Just share what you'd like me to check!";

/// Body of the pending placeholder
pub const TYPING_TEXT: &str = "Analyzing with CrisisTruth AI engine...";

/// Body of the turn appended when verification fails for any reason
pub const CONNECTION_ERROR: &str = "❌ **Connection Error**: I couldn't reach the verification server. \
Please ensure the backend is running.";

/// Sources listed when the backend does not report its own
pub const DEFAULT_SOURCES: [&str; 2] = ["Official Database", "Web Verification"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// Structured result attached to a finalized assistant turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    /// Backend trust score, shown as-is
    pub confidence_score: f64,
    pub source_list: Vec<String>,
}

/// Badge styling of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Supported,
    Disputed,
}

impl VerdictTone {
    /// Any label containing "true" (case-insensitive) is styled as supported.
    ///
    /// This is a plain substring test: "Not entirely true" is `Supported`.
    pub fn classify(label: &str) -> Self {
        if label.to_lowercase().contains("true") {
            VerdictTone::Supported
        } else {
            VerdictTone::Disputed
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VerdictTone::Supported => "✔",
            VerdictTone::Disputed => "⚠",
        }
    }
}

impl Verdict {
    pub fn from_response(response: &VerifyResponse) -> Self {
        let source_list = if response.sources.is_empty() {
            DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
        } else {
            response.sources.clone()
        };

        Self {
            label: response.verdict.clone(),
            confidence_score: response.trust_score(),
            source_list,
        }
    }

    pub fn tone(&self) -> VerdictTone {
        VerdictTone::classify(&self.label)
    }

    pub fn badge_text(&self) -> String {
        format!("VERDICT: {}", self.label.to_uppercase())
    }
}

/// One entry of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub origin: Origin,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub is_pending: bool,
    pub is_error: bool,
    pub verdict: Option<Verdict>,
}

impl ChatTurn {
    fn new(origin: Origin, body: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            body: body.into(),
            created_at: now,
            is_pending: false,
            is_error: false,
            verdict: None,
        }
    }

    pub fn user(body: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(Origin::User, body, now)
    }

    pub fn greeting(now: DateTime<Utc>) -> Self {
        Self::new(Origin::Assistant, GREETING, now)
    }

    pub fn pending(now: DateTime<Utc>) -> Self {
        Self {
            is_pending: true,
            ..Self::new(Origin::Assistant, TYPING_TEXT, now)
        }
    }

    pub fn answer(response: &VerifyResponse, now: DateTime<Utc>) -> Self {
        Self {
            verdict: Some(Verdict::from_response(response)),
            ..Self::new(Origin::Assistant, response.reasoning.clone(), now)
        }
    }

    pub fn failure(now: DateTime<Utc>) -> Self {
        Self {
            is_error: true,
            ..Self::new(Origin::Assistant, CONNECTION_ERROR, now)
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }

    /// Finalized assistant replies get the copy / feedback actions
    pub fn has_actions(&self) -> bool {
        self.origin == Origin::Assistant && !self.is_pending && !self.is_error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    /// One verification request in flight; input and send are locked
    AwaitingVerdict,
}

/// Transcript plus input box of one chat page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSession {
    transcript: Vec<ChatTurn>,
    state: ChatState,
    input: String,
}

impl ChatSession {
    /// Session opened with the assistant greeting
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            transcript: vec![ChatTurn::greeting(now)],
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ChatState::AwaitingVerdict
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Update the input box. Ignored while a verdict is pending.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.is_awaiting() {
            return false;
        }
        self.input = text.into();
        true
    }

    /// Whether the send action is enabled
    pub fn can_send(&self) -> bool {
        !self.is_awaiting() && !self.input.trim().is_empty()
    }

    /// Send the current input.
    ///
    /// Returns the claim to POST, or `None` if the send was a no-op (blank
    /// input or a verdict already pending). The claim is sent exactly as
    /// typed; trimming only decides whether there is anything to send.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Option<String> {
        if !self.can_send() {
            tracing::debug!(state = ?self.state, "Ignoring send");
            return None;
        }

        let claim = std::mem::take(&mut self.input);
        self.transcript.push(ChatTurn::user(claim.clone(), now));
        self.transcript.push(ChatTurn::pending(now));
        self.state = ChatState::AwaitingVerdict;

        tracing::debug!(turns = self.transcript.len(), "Claim submitted");
        Some(claim)
    }

    /// Apply the outcome of the verification request.
    ///
    /// Returns `false` if no request was pending.
    pub fn resolve<E: Display>(
        &mut self,
        outcome: Result<VerifyResponse, E>,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.is_awaiting() {
            tracing::debug!("Verdict arrived with nothing pending");
            return false;
        }

        self.transcript.retain(|turn| !turn.is_pending);

        let turn = match outcome {
            Ok(response) => {
                tracing::debug!(verdict = %response.verdict, "Verdict received");
                ChatTurn::answer(&response, now)
            }
            Err(e) => {
                tracing::warn!("Verification failed: {}", e);
                ChatTurn::failure(now)
            }
        };
        self.transcript.push(turn);
        self.state = ChatState::Idle;
        true
    }

    pub fn pending_count(&self) -> usize {
        self.transcript.iter().filter(|t| t.is_pending).count()
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.transcript.last()
    }

    /// Submit the input and wait for `backend` to verify it.
    ///
    /// Returns the appended assistant turn, or `None` if the send was a no-op.
    #[cfg(feature = "native")]
    pub async fn send<B>(&mut self, backend: &B) -> Option<&ChatTurn>
    where
        B: crate::client::VerificationBackend + ?Sized,
    {
        let claim = self.submit(Utc::now())?;
        let outcome = backend.verify(&claim).await;
        self.resolve(outcome, Utc::now());
        self.last_turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_767_225_600, 0).unwrap()
    }

    fn verdict_response(verdict: &str) -> VerifyResponse {
        serde_json::from_value(serde_json::json!({
            "reasoning": "Confirmed by PIB. Direct match found.",
            "verdict": verdict,
            "scores": {"trust_score": 0.93}
        }))
        .unwrap()
    }

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new(now());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].body, GREETING);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[test]
    fn test_submit_appends_user_and_pending() {
        let mut session = ChatSession::new(now());
        session.set_input("Vaccines cause X");

        let claim = session.submit(now());
        assert_eq!(claim.as_deref(), Some("Vaccines cause X"));
        assert_eq!(session.transcript().len(), 3);
        assert!(session.transcript()[1].is_user());
        assert!(session.transcript()[2].is_pending);
        assert_eq!(session.input(), "");
        assert_eq!(session.state(), ChatState::AwaitingVerdict);
    }

    #[test]
    fn test_success_replaces_pending_with_verdict() {
        let mut session = ChatSession::new(now());
        session.set_input("Vaccines cause X");
        session.submit(now());

        assert!(session.resolve::<ApiError>(Ok(verdict_response("True")), now()));

        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.pending_count(), 0);
        let last = session.last_turn().unwrap();
        let verdict = last.verdict.as_ref().unwrap();
        assert_eq!(verdict.label, "True");
        assert_eq!(verdict.confidence_score, 0.93);
        assert_eq!(verdict.source_list, vec!["Official Database", "Web Verification"]);
        assert_eq!(last.body, "Confirmed by PIB. Direct match found.");
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[test]
    fn test_send_while_awaiting_is_noop() {
        let mut session = ChatSession::new(now());
        session.set_input("Vaccines cause X");
        session.submit(now());
        let len = session.transcript().len();

        assert!(!session.set_input("second claim"));
        assert_eq!(session.submit(now()), None);
        assert_eq!(session.transcript().len(), len);
        assert_eq!(session.pending_count(), 1);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut session = ChatSession::new(now());
        session.set_input("   \n\t ");

        assert!(!session.can_send());
        assert_eq!(session.submit(now()), None);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[test]
    fn test_failure_appends_error_turn_and_unlocks() {
        let mut session = ChatSession::new(now());
        session.set_input("Vaccines cause X");
        session.submit(now());

        session.resolve::<ApiError>(Err(ApiError::Status { status: 500 }), now());

        assert_eq!(session.transcript().len(), 3);
        let last = session.last_turn().unwrap();
        assert!(last.is_error);
        assert_eq!(last.body, CONNECTION_ERROR);
        assert!(last.verdict.is_none());
        assert_eq!(session.pending_count(), 0);

        session.set_input("Next claim");
        assert!(session.submit(now()).is_some());
    }

    #[test]
    fn test_resolve_without_request_is_ignored() {
        let mut session = ChatSession::new(now());
        assert!(!session.resolve::<ApiError>(Ok(verdict_response("True")), now()));
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_claim_sent_untrimmed() {
        let mut session = ChatSession::new(now());
        session.set_input("  spaced claim ");
        assert_eq!(session.submit(now()).as_deref(), Some("  spaced claim "));
    }

    #[test]
    fn test_backend_sources_preferred() {
        let mut response = verdict_response("False");
        response.sources = vec!["The Hindu".to_string()];

        let verdict = Verdict::from_response(&response);
        assert_eq!(verdict.source_list, vec!["The Hindu"]);
        assert_eq!(verdict.badge_text(), "VERDICT: FALSE");
    }

    #[test]
    fn test_verdict_tone_substring_heuristic() {
        assert_eq!(VerdictTone::classify("True"), VerdictTone::Supported);
        assert_eq!(VerdictTone::classify("TRUE (Match)"), VerdictTone::Supported);
        assert_eq!(VerdictTone::classify("Not entirely true"), VerdictTone::Supported);
        assert_eq!(VerdictTone::classify("False"), VerdictTone::Disputed);
        assert_eq!(VerdictTone::classify("Unverifiable"), VerdictTone::Disputed);
    }

    #[cfg(feature = "native")]
    struct StubBackend(Result<VerifyResponse, ApiError>);

    #[cfg(feature = "native")]
    #[async_trait::async_trait]
    impl crate::client::VerificationBackend for StubBackend {
        async fn verify(&self, _claim: &str) -> Result<VerifyResponse, ApiError> {
            self.0.clone()
        }
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_send_through_backend() {
        let backend = StubBackend(Ok(verdict_response("Likely True")));
        let mut session = ChatSession::new(now());

        assert!(session.send(&backend).await.is_none());

        session.set_input("Dam gates opened upstream");
        let turn = session.send(&backend).await.unwrap();
        assert_eq!(turn.verdict.as_ref().unwrap().tone(), VerdictTone::Supported);
        assert_eq!(session.transcript().len(), 3);
        assert!(!session.is_awaiting());
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_send_failure_through_backend() {
        let backend = StubBackend(Err(ApiError::Network("connection refused".into())));
        let mut session = ChatSession::new(now());

        session.set_input("Dam gates opened upstream");
        let turn = session.send(&backend).await.unwrap();
        assert!(turn.is_error);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_turn_actions() {
        assert!(!ChatTurn::pending(now()).has_actions());
        assert!(!ChatTurn::failure(now()).has_actions());
        assert!(!ChatTurn::user("hi", now()).has_actions());
        assert!(ChatTurn::answer(&verdict_response("True"), now()).has_actions());
    }
}
