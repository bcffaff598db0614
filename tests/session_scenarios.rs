//! End-to-end guess session scenarios

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_quest::core::LetterResult::{Absent, Correct, Present};
use word_quest::core::{Feedback, ValidationError, Word};
use word_quest::error::{GameError, RemoteError};
use word_quest::session::{
    ApiResponse, JsonTransport, LocalApi, MAX_GUESSES, Session, SessionOptions, SessionState,
    TargetOrigin,
};
use word_quest::wordlists::{Dictionary, FixedWord, ListSource};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn session(target: &str) -> Session {
    Session::with_target(word(target), SessionOptions::default())
}

#[test]
fn win_on_third_guess() {
    let mut session = session("graph");
    assert_eq!(session.submit("train").unwrap().state, SessionState::InProgress);
    assert_eq!(session.submit("stack").unwrap().state, SessionState::InProgress);
    let turn = session.submit("graph").unwrap();
    assert_eq!(turn.state, SessionState::Won);
    assert!(turn.feedback.is_perfect());
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.guesses_remaining(), MAX_GUESSES - 3);
}

#[test]
fn loss_after_six_misses_then_terminated() {
    let mut session = session("debug");
    let guesses = ["crane", "slate", "pious", "model", "cache", "float"];
    for (i, guess) in guesses.iter().enumerate() {
        let turn = session.submit(guess).unwrap();
        let expected = if i + 1 == MAX_GUESSES {
            SessionState::Lost
        } else {
            SessionState::InProgress
        };
        assert_eq!(turn.state, expected);
    }
    assert_eq!(session.history().len(), MAX_GUESSES);
    let keyboard = *session.keyboard();

    assert!(matches!(session.submit("debug"), Err(GameError::SessionTerminated)));
    assert!(matches!(session.submit("abc"), Err(GameError::SessionTerminated)));
    assert_eq!(session.history().len(), MAX_GUESSES);
    assert_eq!(session.keyboard(), &keyboard);
    assert_eq!(session.state(), &SessionState::Lost);
}

#[test]
fn short_guess_is_rejected_without_a_turn() {
    let mut session = session("graph");
    let err = session.submit("abc").unwrap_err();
    assert!(matches!(
        err,
        GameError::Validation(ValidationError::WrongLength(3))
    ));
    assert!(session.history().is_empty());
    assert_eq!(session.state(), &SessionState::InProgress);
}

#[test]
fn duplicate_letters_are_claimed_once() {
    let mut session = session("array");
    let turn = session.submit("radar").unwrap();
    assert_eq!(
        turn.feedback,
        Feedback::new([Present, Present, Absent, Correct, Present])
    );
    assert_eq!(turn.keyboard.get('a'), Some(Correct));
    assert_eq!(turn.keyboard.get('d'), Some(Absent));
}

#[test]
fn typed_row_commits_like_submit() {
    let mut session = session("graph");
    for letter in "TRAINS".chars() {
        session.type_letter(letter);
    }
    assert_eq!(session.input(), "train");
    let turn = session.commit().unwrap();
    assert_eq!(turn.guess.text(), "train");
    assert_eq!(session.input(), "");
    assert_eq!(session.cursor(), (1, 0));
}

#[test]
fn remote_session_wins_through_local_api() {
    let mut session = Session::remote(SessionOptions::default());
    let mut api = LocalApi::new(word("graph"));
    assert!(session.target().is_none());
    assert_eq!(session.origin(), &TargetOrigin::Remote);

    let turn = session.submit_remote("train", &mut api).unwrap();
    assert_eq!(turn.feedback.get(1), Correct);
    assert_eq!(turn.state, SessionState::InProgress);

    let turn = session.submit_remote("graph", &mut api).unwrap();
    assert_eq!(turn.state, SessionState::Won);
}

#[test]
fn remote_json_body_is_translated() {
    let body = r#"{"guess":"crane","was_correct":false,"character_info":[
        {"char":"c","scoring":{"in_word":false,"correct_idx":false}},
        {"char":"r","scoring":{"in_word":true,"correct_idx":true}},
        {"char":"a","scoring":{"in_word":true,"correct_idx":false}},
        {"char":"n","scoring":{"in_word":false,"correct_idx":false}},
        {"char":"e","scoring":{"in_word":false,"correct_idx":false}}]}"#;
    let mut transport = JsonTransport::new(|_guess: &str| Ok(body.to_string()));
    let mut session = Session::remote(SessionOptions::default());

    let turn = session.submit_remote("crane", &mut transport).unwrap();
    assert_eq!(
        turn.feedback,
        Feedback::new([Absent, Correct, Present, Absent, Absent])
    );
}

#[test]
fn remote_failure_restores_progress() {
    let mut failing = JsonTransport::new(|_guess: &str| Err("connection refused".to_string()));
    let mut session = Session::remote(SessionOptions::default());

    let err = session.submit_remote("crane", &mut failing).unwrap_err();
    assert!(matches!(
        err,
        GameError::RemoteScoringFailure(RemoteError::Transport(_))
    ));
    assert!(err.is_retryable());
    assert_eq!(session.state(), &SessionState::InProgress);
    assert!(session.history().is_empty());
}

#[test]
fn awaiting_remote_rejects_other_submissions() {
    let mut session = Session::remote(SessionOptions::default());
    let pending = session.begin_remote("crane").unwrap();
    assert_eq!(session.state(), &SessionState::AwaitingRemote(word("crane")));
    assert!(matches!(session.begin_remote("slate"), Err(GameError::ScoringInFlight)));

    let response = ApiResponse::from_feedback(pending.guess(), &Feedback::PERFECT);
    let turn = session.resolve_remote(pending, Ok(response)).unwrap();
    assert_eq!(turn.state, SessionState::Won);
}

#[test]
fn stale_handle_is_rejected() {
    let mut session = Session::remote(SessionOptions::default());
    let first = session.begin_remote("crane").unwrap();
    let stale = first.clone();
    session
        .resolve_remote(first, Err(RemoteError::Transport("timeout".to_string())))
        .unwrap_err();

    let _second = session.begin_remote("crane").unwrap();
    let response = ApiResponse::from_feedback(stale.guess(), &Feedback::PERFECT);
    assert!(matches!(
        session.resolve_remote(stale, Ok(response)),
        Err(GameError::UnexpectedResolution)
    ));
}

#[test]
fn empty_word_source_falls_back() {
    let mut rng = StdRng::seed_from_u64(9);
    let session = Session::start(&mut ListSource::default(), SessionOptions::default(), &mut rng);
    assert!(matches!(session.origin(), TargetOrigin::Fallback { .. }));
    assert!(session.target().is_some());
}

#[test]
fn restart_draws_a_fresh_game() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut source = FixedWord(word("graph"));
    let mut session = Session::start(&mut source, SessionOptions::default(), &mut rng);
    session.submit("graph").unwrap();
    assert_eq!(session.state(), &SessionState::Won);

    session.restart(&mut source, &mut rng);
    assert_eq!(session.state(), &SessionState::InProgress);
    assert!(session.history().is_empty());
    assert!(session.keyboard().is_empty());
}

#[test]
fn strict_mode_rejects_unknown_words() {
    let options = SessionOptions::strict(Dictionary::embedded());
    let mut session = Session::with_target(word("graph"), options);
    assert!(matches!(
        session.submit("zzzzz"),
        Err(GameError::Validation(ValidationError::NotInWordList(_)))
    ));
    assert!(session.submit("train").is_ok());
}
