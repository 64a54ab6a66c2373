mod helpers;

use anyhow::Result;
use helpers::{note, unreachable_config, FakeBackend, ListMode};
use rstest::rstest;
use wavenote::application::{Guestbook, LoadOutcome, SubmitOutcome};
use wavenote::constants::SUBMIT_FAILURE_ALERT;
use wavenote::domain::{Emoji, FormDraft, Note};
use wavenote::infrastructure::HttpNoteBackend;
use wavenote::util::testing::RecordingNotifier;

fn mount(fake: &FakeBackend) -> Result<Guestbook<HttpNoteBackend, RecordingNotifier>> {
    let backend = HttpNoteBackend::new(fake.config())?;
    Ok(Guestbook::mount(backend, RecordingNotifier::default()))
}

fn displayed_ids(guestbook: &Guestbook<HttpNoteBackend, RecordingNotifier>) -> Vec<i64> {
    guestbook.notes().iter().map(|n| n.id).collect()
}

#[rstest]
#[case(vec![1, 3])]
#[case(vec![3, 1])]
fn given_notes_in_any_order_when_mounting_then_shows_newest_first(
    #[case] stored_ids: Vec<i64>,
) -> Result<()> {
    // Arrange
    let stored: Vec<Note> = stored_ids
        .iter()
        .map(|&id| note(id, "user", "hi", Emoji::Wave))
        .collect();
    let fake = FakeBackend::with_notes(stored)?;

    // Act
    let guestbook = mount(&fake)?;

    // Assert
    assert_eq!(displayed_ids(&guestbook), vec![3, 1]);
    Ok(())
}

#[test]
fn given_draft_when_submitting_then_new_note_appears_first_and_draft_keeps_author() -> Result<()> {
    // Arrange
    let fake = FakeBackend::with_notes(vec![
        note(1, "Bob", "first", Emoji::Fire),
        note(2, "Carol", "second", Emoji::Clover),
    ])?;
    let mut guestbook = mount(&fake)?;
    let mut draft = FormDraft::with_author("Alice", Emoji::Rocket);
    draft.content = "Hello".to_string();

    // Act
    let outcome = guestbook.submit_note(&mut draft);

    // Assert
    assert_eq!(outcome, SubmitOutcome::Posted);
    assert_eq!(displayed_ids(&guestbook), vec![3, 2, 1]);
    assert_eq!(
        guestbook.notes().notes()[0],
        note(3, "Alice", "Hello", Emoji::Rocket)
    );
    assert_eq!(draft, FormDraft::with_author("Alice", Emoji::Rocket));
    assert_eq!(fake.list_requests(), 2);
    assert!(guestbook.notifier().alerts().is_empty());
    Ok(())
}

#[rstest]
#[case("", "Hello")]
#[case("Alice", "")]
#[case("", "")]
fn given_missing_field_when_submitting_then_no_request_is_made(
    #[case] nickname: &str,
    #[case] content: &str,
) -> Result<()> {
    let fake = FakeBackend::start()?;
    let mut guestbook = mount(&fake)?;
    let mut draft = FormDraft::with_author(nickname, Emoji::Heart);
    draft.content = content.to_string();

    let outcome = guestbook.submit_note(&mut draft);

    assert_eq!(outcome, SubmitOutcome::Skipped);
    assert_eq!(fake.create_requests(), 0);
    assert_eq!(fake.list_requests(), 1);
    Ok(())
}

#[test]
fn given_rejecting_backend_when_submitting_then_alerts_and_keeps_typed_text() -> Result<()> {
    // Arrange
    let fake = FakeBackend::with_notes(vec![note(1, "Bob", "first", Emoji::Fire)])?;
    fake.reject_posts(true);
    let mut guestbook = mount(&fake)?;
    let mut draft = FormDraft::with_author("Alice", Emoji::Rocket);
    draft.content = "Hello".to_string();
    let before = draft.clone();

    // Act
    let outcome = guestbook.submit_note(&mut draft);

    // Assert
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(guestbook.notifier().alerts(), [SUBMIT_FAILURE_ALERT]);
    assert_eq!(draft, before);
    assert_eq!(displayed_ids(&guestbook), vec![1]);
    assert_eq!(fake.list_requests(), 1);
    Ok(())
}

#[test]
fn given_backend_recovers_when_resubmitting_then_same_text_is_posted() -> Result<()> {
    let fake = FakeBackend::start()?;
    fake.reject_posts(true);
    let mut guestbook = mount(&fake)?;
    let mut draft = FormDraft::with_author("Alice", Emoji::Wave);
    draft.content = "Second try".to_string();

    assert_eq!(guestbook.submit_note(&mut draft), SubmitOutcome::Failed);
    fake.reject_posts(false);
    assert_eq!(guestbook.submit_note(&mut draft), SubmitOutcome::Posted);

    assert_eq!(fake.stored_notes()[0].content, "Second try");
    assert!(draft.content.is_empty());
    Ok(())
}

#[test]
fn given_backend_goes_down_when_reloading_then_previous_list_stays() -> Result<()> {
    // Arrange
    let fake = FakeBackend::with_notes(vec![
        note(1, "Bob", "first", Emoji::Fire),
        note(2, "Carol", "second", Emoji::Clover),
    ])?;
    let mut guestbook = mount(&fake)?;
    fake.set_list_mode(ListMode::Unavailable);

    // Act
    let outcome = guestbook.load_notes();

    // Assert
    assert_eq!(outcome, LoadOutcome::Kept);
    assert_eq!(displayed_ids(&guestbook), vec![2, 1]);
    assert!(guestbook.notifier().alerts().is_empty());
    Ok(())
}

#[test]
fn given_unreachable_backend_when_mounting_then_list_is_empty_and_no_alert() -> Result<()> {
    let backend = HttpNoteBackend::new(unreachable_config()?)?;

    let guestbook = Guestbook::mount(backend, RecordingNotifier::default());

    assert!(guestbook.notes().is_empty());
    assert!(guestbook.notifier().alerts().is_empty());
    Ok(())
}
