use outcome_rail::{metadata, Error, GenericError, Outcome, OutcomeError, SUCCESS_VOID};

pub mod formatting;
pub mod outcome;


#[test]
fn warning_outcome_keeps_success_and_errors() {
    let warning = Error::with_metadata("stale cache", metadata! { "age_secs" => 120 });
    let outcome = Outcome::success_with_errors("payload", [warning.clone()]);

    assert!(outcome.is_success());
    assert!(outcome.has_errors());
    assert_eq!(outcome.first_error(), Ok(&warning));
    assert_eq!(outcome.object(), Some(&"payload"));
}

#[test]
fn void_singleton_matches_factories() {
    assert_eq!(SUCCESS_VOID, Outcome::success_void());
    assert_eq!(SUCCESS_VOID, Outcome::success_opt(None));
    assert!(!SUCCESS_VOID.has_errors());
}

#[test]
fn misuse_errors_render_readable_messages() {
    assert_eq!(
        OutcomeError::EmptyErrorAccess.to_string(),
        "can't get the first error: the error sequence is empty"
    );
    assert_eq!(
        OutcomeError::NullArgument { name: "message" }.to_string(),
        "required argument `message` is missing"
    );
    assert_eq!(OutcomeError::NullReference { what: "object" }.to_string(), "object is absent");
}

#[test]
fn failed_outcome_exposes_message_through_trait() {
    let failed: Outcome<()> = Outcome::failure("denied");
    let first = failed.first_error().unwrap();
    assert_eq!(GenericError::message(first), "denied");
}
