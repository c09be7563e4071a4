use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use outcome_rail::{Error, Outcome, OutcomeError};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn success_carries_object_and_no_errors() {
    let outcome = Outcome::success(5);

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(!outcome.has_errors());
    assert_eq!(outcome.error_count(), 0);
    assert_eq!(outcome.object(), Some(&5));
    assert_eq!(outcome.non_null_object(), Ok(&5));
}

#[test]
fn success_opt_none_has_no_payload() {
    let outcome: Outcome<i32> = Outcome::success_opt(None);

    assert!(outcome.is_success());
    assert_eq!(outcome.object(), None);
    assert_eq!(
        outcome.non_null_object(),
        Err(OutcomeError::NullReference { what: "object" })
    );
}

#[test]
fn non_null_object_on_failure_is_absent() {
    assert_eq!(
        Outcome::<i32>::failure("x").non_null_object(),
        Err(OutcomeError::NullReference { what: "object" })
    );
}

#[test]
fn success_with_message_keeps_one_warning() {
    let outcome = Outcome::success_with_message(1, "fell back to defaults");

    assert!(outcome.is_success());
    assert_eq!(outcome.error_count(), 1);
    assert_eq!(outcome.first_error().unwrap().message(), "fell back to defaults");
}

#[test]
fn void_success_with_errors() {
    let single = Outcome::success_void_with_message("slow");
    let many = Outcome::success_void_with_errors([Error::new("a"), Error::new("b")]);

    assert!(single.is_success());
    assert_eq!(single.object(), None);
    assert_eq!(single.error_count(), 1);
    assert_eq!(many.error_count(), 2);
}

#[test]
fn failure_from_messages_keeps_order() {
    let failed: Outcome<()> = Outcome::failure_messages("a", ["b"]);

    assert!(failed.is_failure());
    assert_eq!(failed.object(), None);
    let messages: Vec<&str> = failed.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["a", "b"]);
    assert_eq!(failed.first_error().unwrap().message(), "a");
}

#[test]
fn failure_errors_keeps_first_then_rest() {
    let failed: Outcome<u8> =
        Outcome::failure_errors(Error::new("first"), [Error::new("second"), Error::new("third")]);

    assert_eq!(failed.error_count(), 3);
    assert_eq!(failed.errors()[2].message(), "third");
}

#[test]
fn failure_with_empty_error_list_is_accepted() {
    let failed: Outcome<u8> = Outcome::failure_with_errors(Vec::new());

    assert!(failed.is_failure());
    assert!(!failed.has_errors());
    assert_eq!(failed.first_error(), Err(OutcomeError::EmptyErrorAccess));
}

#[test]
fn failure_from_cause_uses_cause_description() {
    let failed: Outcome<()> = Outcome::failure_from_cause(std::io::Error::other("socket closed"));
    let error = failed.first_error().unwrap();

    assert_eq!(error.message(), "socket closed");
    assert!(error.cause().is_some());
    assert!(error.metadata().is_none());
}

#[test]
fn failure_with_cause_keeps_explicit_message() {
    let failed: Outcome<()> =
        Outcome::failure_with_cause("sync failed", std::io::Error::other("socket closed"));
    let error = failed.first_error().unwrap();

    assert_eq!(error.message(), "sync failed");
    assert_eq!(error.cause().unwrap().description(), "socket closed");
}

#[test]
fn first_error_on_success_without_errors_fails() {
    let outcome = Outcome::success(1);
    assert_eq!(outcome.first_error(), Err(OutcomeError::EmptyErrorAccess));
}

#[test]
fn object_or_defaults_only_when_absent() {
    assert_eq!(Outcome::success(3).object_or(9), 3);
    assert_eq!(Outcome::<i32>::failure("x").object_or(9), 9);
}

#[test]
fn object_or_else_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Outcome::success(4).object_or_else(supplier), 4);
    assert_eq!(calls.get(), 0);

    let fallback = Outcome::<i32>::failure("x").object_or_else(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(fallback, 7);
    assert_eq!(calls.get(), 1);
}

#[test]
fn for_each_error_visits_in_order() {
    let failed: Outcome<()> = Outcome::failure_messages("one", ["two", "three"]);
    let mut seen = Vec::new();
    failed.for_each_error(|e| seen.push(e.message().to_string()));

    assert_eq!(seen, ["one", "two", "three"]);
}

#[test]
fn if_success_runs_only_on_success() {
    let mut hits = 0;
    Outcome::success(1).if_success(|_| hits += 1);
    Outcome::<i32>::failure("x").if_success(|_| hits += 1);

    assert_eq!(hits, 1);
}

#[test]
fn chain_short_circuits_after_first_failure() {
    let third_calls = Cell::new(0);

    let outcome = Outcome::success(1)
        .if_success_then(|| Outcome::failure("x"))
        .if_success_then(|| {
            third_calls.set(third_calls.get() + 1);
            Outcome::success(3)
        });

    assert_eq!(outcome, Outcome::failure("x"));
    assert_eq!(third_calls.get(), 0);
}

#[test]
fn chain_of_successes_returns_last() {
    let outcome = Outcome::success(1)
        .if_success_then(|| Outcome::success(2))
        .if_success_then(|| Outcome::success(3));

    assert_eq!(outcome, Outcome::success(3));
}

#[test]
fn if_success_apply_receives_the_outcome() {
    let applied = Outcome::success(2).if_success_apply(|o| Outcome::success(o.object_or(0) * 10));
    assert_eq!(applied.object(), Some(&20));

    let untouched = Outcome::<i32>::failure("x").if_success_apply(|_| unreachable!());
    assert!(untouched.is_failure());
}

#[test]
fn if_success_use_object_requires_a_payload() {
    let doubled = Outcome::success(21).if_success_use_object(|v| Outcome::success(v * 2));
    assert_eq!(doubled, Ok(Outcome::success(42)));

    let failed = Outcome::<i32>::failure("x").if_success_use_object(|_| unreachable!());
    assert_eq!(failed, Ok(Outcome::failure("x")));

    let empty = Outcome::<i32>::success_opt(None).if_success_use_object(Outcome::success);
    assert_eq!(empty, Err(OutcomeError::NullReference { what: "object" }));
}

#[test]
fn if_failure_returns_same_outcome() {
    let mut seen = None;
    let failed: Outcome<()> = Outcome::failure("x");
    let expected = failed.clone();

    let returned = failed.if_failure(|o| seen = Some(o.error_count()));
    assert_eq!(returned, expected);
    assert_eq!(seen, Some(1));

    let mut called = false;
    let ok = Outcome::success(1).if_failure(|_| called = true);
    assert!(!called);
    assert!(ok.is_success());
}

#[test]
fn resolve_picks_exactly_one_branch() {
    let on_success = Cell::new(0);
    let on_failure = Cell::new(0);

    let label = Outcome::success(1).resolve(
        |_| {
            on_success.set(on_success.get() + 1);
            "ok"
        },
        |_| {
            on_failure.set(on_failure.get() + 1);
            "failed"
        },
    );
    assert_eq!(label, "ok");

    let label = Outcome::<i32>::failure("x").resolve(|_| "ok", |_| "failed");
    assert_eq!(label, "failed");
    assert_eq!((on_success.get(), on_failure.get()), (1, 0));
}

#[test]
fn map_object_ignores_the_success_flag() {
    assert_eq!(Outcome::success(2).map_object(|v| v + 1), Ok(3));

    let odd = Outcome::<i32>::failure_builder().object(5).build().unwrap();
    assert_eq!(odd.map_object(|v| v * 2), Ok(10));

    let empty: Outcome<i32> = Outcome::failure("x");
    assert_eq!(
        empty.map_object(|v| v * 2),
        Err(OutcomeError::NullReference { what: "object" })
    );
}

#[test]
fn map_and_map_errors_keep_the_other_parts() {
    let mapped = Outcome::success_with_message(2, "w").map(|v| v.to_string());
    assert_eq!(mapped.object(), Some(&"2".to_string()));
    assert_eq!(mapped.error_count(), 1);

    let failed: Outcome<()> = Outcome::failure_messages("a", ["b"]);
    let lengths = failed.map_errors(|e| e.message().len());
    assert!(lengths.is_failure());
    assert_eq!(lengths.errors(), &[1, 1]);
}

#[test]
fn with_error_appends() {
    let outcome = Outcome::success(1).with_error(Error::new("late warning"));

    assert!(outcome.is_success());
    assert_eq!(outcome.error_count(), 1);
}

#[test]
fn equality_covers_flag_object_and_errors() {
    assert_eq!(Outcome::success(5), Outcome::success(5));
    assert_ne!(Outcome::success(5), Outcome::success(6));
    assert_eq!(Outcome::<i32>::failure("x"), Outcome::<i32>::failure("x"));
    assert_ne!(Outcome::<i32>::failure("x"), Outcome::<i32>::failure("y"));
    assert_ne!(
        Outcome::<i32>::failure_messages("a", ["b"]),
        Outcome::<i32>::failure_messages("b", ["a"])
    );
    assert_ne!(Outcome::<()>::failure_messages("x", ["x"]), Outcome::failure("x"));
    assert_ne!(Outcome::success_opt(None), Outcome::<i32>::failure_with_errors(Vec::new()));
}

#[test]
fn equal_outcomes_hash_equally() {
    let a = Outcome::success_with_message(5, "w");
    let b = Outcome::success_with_message(5, "w");

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn into_parts_returns_every_field() {
    let (success, object, errors) = Outcome::success_with_message(1, "w").into_parts();

    assert!(success);
    assert_eq!(object, Some(1));
    assert_eq!(errors.len(), 1);
}
