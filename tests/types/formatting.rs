use std::fmt;

use outcome_rail::{metadata, Error, Outcome, OutcomeFormatConfig};

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

#[test]
fn success_renders_debug_payload() {
    assert_eq!(Outcome::success(5).to_string(), "Result{success=true, object=5, errors=[]}");
    assert_eq!(
        Outcome::success("id-7").to_string(),
        "Result{success=true, object=\"id-7\", errors=[]}"
    );
}

#[test]
fn failure_renders_nulls() {
    let failed: Outcome<()> = Outcome::failure("boom");
    assert_eq!(
        failed.to_string(),
        "Result{success=false, object=null, errors=[Error[message=boom, throwable=null, metadata=null]]}"
    );
}

#[test]
fn error_renders_cause_and_metadata() {
    let err = Error::full("denied", Refused, Some(metadata! { "user" => "ada", "attempt" => 2 }));
    let expected = format!(
        "Error[message=denied, throwable={}: refused, metadata={{attempt=2, user=ada}}]",
        std::any::type_name::<Refused>()
    );
    assert_eq!(err.to_string(), expected);
}

#[test]
fn empty_metadata_differs_from_absent_metadata() {
    let empty = Error::with_metadata("m", metadata! {});
    let absent = Error::new("m");

    assert_eq!(empty.to_string(), "Error[message=m, throwable=null, metadata={}]");
    assert_eq!(absent.to_string(), "Error[message=m, throwable=null, metadata=null]");
    assert_ne!(empty, absent);
}

#[test]
fn errors_are_comma_separated() {
    let failed: Outcome<()> = Outcome::failure_messages("a", ["b"]);
    assert_eq!(
        failed.to_string(),
        "Result{success=false, object=null, errors=[\
         Error[message=a, throwable=null, metadata=null], \
         Error[message=b, throwable=null, metadata=null]]}"
    );
}

#[test]
fn default_builder_matches_display() {
    let outcome = Outcome::success_with_message(3, "slow path");
    assert_eq!(outcome.fmt().to_string(), outcome.to_string());
}

#[test]
fn custom_separator_and_hidden_object() {
    let failed: Outcome<u8> = Outcome::failure_messages("a", ["b"]);
    let output = format!("{}", failed.fmt().compact().with_separator(" | ").show_object(false));

    assert_eq!(output, "Result{success=false, errors=[Error[message=a] | Error[message=b]]}");
}

#[test]
fn show_cause_only() {
    let failed: Outcome<()> = Outcome::failure_with_cause("denied", Refused);
    let output = failed.fmt().show_metadata(false).to_string();

    assert!(output.contains(": refused]"));
    assert!(!output.contains("metadata="));
}

#[test]
fn pretty_config_writes_one_error_per_line() {
    let failed: Outcome<()> = Outcome::failure_messages("a", ["b"]);
    let config = OutcomeFormatConfig { show_cause: false, ..OutcomeFormatConfig::pretty() };

    let mut out = String::new();
    config.write_outcome(&mut out, &failed).unwrap();

    assert_eq!(
        out,
        "Result{success=false, object=null, errors=[\n  \
         Error[message=a, metadata=null],\n  \
         Error[message=b, metadata=null]\n]}"
    );
}

#[test]
fn pretty_without_errors_stays_on_one_line() {
    let output = Outcome::success(1).fmt().pretty().to_string();
    assert_eq!(output, "Result{success=true, object=1, errors=[]}");
}

#[test]
fn with_config_replaces_settings() {
    let failed: Outcome<()> = Outcome::failure("x");
    let output = failed.fmt().with_config(OutcomeFormatConfig::compact()).to_string();

    assert_eq!(output, "Result{success=false, object=null, errors=[Error[message=x]]}");
}

#[test]
fn display_object_renders_payload_unquoted() {
    let ok = Outcome::success_with_message(String::from("id-7"), "slow");

    assert_eq!(
        ok.fmt().compact().display_object().to_string(),
        "Result{success=true, object=id-7, errors=[Error[message=slow]]}"
    );
}

#[test]
fn display_object_keeps_null_for_absent_payload() {
    let failed: Outcome<String> = Outcome::failure("x");
    let output = failed.fmt().display_object().to_string();

    assert_eq!(
        output,
        "Result{success=false, object=null, errors=[Error[message=x, throwable=null, metadata=null]]}"
    );
}
