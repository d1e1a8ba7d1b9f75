/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use calc_benefits::input::validation::{parse_positive_float, parse_positive_int, parse_years};
use calc_benefits::input::{
    CalculationInput, Field, FieldKind, PartialInput, ResolveError, Resolver, ResolverConfig,
    ValidationError,
};
use rstest::rstest;
use std::io::{self, BufRead, Cursor, Read};

/// Test helper running the resolver over scripted answers
fn resolve_with(
    partial: &PartialInput,
    answers: &str,
) -> (Result<CalculationInput, ResolveError>, String) {
    let mut resolver = Resolver::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
    let result = resolver.resolve(partial);
    let (_, written) = resolver.into_inner();
    (result, String::from_utf8(written).unwrap())
}

#[test]
fn test_prompts_for_every_missing_field_in_order() {
    let (result, output) = resolve_with(&PartialInput::new(), "45000\n25\n4\n6.5\n");
    let input = result.unwrap();

    assert_eq!(input.salary(), 45000);
    assert_eq!(input.years_remaining(), 25);
    assert_eq!(input.match_percent(), 4.0);
    assert_eq!(input.annual_rate_percent(), 6.5);

    let positions: Vec<usize> = Field::ALL
        .iter()
        .map(|field| output.find(field.prompt()).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(!output.contains("Bad Input."));
}

#[test]
fn test_presupplied_values_are_kept() {
    let partial = PartialInput::new().with_salary(80000).with_rate(7.25);
    let (result, output) = resolve_with(&partial, "30\n3.5\n");
    let input = result.unwrap();

    assert_eq!(input.salary(), 80000);
    assert_eq!(input.years_remaining(), 30);
    assert_eq!(input.match_percent(), 3.5);
    assert_eq!(input.annual_rate_percent(), 7.25);
    assert!(!output.contains(Field::Salary.prompt()));
    assert!(!output.contains(Field::Rate.prompt()));

    // The caller's value is untouched
    assert_eq!(partial.years_remaining, None);
}

#[rstest]
#[case(Field::Salary, "")]
#[case(Field::Salary, "abc")]
#[case(Field::Salary, "0")]
#[case(Field::Salary, "-45000")]
#[case(Field::Years, "2.5")]
#[case(Field::Years, "0")]
#[case(Field::Match, "none")]
#[case(Field::Match, "-4")]
#[case(Field::Rate, "0")]
#[case(Field::Rate, "0.0")]
#[case(Field::Rate, "NaN")]
#[case(Field::Rate, "inf")]
fn test_invalid_answer_is_reprompted(#[case] field: Field, #[case] bad: &str) {
    let good = match field {
        Field::Salary => "45000",
        Field::Years => "25",
        Field::Match => "4",
        Field::Rate => "6",
    };
    let mut partial = PartialInput::new()
        .with_salary(45000)
        .with_years(25)
        .with_match(4.0)
        .with_rate(6.0);
    match field {
        Field::Salary => partial.salary = None,
        Field::Years => partial.years_remaining = None,
        Field::Match => partial.match_percent = None,
        Field::Rate => partial.annual_rate_percent = None,
    }

    let (result, output) = resolve_with(&partial, &format!("{bad}\n{good}\n"));
    let input = result.unwrap();
    assert_eq!(output.matches(field.prompt()).count(), 2);
    assert_eq!(output.matches("Bad Input.").count(), 1);
    assert_eq!(PartialInput::from(input), partial_with_defaults());
}

#[test]
fn test_undecodable_answer_is_reprompted() {
    let partial = PartialInput::new()
        .with_salary(45000)
        .with_years(25)
        .with_match(4.0);
    let mut resolver = Resolver::new(Cursor::new(b"\xff\xfe\n6.5\n".to_vec()), Vec::new());
    let input = resolver.resolve(&partial).unwrap();
    assert_eq!(input.annual_rate_percent(), 6.5);

    let (_, written) = resolver.into_inner();
    let output = String::from_utf8(written).unwrap();
    assert_eq!(output.matches(Field::Rate.prompt()).count(), 2);
    assert_eq!(output.matches("Bad Input.").count(), 1);
}

#[test]
fn test_invalid_presupplied_value_fails_resolution() {
    let partial = PartialInput::new()
        .with_salary(45000)
        .with_years(25)
        .with_match(4.0)
        .with_rate(-6.5);
    let (result, output) = resolve_with(&partial, "");
    match result {
        Err(ResolveError::Invalid(ValidationError::NotPositive(value))) => {
            assert_eq!(value, "-6.5")
        }
        other => panic!("expected an invalid rate, got {other:?}"),
    }
    assert!(output.is_empty());
}

fn partial_with_defaults() -> PartialInput {
    PartialInput::new()
        .with_salary(45000)
        .with_years(25)
        .with_match(4.0)
        .with_rate(6.0)
}

#[test]
fn test_closed_input_fails_resolution() {
    let (result, _) = resolve_with(&PartialInput::new().with_salary(45000), "25\n");
    match result {
        Err(ResolveError::InputClosed(field)) => assert_eq!(field, Field::Match),
        other => panic!("expected closed input, got {other:?}"),
    }
}

#[test]
fn test_closed_input_after_bad_answers() {
    let (result, output) = resolve_with(&PartialInput::new(), "nope\n-1\n");
    assert!(matches!(result, Err(ResolveError::InputClosed(Field::Salary))));
    assert_eq!(output.matches("Bad Input.").count(), 2);
}

#[test]
fn test_closed_input_message() {
    let err = ResolveError::InputClosed(Field::Years);
    assert_eq!(err.to_string(), "input closed while prompting for years");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn test_reader_failure_propagates() {
    let mut resolver = Resolver::new(FailingReader, Vec::new());
    let err = resolver.resolve(&PartialInput::new()).unwrap_err();
    assert!(matches!(err, ResolveError::Io(_)));
    assert!(err.to_string().contains("terminal went away"));
}

#[test]
fn test_custom_invalid_message() {
    let config = ResolverConfig {
        invalid_message: "Try again.".to_string(),
    };
    let partial = PartialInput::new().with_salary(1).with_years(1).with_match(1.0);
    let mut resolver = Resolver::with_config(Cursor::new(b"x\n1\n".to_vec()), Vec::new(), config);
    resolver.resolve(&partial).unwrap();
    let (_, written) = resolver.into_inner();
    let output = String::from_utf8(written).unwrap();
    assert!(output.contains("Try again."));
    assert!(!output.contains("Bad Input."));
}

#[test]
fn test_field_kinds_and_predicates() {
    assert_eq!(Field::Salary.kind(), FieldKind::PositiveInteger);
    assert_eq!(Field::Years.kind(), FieldKind::PositiveInteger);
    assert_eq!(Field::Match.kind(), FieldKind::PositiveFloat);
    assert_eq!(Field::Rate.kind(), FieldKind::PositiveFloat);
}

#[test]
fn test_predicates_trim_whitespace() {
    assert_eq!(parse_positive_int(" 45000 \r\n"), Ok(45000));
    assert_eq!(parse_years("\t25\n"), Ok(25));
    assert_eq!(parse_positive_float(" 6.5\n"), Ok(6.5));
}

#[test]
fn test_rate_zero_never_reaches_accumulator() {
    assert_eq!(
        parse_positive_float("0"),
        Err(ValidationError::NotPositive("0".to_string()))
    );
    assert!(CalculationInput::new(45000, 25, 4.0, 0.0).is_err());
    assert!(PartialInput::new()
        .with_salary(45000)
        .with_years(25)
        .with_match(4.0)
        .with_rate(0.0)
        .into_complete()
        .is_err());
}
