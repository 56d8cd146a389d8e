//! Document-level tests for the parsing module.
//!
//! Each test feeds a whole PaceML document through [`parse_workout`] and
//! checks the resulting tree.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Calculation, CalculationKind, Element, Interval, Repetition, Workout, Zone};
use crate::parsing::{ParseError, Parser, TokenKind, parse_workout};

fn interval(amount: &str, zone: &str) -> Interval {
    Interval {
        title: None,
        amount: amount.to_string(),
        zone: zone.to_string(),
        additional_params: BTreeMap::new(),
    }
}

fn repetition(elements: &[Element], index: usize) -> &Repetition {
    match &elements[index] {
        Element::Repetition(repetition) => repetition,
        other => panic!("expected repetition at {index}, got {other:?}"),
    }
}

#[test]
fn hill_repeats_end_to_end() {
    let source = "\
@title{Hill Repeats}
@define_zone[Z2]{6:00}{6:30}{Easy}
@reps[main]{4}
  @interval{5:00}{Z2}
@total_distance
";
    let workout = parse_workout(source).unwrap();

    assert_eq!(workout.metadata.title.as_deref(), Some("Hill Repeats"));
    assert_eq!(
        workout.zones,
        vec![Zone {
            name: "Z2".into(),
            start: "6:00".into(),
            end: "6:30".into(),
            description: Some("Easy".into()),
        }]
    );
    assert_eq!(
        workout.elements,
        vec![Element::Repetition(Repetition {
            title: Some("main".into()),
            count: 4,
            intervals: vec![interval("5:00", "Z2")],
        })]
    );
    assert_eq!(
        workout.calculations,
        vec![Calculation {
            calc_type: CalculationKind::Distance
        }]
    );
    assert!(workout.notes.is_empty());
}

#[test]
fn title_only_document_leaves_everything_else_unset() {
    let workout = parse_workout("@title{Long Run}").unwrap();

    let mut expected = Workout::default();
    expected.metadata.title = Some("Long Run".into());
    assert_eq!(workout, expected);
}

#[test]
fn last_metadata_occurrence_wins() {
    let workout = parse_workout("@date{Monday}\n@athlete{Ana}\n@date{Tuesday}").unwrap();
    assert_eq!(workout.metadata.date.as_deref(), Some("Tuesday"));
    assert_eq!(workout.metadata.athlete.as_deref(), Some("Ana"));
    assert_eq!(workout.metadata.title, None);
}

#[test]
fn zones_preserve_declaration_order() {
    let workout = parse_workout(
        "@define_zone[Z3]{5:00}{5:20}{Steady}\n\
         @define_zone[Z1]{7:00}{7:30}{Recovery}\n\
         @define_zone[Z3]{dup}{dup}{dup}",
    )
    .unwrap();
    let names: Vec<&str> = workout.zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["Z3", "Z1", "Z3"]);
}

#[test]
fn unindented_interval_after_reps_is_top_level() {
    let workout = parse_workout("@reps[main]{3}\n@interval{5:00}{Z2}").unwrap();

    assert_eq!(workout.elements.len(), 2);
    assert!(repetition(&workout.elements, 0).intervals.is_empty());
    assert_eq!(workout.elements[1], Element::Interval(interval("5:00", "Z2")));
}

#[test]
fn grouping_is_not_resumed_after_top_level_interval() {
    let workout = parse_workout(
        "@reps{3}\n  @interval{400m}{Z4}\n@interval{5:00}{Z1}\n  @interval{200m}{Z4}",
    )
    .unwrap();

    assert_eq!(workout.elements.len(), 3);
    assert_eq!(
        repetition(&workout.elements, 0).intervals,
        vec![interval("400m", "Z4")]
    );
    assert_eq!(workout.elements[2], Element::Interval(interval("200m", "Z4")));
}

#[test]
fn elements_keep_document_order() {
    let workout = parse_workout(
        "\
@interval[Warmup]{15:00}{Z1}
@reps[A]{4}
  @interval{1km}{Z4}
  @interval{2:00}{Z1}
@reps[B]{2}
  @interval{200m}{Z5}
@interval[Cooldown]{10:00}{Z1}
",
    )
    .unwrap();

    let shape: Vec<String> = workout
        .elements
        .iter()
        .map(|element| match element {
            Element::Interval(i) => format!("interval {}", i.title.as_deref().unwrap_or("")),
            Element::Repetition(r) => format!(
                "reps {} x{} ({})",
                r.title.as_deref().unwrap_or(""),
                r.count,
                r.intervals.len()
            ),
        })
        .collect();
    assert_eq!(
        shape,
        vec![
            "interval Warmup",
            "reps A x4 (2)",
            "reps B x2 (1)",
            "interval Cooldown",
        ]
    );
    assert_eq!(
        repetition(&workout.elements, 1)
            .intervals
            .iter()
            .map(|i| i.amount.as_str())
            .collect::<Vec<_>>(),
        vec!["1km", "2:00"]
    );
}

#[test]
fn notes_and_comments_do_not_break_grouping() {
    let workout = parse_workout(
        "@reps{5}\n  @interval{400m}{Z4}\n# recover fully\nJog the curve\n  @interval{400m}{Z1}",
    )
    .unwrap();

    assert_eq!(workout.elements.len(), 1);
    assert_eq!(repetition(&workout.elements, 0).intervals.len(), 2);
    assert_eq!(workout.notes, vec!["Jog the curve".to_string()]);
}

#[test]
fn calculation_ends_grouping() {
    let workout =
        parse_workout("@reps{2}\n  @interval{1km}{Z3}\n@total_time\n  @interval{1km}{Z3}").unwrap();
    assert_eq!(workout.elements.len(), 2);
    assert!(matches!(workout.elements[1], Element::Interval(_)));
}

#[test]
fn reps_without_nested_intervals_stay_empty() {
    let workout = parse_workout("@reps[later]{6}\n@total_distance").unwrap();
    let reps = repetition(&workout.elements, 0);
    assert_eq!(reps.count, 6);
    assert!(reps.intervals.is_empty());
}

#[test]
fn notes_are_kept_verbatim_and_comments_dropped() {
    let workout = parse_workout(
        "# planning comment\n  Stay tall on the hills.  \n@total_time and more",
    )
    .unwrap();
    assert_eq!(
        workout.notes,
        vec![
            "  Stay tall on the hills.  ".to_string(),
            " and more".to_string()
        ]
    );
}

#[rstest]
#[case("@define_zone[bad]{only_one_brace", "zone")]
#[case("@interval{5:00}", "interval")]
#[case("@interval{5:00}{Z2}{pace}", "interval")]
#[case("@reps[main]{four}", "repetition")]
#[case("@reps", "repetition")]
fn malformed_directive_fails_whole_parse(#[case] bad_line: &str, #[case] kind: &str) {
    let source =
        format!("@title{{Before}}\n@define_zone[Z1]{{a}}{{b}}{{c}}\n{bad_line}\n@total_time");
    let err = parse_workout(&source).unwrap_err();

    let matches_kind = match kind {
        "zone" => matches!(err, ParseError::Zone { .. }),
        "interval" => matches!(err, ParseError::Interval { .. }),
        _ => matches!(err, ParseError::Repetition { .. }),
    };
    assert!(matches_kind, "unexpected error: {err}");
    assert_eq!(err.line(), 3);
    assert_eq!(err.text(), bad_line);
    assert!(err.to_string().contains(bad_line));
}

#[test]
fn parser_exposes_its_token_stream() {
    let parser = Parser::new("@title{T}\n# c\nnote");
    let kinds: Vec<TokenKind> = parser.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Title, TokenKind::Comment, TokenKind::Note]
    );
    let workout = parser.parse().unwrap();
    assert_eq!(workout.notes, vec!["note".to_string()]);
}

#[test]
fn parses_independent_documents_concurrently() {
    let sources = [
        "@title{A}\n@reps{2}\n  @interval{1km}{Z3}",
        "@title{B}\n@interval{30:00}{Z2}",
    ];
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| std::thread::spawn(move || parse_workout(source)))
        .collect();
    let titles: Vec<Option<String>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().metadata.title)
        .collect();
    assert_eq!(titles, vec![Some("A".into()), Some("B".into())]);
}
