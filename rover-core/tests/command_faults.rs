use rover_core::heading::Heading;
use rover_core::navigation::Position;
use rover_core::sequencing::{LineOutcome, SequencingController};
use rover_core::telemetry::{EventLog, NavEvent};

fn report_of(outcome: LineOutcome) -> rover_core::sequencing::CommandRunReport {
    match outcome {
        LineOutcome::CommandsApplied(report) => report,
        other => panic!("expected a command report, got {other:?}"),
    }
}

#[test]
fn unknown_characters_are_skipped_in_place() {
    let mut controller = SequencingController::new();
    controller.process("5 5");
    controller.process("1 2 N");

    let report = report_of(controller.process("MMMTRUM"));
    assert_eq!(report.applied, 5);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.status.to_string(), "2 5 E");
}

#[test]
fn stray_tokens_act_like_unknown_commands() {
    let mut controller = SequencingController::new();
    controller.process("5 5");

    // Each case places the rover afresh at 1 2 E, then feeds a line that
    // only partially consists of valid command characters.
    let cases = [
        ("MLLR", "2 2 N"),
        ("5 5 N", "1 2 E"),
        ("5 5", "1 2 E"),
        ("5 5 R", "1 2 S"),
        ("L 5 N", "1 2 N"),
    ];

    for (commands, expected) in cases {
        assert!(matches!(
            controller.process("1 2 E"),
            LineOutcome::PlacementAccepted { .. }
        ));
        let report = report_of(controller.process(commands));
        assert_eq!(
            report.status.to_string(),
            expected,
            "command line {commands:?} produced the wrong status"
        );
    }
}

#[test]
fn skipped_characters_are_reported_to_the_sink() {
    let mut controller = SequencingController::with_sink(EventLog::<32>::new());
    controller.process("5 5");
    controller.process("1 2 N");
    controller.process("MTL");

    let events: Vec<NavEvent> = controller
        .sink()
        .oldest_first()
        .map(|record| record.event)
        .collect();

    assert_eq!(
        events,
        vec![
            NavEvent::PlateauConfigured(
                rover_core::navigation::Boundaries::new(5, 5).expect("valid corner")
            ),
            NavEvent::RoverPlaced {
                position: Position::new(1, 2),
                heading: Heading::North,
            },
            NavEvent::Advanced {
                from: Position::new(1, 2),
                to: Position::new(1, 3),
            },
            NavEvent::CommandSkipped { command: 'T' },
            NavEvent::TurnedLeft {
                from: Heading::North,
                to: Heading::West,
            },
        ]
    );
}

#[test]
fn blocked_moves_are_reported_to_the_sink() {
    let mut controller = SequencingController::with_sink(EventLog::<32>::new());
    controller.process("0 0");
    controller.process("0 0 N");
    controller.process("M");

    let latest = controller.sink().latest().expect("an event was recorded");
    assert_eq!(
        latest.event,
        NavEvent::MoveBlocked {
            at: Position::ORIGIN,
            heading: Heading::North,
            attempted: Position::new(0, 1),
        }
    );
}

#[test]
fn rejected_lines_are_reported_to_the_sink() {
    let mut controller = SequencingController::with_sink(EventLog::<32>::new());
    controller.process("not a boundary");

    let latest = controller.sink().latest().expect("an event was recorded");
    assert!(matches!(latest.event, NavEvent::LineRejected { .. }));
}

#[test]
fn event_ids_increase_across_lines() {
    let mut controller = SequencingController::with_sink(EventLog::<32>::new());
    controller.process("5 5");
    controller.process("1 2 N");
    controller.process("LM");

    let ids: Vec<u32> = controller
        .sink()
        .oldest_first()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}
