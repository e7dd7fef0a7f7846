use rover_core::heading::Heading;
use rover_core::navigation::Position;
use rover_core::sequencing::{LineOutcome, SequencingController, SequencingState};

fn final_status(outcome: LineOutcome) -> String {
    match outcome {
        LineOutcome::CommandsApplied(report) => report.status.to_string(),
        other => panic!("expected a command report, got {other:?}"),
    }
}

#[test]
fn first_patrol_reaches_one_three_north() {
    let mut controller = SequencingController::new();

    assert!(matches!(
        controller.process("5 5"),
        LineOutcome::BoundaryAccepted(_)
    ));
    assert_eq!(
        controller.process("1 2 N"),
        LineOutcome::PlacementAccepted {
            position: Position::new(1, 2),
            heading: Heading::North,
        }
    );
    assert_eq!(final_status(controller.process("LMLMLMLMM")), "1 3 N");
}

#[test]
fn second_patrol_reaches_five_one_east() {
    let mut controller = SequencingController::new();
    controller.process("5 5");
    controller.process("3 3 E");

    assert_eq!(final_status(controller.process("MMRMMRMRRM")), "5 1 E");
}

#[test]
fn back_to_back_patrols_share_one_plateau() {
    let mut controller = SequencingController::new();
    controller.process("5 5");

    controller.process("1 2 N");
    assert_eq!(final_status(controller.process("LMLMLMLMM")), "1 3 N");

    // The cycle hands control back to the coordinates state, so a second
    // rover placement rides on the same plateau.
    assert_eq!(controller.state(), SequencingState::AwaitingCoordinates);
    controller.process("3 3 E");
    assert_eq!(final_status(controller.process("MMRMMRMRRM")), "5 1 E");
    assert_eq!(controller.state(), SequencingState::AwaitingCoordinates);
}

#[test]
fn ring_listing_walks_head_to_tail() {
    assert_eq!(rover_core::heading::HeadingRing::new().to_string(), "N E S W");
}

#[test]
fn status_renders_position_then_heading_code() {
    let mut controller = SequencingController::new();
    controller.process("5 5");
    controller.process("0 0 W");

    let LineOutcome::CommandsApplied(report) = controller.process("L") else {
        panic!("command line should always complete");
    };
    assert_eq!(report.status.to_string(), "0 0 S");
}
