use rover_core::sequencing::{LineOutcome, SequencingController};
use rover_core::telemetry::{EventId, EventLog};

const EVENT_CAPACITY: usize = 64;

/// Interactive session around the sequencing controller.
///
/// Responses go to stdout; structured events recorded by the core are
/// drained separately so the caller can route them to stderr.
pub struct Session {
    controller: SequencingController<EventLog<EVENT_CAPACITY>>,
    next_reported_event: EventId,
}

impl Session {
    pub fn new() -> Self {
        Self {
            controller: SequencingController::with_sink(EventLog::new()),
            next_reported_event: 0,
        }
    }

    /// Feeds one line to the controller and renders the responses.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let mut responses = Vec::new();

        match self.controller.process(line) {
            LineOutcome::BoundaryAccepted(boundaries) => {
                responses.push(format!("plateau {boundaries}"));
            }
            LineOutcome::PlacementAccepted { position, heading } => {
                responses.push(format!("rover {position} {heading}"));
            }
            LineOutcome::CommandsApplied(report) => {
                responses.push(report.status.to_string());
                if report.skipped > 0 {
                    responses.push(format!(
                        "skipped {} of {} command characters",
                        report.skipped,
                        report.applied + report.skipped
                    ));
                }
            }
            LineOutcome::Rejected(rejection) => {
                responses.push(format!("error: {rejection}"));
            }
        }

        responses
    }

    /// Formats the events recorded since the previous drain.
    pub fn drain_events(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        for record in self.controller.sink().oldest_first() {
            if record.id >= self.next_reported_event {
                lines.push(format!("[{:>4}] {}", record.id, record.event));
                self.next_reported_event = record.id.wrapping_add(1);
            }
        }
        lines
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
