use super::types::Outcome;

/// Receives every outcome in arrival order.
pub trait Reporter {
    fn report(&mut self, outcome: &Outcome);
}

/// Prints outcomes to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    debug: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, outcome: &Outcome) {
        for line in outcome_lines(outcome, self.debug) {
            println!("{}", line);
        }
    }
}

/// Lines printed for one outcome: nothing for a pass unless `debug`, a
/// header plus one indented line per failure otherwise.
#[must_use]
pub fn outcome_lines(outcome: &Outcome, debug: bool) -> Vec<String> {
    let request = &outcome.test.request;
    let target = format!(
        "{} ({} {})",
        outcome.test.name,
        request.method.to_ascii_uppercase(),
        request.path
    );
    if outcome.passed() {
        if debug {
            return vec![format!("Test passed: {}", target)];
        }
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(outcome.failures.len().saturating_add(1));
    lines.push(format!("Test failed: {}", target));
    lines.extend(
        outcome
            .failures
            .iter()
            .map(|failure| format!("\t- {}", failure)),
    );
    lines
}
