use crate::error::TestFailure;
use crate::suite::TestDefinition;

/// The executed result of one test. No failures means the test passed.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub test: TestDefinition,
    pub failures: Vec<TestFailure>,
}

impl Outcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            passed: 0,
            failed: 0,
        }
    }

    pub(crate) fn record(&mut self, outcome: &Outcome) {
        if outcome.passed() {
            self.passed = self.passed.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
        }
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
