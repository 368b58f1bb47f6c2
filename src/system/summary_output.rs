use crate::runner::RunSummary;

pub(crate) fn summary_lines(summary: &RunSummary, debug: bool) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Test results:".to_owned(),
        format!("total tests: {}", summary.total),
        format!("tests passed: {}", summary.passed),
        format!("tests failed: {}", summary.failed),
        String::new(),
    ];
    if summary.all_passed() {
        lines.push("All tests passed successfully!".to_owned());
    } else {
        lines.push("Some tests failed.".to_owned());
        if !debug {
            lines.push("hint: use '-d' for detailed request and response information.".to_owned());
        }
    }
    lines
}

pub(crate) fn print_summary(summary: &RunSummary, debug: bool) {
    for line in summary_lines(summary, debug) {
        println!("{}", line);
    }
}
