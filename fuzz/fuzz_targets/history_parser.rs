#![no_main]

use libfuzzer_sys::fuzz_target;
use perfwatch::history::{extract_history, parse_benchmark_data};
use perfwatch::regression::{assess_history, RegressionConfig};
use perfwatch::report::RegressionReport;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing may fail; assessing and rendering whatever parses must not panic
        if let Ok(doc) = parse_benchmark_data(input) {
            let config = RegressionConfig::default();
            for name in doc.suite_names() {
                let Ok(Some(entries)) = doc.suite(name) else {
                    continue;
                };
                let history = extract_history(&entries);
                if let Ok(verdicts) = assess_history(&history, &config) {
                    let report = RegressionReport::new(verdicts, config.clone());
                    let _ = report.to_markdown();
                    let _ = report.console_lines();
                }
            }
        }
    }
});
