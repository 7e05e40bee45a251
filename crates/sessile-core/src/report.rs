use crate::batch::BatchEntry;

/// `File: <name> | Contact Angle: <value> degrees`, the value with two
/// decimals or `None` when no angle was measured.
pub fn format_log_line(file_name: &str, angle: Option<f64>) -> String {
    match angle {
        Some(a) => format!("File: {file_name} | Contact Angle: {a:.2} degrees"),
        None => format!("File: {file_name} | Contact Angle: None degrees"),
    }
}

/// Log file contents for a batch, one line per entry, newline terminated.
pub fn format_log(entries: &[BatchEntry]) -> String {
    entries.iter().map(|e| e.log_line() + "\n").collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub measured: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of(entries: &[BatchEntry]) -> Self {
        let measured = entries.iter().filter(|e| e.angle().is_some()).count();
        Self {
            total: entries.len(),
            measured,
            failed: entries.len() - measured,
        }
    }
}
