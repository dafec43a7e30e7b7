// Nagios plugin protocol: status codes and the single-line report format.

/// Nagios service states, in exit-code order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    #[allow(dead_code)] // declared by the protocol, unreached by current checks
    Unknown = 3,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

/// The final result of a check run: one status, one message, optional
/// perf data rendered after a `|` separator.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
    pub perf: Vec<(&'static str, String)>,
}

impl Outcome {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            perf: Vec::new(),
        }
    }

    pub fn with_perf(mut self, perf: Vec<(&'static str, String)>) -> Self {
        self.perf = perf;
        self
    }

    /// Render for stdout: `<message>` or `<message>|k1=v1;k2=v2`.
    pub fn render(&self) -> String {
        if self.perf.is_empty() {
            return self.message.clone();
        }
        let perf = self
            .perf
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(";");
        format!("{}|{}", self.message, perf)
    }
}
