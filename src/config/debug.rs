//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every Idle <-> Submitting transition of the operation controller.
    pub log_transitions: bool,

    /// Outgoing backend requests and their timings.
    pub log_requests: bool,

    /// Chart series replaced / cleared / failed.
    pub log_chart_updates: bool,

    /// Chart surface resized to follow its container. Noisy while dragging.
    pub log_resize: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_transitions: true,
    log_requests: true,
    log_chart_updates: true,

    log_resize: false,
    log_performance: false,
};
