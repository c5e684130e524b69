//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every provider attempt during a summary fetch.
    pub log_fetch: bool,

    /// Log preference loads and writes.
    pub log_prefs: bool,

    /// Log search queries and hit counts.
    pub log_search: bool,

    /// Anything about opening/closing the detail panel
    pub log_selection: bool,

    /// Warn when a frame takes longer than `slow_frame_micros`.
    pub log_performance: bool,
    pub slow_frame_micros: u128,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_prefs: false,
    log_search: false,
    log_selection: true,
    log_performance: false,
    slow_frame_micros: 50_000,
};
