//! Market summary endpoint configuration

/// Where the live summary comes from and how long we wait for it.
pub struct EndpointConfig {
    /// Base URL used by native builds when `--api-base` is not given.
    pub default_base_url: &'static str,
    /// Path of the summary resource, appended to the base URL.
    pub summary_path: &'static str,
    /// Whole-request timeout (native only, the browser owns this on WASM).
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Label shown for the bundled snapshot provider.
    pub bundled_label: &'static str,
    /// Automatic refresh period and the range `--refresh-secs` accepts.
    pub refresh_secs: u64,
    pub min_refresh_secs: u64,
    pub max_refresh_secs: u64,
}

pub const ENDPOINT: EndpointConfig = EndpointConfig {
    default_base_url: "http://127.0.0.1:8000",
    summary_path: "/summary",
    request_timeout_secs: 10,
    connect_timeout_secs: 5,
    bundled_label: "bundled snapshot",
    refresh_secs: 60,
    min_refresh_secs: 10,
    max_refresh_secs: 3600,
};

// Allows include_str! to read the snapshot path as a literal.
#[macro_export]
macro_rules! bundled_summary_file {
    () => {
        "mock/summary.json"
    };
}
