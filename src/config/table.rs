//! Asset table and search configuration

pub struct SearchConfig {
    /// Hits scoring above this are dropped (0.0 = exact, 1.0 = anything).
    pub threshold: f64,
    /// How far (in chars) from the start of a key a match may drift before
    /// its score is fully penalised.
    pub distance: f64,
    /// Longest query we score; the rest is ignored.
    pub max_pattern_len: usize,
}

pub struct TableConfig {
    pub page_lengths: &'static [usize],
    pub default_page_len: usize,
    pub row_height: f32,
    pub header_height: f32,
    pub sparkline_width: f32,
    pub sparkline_height: f32,
    pub supply_bar_width: f32,
    pub search: SearchConfig,
}

pub const TABLE: TableConfig = TableConfig {
    page_lengths: &[20, 50],
    default_page_len: 20,
    row_height: 44.0,
    header_height: 22.0,
    sparkline_width: 80.0,
    sparkline_height: 40.0,
    supply_bar_width: 96.0,
    search: SearchConfig {
        threshold: 0.4,
        distance: 100.0,
        max_pattern_len: 32,
    },
};
