pub mod report {
    //! Report Loading Constants

    /// Allowed drift of the class percentages from 100.
    pub const DISTRIBUTION_SUM_TOLERANCE: f64 = 0.1;

    /// Allowed gap between a class percentage and the share its count implies.
    /// Percentages are published with one decimal place.
    pub const DISTRIBUTION_COUNT_TOLERANCE: f64 = 0.05;
}

pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Layout, chart scaling and event-loop constants for the terminal UI,
    //! organized by functional area.

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// How long the UI loop waits for a key event before redrawing (milliseconds)
    pub const KEY_POLL_INTERVAL_MS: u64 = 100;

    // =============================================================================
    // CHART SCALING
    // =============================================================================

    /// Bar charts take integer values; fractional scores are scaled by this factor.
    pub const BAR_VALUE_SCALE: f64 = 10_000.0;

    /// Readout precision for accuracy-class metrics
    pub const METRIC_DECIMALS: usize = 4;

    /// Readout precision for the threshold sweep
    pub const THRESHOLD_DECIMALS: usize = 2;

    /// Readout precision for loss values
    pub const LOSS_DECIMALS: usize = 2;

    /// Bar text precision for feature importance
    pub const IMPORTANCE_DECIMALS: usize = 2;

    /// Widest bar in the grouped model chart (cells)
    pub const MAX_METRIC_BAR_WIDTH: u16 = 6;

    /// Rows a line chart keeps before its readout and caption get any
    pub const LINE_CHART_MIN_ROWS: u16 = 5;

    /// Angular step used when filling pie segments (degrees)
    pub const PIE_SWEEP_STEP_DEG: f64 = 0.75;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    /// Below this terminal height the header, tab bar and footer shrink to one row each
    pub const COMPACT_CHROME_HEIGHT: u16 = 30;

    // =============================================================================
    // HEADLESS SNAPSHOT
    // =============================================================================

    /// Default snapshot width in terminal columns
    pub const SNAPSHOT_WIDTH: u16 = 140;

    /// Default snapshot height in terminal rows
    pub const SNAPSHOT_HEIGHT: u16 = 60;

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under the user's home holding config and logs
    pub const APP_DIR_NAME: &str = ".churn-dashboard";

    /// Config file name inside [`APP_DIR_NAME`]
    pub const CONFIG_FILE_NAME: &str = "config.json";
}
