//! Shared constants for the diagnet inference engine.

/// diagnet version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of parents kept per effect node.
pub const DEFAULT_MAX_PARENTS: usize = 5;

/// Upper bound on `max_parents`. CPD enumeration is exponential in the
/// parent count, so larger values are rejected at configuration time.
pub const MAX_PARENTS_LIMIT: usize = 20;

/// Baseline leak: probability an effect occurs with no active parent.
pub const DEFAULT_BASE_PROB: f64 = 0.05;

/// Activation probability used when a parent has a zero marginal count.
pub const DEFAULT_LEAK: f64 = 0.6;

/// Default number of ranked causes returned by a query.
pub const DEFAULT_TOP_N: usize = 3;

/// Default minimum number of shared effects for a cause to be a candidate.
pub const DEFAULT_MIN_OVERLAP: usize = 1;

/// Absolute tolerance for probability rows summing to 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Default SQLite database path for the relationship store.
pub const DEFAULT_DB_PATH: &str = "diagnet.db";

/// Marker separating a cause from its effect list in the knowledge corpus.
pub const CORPUS_MARKER: &str = " has symptoms ";

/// Default number of dataset rows drawn when sampling a corpus.
pub const DEFAULT_SAMPLE_ROWS: usize = 200;

/// Dataset column naming the cause of each row.
pub const DATASET_CAUSE_COLUMN: &str = "diseases";

/// Environment variable controlling the tracing filter.
pub const LOG_ENV_VAR: &str = "DIAGNET_LOG";

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "DIAGNET_DB";
