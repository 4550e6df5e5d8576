//! Utilities shared by the rollnode binaries: log setup and the Prometheus exporter.

mod error;
pub use error::{CliError, CliResult, PrometheusError};

mod log;
pub use log::{LogArgs, init_tracing_subscriber, verbosity_level};

mod prometheus;
pub use prometheus::{MetricsArgs, init_prometheus_server};
