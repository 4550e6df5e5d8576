//! Utilities for spinning up a prometheus metrics server.

use crate::PrometheusError;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use tracing::info;

/// Prometheus CLI arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct MetricsArgs {
    /// Serve Prometheus metrics on this port. Metrics are disabled when unset; `0` picks a
    /// free port.
    #[arg(long = "metrics.port", global = true, env = "ROLLNODE_METRICS_PORT")]
    pub port: Option<u16>,
    /// Address the metrics server binds to.
    #[arg(long = "metrics.addr", global = true, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub addr: IpAddr,
}

impl Default for MetricsArgs {
    fn default() -> Self {
        Self { port: None, addr: IpAddr::V4(Ipv4Addr::LOCALHOST) }
    }
}

impl MetricsArgs {
    /// Starts the metrics server if a port is configured, returning the bound address.
    pub fn init_metrics(&self) -> Result<Option<SocketAddr>, PrometheusError> {
        self.port.map(|port| init_prometheus_server(self.addr, port)).transpose()
    }
}

/// Start a Prometheus metrics server on the given port and return the address it serves on.
pub fn init_prometheus_server(
    addr: IpAddr,
    metrics_port: u16,
) -> Result<SocketAddr, PrometheusError> {
    // Port 0 is resolved up front so the actual address can be reported.
    let actual_addr = if metrics_port == 0 {
        let listener = TcpListener::bind((addr, 0))?;
        listener.local_addr()?
    } else {
        SocketAddr::from((addr, metrics_port))
    };

    PrometheusBuilder::new().with_http_listener(actual_addr).install()?;

    info!(target: "prometheus", "Serving metrics at: http://{}", actual_addr);
    Ok(actual_addr)
}
