//! Prometheus metrics for the peer.
//!
//! All metrics follow the naming convention: `pc_<subsystem>_<metric>_<unit>`
//!
//! Metrics live in a per-handle `Registry` so several peers (or tests) in one
//! process do not collide.

use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

/// Outcome label for a successful private write set assembly.
pub const OUTCOME_SUCCESS: &str = "success";

/// Outcome label for a failed private write set assembly.
pub const OUTCOME_FAILURE: &str = "failure";

/// Peer metrics and the registry they are registered in.
#[derive(Clone)]
pub struct MetricsHandle {
    registry: Registry,

    /// Private write set assemblies by outcome.
    pub pvt_assemblies: IntCounterVec,

    /// Time spent assembling a private write set.
    pub pvt_assembly_duration: Histogram,

    /// Registered system chaincodes.
    pub sys_ccs_registered: IntGauge,
}

impl MetricsHandle {
    /// Create and register all peer metrics.
    pub fn new() -> Result<Self, TelemetryError> {
        let registry = Registry::new();

        let pvt_assemblies = IntCounterVec::new(
            Opts::new(
                "pc_endorser_pvt_assemblies_total",
                "Private write set assemblies by outcome",
            ),
            &["outcome"],
        )
        .map_err(metrics_err)?;

        let buckets = exponential_buckets(0.0001, 2.0, 14).map_err(metrics_err)?;
        let pvt_assembly_duration = Histogram::with_opts(
            HistogramOpts::new(
                "pc_endorser_pvt_assembly_duration_seconds",
                "Time spent assembling private write sets",
            )
            .buckets(buckets),
        )
        .map_err(metrics_err)?;

        let sys_ccs_registered = IntGauge::new(
            "pc_scc_registered",
            "Number of registered system chaincodes",
        )
        .map_err(metrics_err)?;

        registry
            .register(Box::new(pvt_assemblies.clone()))
            .map_err(metrics_err)?;
        registry
            .register(Box::new(pvt_assembly_duration.clone()))
            .map_err(metrics_err)?;
        registry
            .register(Box::new(sys_ccs_registered.clone()))
            .map_err(metrics_err)?;

        Ok(Self {
            registry,
            pvt_assemblies,
            pvt_assembly_duration,
            sys_ccs_registered,
        })
    }

    /// Record one assembly.
    pub fn record_assembly(&self, success: bool, seconds: f64) {
        let outcome = if success { OUTCOME_SUCCESS } else { OUTCOME_FAILURE };
        self.pvt_assemblies.with_label_values(&[outcome]).inc();
        self.pvt_assembly_duration.observe(seconds);
    }

    /// Render all metrics in the Prometheus text format.
    pub fn encode(&self) -> Result<String, TelemetryError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_err)?;
        String::from_utf8(buffer).map_err(metrics_err)
    }
}

impl std::fmt::Debug for MetricsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsHandle")
            .field("sys_ccs_registered", &self.sys_ccs_registered.get())
            .finish_non_exhaustive()
    }
}

fn metrics_err(err: impl std::fmt::Display) -> TelemetryError {
    TelemetryError::MetricsInit(err.to_string())
}
