//! Client for the CaRe candidate analytics API.
//!
//! Two outbound queries are supported: candidate distribution stats for global
//! insight screens and career progression predictions. Both are plain JSON POSTs
//! against a configured base address; HTTP outcomes are translated into
//! [`CareClientError`] variants and nothing is retried here.

mod client;
mod error;
mod query;
pub mod router;
mod stats;
mod status;
mod transport;

pub use client::{CareHttpClient, CARE_SERVICE};
pub use error::CareClientError;
pub use query::{DistributionQuery, ProgressionQuery};
pub use router::insight_router;
pub use stats::{DistributionStats, ProgressionStats};
pub use status::StatusPolicy;
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
