//! # centroid
//!
//! K-means clustering over dense `f64` vectors, with Elkan's
//! triangle-inequality acceleration.
//!
//! Three engines share one contract ([`Clusterer`]): brute-force [`Lloyd`],
//! bound-pruning [`Elkan`], and [`KmeansPP`] (Lloyd with k-means++ seeding).
//! Seeding and distance are pluggable through [`Initializer`] and
//! [`Distance`]. [`ClusterBuilder`] picks an engine and fills in defaults.
//!
//! ```rust
//! use centroid::{Algorithm, ClusterBuilder};
//!
//! let data = vec![
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![1.0, 2.0, 4.0, 5.0],
//!     vec![10.0, 2.0, 4.0, 5.0],
//!     vec![10.0, 3.0, 4.0, 5.0],
//! ];
//! let engine = ClusterBuilder::new(Algorithm::Elkan, &data, 2).seed(1).build()?;
//! let labels = engine.fit_predict()?;
//! assert_eq!(labels.len(), 4);
//! # Ok::<(), centroid::Error>(())
//! ```
//!
//! The `parallel` feature (on by default) spreads centroid distances,
//! recentering, and input validation across a rayon pool.

pub mod cluster;
pub mod config;
/// Cluster and cluster-set containers returned by every engine.
pub mod container;
pub mod distance;
/// Error types used across `centroid`.
pub mod error;
pub mod init;
pub mod metrics;
pub mod sample;

pub use cluster::{validate_args, Clusterer, Elkan, ElkanStats, KmeansPP, Lloyd};
pub use config::{Algorithm, ClusterBuilder, KmeansConfig};
pub use container::{Cluster, ClusterSet};
pub use distance::{Distance, Euclidean, Manhattan};
pub use error::{Error, Result};
pub use init::Initializer;
