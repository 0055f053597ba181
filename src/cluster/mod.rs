//! K-means engines.
//!
//! All engines minimize the **sum of squared errors**:
//!
//! ```text
//! SSE = Σₖ Σ_{x ∈ Cₖ} ||x - μₖ||²
//! ```
//!
//! They share the same outer loop (seed, then assign and recenter until
//! fewer than `delta_threshold · n` vectors move or the iteration ceiling
//! is hit) and differ in how assignment is done.
//!
//! | Engine | Assignment cost | Empty clusters | Seeding |
//! |--------|-----------------|----------------|---------|
//! | [`Lloyd`] | n·k distances | refilled from a donor | pluggable, default uniform |
//! | [`Elkan`] | ≈ n distances once settled | centroid stays put | pluggable, default uniform |
//! | [`KmeansPP`] | n·k distances | refilled from a donor | k-means++ (fixed) |
//!
//! Given the same starting centroids and a metric distance, [`Elkan`] and
//! [`Lloyd`] reach the same partition. Elkan prunes; it does not
//! approximate.
//!
//! ## Usage
//!
//! ```rust
//! use centroid::cluster::{Clusterer, Elkan};
//!
//! let data = vec![
//!     vec![20.0, 20.0],
//!     vec![21.0, 21.0],
//!     vec![100.5, 100.5],
//!     vec![50.1, 50.1],
//!     vec![64.2, 64.2],
//! ];
//!
//! let engine = Elkan::new(&data, 2).unwrap();
//! let clusters = engine.cluster().unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert!(clusters.sse() >= 0.0);
//! ```

mod elkan;
mod lloyd;
mod plus_plus;
mod traits;
mod validate;


pub use elkan::{Elkan, ElkanStats};
pub use lloyd::Lloyd;
pub use plus_plus::KmeansPP;
pub use traits::Clusterer;
pub use validate::validate_args;
