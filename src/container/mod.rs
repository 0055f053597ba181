//! Cluster containers shared by every engine.
//!
//! A [`ClusterSet`] is created by an [`Initializer`](crate::init::Initializer),
//! mutated in place by an engine for the whole run, and handed back to the
//! caller as the result. Clusters borrow the dataset, so the set cannot
//! outlive the engine that produced it.

mod cluster;
mod cluster_set;

pub use cluster::Cluster;
pub use cluster_set::ClusterSet;
