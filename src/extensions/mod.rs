//! Consumer-facing helpers layered on top of the core transform.
//!
//! Nothing in here writes engine state.

pub mod markers;
pub mod plugins;

pub use markers::{
    ClusterConfig, MIN_CLUSTER_PX, MarkerCluster, PlacedCluster, cluster_markers, place_clusters,
};
pub use plugins::{TimelineContext, TimelineEvent, TimelineObserver};
