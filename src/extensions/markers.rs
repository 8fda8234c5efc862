use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Dated, YearAxis};
use crate::error::{TimelineError, TimelineResult};

/// Minimum on-screen distance between two cluster anchors.
pub const MIN_CLUSTER_PX: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub min_cluster_px: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            min_cluster_px: MIN_CLUSTER_PX,
        }
    }
}

impl ClusterConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.min_cluster_px.is_finite() || self.min_cluster_px < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "cluster `min_cluster_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Year distance equivalent to `min_cluster_px` at the given scale.
    #[must_use]
    pub fn year_gap(self, px_per_year: f64) -> f64 {
        self.min_cluster_px / px_per_year
    }
}

/// Markers merged for display because they sit closer than the pixel threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerCluster<M> {
    pub center_year: i32,
    pub members: Vec<M>,
}

impl<M: Dated> MarkerCluster<M> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }

    #[must_use]
    pub fn member_ids(&self) -> Vec<u64> {
        self.members.iter().map(|member| member.id()).collect()
    }
}

/// Groups markers with a single greedy left-to-right pass.
///
/// Markers are ordered by year (stable on ties). A marker joins the open group
/// when its distance to the *last* member is at most `min_cluster_px / px_per_year`
/// years; otherwise the group is closed and a new one starts.
#[must_use]
pub fn cluster_markers<M: Dated + Clone>(
    markers: &[M],
    px_per_year: f64,
    config: ClusterConfig,
) -> Vec<MarkerCluster<M>> {
    if markers.is_empty() {
        return Vec::new();
    }

    let mut sorted = markers.to_vec();
    sorted.sort_by_key(|marker| marker.year());

    if !px_per_year.is_finite() || px_per_year <= 0.0 {
        debug!(px_per_year, "invalid scale for clustering, keeping markers apart");
        return sorted.into_iter().map(single_cluster).collect();
    }

    let year_gap = config.year_gap(px_per_year);
    let mut clusters = Vec::new();
    let mut group: Vec<M> = Vec::new();
    for marker in sorted {
        let joins = group
            .last()
            .is_some_and(|last| f64::from(marker.year()) - f64::from(last.year()) <= year_gap);
        if !joins && !group.is_empty() {
            clusters.push(close_group(std::mem::take(&mut group)));
        }
        group.push(marker);
    }
    if !group.is_empty() {
        clusters.push(close_group(group));
    }
    clusters
}

fn single_cluster<M: Dated>(marker: M) -> MarkerCluster<M> {
    MarkerCluster {
        center_year: marker.year(),
        members: vec![marker],
    }
}

fn close_group<M: Dated>(members: Vec<M>) -> MarkerCluster<M> {
    let first = members.first().map_or(0, |member| member.year());
    let last = members.last().map_or(first, |member| member.year());
    MarkerCluster {
        center_year: midpoint_year(first, last),
        members,
    }
}

/// `round((first + last) / 2)` with halves rounded towards +infinity.
fn midpoint_year(first: i32, last: i32) -> i32 {
    let sum = i64::from(first) + i64::from(last);
    (sum + 1).div_euclid(2) as i32
}

/// Cluster anchor resolved to content pixel space at the live scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCluster {
    pub center_year: i32,
    /// Offset from the start of the scrollable content.
    pub content_x: f64,
    /// Offset from the left edge of the viewport.
    pub viewport_x: f64,
    pub member_ids: SmallVec<[u64; 4]>,
}

#[must_use]
pub fn place_clusters<M: Dated>(
    clusters: &[MarkerCluster<M>],
    axis: YearAxis,
    px_per_year: f64,
    scroll_left: f64,
) -> Vec<PlacedCluster> {
    clusters
        .iter()
        .map(|cluster| {
            let content_x = axis.year_to_pixel(cluster.center_year, px_per_year);
            PlacedCluster {
                center_year: cluster.center_year,
                content_x,
                viewport_x: content_x - scroll_left,
                member_ids: cluster.members.iter().map(|member| member.id()).collect(),
            }
        })
        .collect()
}
