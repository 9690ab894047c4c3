use serde::{
    Deserialize,
    Serialize,
};

use super::*;

/// Rollout status shared by all workload kinds.  Counters that have no equivalent for a given kind
/// are reported as zero, so a zero here means "not applicable" as often as it means "no pods".
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Total number of non-terminated pods targeted by this workload (for a CronJob, the number of
    /// currently-active jobs).
    pub replicas: i32,

    /// Total number of non-terminated pods targeted by this workload that have the desired
    /// template spec.
    pub updated_replicas: i32,

    /// Total number of ready pods targeted by this workload.
    pub ready_replicas: i32,

    /// Total number of available pods (ready for at least minReadySeconds) targeted by this workload.
    pub available_replicas: i32,

    /// Total number of pods that are still required for the workload to have 100% available
    /// capacity.
    pub unavailable_replicas: i32,
}

impl Workload {
    pub fn status(&self) -> Status {
        match self {
            Workload::Deployment(d) => d.status.as_ref().map(|st| Status {
                replicas: st.replicas.unwrap_or_default(),
                updated_replicas: st.updated_replicas.unwrap_or_default(),
                ready_replicas: st.ready_replicas.unwrap_or_default(),
                available_replicas: st.available_replicas.unwrap_or_default(),
                unavailable_replicas: st.unavailable_replicas.unwrap_or_default(),
            }),
            Workload::StatefulSet(ss) => ss.status.as_ref().map(|st| Status {
                replicas: st.replicas,
                updated_replicas: st.updated_replicas.unwrap_or_default(),
                ready_replicas: st.ready_replicas.unwrap_or_default(),
                available_replicas: st.current_replicas.unwrap_or_default(),
                unavailable_replicas: 0,
            }),
            Workload::DaemonSet(ds) => ds.status.as_ref().map(|st| Status {
                replicas: st.desired_number_scheduled,
                updated_replicas: st.updated_number_scheduled.unwrap_or_default(),
                ready_replicas: st.number_ready,
                available_replicas: st.number_available.unwrap_or_default(),
                unavailable_replicas: st.number_unavailable.unwrap_or_default(),
            }),
            Workload::CronJob(cj) => cj.status.as_ref().map(|st| Status {
                replicas: st.active.as_ref().map_or(0, |active| active.len() as i32),
                ..Default::default()
            }),
        }
        .unwrap_or_default()
    }
}
