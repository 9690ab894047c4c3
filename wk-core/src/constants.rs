use lazy_static::lazy_static;

use crate::k8s::GVK;
use crate::prelude::*;

// Kind tags used in identifiers and display output
pub const DEPLOYMENT_KIND_TAG: &str = "deployment";
pub const STATEFULSET_KIND_TAG: &str = "statefulset";
pub const DAEMONSET_KIND_TAG: &str = "daemonset";
pub const CRONJOB_KIND_TAG: &str = "cronjob";

// Supported GVKs
lazy_static! {
    pub static ref DEPL_GVK: GVK = GVK::for_resource::<appsv1::Deployment>();
    pub static ref STS_GVK: GVK = GVK::for_resource::<appsv1::StatefulSet>();
    pub static ref DS_GVK: GVK = GVK::for_resource::<appsv1::DaemonSet>();
    pub static ref CRONJOB_GVK: GVK = GVK::for_resource::<batchv1::CronJob>();
}
