use serde::{
    Serialize,
    Serializer,
};
use serde_json as json;

use super::*;
use crate::errors::*;
use crate::prelude::*;

// Run the same expression against whichever object the workload holds; the match is exhaustive,
// so a new variant has to be handled here before anything compiles
macro_rules! each_variant {
    ($workload:expr, $obj:ident => $body:expr) => {
        match $workload {
            Workload::Deployment($obj) => $body,
            Workload::StatefulSet($obj) => $body,
            Workload::DaemonSet($obj) => $body,
            Workload::CronJob($obj) => $body,
        }
    };
}

/// One of the four supported workload resources.
///
/// Three of the variants keep their pod template at `spec.template`; the CronJob keeps it at
/// `spec.jobTemplate.spec.template`.  The `pod_template*` accessors are the only place that
/// difference shows up, everything else goes through them.
#[derive(Clone, Debug, PartialEq)]
pub enum Workload {
    Deployment(appsv1::Deployment),
    StatefulSet(appsv1::StatefulSet),
    DaemonSet(appsv1::DaemonSet),
    CronJob(batchv1::CronJob),
}

impl Workload {
    pub fn from_dynamic(obj: DynamicObject) -> anyhow::Result<Workload> {
        let Ok(gvk) = GVK::from_dynamic_obj(&obj) else {
            bail!(WorkloadError::unsupported_kind("<no type data>"));
        };

        if !is_supported(&gvk) {
            bail!(WorkloadError::unsupported_kind(&gvk.to_string()));
        }

        let data = json::to_value(&obj)?;
        let workload = if gvk == *DEPL_GVK {
            Workload::Deployment(json::from_value(data)?)
        } else if gvk == *STS_GVK {
            Workload::StatefulSet(json::from_value(data)?)
        } else if gvk == *DS_GVK {
            Workload::DaemonSet(json::from_value(data)?)
        } else {
            Workload::CronJob(json::from_value(data)?)
        };

        Ok(workload)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Workload::Deployment(_) => DEPLOYMENT_KIND_TAG,
            Workload::StatefulSet(_) => STATEFULSET_KIND_TAG,
            Workload::DaemonSet(_) => DAEMONSET_KIND_TAG,
            Workload::CronJob(_) => CRONJOB_KIND_TAG,
        }
    }

    pub fn gvk(&self) -> &'static GVK {
        match self {
            Workload::Deployment(_) => &*DEPL_GVK,
            Workload::StatefulSet(_) => &*STS_GVK,
            Workload::DaemonSet(_) => &*DS_GVK,
            Workload::CronJob(_) => &*CRONJOB_GVK,
        }
    }

    pub fn identifier(&self) -> String {
        build_identifier(self.kind(), self.meta())
    }

    pub fn meta(&self) -> &metav1::ObjectMeta {
        each_variant!(self, obj => &obj.metadata)
    }

    pub fn meta_mut(&mut self) -> &mut metav1::ObjectMeta {
        each_variant!(self, obj => &mut obj.metadata)
    }

    pub fn pod_template(&self) -> Option<&corev1::PodTemplateSpec> {
        match self {
            Workload::Deployment(d) => d.spec.as_ref().map(|s| &s.template),
            Workload::StatefulSet(ss) => ss.spec.as_ref().map(|s| &s.template),
            Workload::DaemonSet(ds) => ds.spec.as_ref().map(|s| &s.template),
            Workload::CronJob(cj) => Some(&cj.spec.as_ref()?.job_template.spec.as_ref()?.template),
        }
    }

    pub fn pod_template_mut(&mut self) -> Option<&mut corev1::PodTemplateSpec> {
        match self {
            Workload::Deployment(d) => d.spec.as_mut().map(|s| &mut s.template),
            Workload::StatefulSet(ss) => ss.spec.as_mut().map(|s| &mut s.template),
            Workload::DaemonSet(ds) => ds.spec.as_mut().map(|s| &mut s.template),
            Workload::CronJob(cj) => Some(&mut cj.spec.as_mut()?.job_template.spec.as_mut()?.template),
        }
    }

    // Like pod_template_mut, but fills in any missing specs along the way
    pub fn pod_template_or_default(&mut self) -> &mut corev1::PodTemplateSpec {
        match self {
            Workload::Deployment(d) => &mut d.spec.get_or_insert_with(Default::default).template,
            Workload::StatefulSet(ss) => &mut ss.spec.get_or_insert_with(Default::default).template,
            Workload::DaemonSet(ds) => &mut ds.spec.get_or_insert_with(Default::default).template,
            Workload::CronJob(cj) => {
                &mut cj
                    .spec
                    .get_or_insert_with(Default::default)
                    .job_template
                    .spec
                    .get_or_insert_with(Default::default)
                    .template
            },
        }
    }

    pub fn pod_spec(&self) -> Option<&corev1::PodSpec> {
        self.pod_template()?.spec.as_ref()
    }

    pub fn pod_spec_mut(&mut self) -> Option<&mut corev1::PodSpec> {
        self.pod_template_mut()?.spec.as_mut()
    }

    pub fn containers(&self) -> &[corev1::Container] {
        self.pod_spec().map(|ps| ps.containers.as_slice()).unwrap_or_default()
    }

    pub fn containers_mut(&mut self) -> &mut [corev1::Container] {
        self.pod_spec_mut().map(|ps| ps.containers.as_mut_slice()).unwrap_or_default()
    }

    pub fn init_containers(&self) -> &[corev1::Container] {
        self.pod_spec().and_then(|ps| ps.init_containers.as_deref()).unwrap_or_default()
    }

    pub fn init_containers_mut(&mut self) -> &mut [corev1::Container] {
        self.pod_spec_mut()
            .and_then(|ps| ps.init_containers.as_deref_mut())
            .unwrap_or_default()
    }

    pub fn image_pull_secrets(&self) -> &[corev1::LocalObjectReference] {
        self.pod_spec().and_then(|ps| ps.image_pull_secrets.as_deref()).unwrap_or_default()
    }
}

pub fn is_supported(gvk: &GVK) -> bool {
    [&*DEPL_GVK, &*STS_GVK, &*DS_GVK, &*CRONJOB_GVK].contains(&gvk)
}

impl From<appsv1::Deployment> for Workload {
    fn from(obj: appsv1::Deployment) -> Workload {
        Workload::Deployment(obj)
    }
}

impl From<appsv1::StatefulSet> for Workload {
    fn from(obj: appsv1::StatefulSet) -> Workload {
        Workload::StatefulSet(obj)
    }
}

impl From<appsv1::DaemonSet> for Workload {
    fn from(obj: appsv1::DaemonSet) -> Workload {
        Workload::DaemonSet(obj)
    }
}

impl From<batchv1::CronJob> for Workload {
    fn from(obj: batchv1::CronJob) -> Workload {
        Workload::CronJob(obj)
    }
}

impl TryFrom<DynamicObject> for Workload {
    type Error = anyhow::Error;

    fn try_from(obj: DynamicObject) -> anyhow::Result<Workload> {
        Workload::from_dynamic(obj)
    }
}

// The k8s-openapi serializers include apiVersion and kind, so the output is a complete manifest
impl Serialize for Workload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        each_variant!(self, obj => obj.serialize(serializer))
    }
}
