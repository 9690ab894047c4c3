use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use tracing::*;

use super::*;
use crate::prelude::*;

static EMPTY_MAP: BTreeMap<String, String> = BTreeMap::new();

/// A uniform view over the supported workload kinds, for tooling that needs to inspect and roll
/// container images without caring which kind of workload it's looking at.
///
/// The identifier, namespace, and name are computed once when the resource is wrapped; they are
/// _not_ kept in sync if the underlying object is modified afterwards.  A default-constructed
/// `GenericResource` wraps nothing; all of its getters return empty values.
///
/// Getters hand out borrowed views into the wrapped object.  Use `deep_copy` to get an independent
/// resource that can be modified without touching this one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericResource {
    obj: Option<Workload>,

    pub identifier: String,
    pub namespace: String,
    pub name: String,
}

impl GenericResource {
    pub fn new(obj: impl Into<Workload>) -> GenericResource {
        let obj = obj.into();
        let mut gr = GenericResource {
            obj: Some(obj),
            ..Default::default()
        };

        gr.identifier = gr.current_identifier();
        gr.namespace = gr.current_namespace();
        gr.name = gr.current_name();
        debug!("wrapped workload {}", gr.identifier);

        gr
    }

    pub fn from_dynamic(obj: DynamicObject) -> anyhow::Result<GenericResource> {
        Ok(GenericResource::new(Workload::from_dynamic(obj)?))
    }

    pub fn deep_copy(&self) -> GenericResource {
        self.clone()
    }

    pub fn resource(&self) -> Option<&Workload> {
        self.obj.as_ref()
    }

    pub fn resource_mut(&mut self) -> Option<&mut Workload> {
        self.obj.as_mut()
    }

    pub fn into_resource(self) -> Option<Workload> {
        self.obj
    }

    pub fn kind(&self) -> &'static str {
        self.obj.as_ref().map(Workload::kind).unwrap_or_default()
    }

    // The current_* functions read from the wrapped object; the identifier, namespace and name
    // fields hold whatever these returned at construction time.
    pub fn current_identifier(&self) -> String {
        self.obj.as_ref().map(Workload::identifier).unwrap_or_default()
    }

    pub fn current_namespace(&self) -> String {
        self.meta().and_then(|m| m.namespace.clone()).unwrap_or_default()
    }

    pub fn current_name(&self) -> String {
        self.meta().and_then(|m| m.name.clone()).unwrap_or_default()
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        self.meta().and_then(|m| m.labels.as_ref()).unwrap_or(&EMPTY_MAP)
    }

    pub fn set_labels(&mut self, labels: BTreeMap<String, String>) {
        if let Some(meta) = self.meta_mut() {
            meta.labels = Some(labels);
        }
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        self.meta().and_then(|m| m.annotations.as_ref()).unwrap_or(&EMPTY_MAP)
    }

    pub fn set_annotations(&mut self, annotations: BTreeMap<String, String>) {
        if let Some(meta) = self.meta_mut() {
            meta.annotations = Some(annotations);
        }
    }

    // "Spec annotations" are the annotations on the pod template, not the workload itself
    pub fn spec_annotations(&self) -> &BTreeMap<String, String> {
        self.obj
            .as_ref()
            .and_then(|w| w.pod_template()?.metadata.as_ref()?.annotations.as_ref())
            .unwrap_or(&EMPTY_MAP)
    }

    pub fn set_spec_annotations(&mut self, annotations: BTreeMap<String, String>) {
        if let Some(obj) = self.obj.as_mut() {
            let template = obj.pod_template_or_default();
            template.metadata.get_or_insert_with(Default::default).annotations = Some(annotations);
        }
    }

    pub fn image_pull_secrets(&self) -> Vec<String> {
        image_pull_secret_names(self.obj.as_ref().map(Workload::image_pull_secrets).unwrap_or_default())
    }

    pub fn images(&self) -> Vec<String> {
        container_images(self.containers())
    }

    pub fn init_images(&self) -> Vec<String> {
        container_images(self.init_containers())
    }

    pub fn containers(&self) -> &[corev1::Container] {
        self.obj.as_ref().map(Workload::containers).unwrap_or_default()
    }

    pub fn init_containers(&self) -> &[corev1::Container] {
        self.obj.as_ref().map(Workload::init_containers).unwrap_or_default()
    }

    /// Set the image for the container at `index`; an out-of-range index returns
    /// `WorkloadError::ContainerIndexOutOfRange` and leaves the resource untouched.
    pub fn update_container(&mut self, index: usize, image: &str) -> EmptyResult {
        let containers = self.obj.as_mut().map(Workload::containers_mut).unwrap_or_default();
        update_container_image(containers, index, image)
    }

    /// Same as `update_container`, but for init containers.
    pub fn update_init_container(&mut self, index: usize, image: &str) -> EmptyResult {
        let containers = self.obj.as_mut().map(Workload::init_containers_mut).unwrap_or_default();
        update_container_image(containers, index, image)
    }

    pub fn status(&self) -> Status {
        self.obj.as_ref().map(Workload::status).unwrap_or_default()
    }

    pub fn cmp_identifier(&self, other: &GenericResource) -> Ordering {
        self.identifier.cmp(&other.identifier)
    }

    fn meta(&self) -> Option<&metav1::ObjectMeta> {
        self.obj.as_ref().map(Workload::meta)
    }

    fn meta_mut(&mut self) -> Option<&mut metav1::ObjectMeta> {
        self.obj.as_mut().map(Workload::meta_mut)
    }
}

// Sorting by identifier gives batch operations (like rolling an image across a bunch of
// workloads) a reproducible order that doesn't depend on how the list was assembled.
pub fn sort_by_identifier(resources: &mut [GenericResource]) {
    resources.sort_by(GenericResource::cmp_identifier);
}

impl From<Workload> for GenericResource {
    fn from(obj: Workload) -> GenericResource {
        GenericResource::new(obj)
    }
}

impl TryFrom<DynamicObject> for GenericResource {
    type Error = anyhow::Error;

    fn try_from(obj: DynamicObject) -> anyhow::Result<GenericResource> {
        GenericResource::from_dynamic(obj)
    }
}

impl fmt::Display for GenericResource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{} images: {}", self.kind(), self.namespace, self.name, self.images().join(", "))
    }
}
