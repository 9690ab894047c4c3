use tracing::*;

use super::*;
use crate::errors::*;
use crate::prelude::*;

pub fn build_identifier(kind: &str, meta: &metav1::ObjectMeta) -> String {
    format!(
        "{kind}/{}/{}",
        meta.namespace.as_deref().unwrap_or_default(),
        meta.name.as_deref().unwrap_or_default(),
    )
}

// A container with no image still takes up a slot, so that positions in the returned list line
// up with the container indices used by update_container_image
pub fn container_images(containers: &[corev1::Container]) -> Vec<String> {
    containers.iter().map(|c| c.image.clone().unwrap_or_default()).collect()
}

pub fn image_pull_secret_names(secrets: &[corev1::LocalObjectReference]) -> Vec<String> {
    secrets.iter().map(|s| s.name.clone()).collect()
}

pub fn update_container_image(containers: &mut [corev1::Container], index: usize, image: &str) -> EmptyResult {
    match containers.get_mut(index) {
        Some(container) => {
            debug!(
                "updating container {} at index {index}: {} -> {image}",
                container.name,
                container.image.as_deref().unwrap_or("<none>"),
            );
            container.image = Some(image.into());
            Ok(())
        },
        None => bail!(WorkloadError::container_index_out_of_range(&index)),
    }
}
