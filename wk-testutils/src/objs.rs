use rstest::fixture;
use serde_json::json;
use wk_core::prelude::*;

use crate::constants::*;

// The fixtures are built from JSON so that the objects go through the same deserialization path as
// manifests read off disk.
fn test_pod_template() -> serde_json::Value {
    json!({
        "metadata": {"labels": {"app": "test"}},
        "spec": {
            "containers": [{"name": "main", "image": TEST_IMAGE}],
        },
    })
}

pub fn test_deployment_json(name: &str) -> serde_json::Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "namespace": TEST_NAMESPACE,
            "name": name,
            "labels": {"app": "test"},
        },
        "spec": {
            "replicas": 3,
            "selector": {"matchLabels": {"app": "test"}},
            "template": test_pod_template(),
        },
    })
}

pub fn test_statefulset_json(name: &str) -> serde_json::Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "StatefulSet",
        "metadata": {
            "namespace": TEST_NAMESPACE,
            "name": name,
            "annotations": {"owner": "storage-team"},
        },
        "spec": {
            "serviceName": name,
            "selector": {"matchLabels": {"app": "test"}},
            "template": test_pod_template(),
        },
    })
}

pub fn test_daemonset_json(name: &str) -> serde_json::Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "DaemonSet",
        "metadata": {
            "namespace": TEST_NAMESPACE,
            "name": name,
        },
        "spec": {
            "selector": {"matchLabels": {"app": "test"}},
            "template": {
                "metadata": {"annotations": {"prometheus.io/scrape": "true"}},
                "spec": {
                    "initContainers": [{"name": "init", "image": TEST_INIT_IMAGE}],
                    "containers": [
                        {"name": "main", "image": TEST_IMAGE},
                        {"name": "sidecar", "image": TEST_SIDECAR_IMAGE},
                    ],
                    "imagePullSecrets": [{"name": TEST_PULL_SECRET}],
                },
            },
        },
    })
}

pub fn test_cronjob_json(name: &str) -> serde_json::Value {
    json!({
        "apiVersion": "batch/v1",
        "kind": "CronJob",
        "metadata": {
            "namespace": TEST_NAMESPACE,
            "name": name,
        },
        "spec": {
            "schedule": "*/5 * * * *",
            "jobTemplate": {
                "spec": {
                    "template": {
                        "spec": {
                            "initContainers": [{"name": "init", "image": TEST_INIT_IMAGE}],
                            "containers": [{"name": "main", "image": TEST_IMAGE}],
                            "restartPolicy": "OnFailure",
                        },
                    },
                },
            },
        },
    })
}

#[fixture]
pub fn test_deployment(#[default(TEST_DEPLOYMENT)] name: &str) -> appsv1::Deployment {
    serde_json::from_value(test_deployment_json(name)).unwrap()
}

#[fixture]
pub fn test_statefulset(#[default(TEST_STATEFULSET)] name: &str) -> appsv1::StatefulSet {
    serde_json::from_value(test_statefulset_json(name)).unwrap()
}

#[fixture]
pub fn test_daemonset(#[default(TEST_DAEMONSET)] name: &str) -> appsv1::DaemonSet {
    serde_json::from_value(test_daemonset_json(name)).unwrap()
}

#[fixture]
pub fn test_cronjob(#[default(TEST_CRONJOB)] name: &str) -> batchv1::CronJob {
    serde_json::from_value(test_cronjob_json(name)).unwrap()
}

#[fixture]
pub fn test_service_account_obj(#[default(TEST_SERVICE_ACCOUNT)] name: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "ServiceAccount",
        "metadata": {"namespace": TEST_NAMESPACE, "name": name},
    }))
    .unwrap()
}

// An untyped copy of one of the json objects above
pub fn test_dynamic_obj(data: serde_json::Value) -> DynamicObject {
    serde_json::from_value(data).unwrap()
}
