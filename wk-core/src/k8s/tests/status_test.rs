use super::*;

#[rstest]
fn test_deployment_status(mut test_deployment: appsv1::Deployment) {
    test_deployment.status = Some(appsv1::DeploymentStatus {
        replicas: Some(3),
        updated_replicas: Some(2),
        ready_replicas: Some(2),
        available_replicas: Some(1),
        unavailable_replicas: Some(2),
        ..Default::default()
    });

    let gr = GenericResource::new(test_deployment);
    assert_eq!(
        gr.status(),
        Status {
            replicas: 3,
            updated_replicas: 2,
            ready_replicas: 2,
            available_replicas: 1,
            unavailable_replicas: 2,
        }
    );
}

#[rstest]
fn test_deployment_status_partial(mut test_deployment: appsv1::Deployment) {
    test_deployment.status = Some(appsv1::DeploymentStatus { replicas: Some(3), ..Default::default() });

    let gr = GenericResource::new(test_deployment);
    assert_eq!(gr.status(), Status { replicas: 3, ..Default::default() });
}

#[rstest]
fn test_statefulset_status(mut test_statefulset: appsv1::StatefulSet) {
    test_statefulset.status = Some(appsv1::StatefulSetStatus {
        replicas: 3,
        updated_replicas: Some(3),
        ready_replicas: Some(2),
        current_replicas: Some(1),
        available_replicas: Some(5),
        ..Default::default()
    });

    // available comes from currentReplicas, and there's no unavailable count for statefulsets
    let gr = GenericResource::new(test_statefulset);
    assert_eq!(
        gr.status(),
        Status {
            replicas: 3,
            updated_replicas: 3,
            ready_replicas: 2,
            available_replicas: 1,
            unavailable_replicas: 0,
        }
    );
}

#[rstest]
fn test_daemonset_status(mut test_daemonset: appsv1::DaemonSet) {
    test_daemonset.status = Some(appsv1::DaemonSetStatus {
        desired_number_scheduled: 4,
        current_number_scheduled: 4,
        updated_number_scheduled: Some(2),
        number_ready: 3,
        number_available: Some(3),
        number_unavailable: Some(1),
        ..Default::default()
    });

    let gr = GenericResource::new(test_daemonset);
    assert_eq!(
        gr.status(),
        Status {
            replicas: 4,
            updated_replicas: 2,
            ready_replicas: 3,
            available_replicas: 3,
            unavailable_replicas: 1,
        }
    );
}

#[rstest]
fn test_cronjob_status(mut test_cronjob: batchv1::CronJob) {
    test_cronjob.status = Some(batchv1::CronJobStatus {
        active: Some(vec![Default::default(), Default::default()]),
        ..Default::default()
    });

    let gr = GenericResource::new(test_cronjob);
    assert_eq!(gr.status(), Status { replicas: 2, ..Default::default() });
}

#[rstest]
#[case::deployment(test_deployment(TEST_DEPLOYMENT).into())]
#[case::statefulset(test_statefulset(TEST_STATEFULSET).into())]
#[case::daemonset(test_daemonset(TEST_DAEMONSET).into())]
#[case::cronjob(test_cronjob(TEST_CRONJOB).into())]
fn test_no_status(#[case] obj: Workload) {
    assert_eq!(obj.status(), Status::default());
}

#[rstest]
fn test_status_serialization() {
    let status = Status { replicas: 1, unavailable_replicas: 1, ..Default::default() };
    assert_eq!(
        serde_json::to_value(status).unwrap(),
        serde_json::json!({
            "replicas": 1,
            "updatedReplicas": 0,
            "readyReplicas": 0,
            "availableReplicas": 0,
            "unavailableReplicas": 1,
        })
    );
}
