pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_DEPLOYMENT: &str = "the-deployment";
pub const TEST_STATEFULSET: &str = "the-statefulset";
pub const TEST_DAEMONSET: &str = "the-daemonset";
pub const TEST_CRONJOB: &str = "the-cronjob";
pub const TEST_SERVICE_ACCOUNT: &str = "the-service-account";

pub const TEST_IMAGE: &str = "nginx:1.0";
pub const TEST_SIDECAR_IMAGE: &str = "envoy:1.29";
pub const TEST_INIT_IMAGE: &str = "busybox:1.36";
pub const TEST_PULL_SECRET: &str = "regcred";
