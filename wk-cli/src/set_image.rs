use std::fs::File;
use std::io;

use tracing::*;
use wk_core::prelude::*;

use crate::manifest;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, long_help = "manifest file containing the workloads to update")]
    pub file: String,

    #[arg(long, long_help = "position of the container to update in each workload's container list")]
    pub index: usize,

    #[arg(long, long_help = "new image for the container")]
    pub image: String,

    #[arg(long, long_help = "update an init container instead of a regular container")]
    pub init: bool,

    #[arg(
        short,
        long,
        long_help = "only update workloads with these identifiers (kind/namespace/name)",
        value_delimiter = ','
    )]
    pub target: Vec<String>,

    #[arg(
        short,
        long,
        long_help = "file to write the updated workloads to (stdout if unset); other objects in the manifest are dropped"
    )]
    pub output: Option<String>,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let manifest::Manifest { mut resources, skipped } = manifest::load(&args.file)?;
    let updated = set_image(&mut resources, args);
    info!("updated {updated} of {} workloads", resources.len());
    if skipped > 0 {
        warn!("{skipped} non-workload document(s) will not be written to the output");
    }

    match &args.output {
        Some(path) => manifest::write(&resources, File::create(path)?),
        None => manifest::write(&resources, io::stdout().lock()),
    }
}

// Returns the number of workloads that were actually changed; a workload without a container at
// the requested index is logged and left alone, it doesn't stop the rest of the batch.
pub(crate) fn set_image(resources: &mut [GenericResource], args: &Args) -> usize {
    let mut updated = 0;
    for gr in resources.iter_mut() {
        if !args.target.is_empty() && !args.target.contains(&gr.identifier) {
            continue;
        }

        let res = if args.init {
            gr.update_init_container(args.index, &args.image)
        } else {
            gr.update_container(args.index, &args.image)
        };

        match res {
            Ok(()) => {
                info!("{}: set container {} image to {}", gr.identifier, args.index, args.image);
                updated += 1;
            },
            Err(err) => warn!("{}: {err}", gr.identifier),
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assertables::*;
    use rstest::*;
    use tracing_test::traced_test;
    use wk_testutils::*;

    use super::*;

    fn build_args(index: usize, init: bool, target: Vec<String>) -> Args {
        Args {
            file: "unused".into(),
            index,
            image: "img:v2".into(),
            init,
            target,
            output: None,
        }
    }

    #[fixture]
    fn resources(
        test_deployment: appsv1::Deployment,
        test_daemonset: appsv1::DaemonSet,
        test_cronjob: batchv1::CronJob,
    ) -> Vec<GenericResource> {
        vec![
            GenericResource::new(test_cronjob),
            GenericResource::new(test_daemonset),
            GenericResource::new(test_deployment),
        ]
    }

    #[rstest]
    #[traced_test]
    fn test_set_image_all(mut resources: Vec<GenericResource>) {
        let updated = set_image(&mut resources, &build_args(1, false, vec![]));

        // only the daemonset has a second container
        assert_eq!(updated, 1);
        assert_eq!(resources[1].images(), vec![TEST_IMAGE, "img:v2"]);
        assert_eq!(resources[2].images(), vec![TEST_IMAGE]);
        assert!(logs_contain(&format!(
            "deployment/{TEST_NAMESPACE}/{TEST_DEPLOYMENT}: container index out of range: 1"
        )));
    }

    #[rstest]
    fn test_set_image_targeted(mut resources: Vec<GenericResource>) {
        let target = format!("deployment/{TEST_NAMESPACE}/{TEST_DEPLOYMENT}");
        let updated = set_image(&mut resources, &build_args(0, false, vec![target]));

        assert_eq!(updated, 1);
        assert_eq!(resources[0].images(), vec![TEST_IMAGE]);
        assert_eq!(resources[1].images(), vec![TEST_IMAGE, TEST_SIDECAR_IMAGE]);
        assert_eq!(resources[2].images(), vec!["img:v2"]);
    }

    #[rstest]
    fn test_set_init_image(mut resources: Vec<GenericResource>) {
        let updated = set_image(&mut resources, &build_args(0, true, vec![]));

        assert_eq!(updated, 2);
        assert_eq!(resources[0].init_images(), vec!["img:v2"]);
        assert_eq!(resources[1].init_images(), vec!["img:v2"]);
        assert!(resources[2].init_images().is_empty());
    }

    #[rstest]
    #[traced_test]
    fn test_cmd(test_deployment: appsv1::Deployment, test_cronjob: batchv1::CronJob) {
        let input = assert_fs::NamedTempFile::new("manifest.yml").unwrap();
        let output = assert_fs::NamedTempFile::new("updated.yml").unwrap();
        let mut buf = vec![];
        manifest::write(&[GenericResource::new(test_deployment), GenericResource::new(test_cronjob)], &mut buf)
            .unwrap();
        buf.extend_from_slice(b"---\napiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: settings\n");
        input.write_binary(&buf).unwrap();

        let args = Args {
            file: input.path().to_string_lossy().into(),
            output: Some(output.path().to_string_lossy().into()),
            ..build_args(0, false, vec![])
        };
        assert_ok!(cmd(&args));
        assert!(logs_contain("1 non-workload document(s) will not be written to the output"));

        let updated = manifest::load(&output.path().to_string_lossy()).unwrap();
        assert_eq!(updated.skipped, 0);
        assert_len_eq_x!(&updated.resources, 2);
        assert!(updated.resources.iter().all(|gr| gr.images() == vec!["img:v2"]));
    }
}
