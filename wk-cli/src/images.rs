use std::io::{
    self,
    Write,
};

use wk_core::prelude::*;

use crate::manifest;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, long_help = "manifest file containing the workloads to inspect")]
    pub file: String,

    #[arg(long, long_help = "also list init container images and image pull secrets")]
    pub all: bool,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let resources = manifest::load(&args.file)?.resources;
    print_images(&resources, args.all, &mut io::stdout().lock())
}

pub(crate) fn print_images(resources: &[GenericResource], all: bool, out: &mut impl Write) -> EmptyResult {
    for gr in resources {
        writeln!(out, "{gr}")?;
        if !all {
            continue;
        }

        let init_images = gr.init_images();
        if !init_images.is_empty() {
            writeln!(out, "  init images: {}", init_images.join(", "))?;
        }

        let secrets = gr.image_pull_secrets();
        if !secrets.is_empty() {
            writeln!(out, "  image pull secrets: {}", secrets.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;
    use wk_testutils::*;

    use super::*;

    #[rstest]
    #[case::images_only(false)]
    #[case::all(true)]
    fn test_print_images(test_daemonset: appsv1::DaemonSet, test_deployment: appsv1::Deployment, #[case] all: bool) {
        let resources = vec![GenericResource::new(test_daemonset), GenericResource::new(test_deployment)];

        let mut buf = vec![];
        print_images(&resources, all, &mut buf).unwrap();

        let mut expected =
            format!("daemonset/{TEST_NAMESPACE}/{TEST_DAEMONSET} images: {TEST_IMAGE}, {TEST_SIDECAR_IMAGE}\n");
        if all {
            expected += &format!("  init images: {TEST_INIT_IMAGE}\n  image pull secrets: {TEST_PULL_SECRET}\n");
        }
        expected += &format!("deployment/{TEST_NAMESPACE}/{TEST_DEPLOYMENT} images: {TEST_IMAGE}\n");

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, expected);
        if !all {
            assert_not_contains!(output, "init images");
        }
    }
}
