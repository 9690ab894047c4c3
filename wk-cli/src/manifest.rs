use std::fs::File;
use std::io::{
    Read,
    Write,
};

use serde::Deserialize;
use tracing::*;
use wk_core::k8s::sort_by_identifier;
use wk_core::prelude::*;

#[derive(Debug, Default)]
pub struct Manifest {
    pub resources: Vec<GenericResource>,

    // non-empty documents that weren't one of the supported workload kinds
    pub skipped: usize,
}

pub fn load(filename: &str) -> anyhow::Result<Manifest> {
    info!("reading manifest from {filename}");
    parse(File::open(filename)?)
}

// Every document in the (possibly multi-document) YAML stream that's one of the supported workload
// kinds gets wrapped; everything else is skipped with a warning.  The resources are sorted by
// identifier so the order of operations doesn't depend on the order of the file.
pub fn parse(reader: impl Read) -> anyhow::Result<Manifest> {
    let mut manifest = Manifest::default();
    for doc in serde_yaml::Deserializer::from_reader(reader) {
        let Some(obj) = Option::<DynamicObject>::deserialize(doc)? else {
            continue;
        };

        let obj_name = obj.metadata.name.clone().unwrap_or_default();
        match GenericResource::from_dynamic(obj) {
            Ok(gr) => manifest.resources.push(gr),
            Err(err) => {
                warn!("skipping {obj_name}: {err}");
                manifest.skipped += 1;
            },
        }
    }

    sort_by_identifier(&mut manifest.resources);
    Ok(manifest)
}

pub fn write(resources: &[GenericResource], mut out: impl Write) -> EmptyResult {
    for obj in resources.iter().filter_map(GenericResource::resource) {
        write!(out, "---\n{}", serde_yaml::to_string(obj)?)?;
    }
    Ok(())
}
