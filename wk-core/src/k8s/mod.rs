mod generic_resource;
mod gvk;
mod status;
mod util;
mod workload;

pub use generic_resource::*;
pub use gvk::*;
pub use status::*;
pub use util::*;
pub use workload::*;

use crate::errors::*;

// The enum is public so callers can downcast an anyhow::Error and match on the variant; only this
// crate builds them, through the generated snake_case constructors
err_impl! {WorkloadError,
    #[error("unsupported resource kind: {0}")]
    UnsupportedKind(String),

    #[error("container index out of range: {0}")]
    ContainerIndexOutOfRange(usize),
}

#[cfg(test)]
pub mod tests;
