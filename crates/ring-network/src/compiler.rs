//! Seam to the external network compiler.
//!
//! Scenario synthesis never compiles networks itself.  It hands the
//! [`Topology`] to a [`NetworkCompiler`] and keeps whatever artifact handle
//! comes back.  Backends live outside this crate (see
//! `ring_output::NetconvertCompiler`); tests use in-memory fakes.

use std::path::PathBuf;

use crate::{NetworkResult, Topology};

/// Handle to a compiled network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkArtifact {
    /// Artifact file name, e.g. `loop-230m1l.net.xml`.
    pub file_name: String,
    /// Where the artifact was written.
    pub path: PathBuf,
}

/// Compiles a topology description into a network artifact.
///
/// Calls are blocking.  A failure is fatal to scenario generation and must
/// be returned unmodified; callers do not retry.
pub trait NetworkCompiler {
    fn compile(&mut self, topology: &Topology, output_name: &str) -> NetworkResult<NetworkArtifact>;
}
