//! `netconvert` network-compiler backend.
//!
//! Writes `<name>.nod.xml`, `.edg.xml`, `.typ.xml` and `.netccfg` into the
//! network directory, then runs
//!
//! ```text
//! netconvert -c <net_dir>/<name>.netccfg --output-file=<out_dir>/<name>.net.xml
//! ```
//!
//! A non-zero exit is returned as [`NetworkError::Compile`] with the tool's
//! stderr unmodified.  Nothing is retried.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use ring_network::{NetworkArtifact, NetworkCompiler, NetworkError, NetworkResult, Topology};

use crate::writer::{DocKind, DocumentWriter};
use crate::{OutputResult, XmlWriter};

pub struct NetconvertCompiler {
    binary:  PathBuf,
    net_dir: PathBuf,
    out_dir: PathBuf,
}

impl NetconvertCompiler {
    /// Inputs go to `net_dir`, the compiled network to `out_dir`.  Uses the
    /// `netconvert` found on `PATH`.
    pub fn new(net_dir: &Path, out_dir: &Path) -> Self {
        Self {
            binary:  PathBuf::from("netconvert"),
            net_dir: net_dir.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
        }
    }

    /// Use a specific compiler binary.
    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Write the compiler input documents and return the configuration path.
    pub fn write_inputs(&self, topology: &Topology, name: &str) -> OutputResult<PathBuf> {
        let mut writer = XmlWriter::new(&self.net_dir)?;
        writer.write_topology(topology, name)?;
        let cfg = writer.write_net_config(name)?;
        writer.finish()?;
        Ok(cfg)
    }

    fn tool_name(&self) -> String {
        self.binary.display().to_string()
    }
}

impl NetworkCompiler for NetconvertCompiler {
    fn compile(&mut self, topology: &Topology, output_name: &str) -> NetworkResult<NetworkArtifact> {
        let cfg = self
            .write_inputs(topology, output_name)
            .map_err(|e| NetworkError::Input(e.to_string()))?;

        std::fs::create_dir_all(&self.out_dir)?;
        let file_name = DocKind::Net.file_name(output_name);
        let path = self.out_dir.join(&file_name);

        info!("compiling network {file_name} with {}", self.tool_name());
        let output = Command::new(&self.binary)
            .arg("-c")
            .arg(&cfg)
            .arg(format!("--output-file={}", path.display()))
            .output()?;

        if !output.status.success() {
            return Err(NetworkError::Compile {
                tool:    self.tool_name(),
                status:  output.status.to_string(),
                message: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        debug!("{} stdout: {}", self.tool_name(), String::from_utf8_lossy(&output.stdout).trim());

        Ok(NetworkArtifact { file_name, path })
    }
}
