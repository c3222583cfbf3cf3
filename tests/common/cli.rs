use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory the CLI runs in.
pub struct UpgradeWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl UpgradeWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write a file into the workspace and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write workspace file");
        path
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn command(workspace: &UpgradeWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("kubeadm-upgrade").expect("kubeadm-upgrade binary");
    cmd.current_dir(&workspace.root)
        .env_remove("KUBEADM_UPGRADE_CONFIG")
        .env_remove("KUBEADM_UPGRADE_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_cli<I, S>(workspace: &UpgradeWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_cli_with_stdin(workspace, args, "", label)
}

pub fn run_cli_with_stdin<I, S>(
    workspace: &UpgradeWorkspace,
    args: I,
    stdin: &str,
    label: &str,
) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = command(workspace)
        .args(args)
        .write_stdin(stdin.to_string())
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run kubeadm-upgrade: {e}"));
    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
