//! Version command implementation.

use crate::cli::VersionArgs;

/// Execute the version command.
pub fn execute(args: &VersionArgs) {
    let version = env!("CARGO_PKG_VERSION");
    if args.short {
        println!("{version}");
    } else {
        println!("kubeadm-upgrade {version}");
    }
}
