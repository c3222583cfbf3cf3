//! `kubeadm-upgrade` - print the kubeadm configuration used for an upgrade.

use kubeadm_upgrade::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
