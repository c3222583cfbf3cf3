//! `kubeadm-config` — kubeadm MasterConfiguration model and printer.
//!
//! Renders a cluster bootstrap configuration as the labeled YAML dump shown
//! by `kubeadm upgrade` before it touches the cluster.
//!
//! # Quick Start
//!
//! ```
//! use kubeadm_config::{MasterConfiguration, print_configuration};
//!
//! let cfg = MasterConfiguration {
//!     kubernetes_version: "v1.7.1".into(),
//!     ..Default::default()
//! };
//!
//! let mut out = Vec::new();
//! print_configuration(Some(&cfg), &mut out).unwrap();
//! assert!(out.starts_with(b"[upgrade/config] Configuration used:\n\tapi:\n"));
//!
//! // No configuration, no output.
//! let mut out = Vec::new();
//! print_configuration(None, &mut out).unwrap();
//! assert!(out.is_empty());
//! ```

pub mod error;
pub mod load;
pub mod model;
pub mod print;
pub mod yaml;

pub use error::{ConfigError, Result};
pub use load::{from_yaml_str, load_file};
pub use model::{
    API_VERSION, Api, AuditPolicy, ComponentConfig, Etcd, KIND, KubeProxy, KubeletConfiguration,
    MasterConfiguration, Networking, SelfHostedEtcd,
};
pub use print::{BANNER, print_configuration, render_configuration};
