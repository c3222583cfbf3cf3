//! Configuration record types.
//!
//! Mirrors the `kubeadm.k8s.io/v1alpha2` MasterConfiguration. Serialized
//! key names are fixed by serde renames, not by Rust field names.
//!
//! Plain fields always serialize, taking their zero value when unset.
//! Optional fields that kubeadm marks `omitempty` are skipped when unset so
//! the printed document only grows when a caller actually sets them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// API group and version stamped onto every printed configuration.
pub const API_VERSION: &str = "kubeadm.k8s.io/v1alpha2";

/// Kind stamped onto every printed configuration.
pub const KIND: &str = "MasterConfiguration";

/// Free-form component configuration passed through to kube-proxy or the kubelet.
pub type ComponentConfig = BTreeMap<String, serde_yaml::Value>;

/// Cluster bootstrap configuration for a control-plane node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterConfiguration {
    pub api: Api,
    pub audit_policy: AuditPolicy,
    pub certificates_dir: String,
    pub cloud_provider: String,
    pub etcd: Etcd,
    pub image_repository: String,
    pub kube_proxy: KubeProxy,
    pub kubelet_configuration: KubeletConfiguration,
    pub kubernetes_version: String,
    pub networking: Networking,
    pub node_name: String,
    pub privileged_pods: bool,
    pub token: String,
    pub unified_control_plane_image: String,

    #[serde(rename = "apiServerCertSANs", skip_serializing_if = "Option::is_none")]
    pub api_server_cert_sans: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub api_server_extra_args: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub controller_manager_extra_args: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scheduler_extra_args: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_gates: BTreeMap<String, bool>,
    /// Bootstrap token lifetime, as a duration string such as `24h0m0s`.
    #[serde(rename = "tokenTTL", skip_serializing_if = "Option::is_none")]
    pub token_ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_usages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_groups: Option<Vec<String>>,
}

/// API server reachability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Api {
    pub advertise_address: String,
    pub bind_port: i32,
    pub control_plane_endpoint: String,
}

/// API server audit logging.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditPolicy {
    pub log_dir: String,
    pub path: String,
    /// Days to retain audit logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_max_age: Option<i32>,
}

/// etcd connection and deployment mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Etcd {
    pub ca_file: String,
    pub cert_file: String,
    pub data_dir: String,
    /// External etcd endpoints. `None` prints as `null`, `Some(vec![])` as `[]`.
    pub endpoints: Option<Vec<String>>,
    pub image: String,
    pub key_file: String,
    /// Present only when etcd runs self-hosted inside the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hosted: Option<SelfHostedEtcd>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: BTreeMap<String, String>,
    #[serde(rename = "serverCertSANs", skip_serializing_if = "Option::is_none")]
    pub server_cert_sans: Option<Vec<String>>,
    #[serde(rename = "peerCertSANs", skip_serializing_if = "Option::is_none")]
    pub peer_cert_sans: Option<Vec<String>>,
}

/// Self-hosted etcd, managed by the etcd operator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfHostedEtcd {
    pub certificates_dir: String,
    pub cluster_service_name: String,
    pub etcd_version: String,
    pub operator_version: String,
}

/// Cluster networking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Networking {
    pub dns_domain: String,
    pub pod_subnet: String,
    pub service_subnet: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeProxy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubeletConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_config: Option<ComponentConfig>,
}

/// Serialized form of a configuration with its type header.
#[derive(Serialize)]
pub(crate) struct Versioned<'a> {
    #[serde(rename = "apiVersion")]
    pub api_version: &'static str,
    pub kind: &'static str,
    #[serde(flatten)]
    pub config: &'a MasterConfiguration,
}

impl MasterConfiguration {
    /// Wrap the configuration with the `apiVersion`/`kind` header.
    pub(crate) const fn versioned(&self) -> Versioned<'_> {
        Versioned {
            api_version: API_VERSION,
            kind: KIND,
            config: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &serde_yaml::Value) -> Vec<String> {
        value
            .as_mapping()
            .expect("mapping")
            .keys()
            .map(|k| k.as_str().expect("string key").to_string())
            .collect()
    }

    #[test]
    fn test_keys_are_lower_camel_case() {
        let value = serde_yaml::to_value(MasterConfiguration::default()).unwrap();
        let keys = keys(&value);
        for expected in [
            "api",
            "auditPolicy",
            "certificatesDir",
            "cloudProvider",
            "etcd",
            "imageRepository",
            "kubeProxy",
            "kubeletConfiguration",
            "kubernetesVersion",
            "networking",
            "nodeName",
            "privilegedPods",
            "token",
            "unifiedControlPlaneImage",
        ] {
            assert!(keys.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(keys.iter().all(|k| !k.contains('_')));
    }

    #[test]
    fn test_unset_optional_fields_are_skipped() {
        let value = serde_yaml::to_value(MasterConfiguration::default()).unwrap();
        let keys = keys(&value);
        assert_eq!(keys.len(), 14);
        assert!(!keys.contains(&"featureGates".to_string()));
        assert!(!keys.contains(&"tokenTTL".to_string()));

        let etcd = keys_of(&value, "etcd");
        assert_eq!(
            etcd,
            ["caFile", "certFile", "dataDir", "endpoints", "image", "keyFile"]
        );
    }

    #[test]
    fn test_acronym_renames() {
        let cfg = MasterConfiguration {
            api_server_cert_sans: Some(vec!["10.0.0.1".into()]),
            token_ttl: Some("24h0m0s".into()),
            etcd: Etcd {
                server_cert_sans: Some(vec![]),
                peer_cert_sans: Some(vec![]),
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_yaml::to_value(&cfg).unwrap();
        let keys = keys(&value);
        assert!(keys.contains(&"apiServerCertSANs".to_string()));
        assert!(keys.contains(&"tokenTTL".to_string()));
        let etcd = keys_of(&value, "etcd");
        assert!(etcd.contains(&"serverCertSANs".to_string()));
        assert!(etcd.contains(&"peerCertSANs".to_string()));
    }

    #[test]
    fn test_self_hosted_absent_differs_from_default() {
        let absent = Etcd::default();
        let present = Etcd {
            self_hosted: Some(SelfHostedEtcd::default()),
            ..Default::default()
        };
        assert_ne!(absent, present);
        let value = serde_yaml::to_value(&present).unwrap();
        assert!(value.get("selfHosted").is_some());
        let value = serde_yaml::to_value(&absent).unwrap();
        assert!(value.get("selfHosted").is_none());
    }

    #[test]
    fn test_versioned_header() {
        let cfg = MasterConfiguration::default();
        let value = serde_yaml::to_value(cfg.versioned()).unwrap();
        assert_eq!(value["apiVersion"].as_str(), Some(API_VERSION));
        assert_eq!(value["kind"].as_str(), Some(KIND));
        assert!(value.get("networking").is_some());
    }

    fn keys_of(value: &serde_yaml::Value, key: &str) -> Vec<String> {
        keys(&value[key])
    }
}
