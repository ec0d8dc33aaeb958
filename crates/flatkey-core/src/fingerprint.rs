use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use flatkey_value::Value;

use crate::flatten::{flatten_with, COMPARE_SEPARATOR};
use crate::options::FlattenOptions;
use crate::registry::{self, TransformerRegistry};

/// Domain separator for structural fingerprints: `b"flatkey:fingerprint:v1\0"`.
const FINGERPRINT_DOMAIN_SEPARATOR: &[u8] = b"flatkey:fingerprint:v1\0";

/// Supported digest algorithms for structural fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256 (the current default).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

/// Computes the structural fingerprint of `value` using the process-wide
/// default transformer registry.
///
/// Formula: `sha256(domain_separator || joined canonical form)`, where
/// the canonical form is the sorted flatten output joined with the
/// comparison separator. Two values have equal fingerprints exactly when
/// `flatten_compare` holds for them under the same options and registry
/// state.
pub fn fingerprint(value: &Value, options: &FlattenOptions) -> Digest {
    let registry = registry::default_registry_snapshot();
    fingerprint_with(value, options, &registry)
}

/// Computes a structural fingerprint against an explicit registry.
pub fn fingerprint_with(
    value: &Value,
    options: &FlattenOptions,
    registry: &TransformerRegistry,
) -> Digest {
    let joined = flatten_with(value, options, registry).join(COMPARE_SEPARATOR);

    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_DOMAIN_SEPARATOR);
    hasher.update(joined.as_bytes());
    let bytes = hasher.finalize();

    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);
    Digest {
        alg: DigestAlg::Sha256,
        b64,
    }
}
