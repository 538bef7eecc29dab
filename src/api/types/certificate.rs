//! TLS certificate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate attached to a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u64,
    pub server_id: u64,
    pub site_id: u64,
    pub domain: String,
    #[serde(default, rename = "type")]
    pub certificate_type: Option<String>,
    /// Issuance progress string while the upstream is still obtaining the
    /// certificate.
    #[serde(default)]
    pub request_status: Option<String>,
    pub status: String,
    #[serde(default)]
    pub active: bool,
    /// `None` until issuance completes.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Certificate {
    /// Whole days until expiry, negative once expired. `None` while the
    /// certificate has no expiry yet.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|at| (at - now).num_days())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateList {
    pub certificates: Vec<Certificate>,
}

impl CertificateList {
    pub fn count(&self) -> usize {
        self.certificates.len()
    }
}

/// Payload for `POST .../certificates/letsencrypt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObtainCertificate {
    pub domains: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_certificate_round_trip() {
        let wire = json!({
            "id": 5,
            "server_id": 7,
            "site_id": 3,
            "domain": "example.com",
            "type": "letsencrypt",
            "request_status": "created",
            "status": "installed",
            "active": true,
            "expires_at": "2026-11-01T00:00:00Z",
            "created_at": "2026-08-01 00:00:00"
        });
        let cert: Certificate = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(cert.domain, "example.com");
        assert!(cert.active);
        assert_eq!(serde_json::to_value(&cert).unwrap(), wire);
    }

    #[test]
    fn test_pending_certificate_has_no_expiry() {
        let cert: Certificate = serde_json::from_value(json!({
            "id": 5,
            "server_id": 7,
            "site_id": 3,
            "domain": "example.com",
            "status": "installing"
        }))
        .unwrap();
        assert_eq!(cert.expires_at, None);
        assert_eq!(cert.days_until_expiry(Utc::now()), None);
    }

    #[test]
    fn test_days_until_expiry() {
        let now: DateTime<Utc> = "2026-08-01T00:00:00Z".parse().unwrap();
        let cert: Certificate = serde_json::from_value(json!({
            "id": 5,
            "server_id": 7,
            "site_id": 3,
            "domain": "example.com",
            "status": "installed",
            "expires_at": "2026-08-15T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(cert.days_until_expiry(now), Some(14));
    }
}
