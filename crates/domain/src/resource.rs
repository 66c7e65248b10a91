use crate::expiry::{days_until, derive_status, expiry_date_to_millis, ResourceStatus};
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Domain,
    Hosting,
    Ssl,
    Email,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Hosting => "hosting",
            Self::Ssl => "ssl",
            Self::Email => "email",
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domain" => Ok(Self::Domain),
            "hosting" => Ok(Self::Hosting),
            "ssl" => Ok(Self::Ssl),
            "email" => Ok(Self::Email),
            _ => Err(format!("Invalid resource type: {}", s)),
        }
    }
}

/// A renewable asset tracked by the dashboard: a domain, hosting plan,
/// SSL certificate or email suite with an expiry date.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ID,
    pub resource_type: ResourceType,
    pub label: String,
    pub hostname: String,
    pub provider: String,
    /// ISO day (`YYYY-MM-DD`) at which the resource expires
    pub expiry_date: String,
    /// Last status written to storage. Treated as a cache: reads recompute
    /// the status from `expiry_date` via `current_status`.
    pub status: ResourceStatus,
    pub renewal_url: String,
    pub notes: String,
    /// Millisecond timestamp of the last refresh
    pub last_checked: i64,
    pub tags: Vec<String>,
}

impl Resource {
    /// Status recomputed against the fixed thresholds for the given `now`
    /// snapshot. Falls back to the stored status when the expiry date is
    /// unparseable.
    pub fn current_status(&self, now_ms: i64) -> ResourceStatus {
        match expiry_date_to_millis(&self.expiry_date) {
            Some(expiry_ms) => derive_status(days_until(expiry_ms, now_ms)),
            None => self.status,
        }
    }

    /// Default hostname derived from a label: lowercased, spaces replaced
    /// with hyphens, suffixed `.local`.
    pub fn hostname_from_label(label: &str) -> String {
        let slug = label
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{}.local", slug)
    }
}

impl Entity for Resource {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expiry::MILLIS_PER_DAY;

    fn resource(expiry_date: &str) -> Resource {
        Resource {
            id: "r1".into(),
            resource_type: ResourceType::Domain,
            label: "Main Site".into(),
            hostname: "main-site.local".into(),
            provider: "Acme".into(),
            expiry_date: expiry_date.into(),
            status: ResourceStatus::Healthy,
            renewal_url: String::new(),
            notes: String::new(),
            last_checked: 0,
            tags: Vec::new(),
        }
    }

    #[test]
    fn recomputes_status_from_expiry() {
        let r = resource("1970-01-05");
        assert_eq!(r.current_status(0), ResourceStatus::DueSoon);
        assert_eq!(r.current_status(20 * MILLIS_PER_DAY), ResourceStatus::Overdue);
        assert_eq!(r.current_status(-30 * MILLIS_PER_DAY), ResourceStatus::Healthy);
    }

    #[test]
    fn keeps_stored_status_for_bad_expiry_dates() {
        let r = resource("unknown");
        assert_eq!(r.current_status(0), ResourceStatus::Healthy);
    }

    #[test]
    fn derives_hostname_from_label() {
        assert_eq!(
            Resource::hostname_from_label("My Cool  Site"),
            "my-cool-site.local"
        );
        assert_eq!(Resource::hostname_from_label("api"), "api.local");
    }
}
