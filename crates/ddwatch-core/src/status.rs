use crate::config::Config;
use crate::field::Field;
use serde::Serialize;

/// Every field rendered at once, keyed the same way as the single-field
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub last_update_status: String,
    pub last_update_timestamp: String,
    pub last_update_ip: String,
    pub last_healthcheck_status: String,
    pub last_healthcheck_timestamp: String,
}

impl StatusReport {
    pub fn collect(config: &Config) -> Self {
        let render = |field: Field| field.lookup(config).render(field);
        Self {
            last_update_status: render(Field::UpdateStatus),
            last_update_timestamp: render(Field::UpdateTimestamp),
            last_update_ip: render(Field::UpdateIp),
            last_healthcheck_status: render(Field::HealthcheckStatus),
            last_healthcheck_timestamp: render(Field::HealthcheckTimestamp),
        }
    }

    /// `(json_key, value)` pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            (Field::UpdateStatus.json_key(), self.last_update_status.as_str()),
            (Field::UpdateTimestamp.json_key(), self.last_update_timestamp.as_str()),
            (Field::UpdateIp.json_key(), self.last_update_ip.as_str()),
            (Field::HealthcheckStatus.json_key(), self.last_healthcheck_status.as_str()),
            (
                Field::HealthcheckTimestamp.json_key(),
                self.last_healthcheck_timestamp.as_str(),
            ),
        ]
    }
}
