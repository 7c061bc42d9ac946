//! Settings: poll interval and MQTT broker connection, owned by the server.

use serde::{Deserialize, Serialize};

/// Server-side tracker settings as exchanged over `/api/settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minutes between two background polls.
    pub poll_interval_minutes: u32,
    /// Broker the backend publishes package state to.
    pub mqtt: MqttSettings,
}

/// MQTT broker connection details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MqttSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Topic prefix the backend publishes under; passed through untouched.
    pub base_topic: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_minutes: 7,
            mqtt: MqttSettings::default(),
        }
    }
}

impl Default for MqttSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 1883,
            username: String::new(),
            password: String::new(),
            base_topic: "package_tracker".to_string(),
        }
    }
}
