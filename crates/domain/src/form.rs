//! Settings form: raw field text to and from [`Settings`].
//!
//! Field names mirror the DOM ids of the settings form inputs.

use crate::error::FormError;
use crate::settings::{MqttSettings, Settings};

/// The text currently held by the six settings inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub poll_interval_minutes: String,
    pub mqtt_host: String,
    pub mqtt_port: String,
    pub mqtt_username: String,
    pub mqtt_password: String,
    pub mqtt_base_topic: String,
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        Self {
            poll_interval_minutes: settings.poll_interval_minutes.to_string(),
            mqtt_host: settings.mqtt.host.clone(),
            mqtt_port: settings.mqtt.port.to_string(),
            mqtt_username: settings.mqtt.username.clone(),
            mqtt_password: settings.mqtt.password.clone(),
            mqtt_base_topic: settings.mqtt.base_topic.clone(),
        }
    }
}

/// One input of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    PollIntervalMinutes,
    MqttHost,
    MqttPort,
    MqttUsername,
    MqttPassword,
    MqttBaseTopic,
}

impl SettingsField {
    /// Every field, in form order.
    pub const ALL: [Self; 6] = [
        Self::PollIntervalMinutes,
        Self::MqttHost,
        Self::MqttPort,
        Self::MqttUsername,
        Self::MqttPassword,
        Self::MqttBaseTopic,
    ];

    /// DOM id of the input element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::PollIntervalMinutes => "poll_interval_minutes",
            Self::MqttHost => "mqtt_host",
            Self::MqttPort => "mqtt_port",
            Self::MqttUsername => "mqtt_username",
            Self::MqttPassword => "mqtt_password",
            Self::MqttBaseTopic => "mqtt_base_topic",
        }
    }

    /// Whether the field holds a base-10 integer.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::PollIntervalMinutes | Self::MqttPort)
    }

    /// Current text of this field in `form`.
    #[must_use]
    pub fn value(self, form: &SettingsForm) -> &str {
        match self {
            Self::PollIntervalMinutes => &form.poll_interval_minutes,
            Self::MqttHost => &form.mqtt_host,
            Self::MqttPort => &form.mqtt_port,
            Self::MqttUsername => &form.mqtt_username,
            Self::MqttPassword => &form.mqtt_password,
            Self::MqttBaseTopic => &form.mqtt_base_topic,
        }
    }

    /// Replace the text of this field in `form`.
    pub fn set_value(self, form: &mut SettingsForm, value: String) {
        let slot = match self {
            Self::PollIntervalMinutes => &mut form.poll_interval_minutes,
            Self::MqttHost => &mut form.mqtt_host,
            Self::MqttPort => &mut form.mqtt_port,
            Self::MqttUsername => &mut form.mqtt_username,
            Self::MqttPassword => &mut form.mqtt_password,
            Self::MqttBaseTopic => &mut form.mqtt_base_topic,
        };
        *slot = value;
    }
}

impl SettingsForm {
    /// Assemble a [`Settings`] object from the field text.
    ///
    /// Text fields are taken verbatim; the two integer fields go through
    /// [`parse_int`].
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] naming the first integer field that does not
    /// parse or does not fit.
    pub fn parse(&self) -> Result<Settings, FormError> {
        let poll_interval_minutes = parse_field(self, SettingsField::PollIntervalMinutes)?;
        let port = parse_field(self, SettingsField::MqttPort)?;
        Ok(Settings {
            poll_interval_minutes,
            mqtt: MqttSettings {
                host: self.mqtt_host.clone(),
                port,
                username: self.mqtt_username.clone(),
                password: self.mqtt_password.clone(),
                base_topic: self.mqtt_base_topic.clone(),
            },
        })
    }
}

fn parse_field<T: TryFrom<i64>>(
    form: &SettingsForm,
    field: SettingsField,
) -> Result<T, FormError> {
    let text = field.value(form);
    let field = field.id();
    let value = parse_int(text).map_err(|err| match err {
        IntError::NoDigits => FormError::NotAnInteger { field },
        IntError::Overflow => FormError::OutOfRange { field },
    })?;
    T::try_from(value).map_err(|_| FormError::OutOfRange { field })
}

/// Why [`parse_int`] produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntError {
    /// No decimal digit after the optional whitespace and sign.
    NoDigits,
    /// The digits do not fit an `i64`.
    Overflow,
}

/// Base-10 integer parsing with browser `parseInt` prefix semantics.
///
/// Leading whitespace is skipped, one optional sign is accepted, and the
/// leading run of ASCII digits is used; anything after it is ignored.
///
/// # Errors
///
/// Returns [`IntError::NoDigits`] when there are no leading digits and
/// [`IntError::Overflow`] when they do not fit an `i64`.
pub fn parse_int(text: &str) -> Result<i64, IntError> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(IntError::NoDigits);
    }
    let digits = &rest[..end];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.map_err(|_| IntError::Overflow)
}
