//! Locale-aware rendering of timestamps through the browser's `Date`.

use pkgtracker_app::presenter::TimestampFormat;
use pkgtracker_domain::time::Timestamp;
use wasm_bindgen::JsValue;

/// Formats like `new Date(ts).toLocaleString()` in the user's locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormat;

impl TimestampFormat for LocaleFormat {
    #[allow(clippy::cast_precision_loss)]
    fn format(&self, ts: &Timestamp) -> String {
        let millis = JsValue::from_f64(ts.timestamp_millis() as f64);
        js_sys::Date::new(&millis)
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into()
    }
}
