//! Package table presentation: one display-ready row per package.

use pkgtracker_domain::package::Package;
use pkgtracker_domain::time::Timestamp;

/// Turns a timestamp into the text shown in the "last update" column.
pub trait TimestampFormat {
    fn format(&self, ts: &Timestamp) -> String;
}

/// RFC 3339 rendering, used where no locale is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Format;

impl TimestampFormat for Rfc3339Format {
    fn format(&self, ts: &Timestamp) -> String {
        ts.to_rfc3339()
    }
}

impl<F: Fn(&Timestamp) -> String> TimestampFormat for F {
    fn format(&self, ts: &Timestamp) -> String {
        self(ts)
    }
}

/// Display text of one package table row. Absent values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRow {
    pub id: String,
    /// Carrier, upper-cased.
    pub carrier: String,
    pub number: String,
    pub label: String,
    pub detailed_status: String,
    pub summary_status: String,
    pub last_update: String,
}

impl PackageRow {
    #[must_use]
    pub fn from_package(package: &Package, format: &impl TimestampFormat) -> Self {
        Self {
            id: package.id.to_string(),
            carrier: package.carrier.to_uppercase(),
            number: package.number.clone(),
            label: package.label.clone().unwrap_or_default(),
            detailed_status: package.detailed_status.clone().unwrap_or_default(),
            summary_status: package.summary_status.clone().unwrap_or_default(),
            last_update: package
                .last_update
                .as_ref()
                .map(|ts| format.format(ts))
                .unwrap_or_default(),
        }
    }
}

/// Rows for `packages`, in server order.
#[must_use]
pub fn package_rows(packages: &[Package], format: &impl TimestampFormat) -> Vec<PackageRow> {
    packages
        .iter()
        .map(|package| PackageRow::from_package(package, format))
        .collect()
}
