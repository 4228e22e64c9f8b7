use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::codec;
use crate::domain::filter::ContactExportFilter;
use crate::domain::validation::{Validate, ValidationError, ValidationResult};

/// Minimum number of filters accepted in a single export request.
pub const MIN_FILTERS_PER_REQUEST: usize = 1;
/// Maximum number of filters accepted in a single export request.
pub const MAX_FILTERS_PER_REQUEST: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle status of a contact export.
pub enum ContactExportStatus {
    Created,
    Started,
    Finished,
    /// Sentinel for statuses this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A contact export job as reported by the API.
pub struct ContactExport {
    pub id: i64,
    #[serde(default)]
    pub status: ContactExportStatus,
    #[serde(default, with = "codec::iso_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "codec::iso_datetime")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Location of the exported file. Only present once the export finished.
    #[serde(default)]
    pub url: Option<Url>,
}

impl ContactExport {
    /// `true` when the export finished and the file URL is available.
    pub fn is_download_ready(&self) -> bool {
        self.status == ContactExportStatus::Finished && self.url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for creating a contact export.
pub struct CreateContactExportRequest {
    filters: Vec<ContactExportFilter>,
}

impl CreateContactExportRequest {
    /// Build a request from the given filters.
    ///
    /// Filters are collected into an owned vector. Use [`Validate::validate`]
    /// (invoked automatically before dispatch) to check the count bounds and
    /// per-filter rules.
    pub fn new(filters: impl IntoIterator<Item = ContactExportFilter>) -> Self {
        Self {
            filters: filters.into_iter().collect(),
        }
    }

    /// Filters carried by this request.
    pub fn filters(&self) -> &[ContactExportFilter] {
        &self.filters
    }
}

impl Validate for CreateContactExportRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if self.filters.is_empty() {
            result.push(ValidationError::EmptyCollection { field: "filters" });
            return result;
        }
        if self.filters.len() > MAX_FILTERS_PER_REQUEST {
            result.push(ValidationError::TooManyItems {
                field: "filters",
                max: MAX_FILTERS_PER_REQUEST,
                actual: self.filters.len(),
            });
            return result;
        }
        for filter in &self.filters {
            filter.validate_into(&mut result);
        }
        result
    }
}
