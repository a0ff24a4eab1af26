//! Shared query parameter types for API handlers.

use alterino_core::error::CoreError;
use alterino_core::filter::ApplicationFilter;
use serde::Deserialize;

/// Dashboard filter parameters (`?search=&experience=`).
///
/// Shared by the list and CSV export endpoints so the export always contains
/// exactly the rows the dashboard shows.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    pub search: Option<String>,
    pub experience: Option<String>,
}

impl ApplicationListParams {
    pub fn to_filter(&self) -> Result<ApplicationFilter, CoreError> {
        ApplicationFilter::from_params(self.search.as_deref(), self.experience.as_deref())
    }
}
