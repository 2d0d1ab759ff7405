//! Dataset kind detection from the header set
//!
//! Detection is a single pass over the headers, performed once per dataset
//! and never re-evaluated mid-stream: a file that mixes shapes is treated as
//! whatever the header line says it is.

use crate::app::models::DatasetKind;
use crate::constants::CALL_CENTER_INDICATORS;

/// Classify a dataset from its header names.
///
/// A header set containing any of the call-center indicator headers
/// (exact literal match, not aliases) is call-center data; everything else
/// is ticket data. Pure function of the header set only.
pub fn detect_kind(headers: &[String]) -> DatasetKind {
    let is_call_center = headers
        .iter()
        .any(|header| CALL_CENTER_INDICATORS.contains(&header.as_str()));

    if is_call_center {
        DatasetKind::CallCenter
    } else {
        DatasetKind::Ticket
    }
}
