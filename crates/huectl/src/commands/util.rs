//! Small helpers shared by command handlers.

use uuid::Uuid;

use huectl_core::ResourceHandle;

use crate::error::CliError;

/// Parse a CLI-provided resource id into a UUID.
pub fn parse_id(raw: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(raw).map_err(|_| CliError::Validation {
        field: "id".into(),
        reason: format!("'{raw}' is not a resource UUID"),
    })
}

/// One-line acknowledgment for a mutation.
pub fn ack_line(handles: &[ResourceHandle]) -> String {
    if handles.is_empty() {
        "ok".into()
    } else {
        handles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
