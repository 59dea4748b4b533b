//! Shared-secret write authorization.
//!
//! Writes carry the secret in the request body (`auth`), so this is a plain
//! check called by handlers after the body is parsed rather than an
//! extractor.

use lyceum_core::error::CoreError;
use lyceum_core::resource::ResourceKind;
use lyceum_core::secret::WriteSecret;

use crate::error::AppError;

/// Reject the request with 403 unless `auth` matches the write secret.
pub fn require_write_access(
    secret: &WriteSecret,
    auth: Option<&str>,
    kind: ResourceKind,
    action: &'static str,
) -> Result<(), AppError> {
    if secret.verify(auth) {
        return Ok(());
    }

    tracing::warn!(
        kind = kind.collection(),
        action,
        auth_present = auth.is_some(),
        "Write rejected: secret mismatch",
    );
    Err(AppError::Core(CoreError::Forbidden))
}
