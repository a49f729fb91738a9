//! Client-side gate for OCR image uploads.
//!
//! Validation runs before the file is even read into memory; a rejected
//! file never produces a network request.

use crate::api::{ApiError, ApiResult};

/// Upload ceiling. The backend enforces the same limit, but hitting it
/// there wastes a 10MB+ round trip.
pub(crate) const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// `accept` attribute for the hidden file inputs.
pub(crate) const ACCEPT_IMAGE_TYPES: &str = "image/png,image/jpeg,image/jpg";

/// MIME and size check, reported as a validation error so the rejection
/// text reaches the user through the same channel as backend failures.
pub(crate) fn validate_image_file(mime_type: &str, size_bytes: f64) -> ApiResult<()> {
    if !mime_type.starts_with("image/") {
        return Err(ApiError::validation("画像ファイルを選択してください"));
    }

    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ApiError::validation(
            "ファイルサイズが大きすぎます（最大10MB）",
        ));
    }

    Ok(())
}

/// Local preview URLs come from `URL.createObjectURL` and must be revoked
/// when replaced; backend image URLs must not be.
pub(crate) fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    const MIB: f64 = 1024.0 * 1024.0;

    #[test]
    fn test_rejects_non_image_mime() {
        let err = validate_image_file("text/plain", 1024.0).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.user_message(), "画像ファイルを選択してください");

        // PDF uploads are a common mistake; same rejection.
        let err = validate_image_file("application/pdf", 1024.0).unwrap_err();
        assert_eq!(err.user_message(), "画像ファイルを選択してください");
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = validate_image_file("image/png", 15.0 * MIB).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.user_message(), "ファイルサイズが大きすぎます（最大10MB）");
    }

    #[test]
    fn test_mime_check_runs_before_size_check() {
        // An oversized non-image reports the type problem first.
        let err = validate_image_file("video/mp4", 15.0 * MIB).unwrap_err();
        assert_eq!(err.user_message(), "画像ファイルを選択してください");
    }

    #[test]
    fn test_accepts_small_image() {
        assert!(validate_image_file("image/png", MIB).is_ok());
        assert!(validate_image_file("image/jpeg", 9.9 * MIB).is_ok());
    }

    #[test]
    fn test_size_limit_is_exclusive() {
        assert!(validate_image_file("image/png", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image_file("image/png", MAX_IMAGE_BYTES + 1.0).is_err());
    }

    #[test]
    fn test_object_url_detection() {
        assert!(is_object_url("blob:http://localhost:3000/abc-123"));
        assert!(!is_object_url("http://localhost:8000/media/problems/1.png"));
        assert!(!is_object_url("/media/problems/1.png"));
    }
}
