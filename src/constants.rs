//! Common constants used throughout the crate.
//!
//! This is consolidated here so the entire crate is on the same page about the wire-level
//! strings a POST policy is built from. If a value is spelled incorrectly, at least it can
//! be fixed in one spot.
//!
//! Tests that are testing the content of an error message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically.

/// Prefix applied to the secret access key before the first key-derivation stage.
pub(crate) const AWS4: &[u8] = b"AWS4";

/// Algorithm identifier for AWS SigV4
pub(crate) const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";

/// String included at the end of the AWS SigV4 credential scope
pub(crate) const AWS4_REQUEST: &str = "aws4_request";

/// Policy condition field for the target bucket
pub(crate) const COND_BUCKET: &str = "bucket";

/// Policy condition field for the uploaded content type
pub(crate) const COND_CONTENT_TYPE: &str = "content-type";

/// Policy condition field for the anti-tampering request marker
pub(crate) const COND_X_REQUESTED_WITH: &str = "x-requested-with";

/// Policy condition operator bounding the uploaded file size
pub(crate) const CONTENT_LENGTH_RANGE: &str = "content-length-range";

/// Default canned ACL applied to uploaded objects
pub(crate) const DEFAULT_ACL: &str = "private";

/// Default HTTP method for the upload-completion callback
pub(crate) const DEFAULT_CALLBACK_METHOD: &str = "POST";

/// Default parameter name for the upload-completion callback
pub(crate) const DEFAULT_CALLBACK_PARAM: &str = "file";

/// Default policy lifetime, measured from the signing instant, in hours
pub(crate) const DEFAULT_EXPIRATION_HOURS: i64 = 10;

/// Default prefix uploaded object keys must start with
pub(crate) const DEFAULT_KEY_PREFIX: &str = "uploads/";

/// Default upper bound on the uploaded file size, in bytes (500 MiB)
pub(crate) const DEFAULT_MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Default region when none is configured
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Error code: ConfigurationError
pub(crate) const ERR_CODE_CONFIGURATION: &str = "ConfigurationError";

/// Error code: EncodingError
pub(crate) const ERR_CODE_ENCODING: &str = "EncodingError";

/// Form field for the object ACL
pub(crate) const FIELD_ACL: &str = "acl";

/// Form field for the object key
pub(crate) const FIELD_KEY: &str = "key";

/// Form field for the encoded policy document
pub(crate) const FIELD_POLICY: &str = "policy";

/// Form field for the HTTP status returned on a successful upload
pub(crate) const FIELD_SUCCESS_ACTION_STATUS: &str = "success_action_status";

/// Form field for the signature algorithm
pub(crate) const FIELD_X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";

/// Form field for the credential scope
pub(crate) const FIELD_X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";

/// Form field for the signing timestamp
pub(crate) const FIELD_X_AMZ_DATE: &str = "X-Amz-Date";

/// Form field for the signature itself
pub(crate) const FIELD_X_AMZ_SIGNATURE: &str = "X-Amz-Signature";

/// Form field for the anti-tampering request marker
pub(crate) const FIELD_X_REQUESTED_WITH: &str = "X-Requested-With";

/// Header selecting a server-side encryption algorithm
pub(crate) const HDR_X_AMZ_SERVER_SIDE_ENCRYPTION: &str = "x-amz-server-side-encryption";

/// Compact ISO8601 format used for the signing timestamp.
pub(crate) const ISO8601_COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Short date format used in the credential scope
pub(crate) const ISO8601_DATE_FORMAT: &str = "%Y%m%d";

/// Extended ISO8601 format used for the policy expiration
pub(crate) const ISO8601_EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Error message: `"Expiration must fall strictly after the signing instant"`
pub(crate) const MSG_EXPIRATION_NOT_AFTER_SIGNING: &str = "Expiration must fall strictly after the signing instant";

/// Error message: `"Access key id is required"`
pub(crate) const MSG_MISSING_ACCESS_KEY: &str = "Access key id is required";

/// Error message: `"Bucket name is required"`
pub(crate) const MSG_MISSING_BUCKET: &str = "Bucket name is required";

/// Error message: `"Secret access key is required"`
pub(crate) const MSG_MISSING_SECRET_KEY: &str = "Secret access key is required";

/// Base domain for derived upload endpoint URLs
pub(crate) const S3_BASE_DOMAIN: &str = "amazonaws.com";

/// Service name bound into the credential scope
pub(crate) const S3_SERVICE: &str = "s3";

/// The length of a SHA-256 digest in bytes.
pub(crate) const SHA256_OUTPUT_LEN: usize = 32;

/// Policy condition operator matching a field against a prefix
pub(crate) const STARTS_WITH: &str = "starts-with";

/// HTTP status S3 returns (and the policy requires) on a successful upload
pub(crate) const SUCCESS_STATUS_CREATED: &str = "201";

/// Value of the anti-tampering request marker field
pub(crate) const XHR: &str = "xhr";
