use {
    crate::{constants::*, crypto::hmac_sha256, PostPolicyError},
    chrono::NaiveDate,
    std::fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// A raw AWS secret key (`kSecret`), held with the `"AWS4"` prefix the first derivation
/// stage requires.
///
/// The key material is transient: it exists for the duration of one signing call and is
/// redacted from `Debug` and `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct KSecretKey {
    /// The secret key, prefixed with "AWS4".
    prefixed_key: Vec<u8>,
}

/// The `kDate` key: `HMAC-SHA256("AWS4" + secret, "YYYYMMDD")`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KDateKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kRegion` key: a `kDate` key, HMAC-SHA256 hashed with the region.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KRegionKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kService` key: a `kRegion` key, HMAC-SHA256 hashed with the `"s3"` service name.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KServiceKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kSigning` key: a `kService` key, HMAC-SHA256 hashed with the `"aws4_request"` string.
///
/// This is the only key in the chain used beyond derivation; it signs the encoded policy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KSigningKey {
    /// The resulting raw signing key.
    key: [u8; SHA256_OUTPUT_LEN],
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KDateKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KRegionKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KServiceKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KSigningKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl Debug for KSecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSecretKey")
    }
}

impl Debug for KDateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KDateKey")
    }
}

impl Debug for KRegionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KRegionKey")
    }
}

impl Debug for KServiceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KServiceKey")
    }
}

impl Debug for KSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSigningKey")
    }
}

impl Display for KSecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSecretKey")
    }
}

impl Display for KSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("KSigningKey")
    }
}

impl KSecretKey {
    /// Create a new `KSecretKey` from a raw AWS secret access key.
    pub fn new(secret_access_key: &str) -> Result<Self, PostPolicyError> {
        if secret_access_key.is_empty() {
            return Err(PostPolicyError::MissingConfiguration(MSG_MISSING_SECRET_KEY.to_string()));
        }

        let mut prefixed_key = Vec::with_capacity(AWS4.len() + secret_access_key.len());
        prefixed_key.extend_from_slice(AWS4);
        prefixed_key.extend_from_slice(secret_access_key.as_bytes());
        Ok(Self {
            prefixed_key,
        })
    }

    /// Create a new `KDateKey` from this `KSecretKey` and a date.
    pub fn to_kdate(&self, date: NaiveDate) -> KDateKey {
        let date = date.format(ISO8601_DATE_FORMAT).to_string();
        KDateKey {
            key: hmac_sha256(self.prefixed_key.as_slice(), date.as_bytes()),
        }
    }

    /// Create a new `KSigningKey` from this `KSecretKey`, a date, and a region.
    pub fn to_ksigning(&self, date: NaiveDate, region: &str) -> KSigningKey {
        self.to_kdate(date).to_ksigning(region)
    }
}

impl KDateKey {
    /// Create a new `KRegionKey` from this `KDateKey` and a region.
    pub fn to_kregion(&self, region: &str) -> KRegionKey {
        KRegionKey {
            key: hmac_sha256(self.key.as_slice(), region.as_bytes()),
        }
    }

    /// Create a new `KSigningKey` from this `KDateKey` and a region.
    pub fn to_ksigning(&self, region: &str) -> KSigningKey {
        self.to_kregion(region).to_ksigning()
    }
}

impl KRegionKey {
    /// Create a new `KServiceKey` from this `KRegionKey`.
    pub fn to_kservice(&self) -> KServiceKey {
        KServiceKey {
            key: hmac_sha256(self.key.as_slice(), S3_SERVICE.as_bytes()),
        }
    }

    /// Create a new `KSigningKey` from this `KRegionKey`.
    pub fn to_ksigning(&self) -> KSigningKey {
        self.to_kservice().to_ksigning()
    }
}

impl KServiceKey {
    /// Create a new `KSigningKey` from this `KServiceKey`.
    pub fn to_ksigning(&self) -> KSigningKey {
        KSigningKey {
            key: hmac_sha256(self.key.as_slice(), AWS4_REQUEST.as_bytes()),
        }
    }
}

impl KSigningKey {
    /// Sign a message with this key, returning the lowercase hex signature.
    pub fn sign(&self, message: &[u8]) -> String {
        hex::encode(hmac_sha256(self.key.as_slice(), message))
    }
}
