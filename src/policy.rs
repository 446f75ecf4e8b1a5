use {
    crate::{config::UploadConfig, constants::*},
    log::trace,
    serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer},
};

/// One constraint in a POST policy document.
///
/// S3 validates the submitted form against the policy by set membership and pattern
/// match, not by position, but the serialized order is deterministic for a given input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Condition {
    /// `["starts-with", "$field", "prefix"]`: the form field must begin with the prefix.
    StartsWith {
        /// The form field name, without the `$` sigil; serialization adds it.
        field: String,
        /// The required prefix. Empty accepts any value.
        prefix: String,
    },

    /// `{"field": "value"}`: the form field must match the value exactly.
    Eq {
        /// The form field name.
        field: String,
        /// The required value.
        value: String,
    },

    /// `["content-length-range", min, max]`: inclusive bounds on the uploaded file size.
    ContentLengthRange {
        /// The smallest acceptable upload, in bytes.
        min: u64,
        /// The largest acceptable upload, in bytes.
        max: u64,
    },
}

impl Condition {
    /// Create a `starts-with` constraint on a form field.
    pub fn starts_with<F: Into<String>, P: Into<String>>(field: F, prefix: P) -> Self {
        Self::StartsWith {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    /// Create an exact-match constraint on a form field.
    pub fn eq<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an inclusive bound on the uploaded file size.
    pub fn content_length_range(min: u64, max: u64) -> Self {
        Self::ContentLengthRange {
            min,
            max,
        }
    }
}

impl Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::StartsWith {
                field,
                prefix,
            } => {
                let mut seq = serializer.serialize_tuple(3)?;
                seq.serialize_element(STARTS_WITH)?;
                seq.serialize_element(&format!("${}", field))?;
                seq.serialize_element(prefix)?;
                seq.end()
            }
            Self::Eq {
                field,
                value,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, value)?;
                map.end()
            }
            Self::ContentLengthRange {
                min,
                max,
            } => {
                let mut seq = serializer.serialize_tuple(3)?;
                seq.serialize_element(CONTENT_LENGTH_RANGE)?;
                seq.serialize_element(min)?;
                seq.serialize_element(max)?;
                seq.end()
            }
        }
    }
}

/// A POST policy document: an expiration wrapped around the ordered condition list.
///
/// Created fresh per signing request and never mutated; the serialized field order
/// (`expiration`, then `conditions`) is fixed by the struct declaration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PolicyDocument {
    expiration: String,
    conditions: Vec<Condition>,
}

impl PolicyDocument {
    /// Assemble the policy document authorizing one upload under `config`.
    ///
    /// The condition order is fixed: key prefix, request marker, size range, content
    /// type, bucket, ACL, success status, algorithm, credential scope, timestamp, the
    /// encryption algorithm when one is configured, and finally any caller-supplied
    /// conditions, verbatim.
    pub fn for_upload(config: &UploadConfig) -> Self {
        let mut conditions = Vec::with_capacity(11 + config.conditions().len());
        conditions.push(Condition::starts_with(FIELD_KEY, config.key_prefix()));
        // Fixed anti-tampering marker; trivially satisfied, required by the form-POST protocol.
        conditions.push(Condition::starts_with(COND_X_REQUESTED_WITH, ""));
        conditions.push(Condition::content_length_range(0, config.max_file_size()));
        conditions.push(Condition::starts_with(COND_CONTENT_TYPE, config.content_type_prefix()));
        conditions.push(Condition::eq(COND_BUCKET, config.bucket()));
        conditions.push(Condition::eq(FIELD_ACL, config.acl()));
        conditions.push(Condition::eq(FIELD_SUCCESS_ACTION_STATUS, SUCCESS_STATUS_CREATED));
        conditions.push(Condition::eq(FIELD_X_AMZ_ALGORITHM, AWS4_HMAC_SHA256));
        conditions.push(Condition::eq(FIELD_X_AMZ_CREDENTIAL, config.credential_scope()));
        conditions.push(Condition::eq(FIELD_X_AMZ_DATE, config.timestamp()));
        if let Some(algorithm) = config.server_side_encryption() {
            conditions.push(Condition::eq(HDR_X_AMZ_SERVER_SIDE_ENCRYPTION, algorithm));
        }
        conditions.extend_from_slice(config.conditions());

        trace!("policy document assembled with {} conditions", conditions.len());

        Self {
            expiration: config.expiration_iso8601(),
            conditions,
        }
    }

    /// Retrieve the expiration timestamp, UTC ISO-8601.
    #[inline]
    pub fn expiration(&self) -> &str {
        &self.expiration
    }

    /// Retrieve the ordered condition list.
    #[inline]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}
