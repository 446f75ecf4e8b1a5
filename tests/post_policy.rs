use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{TimeZone, Utc};
use hmac::{Hmac, Mac};
use s3_post_policy::{Condition, PresignedPostForm, UploadConfig, UploadConfigBuilder};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).unwrap();
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

fn scenario_config() -> UploadConfigBuilder {
    let mut builder = UploadConfig::builder();
    builder
        .bucket("b")
        .region("us-east-1")
        .access_key_id("AK")
        .secret_access_key("SK")
        .acl("private")
        .key_prefix("uploads/")
        .max_file_size(1000)
        .signed_at(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
        .expiration(Utc.with_ymd_and_hms(2021, 1, 1, 10, 0, 0).unwrap());
    builder
}

#[test_log::test]
fn form_matches_independently_recomputed_signature() {
    let config = scenario_config().build().unwrap();
    let form = PresignedPostForm::for_upload(&config).unwrap();

    let names: Vec<&str> = form.fields().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        [
            "key",
            "acl",
            "policy",
            "success_action_status",
            "X-Requested-With",
            "X-Amz-Algorithm",
            "X-Amz-Credential",
            "X-Amz-Date",
            "X-Amz-Signature",
        ],
    );

    assert_eq!(form.field("X-Amz-Credential"), Some("AK/20210101/us-east-1/s3/aws4_request"));
    assert_eq!(form.field("X-Amz-Date"), Some("20210101T000000Z"));

    // Recompute the whole derivation chain from scratch and sign the encoded policy.
    let kdate = hmac_sha256(b"AWS4SK", b"20210101");
    let kregion = hmac_sha256(&kdate, b"us-east-1");
    let kservice = hmac_sha256(&kregion, b"s3");
    let ksigning = hmac_sha256(&kservice, b"aws4_request");
    let expected = hex::encode(hmac_sha256(&ksigning, form.field("policy").unwrap().as_bytes()));

    assert_eq!(form.field("X-Amz-Signature"), Some(expected.as_str()));
    assert_eq!(
        form.field("X-Amz-Signature"),
        Some("a7799c8ff7100a43293d6bd6d1ccd64e10a84e31ae1606d6d8dc22b5bff67d4b"),
    );
}

#[test_log::test]
fn encoded_policy_round_trips_as_json() {
    let config = scenario_config().build().unwrap();
    let form = PresignedPostForm::for_upload(&config).unwrap();

    let encoded = form.field("policy").unwrap();
    assert!(!encoded.contains('\n'));
    assert!(!encoded.contains('\r'));

    let decoded = STANDARD.decode(encoded.as_bytes()).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
    assert_eq!(parsed["expiration"], "2021-01-01T10:00:00Z");
    assert_eq!(parsed["conditions"].as_array().unwrap().len(), 10);
}

#[test_log::test]
fn encryption_and_extra_conditions_extend_the_policy() {
    let config = scenario_config()
        .server_side_encryption("AES256")
        .condition(Condition::eq("x-amz-storage-class", "STANDARD_IA"))
        .build()
        .unwrap();
    let form = PresignedPostForm::for_upload(&config).unwrap();

    assert_eq!(form.field("x-amz-server-side-encryption"), Some("AES256"));

    let decoded = STANDARD.decode(form.field("policy").unwrap().as_bytes()).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
    let conditions = parsed["conditions"].as_array().unwrap();
    assert_eq!(conditions.len(), 12);
    assert_eq!(conditions[10], serde_json::json!({"x-amz-server-side-encryption": "AES256"}));
    assert_eq!(conditions[11], serde_json::json!({"x-amz-storage-class": "STANDARD_IA"}));
}

#[test_log::test]
fn signing_twice_yields_identical_output() {
    let first = PresignedPostForm::for_upload(&scenario_config().build().unwrap()).unwrap();
    let second = PresignedPostForm::for_upload(&scenario_config().build().unwrap()).unwrap();

    assert_eq!(first.fields(), second.fields());
}

#[test_log::test]
fn no_encryption_key_anywhere_when_unset() {
    let config = scenario_config().build().unwrap();
    let form = PresignedPostForm::for_upload(&config).unwrap();

    assert!(form.fields().iter().all(|(n, _)| !n.contains("encryption")));

    let decoded = STANDARD.decode(form.field("policy").unwrap().as_bytes()).unwrap();
    let policy_text = String::from_utf8(decoded).unwrap();
    assert!(!policy_text.contains("encryption"));
}
