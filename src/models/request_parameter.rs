use serde::{Deserialize, Serialize};

/// Parameters of one run, as sent by the scheduler.
///
/// Every field is optional. Empty dates are filled in by the resolver and
/// the inline keyword is only used when no bucket/key pair is given.
/// Keys are accepted in PascalCase, camelCase or lowercase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RequestParameter {
    #[serde(alias = "from")]
    pub from: String,
    #[serde(alias = "to")]
    pub to: String,

    #[serde(
        rename = "S3BucketName",
        alias = "S3BacketName",
        alias = "s3BucketName",
        alias = "s3BacketName",
        alias = "s3bucketname"
    )]
    pub s3_bucket_name: String,
    #[serde(rename = "S3ObjectKey", alias = "s3ObjectKey", alias = "s3objectkey")]
    pub s3_object_key: String,

    // inline rule, for local runs
    #[serde(alias = "keyword")]
    pub keyword: String,
    #[serde(alias = "noticeLowerLimit", alias = "noticelowerlimit")]
    pub notice_lower_limit: i64,
}

impl RequestParameter {
    /// Bucket and object key, only when both are present.
    pub fn object_location(&self) -> Option<(&str, &str)> {
        let bucket = self.s3_bucket_name.trim();
        let key = self.s3_object_key.trim();

        if bucket.is_empty() || key.is_empty() {
            return None;
        }
        Some((bucket, key))
    }
}
