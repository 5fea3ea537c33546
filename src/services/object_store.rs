use async_trait::async_trait;
use s3::{creds::Credentials, region::Region, Bucket};

use crate::{
    config::Settings,
    error::{PickupError, Result},
};

/// Read-only access to blobs addressed by bucket and key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// S3 (or any S3-compatible store when an endpoint is configured).
#[derive(Clone)]
pub struct S3ObjectStore {
    region: Region,
    profile: Option<String>,
    path_style: bool,
}

impl S3ObjectStore {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let region = match &settings.s3_endpoint {
            Some(endpoint) => Region::Custom {
                region: settings.s3_region.clone(),
                endpoint: endpoint.clone(),
            },
            None => settings
                .s3_region
                .parse::<Region>()
                .map_err(|e| PickupError::Config(format!("invalid s3 region: {e}")))?,
        };

        Ok(Self {
            region,
            profile: settings.aws_profile.clone(),
            path_style: settings.s3_endpoint.is_some(),
        })
    }

    fn credentials(&self) -> Result<Credentials> {
        let creds = match &self.profile {
            Some(profile) => Credentials::from_profile(Some(profile.as_str())),
            None => Credentials::default(),
        };
        creds.map_err(|e| PickupError::ObjectStore(format!("invalid credentials: {e}")))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let mut handle = Bucket::new(bucket, self.region.clone(), self.credentials()?)
            .map_err(|e| PickupError::ObjectStore(format!("failed to open bucket {bucket}: {e}")))?;
        if self.path_style {
            handle = handle.with_path_style();
        }

        let response = handle
            .get_object(key)
            .await
            .map_err(|e| PickupError::ObjectStore(format!("failed to read {bucket}/{key}: {e}")))?;

        let code = response.status_code();
        if !(200..300).contains(&code) {
            return Err(PickupError::ObjectStore(format!(
                "failed to read {bucket}/{key}: status {code}"
            )));
        }

        Ok(response.bytes().to_vec())
    }
}
