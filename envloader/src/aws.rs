//! AWS Secrets Manager backed [`SecretStore`].

use crate::error::BoxError;
use crate::secrets::SecretStore;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_secretsmanager::error::DisplayErrorContext;

/// Reads secrets from AWS Secrets Manager.
///
/// Each fetch runs on its own current-thread runtime, so it must not be
/// called from inside an async context.
#[derive(Debug, Clone, Default)]
pub struct AwsSecretsManager {
    sdk_config: Option<SdkConfig>,
}

impl AwsSecretsManager {
    /// Use the default AWS configuration chain, with `REGION` as the region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-built SDK configuration; `REGION` is then ignored.
    pub fn with_config(sdk_config: SdkConfig) -> Self {
        Self {
            sdk_config: Some(sdk_config),
        }
    }

    async fn fetch_async(&self, secret_name: &str, region: &str) -> Result<String, BoxError> {
        let sdk_config = match &self.sdk_config {
            Some(config) => config.clone(),
            None => {
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if !region.is_empty() {
                    loader = loader.region(Region::new(region.to_string()));
                }
                loader.load().await
            }
        };

        let client = aws_sdk_secretsmanager::Client::new(&sdk_config);
        let output = client
            .get_secret_value()
            .secret_id(secret_name)
            .send()
            .await
            .map_err(|e| format!("GetSecretValue failed: {}", DisplayErrorContext(&e)))?;

        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| format!("secret '{}' has no string value", secret_name).into())
    }
}

impl SecretStore for AwsSecretsManager {
    fn fetch(&self, secret_name: &str, region: &str) -> Result<String, BoxError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch_async(secret_name, region))
    }
}
