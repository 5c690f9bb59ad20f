use crate::domain::model::{ProfileInput, ProfileOutput};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn name(&self) -> Option<&str>;
    fn date_of_birth(&self) -> &str;
    fn core_list(&self) -> &str;
    fn output_path(&self) -> &str;
    fn show_angle_note(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ProfileInput>;
    async fn transform(&self, input: ProfileInput) -> Result<ProfileOutput>;
    async fn load(&self, output: ProfileOutput) -> Result<String>;
}
