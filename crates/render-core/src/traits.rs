use crate::error::RenderError;
use crate::package::PackageProperties;

/// Serializes a laid-out model into the bytes of one Office Open XML package.
pub trait ArtifactRenderer {
    type Model;

    fn render(
        &self,
        model: &Self::Model,
        properties: &PackageProperties,
    ) -> Result<Vec<u8>, RenderError>;
}
