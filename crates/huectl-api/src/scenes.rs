// Scene endpoints: /clip/v2/resource/scene

use uuid::Uuid;

use crate::client::BridgeClient;
use crate::error::Error;
use crate::types::{ResourceIdentifier, SceneGet, ScenePut, SceneRecall};

impl BridgeClient {
    /// List every scene stored on the bridge.
    pub async fn list_scenes(&self) -> Result<Vec<SceneGet>, Error> {
        self.get("scene").await
    }

    /// Fetch a single scene, or `None` when the `data` array is empty.
    pub async fn get_scene(&self, id: &Uuid) -> Result<Option<SceneGet>, Error> {
        let mut data = self.get::<SceneGet>(&format!("scene/{id}")).await?;
        Ok(if data.is_empty() {
            None
        } else {
            Some(data.swap_remove(0))
        })
    }

    /// Apply a partial update to a scene.
    pub async fn update_scene(
        &self,
        id: &Uuid,
        body: &ScenePut,
    ) -> Result<Vec<ResourceIdentifier>, Error> {
        self.put(&format!("scene/{id}"), body).await
    }

    /// Recall a scene: apply its stored light states to the member lights.
    pub async fn recall_scene(
        &self,
        id: &Uuid,
        recall: SceneRecall,
    ) -> Result<Vec<ResourceIdentifier>, Error> {
        self.update_scene(
            id,
            &ScenePut {
                recall: Some(recall),
            },
        )
        .await
    }
}
