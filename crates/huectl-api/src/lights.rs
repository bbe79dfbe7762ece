// Light endpoints: /clip/v2/resource/light

use uuid::Uuid;

use crate::client::BridgeClient;
use crate::error::Error;
use crate::types::{LightGet, LightPut, ResourceIdentifier};

impl BridgeClient {
    /// List every light known to the bridge.
    pub async fn list_lights(&self) -> Result<Vec<LightGet>, Error> {
        self.get("light").await
    }

    /// Fetch a single light. `None` when the bridge returns an empty
    /// `data` array -- absence is a valid outcome, not a fault.
    pub async fn get_light(&self, id: &Uuid) -> Result<Option<LightGet>, Error> {
        let mut data = self.get::<LightGet>(&format!("light/{id}")).await?;
        Ok(if data.is_empty() {
            None
        } else {
            Some(data.swap_remove(0))
        })
    }

    /// Apply a partial update to a light. Returns the bridge's
    /// acknowledgment identifiers; re-fetch for the updated state.
    pub async fn update_light(
        &self,
        id: &Uuid,
        body: &LightPut,
    ) -> Result<Vec<ResourceIdentifier>, Error> {
        self.put(&format!("light/{id}"), body).await
    }
}
