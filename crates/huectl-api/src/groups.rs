// Room and grouped-light endpoints:
// /clip/v2/resource/room and /clip/v2/resource/grouped_light
//
// A room's aggregate control surface is its grouped_light service --
// room mutations are expressed as grouped-light updates.

use uuid::Uuid;

use crate::client::BridgeClient;
use crate::error::Error;
use crate::types::{GroupedLightGet, GroupedLightPut, ResourceIdentifier, RoomGet};

impl BridgeClient {
    /// List every room configured on the bridge.
    pub async fn list_rooms(&self) -> Result<Vec<RoomGet>, Error> {
        self.get("room").await
    }

    /// Fetch a single room, or `None` when the `data` array is empty.
    pub async fn get_room(&self, id: &Uuid) -> Result<Option<RoomGet>, Error> {
        let mut data = self.get::<RoomGet>(&format!("room/{id}")).await?;
        Ok(if data.is_empty() {
            None
        } else {
            Some(data.swap_remove(0))
        })
    }

    /// List every grouped light (one per room/zone, plus bridge-wide).
    pub async fn list_grouped_lights(&self) -> Result<Vec<GroupedLightGet>, Error> {
        self.get("grouped_light").await
    }

    /// Fetch a single grouped light, or `None` when absent.
    pub async fn get_grouped_light(&self, id: &Uuid) -> Result<Option<GroupedLightGet>, Error> {
        let mut data = self
            .get::<GroupedLightGet>(&format!("grouped_light/{id}"))
            .await?;
        Ok(if data.is_empty() {
            None
        } else {
            Some(data.swap_remove(0))
        })
    }

    /// Apply a partial update to a grouped light (a room's aggregate
    /// on/off/brightness surface).
    pub async fn update_grouped_light(
        &self,
        id: &Uuid,
        body: &GroupedLightPut,
    ) -> Result<Vec<ResourceIdentifier>, Error> {
        self.put(&format!("grouped_light/{id}"), body).await
    }
}
