//! Partitioning resources by parent room.
//!
//! Pure helper used by the UI layer to render scenes (or lights) under
//! room headings. Encounter order is preserved within each bucket;
//! items with no resolvable room land in a synthetic unassigned bucket
//! that always sorts last.

use uuid::Uuid;

/// One bucket of grouped items. `room` is `None` for the synthetic
/// unassigned bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBucket<T> {
    pub room: Option<Uuid>,
    pub items: Vec<T>,
}

/// Partition `items` by the room id `room_of` resolves for each.
///
/// Buckets appear in first-encounter order of their room; the
/// unassigned bucket (if any) is appended last. Input order is
/// preserved within every bucket.
pub fn group_by_room<T>(
    items: impl IntoIterator<Item = T>,
    room_of: impl Fn(&T) -> Option<Uuid>,
) -> Vec<RoomBucket<T>> {
    let mut buckets: Vec<RoomBucket<T>> = Vec::new();
    let mut unassigned: Vec<T> = Vec::new();

    for item in items {
        match room_of(&item) {
            Some(room_id) => {
                if let Some(bucket) = buckets.iter_mut().find(|b| b.room == Some(room_id)) {
                    bucket.items.push(item);
                } else {
                    buckets.push(RoomBucket {
                        room: Some(room_id),
                        items: vec![item],
                    });
                }
            }
            None => unassigned.push(item),
        }
    }

    if !unassigned.is_empty() {
        buckets.push(RoomBucket {
            room: None,
            items: unassigned,
        });
    }

    buckets
}
