//! Axis-aligned bounding-box collision between the bucket and drops.

use crate::entities::{Bucket, Drop, Rect, BUCKET_HEIGHT, BUCKET_WIDTH, DROP_SIZE};

/// Units trimmed from each side of the bucket sprite to form its hitbox.
/// Catches only count when the drop actually lands inside the rim.
pub const BUCKET_HITBOX_INSET: f32 = 10.0;

/// Strict AABB overlap: rectangles that only share an edge do not touch.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

pub fn bucket_hitbox(bucket: &Bucket) -> Rect {
    Rect::new(
        bucket.x + BUCKET_HITBOX_INSET,
        bucket.y,
        BUCKET_WIDTH - 2.0 * BUCKET_HITBOX_INSET,
        BUCKET_HEIGHT,
    )
}

/// Drops are positioned by their centre.
pub fn drop_hitbox(drop: &Drop) -> Rect {
    let half = DROP_SIZE / 2.0;
    Rect::new(drop.x - half, drop.y - half, DROP_SIZE, DROP_SIZE)
}

pub fn bucket_catches(bucket: &Bucket, drop: &Drop) -> bool {
    intersects(&bucket_hitbox(bucket), &drop_hitbox(drop))
}
