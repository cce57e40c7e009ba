use crate::batch::{ContactBatch, ContactGroup, RelativeVelocityReader};
use crate::events::{CollisionView, ContactRecord};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Unrolls every group of `batch` into flat records.
///
/// Writes one record per sub-contact at `records[offsets[i] + j]`. The
/// offset table assigns each group a disjoint window of `records`, so group
/// tasks need no synchronization between them; with the `parallel` feature
/// they fan out over the rayon pool and are joined before this returns.
///
/// `records` must be at least `total_contact_count` long and `offsets` must
/// be the table built from the same batch.
#[cfg(not(feature = "parallel"))]
pub fn extract_records(
    batch: &ContactBatch<'_>,
    reader: &RelativeVelocityReader,
    offsets: &[u32],
    records: &mut [ContactRecord],
) {
    for (index, group) in batch.iter().enumerate() {
        let offset = offsets[index] as usize;
        fill_group(
            group,
            index as u32,
            reader,
            &mut records[offset..offset + group.sub_contact_count()],
        );
    }
}

/// Unrolls every group of `batch` into flat records.
///
/// Writes one record per sub-contact at `records[offsets[i] + j]`. The
/// offset table assigns each group a disjoint window of `records`, so group
/// tasks need no synchronization between them; with the `parallel` feature
/// they fan out over the rayon pool and are joined before this returns.
///
/// `records` must be at least `total_contact_count` long and `offsets` must
/// be the table built from the same batch.
#[cfg(feature = "parallel")]
pub fn extract_records(
    batch: &ContactBatch<'_>,
    reader: &RelativeVelocityReader,
    offsets: &[u32],
    records: &mut [ContactRecord],
) {
    let len = records.len();
    let shared = SharedRecords(records.as_mut_ptr());

    batch
        .groups()
        .par_iter()
        .enumerate()
        .for_each(|(index, group)| {
            let offset = offsets[index] as usize;
            let count = group.sub_contact_count();
            debug_assert!(offset + count <= len);
            // SAFETY: the offset table assigns each group the disjoint window
            // `offset..offset + count` of `records`, which is long enough for
            // the whole batch, so no two tasks alias and the windows never
            // leave the buffer.
            let window =
                unsafe { core::slice::from_raw_parts_mut(shared.0.add(offset), count) };
            fill_group(group, index as u32, reader, window);
        });
}

fn fill_group(
    group: &ContactGroup,
    index: u32,
    reader: &RelativeVelocityReader,
    out: &mut [ContactRecord],
) {
    let relative_velocity = reader.read(group);
    for (sub, slot) in group.sub_contacts().iter().zip(out) {
        *slot = ContactRecord {
            flags: sub.flags,
            view: CollisionView::new(group, sub, relative_velocity),
            group_index: index,
        };
    }
}

/// Raw-pointer wrapper letting disjoint record windows be written from
/// parallel tasks.
#[cfg(feature = "parallel")]
struct SharedRecords(*mut ContactRecord);

#[cfg(feature = "parallel")]
unsafe impl Sync for SharedRecords {}

#[cfg(test)]
mod tests {
    use crate::batch::{
        BodyHandle, ColliderHandle, ContactBatch, ContactGroup, RelativeVelocityReader,
        SubContact, SubContactFlags,
    };
    use crate::events::ContactRecord;
    use crate::math::Vector;
    use crate::pipeline::{build_offsets, ScratchBuffer};

    use super::extract_records;

    fn sub(collider: u32, flags: SubContactFlags) -> SubContact {
        SubContact {
            collider: ColliderHandle(collider),
            other_collider: ColliderHandle(collider + 100),
            impulse: Vector::new(0.0, 1.0, 0.0),
            contact_count: 1,
            flags,
        }
    }

    #[test]
    fn records_land_at_their_group_offsets() {
        let groups = vec![
            ContactGroup::new(
                BodyHandle(1),
                BodyHandle(2),
                Vector::new(1.0, 0.0, 0.0),
                vec![
                    sub(0, SubContactFlags::BEGIN),
                    sub(1, SubContactFlags::empty()),
                ],
            ),
            ContactGroup::new(
                BodyHandle(3),
                BodyHandle(4),
                Vector::new(0.0, 2.0, 0.0),
                vec![sub(2, SubContactFlags::END)],
            ),
        ];
        let batch = ContactBatch::new(&groups);
        let reader = RelativeVelocityReader::probe().unwrap();

        let mut offsets = ScratchBuffer::new();
        let totals = build_offsets(&batch, &mut offsets);
        let mut records = vec![ContactRecord::default(); totals.total_contact_count];

        extract_records(
            &batch,
            &reader,
            offsets.filled(totals.header_count),
            &mut records,
        );

        assert_eq!(records[0].group_index, 0);
        assert!(records[0].view.is_begin());
        assert_eq!(records[0].view.this_collider(), ColliderHandle(0));

        assert_eq!(records[1].group_index, 0);
        assert!(records[1].view.is_ongoing());

        assert_eq!(records[2].group_index, 1);
        assert!(records[2].view.is_end());
        assert_eq!(records[2].view.this_body(), BodyHandle(3));
        assert_eq!(records[2].view.relative_velocity(), Vector::new(0.0, 2.0, 0.0));
    }
}
