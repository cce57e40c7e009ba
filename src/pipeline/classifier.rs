use crate::events::ContactRecord;

/// Orders `records` discrete-first and returns the discrete count.
///
/// After this returns, all begin/end records occupy `records[..count]` in
/// ascending group order, "end" before "begin" at equal group index, and all
/// ongoing records follow. The sort is stable, so records with equal keys
/// (same group, same kind, different sub-contact) keep their extraction
/// order.
///
/// Must only run once every extraction task of the step has completed.
pub fn sort_and_count_discrete(records: &mut [ContactRecord]) -> usize {
    records.sort_by_key(ContactRecord::sort_key);
    records.iter().filter(|record| record.is_discrete()).count()
}

#[cfg(test)]
mod tests {
    use crate::batch::SubContactFlags;
    use crate::events::ContactRecord;

    use super::sort_and_count_discrete;

    fn record(flags: SubContactFlags, group_index: u32) -> ContactRecord {
        ContactRecord {
            flags,
            group_index,
            ..ContactRecord::default()
        }
    }

    #[test]
    fn discrete_records_form_an_ordered_prefix() {
        let mut records = vec![
            record(SubContactFlags::empty(), 0),
            record(SubContactFlags::BEGIN, 2),
            record(SubContactFlags::empty(), 1),
            record(SubContactFlags::END, 1),
            record(SubContactFlags::BEGIN, 0),
        ];

        let count = sort_and_count_discrete(&mut records);

        assert_eq!(count, 3);
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(rec.is_discrete(), i < count);
        }
        for pair in records[..count].windows(2) {
            assert!(pair[0].group_index <= pair[1].group_index);
        }
    }

    #[test]
    fn end_precedes_begin_when_a_group_index_recycles_both() {
        // Cannot happen physically in one step, but the order must stay
        // reproducible if it ever does.
        let mut records = vec![
            record(SubContactFlags::BEGIN, 4),
            record(SubContactFlags::END, 4),
        ];

        let count = sort_and_count_discrete(&mut records);

        assert_eq!(count, 2);
        assert!(records[0].flags.contains(SubContactFlags::END));
        assert!(records[1].flags.contains(SubContactFlags::BEGIN));
    }

    #[test]
    fn equal_keys_keep_extraction_order() {
        use crate::math::{Real, Vector};

        // Same group, same kind: the records only differ by a velocity tag.
        let mut records: Vec<_> = (0..4)
            .map(|i| {
                let mut rec = record(SubContactFlags::BEGIN, 7);
                rec.view
                    .set_relative_velocity(Vector::new(i as Real, 0.0, 0.0));
                rec
            })
            .collect();

        let count = sort_and_count_discrete(&mut records);

        assert_eq!(count, 4);
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(
                rec.view.relative_velocity(),
                Vector::new(i as Real, 0.0, 0.0)
            );
        }
    }
}
