use crate::batch::ContactBatch;
use crate::pipeline::ScratchBuffer;

/// Totals gathered while building the offset table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchTotals {
    /// Number of contact groups in the batch.
    pub header_count: usize,
    /// Sum of the groups' sub-contact counts.
    pub total_contact_count: usize,
}

/// Builds the flat write offsets for the extraction stage.
///
/// After this returns, `offsets[i]` is the index of group `i`'s first record
/// in the flat record buffer: `offsets[0] == 0` and `offsets[i] ==
/// offsets[i - 1] + count(i - 1)`. A single sequential pass; a parallel
/// prefix-sum buys nothing at realistic batch sizes.
pub fn build_offsets(batch: &ContactBatch<'_>, offsets: &mut ScratchBuffer<u32>) -> BatchTotals {
    let header_count = batch.len();
    let table = offsets.prepare(header_count);

    let mut running = 0;
    for (i, group) in batch.iter().enumerate() {
        table[i] = running as u32;
        running += group.sub_contact_count();
    }

    BatchTotals {
        header_count,
        total_contact_count: running,
    }
}
