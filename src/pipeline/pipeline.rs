use crate::batch::{ContactBatch, ProbeError, RelativeVelocityReader};
use crate::events::{ContactRecord, ListenerRegistry};
use crate::pipeline::{
    build_offsets, dispatch_discrete, extract_records, sort_and_count_discrete, Counters,
    ScratchBuffer,
};

/// The contact-event aggregation pipeline.
///
/// One instance owns the two step-persistent scratch buffers (offset table
/// and flat record buffer), the raw relative-velocity reader, and the
/// diagnostic counters. The buffers are empty at start, only ever grow, and
/// are released when the pipeline is dropped.
///
/// [`step`](Self::step) runs once per engine callback and is synchronous for
/// the caller: the internal extraction fan-out is joined before sorting
/// begins, so no task of a step can outlive it — neither into the next step
/// nor past teardown. Steps never overlap; `&mut self` enforces this
/// statically.
pub struct EventPipeline {
    reader: RelativeVelocityReader,
    offsets: ScratchBuffer<u32>,
    records: ScratchBuffer<ContactRecord>,
    discrete_count: usize,
    phase: StepPhase,
    counters: Counters,
}

impl EventPipeline {
    /// Starts a pipeline: allocates the (zero-length) buffers and performs
    /// the one-time relative-velocity probe.
    ///
    /// A probe failure is fatal: no pipeline is constructed, since a wrong
    /// field offset would produce silently wrong event data.
    pub fn new() -> Result<Self, ProbeError> {
        let reader = RelativeVelocityReader::probe()?;
        Ok(EventPipeline {
            reader,
            offsets: ScratchBuffer::new(),
            records: ScratchBuffer::new(),
            discrete_count: 0,
            phase: StepPhase::Idle,
            counters: Counters::new(),
        })
    }

    /// Runs one full step over `batch`, delivering begin/end events to the
    /// listeners of `registry`.
    ///
    /// Counting, unrolling, extraction, sorting, and dispatch all happen
    /// before this returns; nothing of `batch` is retained. A batch with no
    /// sub-contacts degrades to a no-op.
    pub fn step(&mut self, batch: &ContactBatch<'_>, registry: &ListenerRegistry) {
        self.counters.preprocessing.start();
        self.phase = StepPhase::CountingAndUnrolling;
        let totals = build_offsets(batch, &mut self.offsets);

        if totals.total_contact_count == 0 {
            self.counters.preprocessing.pause();
            self.phase = StepPhase::Idle;
            return;
        }

        self.phase = StepPhase::Extracting;
        let records = self.records.prepare(totals.total_contact_count);
        extract_records(
            batch,
            &self.reader,
            self.offsets.filled(totals.header_count),
            records,
        );

        self.phase = StepPhase::Sorting;
        self.discrete_count = sort_and_count_discrete(records);
        self.counters.preprocessing.pause();

        self.phase = StepPhase::Dispatching;
        self.counters.dispatch.start();
        dispatch_discrete(&records[..self.discrete_count], registry);
        // Residual buffer contents must never be redelivered.
        self.discrete_count = 0;
        self.counters.dispatch.pause();
        self.phase = StepPhase::Idle;
    }

    /// The phase the pipeline is currently in; [`StepPhase::Idle`] outside of
    /// [`step`](Self::step).
    #[inline]
    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Diagnostic timings of the latest step.
    #[inline]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Current capacity of the flat record buffer, in records.
    #[inline]
    pub fn record_capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Current capacity of the offset table, in entries.
    #[inline]
    pub fn offset_capacity(&self) -> usize {
        self.offsets.capacity()
    }
}

/// Phases of one pipeline step.
///
/// The whole cycle runs inside one synchronous [`EventPipeline::step`] call;
/// the phase is tracked for diagnostics only and no partial progress persists
/// across steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepPhase {
    /// No step in progress.
    Idle,
    /// Counting sub-contacts and building the offset table.
    CountingAndUnrolling,
    /// Filling the flat record buffer.
    Extracting,
    /// Ordering records and counting the discrete prefix.
    Sorting,
    /// Delivering listener callbacks.
    Dispatching,
}
