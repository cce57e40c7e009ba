//! The per-step aggregation pipeline and its stages.

pub use self::buffers::ScratchBuffer;
pub use self::classifier::sort_and_count_discrete;
pub use self::counters::{Counters, Timer};
pub use self::dispatch::dispatch_discrete;
pub use self::extractor::extract_records;
pub use self::offsets::{build_offsets, BatchTotals};
pub use self::pipeline::{EventPipeline, StepPhase};

mod buffers;
mod classifier;
mod counters;
mod dispatch;
mod extractor;
mod offsets;
mod pipeline;
