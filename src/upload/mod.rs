//! Simulated spreadsheet upload: tracked items, their timed lifecycle and
//! the file selection that feeds them.
mod batch;
mod file_processor;
mod ticker;
mod types;

pub use batch::{
    FixedOutcome, OutcomeDecider, RandomOutcome, UploadBatch, DEFAULT_ERROR_RATE, PROGRESS_STEP,
    STEPS_PER_ITEM,
};
pub use file_processor::FileProcessor;
pub use ticker::Ticker;
pub use types::{
    BatchEvent, Outcome, SelectedFile, UploadId, UploadItem, UploadStatus, VALIDATION_ERRORS,
};
