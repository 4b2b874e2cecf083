use crate::upload::types::{
    BatchEvent, Outcome, SelectedFile, UploadId, UploadItem, UploadStatus, VALIDATION_ERRORS,
};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;

/// Progress increment applied on every tick of the active item.
pub const PROGRESS_STEP: u8 = 20;
/// Ticks needed to walk an item through 0, 20, .., 100.
pub const STEPS_PER_ITEM: u8 = 100 / PROGRESS_STEP + 1;
pub const DEFAULT_ERROR_RATE: f64 = 0.3;

/// Decides the terminal state of an item whose progress reached 100.
pub trait OutcomeDecider {
    fn decide(&mut self, item: &UploadItem) -> Outcome;
}

impl<F> OutcomeDecider for F
where
    F: FnMut(&UploadItem) -> Outcome,
{
    fn decide(&mut self, item: &UploadItem) -> Outcome {
        self(item)
    }
}

/// Unweighted draw: `error_rate` of the items end in `Outcome::Error`.
pub struct RandomOutcome<R: Rng = ThreadRng> {
    rng: R,
    error_rate: f64,
}

impl RandomOutcome<ThreadRng> {
    pub fn new(error_rate: f64) -> Self {
        Self::with_rng(rand::thread_rng(), error_rate)
    }
}

impl<R: Rng> RandomOutcome<R> {
    pub fn with_rng(rng: R, error_rate: f64) -> Self {
        Self {
            rng,
            error_rate: error_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomOutcome<ThreadRng> {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_RATE)
    }
}

impl<R: Rng> OutcomeDecider for RandomOutcome<R> {
    fn decide(&mut self, _item: &UploadItem) -> Outcome {
        if self.rng.gen_bool(self.error_rate) {
            Outcome::Error
        } else {
            Outcome::Success
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOutcome(pub Outcome);

impl OutcomeDecider for FixedOutcome {
    fn decide(&mut self, _item: &UploadItem) -> Outcome {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveItem {
    id: UploadId,
    steps_done: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BatchRun {
    queue: VecDeque<UploadId>,
    active: Option<ActiveItem>,
    processed: usize,
}

/// The tracked set of upload items and the state of the current run.
///
/// All mutation goes through `add_files`, `remove`, `start` and `tick`, so the
/// lifecycle invariants of `UploadItem` hold no matter how ticks are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    items: Vec<UploadItem>,
    next_id: u64,
    run: Option<BatchRun>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UploadItem] {
        &self.items
    }

    pub fn get(&self, id: UploadId) -> Option<&UploadItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn can_process(&self) -> bool {
        !self.is_running()
            && self
                .items
                .iter()
                .any(|item| item.status == UploadStatus::Pending)
    }

    pub fn add_files<I>(&mut self, files: I) -> Vec<UploadId>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let mut added = Vec::new();
        for file in files {
            self.next_id += 1;
            let id = UploadId(self.next_id);
            log::debug!("Tracking upload {} for '{}'", id, file.name);
            self.items.push(UploadItem::pending(id, file));
            added.push(id);
        }
        added
    }

    /// Removes an item unless it is being processed. Returns whether anything was removed.
    pub fn remove(&mut self, id: UploadId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        if self.items[index].status == UploadStatus::Processing {
            log::debug!("Ignoring removal of {} while it is processing", id);
            return false;
        }
        let removed = self.items.remove(index);
        log::debug!("Removed upload {} ('{}')", id, removed.file.name);
        true
    }

    /// Queues every pending item and activates the first one.
    pub fn start(&mut self) -> bool {
        if !self.can_process() {
            return false;
        }
        let queue: VecDeque<UploadId> = self
            .items
            .iter()
            .filter(|item| item.status == UploadStatus::Pending)
            .map(|item| item.id)
            .collect();
        log::info!("Processing {} queued file(s)", queue.len());
        let mut run = BatchRun {
            queue,
            active: None,
            processed: 0,
        };
        self.activate_next(&mut run);
        self.run = Some(run);
        true
    }

    /// Advances the run by one fixed-delay step.
    pub fn tick(&mut self, decider: &mut dyn OutcomeDecider) -> Vec<BatchEvent> {
        let Some(mut run) = self.run.take() else {
            return Vec::new();
        };
        let mut events = Vec::new();

        if let Some(mut active) = run.active.take() {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == active.id) {
                active.steps_done += 1;
                let percent = (active.steps_done - 1).saturating_mul(PROGRESS_STEP).min(100);
                item.progress = item.progress.max(percent);
                events.push(BatchEvent::Progress {
                    id: item.id,
                    percent: item.progress,
                });

                if active.steps_done >= STEPS_PER_ITEM {
                    let status = match decider.decide(item) {
                        Outcome::Success => {
                            item.errors.clear();
                            UploadStatus::Success
                        }
                        Outcome::Error => {
                            item.errors = VALIDATION_ERRORS.iter().map(|e| e.to_string()).collect();
                            UploadStatus::Error
                        }
                    };
                    item.status = status;
                    item.progress = 100;
                    run.processed += 1;
                    log::info!("Upload {} ('{}') finished: {}", item.id, item.file.name, status.label());
                    events.push(BatchEvent::Finished { id: item.id, status });
                } else {
                    run.active = Some(active);
                }
            }
        }

        if run.active.is_none() {
            self.activate_next(&mut run);
        }

        if run.active.is_none() {
            log::info!("Batch completed: {} file(s) processed", run.processed);
            events.push(BatchEvent::Completed {
                processed: run.processed,
            });
        } else {
            self.run = Some(run);
        }
        events
    }

    fn activate_next(&mut self, run: &mut BatchRun) {
        while let Some(id) = run.queue.pop_front() {
            let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
                continue;
            };
            if item.status != UploadStatus::Pending {
                continue;
            }
            item.status = UploadStatus::Processing;
            item.progress = 0;
            log::debug!("Upload {} ('{}') is processing", id, item.file.name);
            run.active = Some(ActiveItem { id, steps_done: 0 });
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, 1024)
    }

    #[test]
    fn steps_cover_every_progress_value() {
        assert_eq!(STEPS_PER_ITEM, 6);
    }

    #[test]
    fn random_outcome_respects_extreme_rates() {
        let item = UploadItem::pending(UploadId(1), file("a.csv"));
        let mut never = RandomOutcome::with_rng(StdRng::seed_from_u64(7), 0.0);
        let mut always = RandomOutcome::with_rng(StdRng::seed_from_u64(7), 1.0);
        for _ in 0..50 {
            assert_eq!(never.decide(&item), Outcome::Success);
            assert_eq!(always.decide(&item), Outcome::Error);
        }
    }

    #[test]
    fn rate_outside_unit_range_is_clamped() {
        let item = UploadItem::pending(UploadId(1), file("a.csv"));
        let mut decider = RandomOutcome::with_rng(StdRng::seed_from_u64(1), 4.0);
        assert_eq!(decider.decide(&item), Outcome::Error);
    }

    #[test]
    fn tick_without_run_is_inert() {
        let mut batch = UploadBatch::new();
        batch.add_files([file("a.xlsx")]);
        let before = batch.clone();
        let events = batch.tick(&mut FixedOutcome(Outcome::Success));
        assert!(events.is_empty());
        assert_eq!(batch, before);
    }
}
