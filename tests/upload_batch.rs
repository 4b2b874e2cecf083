use drilllog_pro::upload::{
    BatchEvent, FixedOutcome, Outcome, RandomOutcome, SelectedFile, UploadBatch, UploadItem,
    UploadStatus, STEPS_PER_ITEM, VALIDATION_ERRORS,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn files(names: &[&str]) -> Vec<SelectedFile> {
    names
        .iter()
        .map(|name| SelectedFile::new(format!("/data/{}", name), 2048))
        .collect()
}

fn run_to_completion(batch: &mut UploadBatch, outcome: Outcome) -> Vec<BatchEvent> {
    let mut decider = FixedOutcome(outcome);
    let mut events = Vec::new();
    for _ in 0..100 {
        if !batch.is_running() {
            break;
        }
        events.extend(batch.tick(&mut decider));
    }
    events
}

#[test]
fn single_item_walks_through_every_progress_step() {
    drilllog_pro::logging::initialize_for_tests();
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["wells.xlsx"]));
    assert!(batch.start());

    let item = batch.get(ids[0]).unwrap();
    assert_eq!(item.status(), UploadStatus::Processing);
    assert_eq!(item.progress(), 0);

    let mut decider = FixedOutcome(Outcome::Success);
    let mut seen = Vec::new();
    for _ in 0..STEPS_PER_ITEM {
        for event in batch.tick(&mut decider) {
            if let BatchEvent::Progress { percent, .. } = event {
                seen.push(percent);
            }
        }
    }
    assert_eq!(seen, vec![0, 20, 40, 60, 80, 100]);
    let item = batch.get(ids[0]).unwrap();
    assert_eq!(item.status(), UploadStatus::Success);
    assert_eq!(item.progress(), 100);
    assert!(item.errors().is_empty());
    assert!(!batch.is_running());
}

#[test]
fn progress_never_decreases_while_processing() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["a.csv", "b.csv"]));
    batch.start();

    let mut last = [0u8; 2];
    let mut decider = FixedOutcome(Outcome::Error);
    while batch.is_running() {
        batch.tick(&mut decider);
        for (slot, id) in last.iter_mut().zip(&ids) {
            let progress = batch.get(*id).unwrap().progress();
            assert!(progress >= *slot, "progress went from {} to {}", slot, progress);
            *slot = progress;
        }
    }
    assert_eq!(last, [100, 100]);
}

#[test]
fn items_are_processed_one_at_a_time_in_order() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["first.xlsx", "second.xlsx", "third.xls"]));
    batch.start();

    let mut decider = FixedOutcome(Outcome::Success);
    while batch.is_running() {
        let processing = batch
            .items()
            .iter()
            .filter(|item| item.status() == UploadStatus::Processing)
            .count();
        assert!(processing <= 1);
        batch.tick(&mut decider);
    }

    assert!(ids
        .iter()
        .all(|id| batch.get(*id).unwrap().status() == UploadStatus::Success));
}

fn run_order(batch: &mut UploadBatch) -> Vec<String> {
    run_to_completion(batch, Outcome::Success)
        .into_iter()
        .filter_map(|event| match event {
            BatchEvent::Finished { id, .. } => Some(id.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn finished_events_follow_selection_order() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["a.csv", "b.csv", "c.csv"]));
    batch.start();
    let expected: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    assert_eq!(run_order(&mut batch), expected);
}

#[test]
fn completion_is_reported_exactly_once() {
    let mut batch = UploadBatch::new();
    batch.add_files(files(&["a.csv", "b.xlsx"]));
    batch.start();

    let mut events = run_to_completion(&mut batch, Outcome::Success);
    let mut decider = FixedOutcome(Outcome::Success);
    for _ in 0..5 {
        events.extend(batch.tick(&mut decider));
    }

    let completions: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, BatchEvent::Completed { .. }))
        .collect();
    assert_eq!(completions, vec![&BatchEvent::Completed { processed: 2 }]);
}

#[test]
fn terminal_state_matches_error_list() {
    let mut batch = UploadBatch::new();
    batch.add_files(files(&["ok.csv"]));
    batch.start();
    run_to_completion(&mut batch, Outcome::Success);

    batch.add_files(files(&["bad.csv"]));
    assert!(batch.start());
    run_to_completion(&mut batch, Outcome::Error);

    assert!(batch.items().iter().all(|item| item.status().is_terminal()));
    let check = |item: &UploadItem| match item.status() {
        UploadStatus::Success => assert!(item.errors().is_empty()),
        UploadStatus::Error => assert_eq!(item.errors(), VALIDATION_ERRORS.map(String::from)),
        other => panic!("unexpected status {:?}", other),
    };
    batch.items().iter().for_each(check);
    assert_eq!(batch.items()[0].status(), UploadStatus::Success);
    assert_eq!(batch.items()[1].status(), UploadStatus::Error);
}

#[test]
fn processing_item_cannot_be_removed() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["a.csv", "b.csv"]));
    batch.start();

    assert!(!batch.remove(ids[0]));
    assert_eq!(batch.items().len(), 2);
    assert_eq!(batch.get(ids[0]).unwrap().status(), UploadStatus::Processing);
}

#[test]
fn removed_queued_item_is_skipped() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["a.csv", "b.csv", "c.csv"]));
    batch.start();

    assert!(batch.remove(ids[1]));
    let events = run_to_completion(&mut batch, Outcome::Success);

    assert!(batch.get(ids[1]).is_none());
    assert!(events.contains(&BatchEvent::Completed { processed: 2 }));
    assert_eq!(batch.get(ids[2]).unwrap().status(), UploadStatus::Success);
}

#[test]
fn files_added_mid_run_wait_for_the_next_run() {
    let mut batch = UploadBatch::new();
    batch.add_files(files(&["a.csv"]));
    batch.start();
    let late = batch.add_files(files(&["late.csv"]));

    run_to_completion(&mut batch, Outcome::Success);
    assert_eq!(batch.get(late[0]).unwrap().status(), UploadStatus::Pending);
    assert!(batch.can_process());

    assert!(batch.start());
    run_to_completion(&mut batch, Outcome::Success);
    assert_eq!(batch.get(late[0]).unwrap().status(), UploadStatus::Success);
}

#[test]
fn start_is_refused_without_pending_items_or_while_running() {
    let mut batch = UploadBatch::new();
    assert!(!batch.start());

    batch.add_files(files(&["a.csv"]));
    assert!(batch.start());
    assert!(!batch.can_process());
    assert!(!batch.start());
}

#[test]
fn finished_items_can_be_removed() {
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&["a.csv"]));
    batch.start();
    run_to_completion(&mut batch, Outcome::Error);

    assert!(batch.remove(ids[0]));
    assert!(batch.is_empty());
}

#[test]
fn closures_can_decide_outcomes() {
    let mut batch = UploadBatch::new();
    batch.add_files(files(&["good.csv", "broken.csv"]));
    batch.start();

    let mut decider = |item: &UploadItem| {
        if item.file().name.starts_with("broken") {
            Outcome::Error
        } else {
            Outcome::Success
        }
    };
    while batch.is_running() {
        batch.tick(&mut decider);
    }

    let statuses: Vec<_> = batch.items().iter().map(UploadItem::status).collect();
    assert_eq!(statuses, vec![UploadStatus::Success, UploadStatus::Error]);
}

#[test]
fn every_item_moves_pending_processing_terminal_under_random_outcomes() {
    let names: Vec<String> = (0..12).map(|i| format!("batch_{:02}.xlsx", i)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut batch = UploadBatch::new();
    let ids = batch.add_files(files(&names));

    let mut history: Vec<Vec<UploadStatus>> = vec![vec![UploadStatus::Pending]; ids.len()];
    let record = |batch: &UploadBatch, history: &mut Vec<Vec<UploadStatus>>| {
        for (seen, id) in history.iter_mut().zip(&ids) {
            let status = batch.get(*id).unwrap().status();
            if seen.last() != Some(&status) {
                seen.push(status);
            }
        }
    };

    let mut decider = RandomOutcome::with_rng(StdRng::seed_from_u64(47), 0.3);
    assert!(batch.start());
    record(&batch, &mut history);
    for _ in 0..1000 {
        if !batch.is_running() {
            break;
        }
        batch.tick(&mut decider);
        record(&batch, &mut history);
    }
    assert!(!batch.is_running());

    for (seen, id) in history.iter().zip(&ids) {
        assert_eq!(seen.len(), 3, "status history of {}: {:?}", id, seen);
        assert_eq!(&seen[..2], &[UploadStatus::Pending, UploadStatus::Processing]);
        let item = batch.get(*id).unwrap();
        assert_eq!(item.progress(), 100);
        match seen[2] {
            UploadStatus::Success => assert_eq!(item.errors().len(), 0),
            UploadStatus::Error => assert_eq!(item.errors().len(), VALIDATION_ERRORS.len()),
            other => panic!("{} ended in {:?}", id, other),
        }
    }
}
