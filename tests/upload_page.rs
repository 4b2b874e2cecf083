use drilllog_pro::app::{PageOutput, UploadPage, COMPLETED_DESCRIPTION, COMPLETED_TITLE};
use drilllog_pro::config::UploadConfig;
use drilllog_pro::upload::{FixedOutcome, Outcome, SelectedFile, UploadStatus, STEPS_PER_ITEM};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn page(outcome: Outcome) -> UploadPage {
    UploadPage::with_decider(&UploadConfig::default(), Box::new(FixedOutcome(outcome)))
}

fn selection() -> Vec<SelectedFile> {
    vec![
        SelectedFile::new("/field/permian.xlsx", 1_572_864),
        SelectedFile::new("/field/bakken.csv", 20_480),
    ]
}

#[test]
fn completed_run_raises_one_notification() {
    drilllog_pro::logging::initialize_for_tests();
    let mut page = page(Outcome::Success);
    page.add_files(selection());
    assert!(page.start_batch());

    let mut out = PageOutput::default();
    page.advance(usize::from(STEPS_PER_ITEM) * 2, &mut out);
    page.advance(10, &mut out);

    assert!(!page.is_processing());
    assert_eq!(
        out.toasts,
        vec![(COMPLETED_TITLE.to_string(), COMPLETED_DESCRIPTION.to_string())]
    );
    assert!(page
        .batch()
        .items()
        .iter()
        .all(|item| item.status() == UploadStatus::Success));
}

#[test]
fn partial_advance_keeps_the_run_going() {
    let mut page = page(Outcome::Error);
    page.add_files(selection());
    page.start_batch();

    let mut out = PageOutput::default();
    page.advance(usize::from(STEPS_PER_ITEM), &mut out);

    assert!(page.is_processing());
    assert!(out.toasts.is_empty());
    let statuses: Vec<_> = page.batch().items().iter().map(|i| i.status()).collect();
    assert_eq!(statuses, vec![UploadStatus::Error, UploadStatus::Processing]);
}

#[test]
fn remove_is_ignored_for_the_processing_item() {
    let mut page = page(Outcome::Success);
    let ids = page.add_files(selection());
    page.start_batch();

    assert!(!page.remove(ids[0]));
    assert!(page.remove(ids[1]));
    assert_eq!(page.batch().items().len(), 1);
}

#[test]
fn step_delay_comes_from_config() {
    let config = UploadConfig {
        step_delay_ms: 50,
        ..UploadConfig::default()
    };
    let page = UploadPage::new(&config);
    assert_eq!(page.step_delay(), Duration::from_millis(50));
    assert!(!page.is_processing());
}

#[test]
fn background_ticker_drives_the_batch() {
    drilllog_pro::logging::initialize_for_tests();
    let config = UploadConfig {
        step_delay_ms: 1,
        ..UploadConfig::default()
    };
    let mut page = UploadPage::with_decider(&config, Box::new(FixedOutcome(Outcome::Success)));
    page.add_files(vec![SelectedFile::new("/field/eagle-ford.xls", 4096)]);

    let mut out = PageOutput::default();
    assert!(page.process(|| {}, &mut out));

    for _ in 0..2000 {
        if !page.is_processing() {
            break;
        }
        std::thread::sleep(Duration::from_millis(1));
        page.poll(&mut out);
    }

    assert!(!page.is_processing());
    assert_eq!(out.toasts.len(), 1);
}
