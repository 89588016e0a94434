use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use stylepocket_application::{AnalysisPipeline, AnalysisReport, AnalysisRequest, ApplicationError};
use stylepocket_domain::{ImageRef, StyleTag, StyleTags};

const SUGGESTED_TAGS: usize = 2;
const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_BASE_HEIGHT: u32 = 500;
const PLACEHOLDER_HEIGHT_JITTER: u32 = 50;
const DETECTED_ITEM_NAMES: [&str; 2] = ["AI detected top", "AI detected trousers"];

pub trait StyleAnalyzer: Send {
    fn analyze(&mut self, request: AnalysisRequest) -> AnalysisReport;
}

/// Fakes image analysis: two distinct random tags, a jittered placeholder
/// image and fixed detected-item names.
#[derive(Debug)]
pub struct RandomStyleAnalyzer<R> {
    rng: R,
}

impl<R: Rng> RandomStyleAnalyzer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStyleAnalyzer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> StyleAnalyzer for RandomStyleAnalyzer<R> {
    fn analyze(&mut self, request: AnalysisRequest) -> AnalysisReport {
        let style_tags: StyleTags = StyleTag::ALL
            .choose_multiple(&mut self.rng, SUGGESTED_TAGS)
            .copied()
            .collect();
        let height = PLACEHOLDER_BASE_HEIGHT + self.rng.random_range(0..PLACEHOLDER_HEIGHT_JITTER);

        AnalysisReport {
            ticket: request.ticket,
            image: ImageRef::placeholder(PLACEHOLDER_WIDTH, height),
            style_tags,
            items_detected: DETECTED_ITEM_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Runs the analyzer on a worker thread after a fixed delay. Each submitted
/// request yields exactly one report; requests are not cancellable.
pub struct BackgroundAnalysisPipeline {
    submit_tx: mpsc::Sender<AnalysisRequest>,
    result_rx: mpsc::Receiver<AnalysisReport>,
}

impl BackgroundAnalysisPipeline {
    pub fn new(delay: Duration, analyzer: Box<dyn StyleAnalyzer>) -> Self {
        let (submit_tx, submit_rx) = mpsc::channel::<AnalysisRequest>();
        let (result_tx, result_rx) = mpsc::channel::<AnalysisReport>();
        spawn_worker(submit_rx, result_tx, delay, analyzer);
        Self {
            submit_tx,
            result_rx,
        }
    }
}

impl AnalysisPipeline for BackgroundAnalysisPipeline {
    fn submit_analysis(&self, request: AnalysisRequest) -> Result<(), ApplicationError> {
        self.submit_tx.send(request).map_err(|error| {
            ApplicationError::Analysis(format!("failed to enqueue analysis job: {error}"))
        })
    }

    fn try_receive_analysis(&self) -> Result<Option<AnalysisReport>, ApplicationError> {
        match self.result_rx.try_recv() {
            Ok(report) => Ok(Some(report)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(ApplicationError::Analysis(
                "analysis result channel disconnected".to_string(),
            )),
        }
    }
}

fn spawn_worker(
    submit_rx: mpsc::Receiver<AnalysisRequest>,
    result_tx: mpsc::Sender<AnalysisReport>,
    delay: Duration,
    mut analyzer: Box<dyn StyleAnalyzer>,
) {
    thread::spawn(move || {
        while let Ok(request) = submit_rx.recv() {
            tracing::debug!(
                ticket = request.ticket,
                delay_ms = delay.as_millis() as u64,
                "analysis scheduled"
            );
            thread::sleep(delay);
            let report = analyzer.analyze(request);
            if result_tx.send(report).is_err() {
                return;
            }
        }
        tracing::debug!("analysis worker stopped");
    });
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn wait_for_report(pipeline: &BackgroundAnalysisPipeline, timeout: Duration) -> AnalysisReport {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(report) = pipeline.try_receive_analysis().expect("poll") {
                return report;
            }
            assert!(Instant::now() < deadline, "timed out waiting for analysis");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn seeded_analyzer_is_deterministic() {
        let request = AnalysisRequest { ticket: 3 };
        let first = RandomStyleAnalyzer::seeded(7).analyze(request);
        let second = RandomStyleAnalyzer::seeded(7).analyze(request);
        assert_eq!(first, second);
    }

    #[test]
    fn analyzer_suggests_two_distinct_tags_and_placeholder_image() {
        let mut analyzer = RandomStyleAnalyzer::seeded(11);
        for ticket in 0..32 {
            let report = analyzer.analyze(AnalysisRequest { ticket });
            assert_eq!(report.ticket, ticket);
            assert_eq!(report.style_tags.len(), 2);
            assert_eq!(report.items_detected, vec!["AI detected top", "AI detected trousers"]);

            let (width, height) = report.image.placeholder_size().expect("placeholder");
            assert_eq!(width, 400);
            assert!((500..550).contains(&height));
        }
    }

    #[test]
    fn report_arrives_only_after_delay() {
        let delay = Duration::from_millis(60);
        let pipeline =
            BackgroundAnalysisPipeline::new(delay, Box::new(RandomStyleAnalyzer::seeded(1)));
        let started = Instant::now();
        pipeline
            .submit_analysis(AnalysisRequest { ticket: 1 })
            .expect("submit");
        assert_eq!(pipeline.try_receive_analysis().expect("poll"), None);

        let report = wait_for_report(&pipeline, Duration::from_secs(2));
        assert_eq!(report.ticket, 1);
        assert!(started.elapsed() >= delay);
    }

    #[test]
    fn each_submission_fires_once() {
        let pipeline = BackgroundAnalysisPipeline::new(
            Duration::from_millis(1),
            Box::new(RandomStyleAnalyzer::seeded(2)),
        );
        for ticket in 1..=3 {
            pipeline
                .submit_analysis(AnalysisRequest { ticket })
                .expect("submit");
        }

        let tickets: Vec<u64> = (0..3)
            .map(|_| wait_for_report(&pipeline, Duration::from_secs(2)).ticket)
            .collect();
        assert_eq!(tickets, vec![1, 2, 3]);

        thread::sleep(Duration::from_millis(20));
        assert_eq!(pipeline.try_receive_analysis().expect("poll"), None);
    }
}
