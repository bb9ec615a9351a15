use crate::config::Config;
use crate::evaluation_loop::event::{Evaluation, LoopEvent, LoopStats};
use crate::frame::Frame;
use crate::frame_source::FrameSource;
use crate::image_classifier::interface::{ClassifierError, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::library::processing_guard::ProcessingGuard;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Counters {
    evaluated: AtomicU64,
    failed: AtomicU64,
    dropped_busy: AtomicU64,
    dropped_unusable: AtomicU64,
}

/// Pulls the newest frame, classifies it, forwards the result. One evaluation
/// at a time; frames offered while one is running are dropped.
pub struct EvaluationLoop {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_source: Arc<FrameSource>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    guard: ProcessingGuard,
    running: AtomicBool,
    counters: Counters,
}

impl EvaluationLoop {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_source: Arc<FrameSource>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("evaluation_loop"),
            frame_source,
            image_classifier,
            guard: ProcessingGuard::new(),
            running: AtomicBool::new(false),
            counters: Counters::default(),
        }
    }

    /// Starts the loop on its own thread. The run flag is raised before the
    /// thread exists, so a `stop` right after `spawn` is never lost.
    pub fn spawn(self: &Arc<Self>, events: Sender<LoopEvent>) -> JoinHandle<()> {
        self.running.store(true, Ordering::SeqCst);
        let evaluation_loop = Arc::clone(self);
        std::thread::spawn(move || evaluation_loop.run(&events))
    }

    /// Lets the current evaluation finish; no new one starts afterwards.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> LoopStats {
        LoopStats {
            evaluated: self.counters.evaluated.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            dropped_busy: self.counters.dropped_busy.load(Ordering::Relaxed),
            dropped_unusable: self.counters.dropped_unusable.load(Ordering::Relaxed),
            dropped_replaced: self.frame_source.dropped_frames(),
        }
    }

    fn run(&self, events: &Sender<LoopEvent>) {
        let _ = self.logger.info("Evaluation loop started");

        while self.is_running() {
            let Some(frame) = self.frame_source.capture() else {
                std::thread::sleep(self.config.idle_poll_interval);
                continue;
            };
            let from_fallback = !self.frame_source.is_capturing();
            let frame_age = frame.captured_at.elapsed();

            match self.evaluate_frame(frame) {
                Evaluation::Completed(result) => {
                    let _ = self.logger.info(&format!(
                        "{:?} in {:?}, frame waited {:?}",
                        result.dominant().map(|c| &c.label),
                        result.elapsed,
                        frame_age
                    ));
                    if result.dominant_confidence() > 0.0
                        && events.send(LoopEvent::Result(result)).is_err()
                    {
                        let _ = self.logger.error("Presentation side is gone, stopping");
                        self.stop();
                    }
                }
                Evaluation::Busy => {}
                Evaluation::Unusable => {
                    let _ = self.logger.info("Skipped frame without image data");
                }
                Evaluation::Failed(e) => {
                    let _ = self.logger.error(&format!("Evaluation failed: {}", e));
                }
            }

            if from_fallback {
                self.sleep_while_running(self.config.fallback_frame_interval);
            }
        }

        let stats = self.stats();
        let _ = self
            .logger
            .info(&format!("Evaluation loop stopped: {:?}", stats));
        let _ = events.send(LoopEvent::Stopped(stats));
    }

    /// Classifies `frame` unless another evaluation is in flight.
    pub fn evaluate_frame(&self, frame: Frame) -> Evaluation {
        if !frame.has_payload() {
            self.counters.dropped_unusable.fetch_add(1, Ordering::Relaxed);
            return Evaluation::Unusable;
        }

        let Some(_permit) = self.guard.try_acquire() else {
            self.counters.dropped_busy.fetch_add(1, Ordering::Relaxed);
            return Evaluation::Busy;
        };

        let top_k = self.config.top_k;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.image_classifier.classify(&frame, top_k)
        }))
        .unwrap_or_else(|_| Err(ClassifierError::Evaluation("classifier panicked".to_string())));
        drop(frame);

        match outcome {
            Ok(result) => {
                self.counters.evaluated.fetch_add(1, Ordering::Relaxed);
                Evaluation::Completed(result)
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                Evaluation::Failed(e)
            }
        }
    }

    fn sleep_while_running(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        let slice = self.config.idle_poll_interval.max(Duration::from_millis(1));
        while self.is_running() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(slice.min(deadline - now));
        }
    }
}
