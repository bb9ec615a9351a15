use crate::config::Config;
use crate::device_camera::interface::CameraError;
use crate::device_display::interface::DisplayError;
use crate::evaluation_loop::event::{LoopEvent, LoopStats};
use crate::evaluation_loop::main::EvaluationLoop;
use crate::frame_source::FrameSource;
use crate::image_classifier::interface::{ClassifierError, ClassifierLoader};
use crate::library::logger::interface::Logger;
use crate::result_presenter::main::ResultPresenter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not load model: {0}")]
    Model(#[from] ClassifierError),
    #[error("no camera and no fallback frame: {0}")]
    Camera(#[source] CameraError),
    #[error("display failed: {0}")]
    Display(#[from] DisplayError),
}

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_source: Arc<FrameSource>,
    presenter: ResultPresenter,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_source: Arc<FrameSource>,
        presenter: ResultPresenter,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("app"),
            frame_source,
            presenter,
        }
    }

    /// Loads the model, starts the camera (or settles for the fallback frame)
    /// and spawns the evaluation loop. Any failure here is reported once on
    /// the display and the loop never starts.
    pub fn start(self, model_name: &str, load_classifier: ClassifierLoader) -> Result<Session, AppError> {
        self.presenter.clear()?;
        self.presenter
            .show_status(&format!("Loading {} ...", model_name))?;

        let image_classifier = match load_classifier() {
            Ok(image_classifier) => image_classifier,
            Err(e) => return Err(self.fail_init(AppError::Model(e))),
        };

        self.presenter
            .show_status("Loaded model. Starting camera...")?;

        match self
            .frame_source
            .start_capturing(self.config.capture_width, self.config.capture_height)
        {
            Ok(()) => self.presenter.show_status("Camera started. Running!")?,
            Err(e) if self.frame_source.has_fallback() => self.presenter.show_status(&format!(
                "Failed to start camera: {}. Using fallback image.",
                e
            ))?,
            Err(e) => return Err(self.fail_init(AppError::Camera(e))),
        }

        let evaluation_loop = Arc::new(EvaluationLoop::new(
            self.config.clone(),
            self.logger.clone(),
            self.frame_source.clone(),
            image_classifier,
        ));
        let (events_sender, events) = channel();
        let handle = evaluation_loop.spawn(events_sender);

        Ok(Session {
            logger: self.logger,
            frame_source: self.frame_source,
            presenter: self.presenter,
            evaluation_loop,
            handle: Some(handle),
            events,
        })
    }

    fn fail_init(&self, error: AppError) -> AppError {
        let _ = self.logger.error(&format!("Error init: {}", error));
        let _ = self.presenter.show_status(&format!("Error init: {}", error));
        error
    }
}

/// A running evaluation loop plus the presentation side that consumes it.
pub struct Session {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_source: Arc<FrameSource>,
    presenter: ResultPresenter,
    evaluation_loop: Arc<EvaluationLoop>,
    handle: Option<JoinHandle<()>>,
    events: Receiver<LoopEvent>,
}

impl Session {
    /// Presents results until `stop` is raised and the loop has wound down.
    pub fn run_until(&mut self, stop: &AtomicBool) -> LoopStats {
        let stats = loop {
            if stop.load(Ordering::SeqCst) && self.evaluation_loop.is_running() {
                let _ = self.logger.info("Stopping...");
                self.evaluation_loop.stop();
            }

            match self.events.recv_timeout(EVENT_POLL_INTERVAL) {
                Ok(LoopEvent::Result(result)) => {
                    if let Err(e) = self.presenter.present(&result) {
                        let _ = self.logger.error(&format!("Could not present result: {}", e));
                    }
                }
                Ok(LoopEvent::Stopped(stats)) => break stats,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break self.evaluation_loop.stats(),
            }
        };

        self.shutdown();
        stats
    }

    /// Runs once; later calls find the loop already joined.
    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        self.evaluation_loop.stop();
        if handle.join().is_err() {
            let _ = self.logger.error("Evaluation thread panicked");
        }
        if let Err(e) = self.frame_source.stop_capturing() {
            let _ = self.logger.error(&format!("Failed to stop camera: {}", e));
        }
        if let Err(e) = self.presenter.show_status("Stopped.") {
            let _ = self.logger.error(&format!("Could not show status: {}", e));
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
