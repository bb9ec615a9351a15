use crate::app::{App, AppError};
use crate::config::Config;
use crate::device_camera::impl_manual::{tagged_frame, DeviceCameraManual};
use crate::device_camera::impl_unavailable::DeviceCameraUnavailable;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::impl_memory::DeviceDisplayMemory;
use crate::device_gaze::impl_fixed::DeviceGazeFixed;
use crate::device_voice::impl_fake::DeviceVoiceFake;
use crate::frame::Frame;
use crate::frame_source::FrameSource;
use crate::image_classifier::interface::{
    Classification, ClassificationResult, ClassifierError, ClassifierLoader, ImageClassifier,
};
use crate::library::logger::impl_memory::LoggerMemory;
use crate::result_presenter::main::ResultPresenter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Labels tag 1 as "cup" and everything else as "mug".
struct ClassifierByTag;

impl ImageClassifier for ClassifierByTag {
    fn classify(&self, frame: &Frame, _top_k: usize) -> Result<ClassificationResult, ClassifierError> {
        let label = if frame.pixels[0] == 1 { "cup" } else { "mug" };
        Ok(ClassificationResult {
            classifications: vec![Classification {
                label: label.to_string(),
                confidence: 0.9,
            }],
            elapsed: Duration::from_millis(3),
        })
    }
}

struct Fixture {
    display: DeviceDisplayMemory,
    voice: DeviceVoiceFake,
    app: App,
}

impl Fixture {
    fn new(camera: Arc<dyn DeviceCamera + Send + Sync>, fallback: Option<Frame>) -> Self {
        let config = Config {
            idle_poll_interval: Duration::from_millis(1),
            fallback_frame_interval: Duration::from_millis(5),
            ..Config::default()
        };
        let logger = Arc::new(LoggerMemory::new());
        let display = DeviceDisplayMemory::new();
        let voice = DeviceVoiceFake::new();

        let frame_source = Arc::new(FrameSource::new(logger.clone(), camera, fallback));
        let presenter = ResultPresenter::new(
            config.clone(),
            logger.clone(),
            Arc::new(Mutex::new(display.clone())),
            Arc::new(voice.clone()),
            Arc::new(DeviceGazeFixed::new(None)),
        );
        let app = App::new(config, logger, frame_source, presenter);

        Self { display, voice, app }
    }
}

fn loader_ok() -> ClassifierLoader {
    Box::new(|| Ok(Arc::new(ClassifierByTag) as Arc<dyn ImageClassifier + Send + Sync>))
}

fn wait_until(condition: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        std::thread::sleep(Duration::from_millis(2));
    }
}

fn count_containing(display: &DeviceDisplayMemory, needle: &str) -> usize {
    display
        .history()
        .iter()
        .filter(|text| text.contains(needle))
        .count()
}

#[test]
fn test_model_failure_stops_startup() {
    let f = Fixture::new(Arc::new(DeviceCameraManual::new()), None);
    let loader: ClassifierLoader =
        Box::new(|| Err(ClassifierError::Unavailable("SqueezeNet.onnx".to_string())));

    let result = f.app.start("SqueezeNet.onnx", loader);

    assert!(matches!(result, Err(AppError::Model(_))));
    let history = f.display.history();
    assert_eq!(history[0], "");
    assert_eq!(history[1], "Loading SqueezeNet.onnx ...");
    assert!(history.last().unwrap().starts_with("Error init:"));
}

#[test]
fn test_no_camera_and_no_fallback_stops_startup() {
    let f = Fixture::new(Arc::new(DeviceCameraUnavailable), None);

    let result = f.app.start("model", loader_ok());

    assert!(matches!(result, Err(AppError::Camera(_))));
    assert!(f.display.current().unwrap().starts_with("Error init:"));
}

#[test]
fn test_no_camera_uses_fallback_frame() {
    let f = Fixture::new(Arc::new(DeviceCameraUnavailable), Some(tagged_frame(1)));
    let display = f.display.clone();

    let mut session = f.app.start("model", loader_ok()).unwrap();
    assert!(display
        .history()
        .iter()
        .any(|text| text.starts_with("Failed to start camera")));

    let stop = Arc::new(AtomicBool::new(false));
    let session_stop = stop.clone();
    let runner = std::thread::spawn(move || session.run_until(&session_stop));

    wait_until(|| count_containing(&display, "cup 0.90") >= 2);
    stop.store(true, Ordering::SeqCst);
    let stats = runner.join().unwrap();

    assert!(stats.evaluated >= 2);
    assert_eq!(f.voice.spoken(), vec!["This is likely a cup in front of you"]);
}

#[test]
fn test_session_shows_every_result_and_speaks_changes() {
    let camera = Arc::new(DeviceCameraManual::new());
    let f = Fixture::new(camera.clone(), None);
    let display = f.display.clone();

    let mut session = f.app.start("model", loader_ok()).unwrap();
    assert_eq!(display.current().as_deref(), Some("Camera started. Running!"));

    let stop = Arc::new(AtomicBool::new(false));
    let session_stop = stop.clone();
    let runner = std::thread::spawn(move || session.run_until(&session_stop));

    camera.deliver_tagged(1);
    wait_until(|| count_containing(&display, "cup") == 1);
    camera.deliver_tagged(1);
    wait_until(|| count_containing(&display, "cup") == 2);
    camera.deliver_tagged(2);
    wait_until(|| count_containing(&display, "mug") == 1);

    stop.store(true, Ordering::SeqCst);
    let stats = runner.join().unwrap();

    assert_eq!(stats.evaluated, 3);
    assert_eq!(display.current().as_deref(), Some("Stopped."));
    assert_eq!(count_containing(&display, "Stopped."), 1);
    assert_eq!(
        f.voice.spoken(),
        vec![
            "This is likely a cup in front of you",
            "This is likely a mug in front of you",
        ]
    );
}

#[test]
fn test_dropping_session_stops_loop_and_camera() {
    let camera = Arc::new(DeviceCameraManual::new());
    let f = Fixture::new(camera.clone(), None);
    let display = f.display.clone();

    let session = f.app.start("model", loader_ok()).unwrap();
    drop(session);

    assert_eq!(display.current().as_deref(), Some("Stopped."));
    assert!(!camera.is_capturing());
}
