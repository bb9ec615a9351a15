use app::App;
use clap::Parser;
use cli::Args;
use config::{Config, DisplayKind};
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_unavailable::DeviceCameraUnavailable;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_gaze::impl_fixed::DeviceGazeFixed;
use device_voice::impl_console::DeviceVoiceConsole;
use frame_source::{load_fallback_frame, FrameSource};
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::{ClassifierLoader, ImageClassifier};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use result_presenter::main::ResultPresenter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

mod app;
#[cfg(test)]
mod app_test;
mod cli;
mod config;
mod device_camera;
mod device_display;
mod device_gaze;
mod device_voice;
mod evaluation_loop;
mod frame;
mod frame_source;
mod image_classifier;
mod library;
mod result_presenter;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Args::parse().into_config(Config::default());

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = match config.display {
        DisplayKind::Console => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
        DisplayKind::Window => Arc::new(Mutex::new(DeviceDisplayGui::new())),
    };
    device_display.lock().map_err(|e| e.to_string())?.init()?;

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = if config.camera_enabled {
        Arc::new(DeviceCameraFake::new(
            logger.clone(),
            config.fake_camera_frame_interval,
        ))
    } else {
        Arc::new(DeviceCameraUnavailable)
    };

    let fallback_frame = match &config.fallback_frame_path {
        Some(path) => match load_fallback_frame(path) {
            Ok(frame) => Some(frame),
            Err(e) => {
                logger.error(&format!("Could not load {}: {}", path.display(), e))?;
                None
            }
        },
        None => None,
    };

    let frame_source = Arc::new(FrameSource::new(
        logger.clone(),
        device_camera,
        fallback_frame,
    ));

    let presenter = ResultPresenter::new(
        config.clone(),
        logger.clone(),
        device_display,
        Arc::new(DeviceVoiceConsole::new(
            logger.clone(),
            config.speech_time_per_word,
        )),
        Arc::new(DeviceGazeFixed::new(config.gaze_distance)),
    );

    let (model_name, load_classifier) = classifier_loader(&config, logger.clone());

    let app = App::new(config, logger.clone(), frame_source, presenter);

    let mut session = app.start(&model_name, load_classifier)?;

    let stop = Arc::new(AtomicBool::new(false));
    let stop_on_enter = stop.clone();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        stop_on_enter.store(true, Ordering::SeqCst);
    });
    logger.info("Press Enter to stop")?;

    let stats = session.run_until(&stop);

    logger.info(&format!(
        "Evaluated {} frames, {} failed, {} dropped while busy, {} unusable, {} replaced unseen",
        stats.evaluated,
        stats.failed,
        stats.dropped_busy,
        stats.dropped_unusable,
        stats.dropped_replaced
    ))?;

    Ok(())
}

fn classifier_loader(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> (String, ClassifierLoader) {
    match config.model.clone() {
        Some(model) => {
            let model_name = model.onnx_model_path.clone();
            let use_gpu = config.use_gpu;
            let loader: ClassifierLoader = Box::new(move || {
                let classifier = ImageClassifierTractOnnx::new(model, use_gpu, logger)?;
                Ok(Arc::new(classifier) as Arc<dyn ImageClassifier + Send + Sync>)
            });
            (model_name, loader)
        }
        None => {
            let inference_time = config.fake_inference_time;
            let loader: ClassifierLoader = Box::new(move || {
                Ok(Arc::new(ImageClassifierFake::new(logger, inference_time))
                    as Arc<dyn ImageClassifier + Send + Sync>)
            });
            ("fake classifier".to_string(), loader)
        }
    }
}
