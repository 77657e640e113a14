#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tracing_subscriber::prelude::*;

fn init_logging() {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "flowdash") {
        let log_dir = proj_dirs.data_dir().join("logs");
        let _ = std::fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("flowdash.log");

        let file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&log_path)
            .expect("Failed to open log file");

        // Owner read/write only; the debug log never contains credentials,
        // but it does name internal engine endpoints
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = file.metadata() {
                let mut perms = metadata.permissions();
                perms.set_mode(0o600);
                if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                    eprintln!("Failed to set log file permissions: {}", e);
                }
            }
        }

        let filter = tracing_subscriber::EnvFilter::builder()
            .parse("flowdash=debug,eframe=info,egui=warn,winit=warn,wgpu=warn,reqwest=warn,hyper=warn")
            .expect("Failed to parse env filter");

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
                .with_ansi(false), // No ANSI colors in file
        );

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");

        // Bridge log crate events to tracing (for eframe, egui, wgpu, etc.)
        tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

        tracing::info!("Logging initialized to: {:?}", log_path);
    }
}

fn setup_panic_handler() {
    // Write panic info to a crash log even if logging isn't initialized yet
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "FlowDash crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "flowdash") {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();
    init_logging();

    tracing::info!("flowdash starting");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([420.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FlowDash",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(flowdash::FlowDashApp::new(cc)))
        }),
    )?;

    Ok(())
}
