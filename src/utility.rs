use std::{
    sync::atomic::{compiler_fence, Ordering},
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressStyle};

/// Runs a closure and returns its output together with the elapsed wall-clock
/// time. The fences keep the compiler from moving work across the measured
/// region.
pub fn measure<T, F: FnOnce() -> T>(run: F) -> (T, Duration) {
    compiler_fence(Ordering::SeqCst);
    let start = Instant::now();
    let output = run();
    compiler_fence(Ordering::SeqCst);
    (output, start.elapsed())
}

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(ProgressStyle::with_template(" {msg} [{wide_bar}] {pos}/{len}").unwrap());
    bar
}
