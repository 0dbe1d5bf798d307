use std::path::Path;

use receipt_extractor::image::io::{load_frame, save_rgb, write_json_file};
use receipt_extractor::{ExtractorParams, ReceiptExtractor};

fn main() {
    env_logger::init();

    // Demo stub: frame image paths on the command line, fused receipt out.
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: receipt-extractor <frame.png> [frame.png ...]");
        std::process::exit(2);
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_frame(Path::new(path)) {
            Ok(frame) => frames.push(frame),
            Err(err) => eprintln!("skipping {path}: {err}"),
        }
    }

    let extractor = ReceiptExtractor::new(ExtractorParams::default());
    match extractor.extract_receipt_with_report(frames, false) {
        Ok((receipt, report)) => {
            println!(
                "fused {} sections from {} candidates in {:.1} ms",
                report.sections.len(),
                report.frames_rectified,
                report.timings.total_ms
            );
            if let Err(err) = save_rgb(&receipt, Path::new("receipt.png")) {
                eprintln!("write failed: {err}");
                std::process::exit(1);
            }
            if let Err(err) = write_json_file(Path::new("receipt_report.json"), &report) {
                eprintln!("report write failed: {err}");
            }
        }
        Err(err) => {
            eprintln!("extraction failed: {err}");
            std::process::exit(1);
        }
    }
}
