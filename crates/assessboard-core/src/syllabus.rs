//! Per-topic progress shown in the syllabus breakdown. Read-only.

use serde::Serialize;

/// Progress on one syllabus topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyllabusTopic {
    pub topic: &'static str,
    /// Percent complete, 0..=100.
    pub progress: u8,
    /// Colour name for the progress bar (`blue`, `orange`, `red`, `green`).
    pub color_tag: &'static str,
}

impl SyllabusTopic {
    pub fn ratio(&self) -> f64 {
        f64::from(self.progress.min(100)) / 100.0
    }
}

pub const SYLLABUS: [SyllabusTopic; 4] = [
    SyllabusTopic {
        topic: "HTML Tools, Forms, History",
        progress: 80,
        color_tag: "blue",
    },
    SyllabusTopic {
        topic: "Tags & References in HTML",
        progress: 60,
        color_tag: "orange",
    },
    SyllabusTopic {
        topic: "Tables & References in HTML",
        progress: 24,
        color_tag: "red",
    },
    SyllabusTopic {
        topic: "Tables & CSS Basics",
        progress: 96,
        color_tag: "green",
    },
];
