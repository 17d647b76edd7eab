//! Replay application: runs recorded landmark frames through the classifier.

use crate::analysis::{FrameAnalyzer, HandReport};
use crate::config::Config;
use crate::recording::{RecordedFrame, RecordingReader};
use crate::Result;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Where the replay application reads frames from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A recording file
    File(PathBuf),
}

/// Replay application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Frame source
    pub input: InputSource,
    /// Classifier configuration
    pub config: Config,
}

/// Totals accumulated over one replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Frames successfully analyzed
    pub frames: u64,
    /// Frames skipped because they failed to parse or validate
    pub skipped: u64,
    /// Hands analyzed across all frames
    pub hands: u64,
    /// Hands that matched a named gesture
    pub gestures: u64,
}

/// Replay application
pub struct GestureApp {
    config: AppConfig,
    analyzer: FrameAnalyzer,
}

impl GestureApp {
    /// Create the application.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration fails validation.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.config.validate()?;
        let analyzer = FrameAnalyzer::new(config.config.movement.margin);

        Ok(Self { config, analyzer })
    }

    /// Run the replay to the end of the input.
    ///
    /// Malformed frames are skipped with a warning. A skipped frame never
    /// touches the motion state, so later frames stay consistent.
    ///
    /// # Errors
    ///
    /// Returns an error when the input source cannot be opened.
    pub fn run(&mut self) -> Result<ReplaySummary> {
        match self.config.input.clone() {
            InputSource::Stdin => {
                info!("Replaying landmark frames from stdin");
                self.replay(RecordingReader::new(io::stdin().lock()))
            }
            InputSource::File(path) => {
                info!("Replaying landmark frames from {}", path.display());
                let file = File::open(&path)?;
                self.replay(RecordingReader::new(BufReader::new(file)))
            }
        }
    }

    fn replay<I>(&mut self, frames: I) -> Result<ReplaySummary>
    where
        I: Iterator<Item = Result<RecordedFrame>>,
    {
        let mut summary = ReplaySummary::default();

        for (frame_no, frame) in frames.enumerate() {
            let frame = match frame {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Ignoring unreadable frame {frame_no}: {e}");
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.process_frame(frame_no, &frame) {
                Ok(reports) => {
                    summary.frames += 1;
                    summary.hands += reports.len() as u64;
                    summary.gestures +=
                        reports.iter().filter(|r| r.gesture.is_some()).count() as u64;
                }
                Err(e) => {
                    warn!("Ignoring invalid frame {frame_no}: {e}");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "Replay finished: {} frames analyzed, {} skipped, {} hands, {} gestures",
            summary.frames, summary.skipped, summary.hands, summary.gestures
        );
        Ok(summary)
    }

    fn process_frame(&mut self, frame_no: usize, frame: &RecordedFrame) -> Result<Vec<HandReport>> {
        // Validate every hand before updating any state so a bad hand cannot
        // leave the motion tracker half-updated.
        let mut hands = Vec::with_capacity(frame.hands.len());
        for hand in &frame.hands {
            hands.push((hand.label, hand.to_landmarks()?));
        }

        let reports = self.analyzer.analyze_frame(&hands);
        let display = &self.config.config.display;
        let mut finger_total: u8 = 0;

        for report in &reports {
            finger_total += report.finger_count;
            if display.show_gestures {
                if let Some(gesture) = report.gesture {
                    info!("frame {frame_no}: {} hand: {gesture}", report.label);
                }
            }
            if display.show_movement && report.moving {
                info!("frame {frame_no}: {} hand: Moving Hand...", report.label);
            }
        }

        if display.show_finger_count && !reports.is_empty() {
            info!("frame {frame_no}: {finger_total:02} fingers raised");
        }

        Ok(reports)
    }
}
