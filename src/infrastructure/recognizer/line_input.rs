//! Line-oriented speech input adapter
//!
//! Stands in for a platform speech engine: each line read from standard
//! input becomes one finalized fragment, and end of input ends the stream.
//! This keeps the dictation loop fully scriptable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::ports::{
    RecognitionEvent, RecognitionFragment, RecognitionStream, RecognizerError, RecognizerSignal,
    SpeechRecognizer,
};

/// Speech recognizer backed by standard input lines
pub struct LineInputRecognizer {
    active: Arc<AtomicBool>,
}

impl LineInputRecognizer {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for LineInputRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechRecognizer for LineInputRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn start(&self) -> Result<RecognitionStream, RecognizerError> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(RecognizerError::AlreadyActive);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let active = Arc::clone(&self.active);

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut result_index = 0usize;

            loop {
                if !active.load(Ordering::SeqCst) {
                    break;
                }

                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let text = line.trim().to_string();
                        if text.is_empty() {
                            continue;
                        }
                        let event = RecognitionEvent {
                            result_index,
                            results: vec![RecognitionFragment::final_text(text)],
                        };
                        result_index += 1;
                        if tx.send(RecognizerSignal::Event(event)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        let _ = tx.send(RecognizerSignal::Ended);
                        break;
                    }
                    Err(e) => {
                        let _ = tx.send(RecognizerSignal::Error(e.to_string()));
                        break;
                    }
                }
            }

            active.store(false, Ordering::SeqCst);
        });

        Ok(rx)
    }

    async fn stop(&self) -> Result<(), RecognizerError> {
        self.active.store(false, Ordering::SeqCst);
        Ok(())
    }
}
