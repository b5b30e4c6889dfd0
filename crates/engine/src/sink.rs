//! Event observers

use log::{debug, info};

use crate::types::GameEvent;

/// Receives every event a session drains, in order
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Keeps a copy of every event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    events: Vec<GameEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events with the given [`GameEvent::name`]
    pub fn count(&self, name: &str) -> usize {
        self.events.iter().filter(|event| event.name() == name).count()
    }

    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for Recorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) {
        if event.is_terminal() {
            info!("{}", event.name());
        } else {
            debug!("{:?}", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_counts_by_name() {
        let mut recorder = Recorder::new();
        recorder.on_event(&GameEvent::ScoreChanged { score: 40 });
        recorder.on_event(&GameEvent::ScoreChanged { score: 80 });
        recorder.on_event(&GameEvent::GameOver);

        assert_eq!(recorder.count("score_changed"), 2);
        assert_eq!(recorder.count("game_over"), 1);
        assert_eq!(recorder.take().len(), 3);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = 0;
        {
            let mut sink = |_: &GameEvent| seen += 1;
            sink.on_event(&GameEvent::GameWon);
            sink.on_event(&GameEvent::GameOver);
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_log_sink_alongside_recorder() {
        let mut log = LogSink;
        let mut recorder = Recorder::new();
        let sinks: [&mut dyn EventSink; 2] = [&mut log, &mut recorder];
        for sink in sinks {
            sink.on_event(&GameEvent::GameOver);
        }
        assert_eq!(recorder.events(), &[GameEvent::GameOver]);
    }
}
