//! Session - one logical thread stepping the game
//!
//! Intents and time steps are serialized through the same `&mut self`, so
//! gravity and user moves can never race. After every mutation the session
//! runs the ghost hook and flushes queued events to the sink, so observers
//! always see state no older than the last step.

use std::time::Duration;

use log::trace;

use crate::core::Game;
use crate::script::Script;
use crate::sink::EventSink;
use crate::types::Intent;

#[derive(Debug)]
pub struct Session<S> {
    game: Game,
    sink: S,
    frame: Duration,
    frames: u64,
}

impl<S: EventSink> Session<S> {
    /// Start `game` and flush its opening events
    pub fn new(mut game: Game, sink: S, frame: Duration) -> Self {
        game.start();
        let mut session = Self {
            game,
            sink,
            frame,
            frames: 0,
        };
        session.flush();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.game.is_terminal()
    }

    pub fn into_parts(self) -> (Game, S) {
        (self.game, self.sink)
    }

    /// Apply one intent and flush
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        let changed = self.game.apply_intent(intent);
        self.flush();
        changed
    }

    /// Advance one frame of simulated time and flush
    pub fn step(&mut self) -> bool {
        self.frames += 1;
        let changed = self.game.tick(self.frame);
        if changed {
            trace!("frame {}: gravity step", self.frames);
        }
        self.flush();
        changed
    }

    /// Post-step hook: refresh the ghost, then deliver queued events
    pub fn flush(&mut self) {
        self.game.recompute_ghost();
        for event in self.game.drain_events() {
            self.sink.on_event(&event);
        }
    }

    /// Play `script` one intent per frame for up to `max_frames` frames
    ///
    /// Stops early once the game ends; returns the frames actually run.
    pub fn run_script(&mut self, script: &Script, max_frames: u64) -> u64 {
        let start = self.frames;
        while self.frames - start < max_frames && !self.is_finished() {
            if let Some(intent) = script.intent_at(self.frames - start) {
                self.handle_intent(intent);
            }
            if self.is_finished() {
                break;
            }
            self.step();
        }
        self.frames - start
    }
}
