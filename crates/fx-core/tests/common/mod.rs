// Manual frame/timer host and recording sinks shared by the integration tests.

#![allow(dead_code)]

use fx_core::{FilterOutput, FilterSink, FrameHost, FxError, FxResult, SpriteSink, SpriteTransform};
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct FrameRequest {
    pub id: u32,
    pub cancelled: bool,
    pub fired: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct TimerRequest {
    pub id: u32,
    pub generation: u64,
    pub due_ms: u64,
    pub cleared: bool,
    pub fired: bool,
}

/// Frames fire only when the test says so; timers fire when the clock is
/// advanced past their due time.
#[derive(Default)]
pub struct ManualHost {
    pub now_ms: u64,
    pub frames: Vec<FrameRequest>,
    pub timers: Vec<TimerRequest>,
    pub refuse_frames: bool,
    pub refuse_timers: bool,
    next_id: u32,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Frames scheduled and neither fired nor cancelled.
    pub fn pending_frames(&self) -> usize {
        self.frames.iter().filter(|f| !f.cancelled && !f.fired).count()
    }

    /// Fire the outstanding frame, if any. The caller then runs the tick.
    pub fn fire_frame(&mut self) -> bool {
        match self.frames.iter_mut().find(|f| !f.cancelled && !f.fired) {
            Some(f) => {
                f.fired = true;
                true
            }
            None => false,
        }
    }

    pub fn cleared_timers(&self) -> usize {
        self.timers.iter().filter(|t| t.cleared).count()
    }

    /// Move the clock forward and return the generations of timers that fired.
    pub fn advance(&mut self, ms: u64) -> Vec<u64> {
        self.now_ms += ms;
        let now = self.now_ms;
        self.timers
            .iter_mut()
            .filter(|t| !t.cleared && !t.fired && t.due_ms <= now)
            .map(|t| {
                t.fired = true;
                t.generation
            })
            .collect()
    }
}

impl FrameHost for ManualHost {
    type FrameHandle = u32;
    type TimerHandle = u32;

    fn request_frame(&mut self) -> FxResult<u32> {
        if self.refuse_frames {
            return Err(FxError::Schedule("frames refused".into()));
        }
        let id = self.next_id();
        self.frames.push(FrameRequest {
            id,
            cancelled: false,
            fired: false,
        });
        Ok(id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        if let Some(f) = self.frames.iter_mut().find(|f| f.id == handle) {
            f.cancelled = true;
        }
    }

    fn set_timer(&mut self, delay: Duration, generation: u64) -> FxResult<u32> {
        if self.refuse_timers {
            return Err(FxError::Schedule("timers refused".into()));
        }
        let id = self.next_id();
        self.timers.push(TimerRequest {
            id,
            generation,
            due_ms: self.now_ms + delay.as_millis() as u64,
            cleared: false,
            fired: false,
        });
        Ok(id)
    }

    fn clear_timer(&mut self, handle: u32) {
        if let Some(t) = self.timers.iter_mut().find(|t| t.id == handle) {
            t.cleared = true;
        }
    }
}

#[derive(Default)]
pub struct RecordingFilter {
    pub writes: Vec<FilterOutput>,
    pub reject: bool,
}

impl RecordingFilter {
    pub fn neutral_writes(&self) -> usize {
        self.writes.iter().filter(|w| w.is_neutral()).count()
    }

    pub fn last(&self) -> Option<FilterOutput> {
        self.writes.last().copied()
    }
}

impl FilterSink for RecordingFilter {
    fn write_filter(&mut self, output: &FilterOutput) -> FxResult<()> {
        if self.reject {
            return Err(FxError::UnsupportedWrite {
                target: "turb",
                reason: "rejected".into(),
            });
        }
        self.writes.push(*output);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSprite {
    pub transforms: Vec<SpriteTransform>,
    pub opacities: Vec<f32>,
    pub visibility: Vec<bool>,
    pub reject: bool,
}

impl SpriteSink for RecordingSprite {
    fn write_transform(&mut self, transform: &SpriteTransform) -> FxResult<()> {
        if self.reject {
            return Err(FxError::UnsupportedWrite {
                target: "fish",
                reason: "rejected".into(),
            });
        }
        self.transforms.push(*transform);
        Ok(())
    }

    fn write_opacity(&mut self, opacity: f32) -> FxResult<()> {
        self.opacities.push(opacity);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> FxResult<()> {
        self.visibility.push(visible);
        Ok(())
    }
}
