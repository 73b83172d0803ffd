//! Per-effect frame loop.
//!
//! The loop is a two-state machine. While `Running`, exactly one frame
//! callback is scheduled with the host; the callback performs one update and
//! schedules the next. Only an explicit [`RenderLoop::stop`] returns it to
//! `Idle`.

use crate::error::FxResult;
use std::time::Duration;

/// The environment that actually fires frames and timers.
///
/// In the browser this is `requestAnimationFrame` / `setTimeout`; tests drive
/// a manual implementation.
pub trait FrameHost {
    type FrameHandle;
    type TimerHandle;

    fn request_frame(&mut self) -> FxResult<Self::FrameHandle>;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);

    /// Schedule a one-shot timer. When it fires the host reports `generation`
    /// back to whoever armed it.
    fn set_timer(&mut self, delay: Duration, generation: u64) -> FxResult<Self::TimerHandle>;
    fn clear_timer(&mut self, handle: Self::TimerHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug)]
pub struct RenderLoop<F> {
    state: LoopState,
    scheduled: Option<F>,
    frames: u64,
}

impl<F> Default for RenderLoop<F> {
    fn default() -> Self {
        Self {
            state: LoopState::Idle,
            scheduled: None,
            frames: 0,
        }
    }
}

impl<F> RenderLoop<F> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames run since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Idle -> Running. Returns `false` if already running or the host
    /// refused to schedule a frame.
    pub fn start<H>(&mut self, host: &mut H) -> bool
    where
        H: FrameHost<FrameHandle = F>,
    {
        if self.is_running() {
            return false;
        }
        match host.request_frame() {
            Ok(handle) => {
                self.scheduled = Some(handle);
                self.state = LoopState::Running;
                log::debug!("[loop] started");
                true
            }
            Err(e) => {
                log::warn!("[loop] start failed: {}", e);
                false
            }
        }
    }

    /// Call first thing in the frame callback. The fired handle is consumed;
    /// returns `false` for a callback that outlived its loop.
    pub fn begin_frame(&mut self) -> bool {
        self.scheduled = None;
        if self.is_running() {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    /// Schedule the next frame. A refused request drops the loop to idle.
    pub fn reschedule<H>(&mut self, host: &mut H)
    where
        H: FrameHost<FrameHandle = F>,
    {
        if !self.is_running() || self.scheduled.is_some() {
            return;
        }
        match host.request_frame() {
            Ok(handle) => self.scheduled = Some(handle),
            Err(e) => {
                log::warn!("[loop] reschedule failed, going idle: {}", e);
                self.state = LoopState::Idle;
            }
        }
    }

    /// Running -> Idle, cancelling the scheduled frame. Returns `false` if
    /// already idle.
    pub fn stop<H>(&mut self, host: &mut H) -> bool
    where
        H: FrameHost<FrameHandle = F>,
    {
        if !self.is_running() {
            return false;
        }
        if let Some(handle) = self.scheduled.take() {
            host.cancel_frame(handle);
        }
        self.state = LoopState::Idle;
        log::debug!("[loop] stopped after {} frames", self.frames);
        true
    }
}
