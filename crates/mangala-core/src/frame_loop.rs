//! Visibility-driven redraw scheduling
//!
//! A [`FrameLoop`] decides when an animator's next frame must be requested or
//! its pending frame cancelled. The browser crate executes the returned
//! [`LoopCommand`]; the loop itself never touches a timer.

/// Whether the animator is currently producing frames
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// A frame is pending or being drawn
    Running,
    /// No frame is pending
    #[default]
    Paused,
}

/// Action the host must take after a state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    /// Request the next animation frame
    Schedule,
    /// Cancel the pending animation frame
    Cancel,
    /// Nothing to do
    None,
}

/// Two-state running/paused controller for a redraw loop
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames completed since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start producing frames; a running loop is left alone
    pub fn start(&mut self) -> LoopCommand {
        match self.state {
            LoopState::Running => LoopCommand::None,
            LoopState::Paused => {
                self.state = LoopState::Running;
                LoopCommand::Schedule
            }
        }
    }

    /// Stop producing frames; a paused loop is left alone
    pub fn pause(&mut self) -> LoopCommand {
        match self.state {
            LoopState::Running => {
                self.state = LoopState::Paused;
                LoopCommand::Cancel
            }
            LoopState::Paused => LoopCommand::None,
        }
    }

    /// React to a page visibility change
    pub fn on_visibility(&mut self, visible: bool) -> LoopCommand {
        if visible {
            self.start()
        } else {
            self.pause()
        }
    }

    /// Called at the end of a drawn frame; schedules the successor only while
    /// running, so frames never overlap
    pub fn frame_done(&mut self) -> LoopCommand {
        self.frames += 1;
        match self.state {
            LoopState::Running => LoopCommand::Schedule,
            LoopState::Paused => LoopCommand::None,
        }
    }
}
