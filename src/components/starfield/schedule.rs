//! Animation-frame bookkeeping.
//!
//! The browser hands out one callback handle per `requestAnimationFrame`. The
//! scheduler keeps at most one outstanding, so showing/hiding the page never
//! stacks duplicate frame chains.

/// Whether the frame loop is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
	#[default]
	Stopped,
	Running,
}

/// Tracks the single pending frame request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
	pending: Option<i32>,
	state: RunState,
}

impl FrameScheduler {
	pub fn state(&self) -> RunState {
		self.state
	}

	pub fn pending(&self) -> Option<i32> {
		self.pending
	}

	/// Issue a frame request unless one is already outstanding. `request`
	/// returns the browser handle, or `None` if the request failed.
	///
	/// Returns `true` if a new request was issued.
	pub fn request(&mut self, request: impl FnOnce() -> Option<i32>) -> bool {
		if self.pending.is_some() {
			return false;
		}
		self.pending = request();
		self.state = if self.pending.is_some() {
			RunState::Running
		} else {
			RunState::Stopped
		};
		self.pending.is_some()
	}

	/// The pending frame's callback is running; its handle is spent.
	pub fn fired(&mut self) {
		self.pending = None;
	}

	/// Like [`request`](Self::request), but only while the loop is running.
	/// Called at the end of a frame to continue the chain.
	pub fn reschedule(&mut self, request: impl FnOnce() -> Option<i32>) -> bool {
		self.state == RunState::Running && self.request(request)
	}

	/// Cancel the outstanding request (if any) and stop the loop.
	pub fn cancel(&mut self, cancel: impl FnOnce(i32)) {
		if let Some(handle) = self.pending.take() {
			cancel(handle);
		}
		self.state = RunState::Stopped;
	}
}
