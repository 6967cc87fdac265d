/// A one-shot deadline used to auto-hide the scrollbar.
///
/// The timer owns no clock: adapters pass `now_ms` in and poll [`HideTimer::fire`] from their
/// frame loop or timer tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HideTimer {
    deadline_ms: Option<u64>,
}

impl HideTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// (Re)arms the timer; a pending deadline is replaced.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` once when the deadline has been reached, disarming the timer.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
