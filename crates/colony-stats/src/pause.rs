use colony_core::Millis;

/// Record of every pause in a run, as `[start, end)` intervals on the raw
/// clock.  At most one interval is open at a time.
#[derive(Clone, Debug, Default)]
pub struct PauseLog {
    closed: Vec<(Millis, Millis)>,
    open: Option<Millis>,
}

impl PauseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an interval at `now`.  Returns `false` if one is already open.
    pub fn on_pause(&mut self, now: Millis) -> bool {
        if self.open.is_some() {
            return false;
        }
        self.open = Some(now);
        true
    }

    /// Close the open interval at `now`.  Returns `false` if none was open.
    pub fn on_resume(&mut self, now: Millis) -> bool {
        match self.open.take() {
            Some(start) => {
                self.closed.push((start, now.max(start)));
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.open.is_some()
    }

    /// Milliseconds of pause overlapping `[start, now)`.  An open interval
    /// counts up to `now`.
    pub fn overlap(&self, start: Millis, now: Millis) -> u64 {
        let open = self.open.map(|s| (s, now));
        self.closed
            .iter()
            .copied()
            .chain(open)
            .map(|(ps, pe)| {
                let lo = ps.max(start);
                let hi = pe.min(now);
                hi.since(lo)
            })
            .sum()
    }

    /// Total closed pause time.
    pub fn total_closed(&self) -> u64 {
        self.closed.iter().map(|&(s, e)| e.since(s)).sum()
    }

    pub fn intervals(&self) -> &[(Millis, Millis)] {
        &self.closed
    }
}
