use crate::option::SelectOption;

/// What arrow keys do at list boundaries.
///
/// The menu defaults to `Wrap` so short lists can be cycled without
/// reaching for Home/End; `Clamp` keeps long filtered lists from jumping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    #[default]
    Wrap,
    Clamp,
}

/// Highlight state machine over the currently visible sequence.
///
/// The navigator never stores the sequence; every transition receives the
/// freshly filtered slice, so it is pure with respect to what it moves
/// over. `None` means no row is highlighted, which is also the only valid
/// state over an empty sequence.
#[derive(Clone, Debug)]
pub struct Navigator {
    highlight: Option<usize>,
    policy: BoundaryPolicy,
    skip_disabled: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            highlight: None,
            policy: BoundaryPolicy::default(),
            skip_disabled: true,
        }
    }
}

impl Navigator {
    pub fn new(policy: BoundaryPolicy, skip_disabled: bool) -> Self {
        Self {
            highlight: None,
            policy,
            skip_disabled,
        }
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Moves the highlight one row up. Returns `true` if it moved.
    pub fn move_up(&mut self, visible: &[SelectOption]) -> bool {
        self.step(visible, -1)
    }

    /// Moves the highlight one row down. Returns `true` if it moved.
    pub fn move_down(&mut self, visible: &[SelectOption]) -> bool {
        self.step(visible, 1)
    }

    /// Pointer-driven highlight: jump straight to `index`, clamped.
    pub fn set(&mut self, index: usize, visible: &[SelectOption]) {
        if visible.is_empty() {
            self.highlight = None;
        } else {
            self.highlight = Some(index.min(visible.len() - 1));
        }
    }

    /// Re-validates the highlight after the sequence changed: clamps to the
    /// last row, or drops to `None` when nothing is visible.
    pub fn reconcile(&mut self, visible: &[SelectOption]) {
        self.highlight = match self.highlight {
            Some(_) if visible.is_empty() => None,
            Some(i) => Some(i.min(visible.len() - 1)),
            None => None,
        };
    }

    fn step(&mut self, visible: &[SelectOption], dir: i64) -> bool {
        if visible.is_empty() {
            self.highlight = None;
            return false;
        }
        let len = visible.len() as i64;

        // Entering the list: down starts at the top, up at the bottom when
        // wrapping (at the top when clamping).
        let start = match self.highlight {
            Some(i) => i as i64 + dir,
            None if dir > 0 => 0,
            None => match self.policy {
                BoundaryPolicy::Wrap => len - 1,
                BoundaryPolicy::Clamp => 0,
            },
        };

        let mut idx = start;
        let mut remaining = len;
        while remaining > 0 {
            let wrapped = idx < 0 || idx >= len;
            if wrapped {
                match self.policy {
                    BoundaryPolicy::Wrap => idx = idx.rem_euclid(len),
                    BoundaryPolicy::Clamp => {
                        idx = idx.clamp(0, len - 1);
                        if Some(idx as usize) == self.highlight {
                            return false;
                        }
                        // Clamped onto a disabled edge row: stay put.
                        if self.skip_disabled && visible[idx as usize].disabled {
                            return false;
                        }
                    }
                }
            }
            if !self.skip_disabled || !visible[idx as usize].disabled {
                let next = Some(idx as usize);
                let moved = next != self.highlight;
                self.highlight = next;
                return moved;
            }
            idx += dir;
            remaining -= 1;
        }

        // Every row is disabled; the highlight does not move.
        false
    }
}
