/// Spread-shot power-up timer.
///
/// The remaining-ticks counter only exists inside `Active`, so "active iff
/// remaining > 0" cannot be violated.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerUpState {
    #[default]
    Inactive,
    /// `remaining_ticks` is always at least 1.
    Active { remaining_ticks: u32 },
}

impl PowerUpState {
    /// State after picking up an item.  Resets the timer rather than adding
    /// to it.  A zero duration leaves the power-up inactive.
    pub fn activate(duration: u32) -> Self {
        if duration == 0 {
            Self::Inactive
        } else {
            Self::Active {
                remaining_ticks: duration,
            }
        }
    }

    /// One tick of decay.  Expires on the tick the counter reaches zero.
    pub fn tick(self) -> Self {
        match self {
            Self::Inactive => Self::Inactive,
            Self::Active { remaining_ticks } if remaining_ticks <= 1 => Self::Inactive,
            Self::Active { remaining_ticks } => Self::Active {
                remaining_ticks: remaining_ticks - 1,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn remaining_ticks(&self) -> u32 {
        match self {
            Self::Inactive => 0,
            Self::Active { remaining_ticks } => *remaining_ticks,
        }
    }
}
