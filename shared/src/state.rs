use std::str::FromStr;

use crate::markers;

// ============================================================================
// Section State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    Open,
    #[default]
    Closed,
}

impl SectionState {
    pub fn from_open(is_open: bool) -> Self {
        if is_open {
            SectionState::Open
        } else {
            SectionState::Closed
        }
    }

    /// Reads a declarative `data-open` value.
    pub fn from_flag(value: Option<&str>) -> Self {
        Self::from_open(markers::parse_flag(value))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SectionState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SectionState::Open => SectionState::Closed,
            SectionState::Closed => SectionState::Open,
        }
    }
}

// ============================================================================
// Widget Policy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// At most one open section.
    #[default]
    Single,
    Multiple,
}

impl Policy {
    /// Reads a declarative `data-allow-multiple` value.
    pub fn from_flag(value: Option<&str>) -> Self {
        if markers::parse_flag(value) {
            Policy::Multiple
        } else {
            Policy::Single
        }
    }

    pub fn allows_multiple(&self) -> bool {
        matches!(self, Policy::Multiple)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Single => "single",
            Policy::Multiple => "multiple",
        }
    }
}

impl FromStr for Policy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Policy::Single),
            "multiple" => Ok(Policy::Multiple),
            _ => Err(()),
        }
    }
}

// ============================================================================
// State Application
// ============================================================================

/// One observable change to a section's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add or remove the open class on the section.
    OpenMarker(bool),
    /// Write `data-open` back onto the section.
    PersistFlag(bool),
    /// `aria-expanded` on the header.
    Expanded(bool),
    /// `hidden` on the content region.
    ContentHidden(bool),
}

/// Effects that bring a section's markup in line with `state`.
///
/// Every effect sets an absolute value, so executing the same list twice
/// leaves the markup as executing it once.
pub fn apply_state(state: SectionState) -> [Effect; 4] {
    let open = state.is_open();
    [
        Effect::OpenMarker(open),
        Effect::PersistFlag(open),
        Effect::Expanded(open),
        Effect::ContentHidden(!open),
    ]
}

// ============================================================================
// Toggle Transition
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub state: SectionState,
}

/// Toggles section `target` of a widget whose live states are `states`.
///
/// Under [`Policy::Single`], opening a closed section first closes every
/// other section, whether or not it is open. The target's transition is
/// always last. An out-of-range target yields no transitions.
pub fn toggle(policy: Policy, states: &[SectionState], target: usize) -> Vec<Transition> {
    let Some(current) = states.get(target) else {
        return Vec::new();
    };

    let mut transitions = Vec::with_capacity(states.len());
    if !policy.allows_multiple() && !current.is_open() {
        transitions.extend((0..states.len()).filter(|&i| i != target).map(|index| Transition {
            index,
            state: SectionState::Closed,
        }));
    }
    transitions.push(Transition {
        index: target,
        state: current.toggled(),
    });
    transitions
}

/// Applies `transitions` to an in-memory state list.
pub fn settle(states: &mut [SectionState], transitions: &[Transition]) {
    for transition in transitions {
        if let Some(state) = states.get_mut(transition.index) {
            *state = transition.state;
        }
    }
}
