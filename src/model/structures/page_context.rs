use crate::model::structures::time_control::TimeControl;

/// Which of the two supported page layouts an evaluation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Game,
    Profile
}

/// Classification result for one evaluation of a document. Recomputed from
/// scratch every run; never cached across documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub kind: PageKind,
    pub time_control: TimeControl
}

impl PageContext {
    /// An unknown time control means the game-page anchor was missing or
    /// unrecognizable, so the profile layout is tried instead. That is the
    /// deliberate fallback policy, not a failure.
    pub fn from_time_control(time_control: TimeControl) -> PageContext {
        let kind = if time_control == TimeControl::Unknown {
            PageKind::Profile
        } else {
            PageKind::Game
        };

        PageContext { kind, time_control }
    }
}
