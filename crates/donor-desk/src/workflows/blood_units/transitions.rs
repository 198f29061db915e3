use super::domain::UnitStatus;
use super::error::WorkflowError;

impl UnitStatus {
    /// Targets an operator may pick from this status.
    pub const fn allowed_targets(self) -> &'static [UnitStatus] {
        match self {
            UnitStatus::Pending => &[UnitStatus::Approved, UnitStatus::Denied],
            UnitStatus::Approved => &[UnitStatus::Denied, UnitStatus::Pending],
            UnitStatus::Denied => &[UnitStatus::Approved, UnitStatus::Pending],
            UnitStatus::Expired => &[],
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, UnitStatus::Expired)
    }

    /// Validate an operator-initiated move from `self` to `target`.
    ///
    /// Self-loops and anything leaving `expired` are invalid. Entering `expired`
    /// is never operator-initiated.
    pub fn check_transition(self, target: UnitStatus) -> Result<(), WorkflowError> {
        if target == self || self.is_terminal() {
            return Err(WorkflowError::InvalidTransition {
                from: self,
                to: target,
            });
        }
        if target == UnitStatus::Expired {
            return Err(WorkflowError::UnsupportedTransition { from: self });
        }
        if self.allowed_targets().contains(&target) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                from: self,
                to: target,
            })
        }
    }
}
