use serde::Serialize;
use stylepocket_domain::Outfit;

use crate::ApplicationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum UploadStep {
    #[default]
    Idle,
    Scanning {
        ticket: u64,
    },
    Result {
        candidate: Outfit,
    },
}

impl UploadStep {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning { .. } => "scanning",
            Self::Result { .. } => "result",
        }
    }
}

/// idle -> scanning -> result -> idle. Anything else is rejected and leaves
/// the step untouched.
#[derive(Debug, Default)]
pub struct UploadFlow {
    step: UploadStep,
    issued_tickets: u64,
}

impl UploadFlow {
    pub fn step(&self) -> &UploadStep {
        &self.step
    }

    pub fn begin(&mut self) -> Result<u64, ApplicationError> {
        if self.step != UploadStep::Idle {
            return Err(self.rejected("begin"));
        }
        self.issued_tickets += 1;
        let ticket = self.issued_tickets;
        self.step = UploadStep::Scanning { ticket };
        Ok(ticket)
    }

    pub fn scanning_ticket(&self) -> Option<u64> {
        match self.step {
            UploadStep::Scanning { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn complete(&mut self, ticket: u64, candidate: Outfit) -> Result<(), ApplicationError> {
        match self.step {
            UploadStep::Scanning { ticket: current } if current == ticket => {
                self.step = UploadStep::Result { candidate };
                Ok(())
            }
            UploadStep::Scanning { ticket: current } => Err(ApplicationError::InvalidState(
                format!("analysis ticket {ticket} does not match pending ticket {current}"),
            )),
            _ => Err(self.rejected("complete analysis")),
        }
    }

    pub(crate) fn abort_scan(&mut self) {
        if matches!(self.step, UploadStep::Scanning { .. }) {
            self.step = UploadStep::Idle;
        }
    }

    pub fn candidate(&self) -> Result<&Outfit, ApplicationError> {
        match &self.step {
            UploadStep::Result { candidate } => Ok(candidate),
            _ => Err(self.rejected("inspect candidate")),
        }
    }

    pub fn candidate_mut(&mut self) -> Result<&mut Outfit, ApplicationError> {
        let current = self.step.name();
        match &mut self.step {
            UploadStep::Result { candidate } => Ok(candidate),
            _ => Err(rejected(current, "edit candidate")),
        }
    }

    pub fn save(&mut self) -> Result<Outfit, ApplicationError> {
        match std::mem::take(&mut self.step) {
            UploadStep::Result { candidate } => Ok(candidate),
            other => {
                self.step = other;
                Err(self.rejected("save"))
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), ApplicationError> {
        if !matches!(self.step, UploadStep::Result { .. }) {
            return Err(self.rejected("cancel"));
        }
        self.step = UploadStep::Idle;
        Ok(())
    }

    fn rejected(&self, action: &str) -> ApplicationError {
        rejected(self.step.name(), action)
    }
}

fn rejected(current: &str, action: &str) -> ApplicationError {
    ApplicationError::InvalidState(format!("cannot {action} while upload is {current}"))
}
