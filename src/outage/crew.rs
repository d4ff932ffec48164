//! Crew dispatch status codes and their long-form descriptions.

use serde::Serialize;

/// Repair-crew dispatch state reported by the outage feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewStatus {
    NotAssigned,
    Assigned,
    Enroute,
    Onsite,
    Suspended,
}

impl CrewStatus {
    /// Look up a status by its exact, case-sensitive feed code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NOT_ASSIGNED" => Some(Self::NotAssigned),
            "ASSIGNED" => Some(Self::Assigned),
            "ENROUTE" => Some(Self::Enroute),
            "ONSITE" => Some(Self::Onsite),
            "SUSPENDED" => Some(Self::Suspended),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::NotAssigned => "NOT_ASSIGNED",
            Self::Assigned => "ASSIGNED",
            Self::Enroute => "ENROUTE",
            Self::Onsite => "ONSITE",
            Self::Suspended => "SUSPENDED",
        }
    }

    /// Customer-facing explanation of what this status means.
    pub fn detail(self) -> &'static str {
        match self {
            Self::NotAssigned => {
                "A crew hasn't been assigned to the outage yet. We're working around the clock to \
                 get power restored but we don't have updates at this point. If the status was \
                 previously assigned but changed back to not-assigned, the crew may have been \
                 called away to address an immediate safety issue or emergency, other work took \
                 longer than anticipated, or additional damage was found and we had to shift \
                 resources."
            }
            Self::Assigned => {
                "A crew has been assigned to the area and your outage is on their list to tackle \
                 when they can."
            }
            Self::Enroute => "A crew is on their way to investigate your outage.",
            Self::Onsite => {
                "A crew is working to investigate the cause of the outage and determine the \
                 required repairs and we'll have an estimated time of restoration (ETR) soon."
            }
            Self::Suspended => {
                "The initial crew that arrived and assessed the problem needed different \
                 equipment. This usually means heavy equipment or materials like new poles, or \
                 additional personnel to tackle the problem and it's not currently assigned to a \
                 specific crew."
            }
        }
    }
}

/// Detail text for a raw status code, or `None` for missing or unknown codes.
pub fn crew_status_detail(code: Option<&str>) -> Option<&'static str> {
    code.and_then(CrewStatus::from_code).map(CrewStatus::detail)
}
