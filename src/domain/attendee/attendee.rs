//! Registered attendees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{AttendeeId, Timestamp, ValidationError};

/// Ticket bought at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    Student,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Vip, TicketType::Regular, TicketType::Student];

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Vip => "VIP",
            TicketType::Regular => "Regular",
            TicketType::Student => "Student",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TicketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("ticket_type", s))
    }
}

/// Where a registration stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 3] = [
        RegistrationStatus::Confirmed,
        RegistrationStatus::Pending,
        RegistrationStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Confirmed => "Confirmed",
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RegistrationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistrationStatus::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("registration_status", s))
    }
}

/// A person registered for the conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    id: AttendeeId,
    name: String,
    email: String,
    ticket_type: TicketType,
    registration_date: Timestamp,
    status: RegistrationStatus,
    organization: String,
}

impl Attendee {
    pub fn new(
        id: AttendeeId,
        name: impl Into<String>,
        email: impl Into<String>,
        ticket_type: TicketType,
        registration_date: Timestamp,
        status: RegistrationStatus,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            ticket_type,
            registration_date,
            status,
            organization: organization.into(),
        }
    }

    pub fn id(&self) -> &AttendeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn registration_date(&self) -> &Timestamp {
        &self.registration_date
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == RegistrationStatus::Confirmed
    }
}

struct SeedAttendee {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    ticket_type: TicketType,
    registered_on: (i32, u32, u32),
    status: RegistrationStatus,
    organization: &'static str,
}

const SEED: &[SeedAttendee] = &[
    SeedAttendee {
        id: "1",
        name: "Alice Freeman",
        email: "alice.f@university.edu",
        ticket_type: TicketType::Student,
        registered_on: (2023, 10, 1),
        status: RegistrationStatus::Confirmed,
        organization: "MIT",
    },
    SeedAttendee {
        id: "2",
        name: "Robert Chen",
        email: "r.chen@techcorp.com",
        ticket_type: TicketType::Vip,
        registered_on: (2023, 9, 28),
        status: RegistrationStatus::Confirmed,
        organization: "TechCorp AI",
    },
    SeedAttendee {
        id: "3",
        name: "Sarah Miller",
        email: "sarah.m@institute.org",
        ticket_type: TicketType::Regular,
        registered_on: (2023, 10, 5),
        status: RegistrationStatus::Pending,
        organization: "Open Science Inst",
    },
    SeedAttendee {
        id: "4",
        name: "David Kim",
        email: "dkim@startup.io",
        ticket_type: TicketType::Regular,
        registered_on: (2023, 10, 2),
        status: RegistrationStatus::Confirmed,
        organization: "NeuralNet Inc",
    },
    SeedAttendee {
        id: "5",
        name: "Elena Rodriguez",
        email: "elena.r@university.edu",
        ticket_type: TicketType::Student,
        registered_on: (2023, 10, 10),
        status: RegistrationStatus::Confirmed,
        organization: "Stanford",
    },
];

/// The registration list shown on the attendees view.
pub fn sample_attendees() -> Vec<Attendee> {
    SEED.iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.registered_on;
            Some(Attendee::new(
                AttendeeId::new(seed.id).ok()?,
                seed.name,
                seed.email,
                seed.ticket_type,
                Timestamp::from_ymd(year, month, day)?,
                seed.status,
                seed.organization,
            ))
        })
        .collect()
}
