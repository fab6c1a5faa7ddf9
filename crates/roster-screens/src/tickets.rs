//! Support ticket queue screen.

use chrono::NaiveDate;
use roster_core::{ListEngine, Predicate, SortDirection, SortState};
use roster_model::{Collection, FieldDef, FieldValue, Record, RecordId, Schema};
use roster_output::{ExportColumn, ExportLayout};
use roster_seed::{Generate, SeedTable, date_offset, ranged, record_id, sparse};

use crate::error::Result;
use crate::screen::{Screen, ScreenDef};

pub const SUBJECTS: SeedTable<&str> = SeedTable::new(
    "ticket_subjects",
    &[
        "Cannot log in",
        "Grade missing from report",
        "Projector not working",
        "Reset parent password",
        "Timetable clash",
        "Wi-Fi drops in lab",
        "Printer jam",
    ],
);

pub const REQUESTERS: SeedTable<&str> = SeedTable::new(
    "requesters",
    &["Le Thi Hoa", "Pham Quoc Bao", "Bui Chi", "Do Nam", "Vu Linh"],
);

pub const ASSIGNEES: SeedTable<&str> = SeedTable::new(
    "assignees",
    &["IT Desk", "Academic Office", "Facilities"],
);

pub const PRIORITIES: SeedTable<Priority> = SeedTable::new(
    "priorities",
    &[
        Priority::Normal,
        Priority::Low,
        Priority::High,
        Priority::Normal,
        Priority::Urgent,
    ],
);

pub const STATUSES: SeedTable<TicketStatus> = SeedTable::new(
    "ticket_statuses",
    &[
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Open,
        TicketStatus::Closed,
        TicketStatus::Resolved,
    ],
);

/// Hours within which a first response meets the service level.
pub const SLA_HOURS: u32 = 24;

fn queue_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Sort rank, so `urgent` outranks `high` rather than following the alphabet.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Normal => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    pub id: RecordId,
    pub subject: String,
    pub requester: &'static str,
    /// Unassigned tickets have no owner yet.
    pub assignee: Option<&'static str>,
    pub priority: Priority,
    pub status: TicketStatus,
    pub opened: NaiveDate,
    pub response_hours: u32,
}

impl TicketRecord {
    pub fn within_sla(&self) -> bool {
        self.response_hours <= SLA_HOURS
    }
}

impl Record for TicketRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "subject" => Some(FieldValue::Text(&self.subject)),
            "requester" => Some(FieldValue::Text(self.requester)),
            "assignee" => self.assignee.map(FieldValue::Text),
            "priority" => Some(FieldValue::Text(self.priority.as_str())),
            "priority_rank" => Some(FieldValue::Number(f64::from(self.priority.rank()))),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "opened" => Some(FieldValue::Date(self.opened)),
            "response_hours" => Some(FieldValue::Number(f64::from(self.response_hours))),
            _ => None,
        }
    }
}

impl Generate for TicketRecord {
    fn generate_one(index: usize) -> roster_model::Result<Self> {
        Ok(Self {
            id: record_id("TKT", index)?,
            subject: SUBJECTS.pick(index, 1, 0).to_string(),
            requester: REQUESTERS.pick(index, 2, 1),
            assignee: sparse(index, 4, *ASSIGNEES.pick(index, 1, 0)),
            priority: *PRIORITIES.pick(index, 1, 0),
            status: *STATUSES.pick(index, 1, 0),
            opened: date_offset(queue_start(), index, 7, 60),
            response_hours: u32::try_from(ranged(index, 13, 5, 1, 72)).unwrap_or(SLA_HOURS),
        })
    }
}

impl ScreenDef for TicketRecord {
    const SCREEN: Screen = Screen::Tickets;

    fn schema() -> Result<Schema> {
        Ok(Schema::new(vec![
            FieldDef::text("id").with_label("Ticket").searchable(),
            FieldDef::text("subject").with_label("Subject").searchable(),
            FieldDef::text("requester").with_label("Requester").searchable(),
            FieldDef::text("assignee").with_label("Assignee"),
            FieldDef::text("priority").with_label("Priority"),
            FieldDef::number("priority_rank").with_label("Priority Rank"),
            FieldDef::text("status").with_label("Status"),
            FieldDef::date("opened").with_label("Opened"),
            FieldDef::number("response_hours").with_label("Response (h)"),
        ])?)
    }

    fn engine(collection: Collection<Self>) -> Result<ListEngine<Self>> {
        Ok(ListEngine::builder(Self::schema()?, collection)
            .field_filter("priority")?
            .field_filter("status")?
            .filter(
                "assignee",
                Predicate::new(|ticket: &TicketRecord, selected: &str| match selected {
                    "unassigned" => ticket.assignee.is_none(),
                    name => ticket.assignee == Some(name),
                }),
            )?
            .filter(
                "sla",
                Predicate::new(|ticket: &TicketRecord, selected: &str| match selected {
                    "met" => ticket.within_sla(),
                    "breached" => !ticket.within_sla() && !ticket.status.is_done(),
                    "late" => !ticket.within_sla(),
                    _ => false,
                }),
            )?
            .default_sort(SortState::new("priority_rank").with_direction(SortDirection::Desc))?
            .build()?)
    }

    fn export_layout(schema: &Schema) -> Result<ExportLayout<Self>> {
        let layout = ExportLayout::from_schema(
            schema,
            ["id", "subject", "requester", "priority", "status", "opened"],
        )?;
        Ok(layout
            .column(ExportColumn::new("Assignee", |ticket: &TicketRecord| {
                ticket.assignee.unwrap_or("Unassigned").to_string()
            }))
            .column(ExportColumn::new("SLA", |ticket: &TicketRecord| {
                if ticket.within_sla() { "met" } else { "late" }.to_string()
            })))
    }
}
