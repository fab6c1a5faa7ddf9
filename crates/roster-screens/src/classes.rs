//! Class list screen.

use chrono::NaiveDate;
use roster_core::{ListEngine, Predicate, SortState};
use roster_model::{Collection, FieldDef, FieldValue, Record, RecordId, Schema};
use roster_output::ExportLayout;
use roster_seed::{Generate, SeedTable, date_offset, ranged, record_id};

use crate::error::Result;
use crate::screen::{Screen, ScreenDef};

pub const SUBJECTS: SeedTable<&str> = SeedTable::new(
    "subjects",
    &[
        "Mathematics",
        "Literature",
        "English",
        "Physics",
        "Chemistry",
        "Biology",
        "History",
        "Geography",
        "Informatics",
        "Civics",
    ],
);

pub const TEACHERS: SeedTable<&str> = SeedTable::new(
    "homeroom_teachers",
    &[
        "Nguyen Thi Lan",
        "Tran Van Minh",
        "Le Thi Hoa",
        "Pham Quoc Bao",
        "Hoang Thi Mai",
        "Vu Duc Anh",
        "Dang Thu Trang",
    ],
);

pub const GRADE_LEVELS: SeedTable<u8> = SeedTable::new("grade_levels", &[10, 11, 12]);

pub const SECTIONS: SeedTable<&str> = SeedTable::new("sections", &["A1", "A2", "A3", "B1", "B2"]);

pub const STATUSES: SeedTable<ClassStatus> = SeedTable::new(
    "class_statuses",
    &[
        ClassStatus::Active,
        ClassStatus::Active,
        ClassStatus::Upcoming,
        ClassStatus::Active,
        ClassStatus::Archived,
    ],
);

/// Students a room can hold before the class counts as full.
pub const ROOM_CAPACITY: u32 = 40;

fn term_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 5).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassStatus {
    Active,
    Upcoming,
    Archived,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassRecord {
    pub id: RecordId,
    pub name: String,
    pub grade: u8,
    pub subject: &'static str,
    pub teacher: &'static str,
    pub students: u32,
    pub average_score: f64,
    pub room: String,
    pub status: ClassStatus,
    pub start_date: NaiveDate,
}

impl Record for ClassRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(self.id.as_str()),
            "name" => FieldValue::Text(&self.name),
            "grade" => FieldValue::Number(f64::from(self.grade)),
            "subject" => FieldValue::Text(self.subject),
            "teacher" => FieldValue::Text(self.teacher),
            "students" => FieldValue::Number(f64::from(self.students)),
            "average_score" => FieldValue::Number(self.average_score),
            "room" => FieldValue::Text(&self.room),
            "status" => FieldValue::Text(self.status.as_str()),
            "start_date" => FieldValue::Date(self.start_date),
            _ => return None,
        };
        Some(value)
    }
}

impl Generate for ClassRecord {
    fn generate_one(index: usize) -> roster_model::Result<Self> {
        let grade = *GRADE_LEVELS.pick(index, 1, 0);
        let section = SECTIONS.pick(index, 2, 1);
        // One decimal place: 5.0 ..= 9.5
        let tenths = ranged(index, 17, 4, 50, 95);
        Ok(Self {
            id: record_id("CLS", index)?,
            name: format!("{grade}{section} {}", SUBJECTS.pick(index, 3, 0)),
            grade,
            subject: SUBJECTS.pick(index, 3, 0),
            teacher: TEACHERS.pick(index, 5, 2),
            students: u32::try_from(ranged(index, 7, 3, 24, 45)).unwrap_or(ROOM_CAPACITY),
            average_score: tenths as f64 / 10.0,
            room: format!("R{}", 100 + ranged(index, 11, 0, 1, 30)),
            status: *STATUSES.pick(index, 1, 0),
            start_date: date_offset(term_start(), index, 3, 21),
        })
    }
}

impl ScreenDef for ClassRecord {
    const SCREEN: Screen = Screen::Classes;

    fn schema() -> Result<Schema> {
        Ok(Schema::new(vec![
            FieldDef::text("id").with_label("Class ID").searchable(),
            FieldDef::text("name").with_label("Class").searchable(),
            FieldDef::number("grade").with_label("Grade"),
            FieldDef::text("subject").with_label("Subject"),
            FieldDef::text("teacher")
                .with_label("Homeroom Teacher")
                .searchable(),
            FieldDef::number("students").with_label("Students"),
            FieldDef::number("average_score").with_label("Average Score"),
            FieldDef::text("room").with_label("Room"),
            FieldDef::text("status").with_label("Status"),
            FieldDef::date("start_date").with_label("Start Date"),
        ])?)
    }

    fn engine(collection: Collection<Self>) -> Result<ListEngine<Self>> {
        Ok(ListEngine::builder(Self::schema()?, collection)
            .field_filter("grade")?
            .field_filter("subject")?
            .field_filter("status")?
            .filter(
                "capacity",
                Predicate::new(|class: &ClassRecord, selected: &str| match selected {
                    "full" => class.students >= ROOM_CAPACITY,
                    "open" => class.students < ROOM_CAPACITY,
                    _ => false,
                }),
            )?
            .default_sort(SortState::new("name"))?
            .build()?)
    }

    fn export_layout(schema: &Schema) -> Result<ExportLayout<Self>> {
        Ok(ExportLayout::from_schema(
            schema,
            [
                "id",
                "name",
                "grade",
                "subject",
                "teacher",
                "students",
                "average_score",
                "status",
            ],
        )?)
    }
}
