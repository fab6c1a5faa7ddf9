//! Document library screen.

use chrono::NaiveDate;
use roster_core::{ListEngine, Predicate, SortDirection, SortState};
use roster_model::{Collection, FieldDef, FieldValue, Record, RecordId, Schema};
use roster_output::ExportLayout;
use roster_seed::{Generate, SeedTable, cycle, date_offset, ranged, record_id};

use crate::error::Result;
use crate::screen::{Screen, ScreenDef};

pub const TOPICS: SeedTable<&str> = SeedTable::new(
    "document_topics",
    &[
        "Lesson Plan",
        "Exam Schedule",
        "Attendance Policy",
        "Lab Safety",
        "Curriculum",
        "Parent Meeting",
        "Budget Report",
        "Field Trip",
    ],
);

pub const CATEGORIES: SeedTable<&str> = SeedTable::new(
    "document_categories",
    &["policy", "teaching", "report", "form"],
);

pub const FILE_TYPES: SeedTable<&str> =
    SeedTable::new("file_types", &["pdf", "docx", "xlsx", "pptx"]);

pub const OWNERS: SeedTable<&str> = SeedTable::new(
    "document_owners",
    &["Academic Office", "Head Teacher", "Accounting", "Student Affairs"],
);

pub const VISIBILITIES: SeedTable<Visibility> = SeedTable::new(
    "visibilities",
    &[
        Visibility::Public,
        Visibility::Staff,
        Visibility::Staff,
        Visibility::Restricted,
    ],
);

/// Uploads above this size are flagged as large.
pub const LARGE_FILE_KB: u32 = 2048;

fn archive_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Staff,
    Restricted,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Staff => "staff",
            Self::Restricted => "restricted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub id: RecordId,
    pub title: String,
    pub category: &'static str,
    pub file_type: &'static str,
    pub owner: &'static str,
    pub size_kb: u32,
    pub version: u32,
    pub visibility: Visibility,
    pub updated: NaiveDate,
}

impl Record for DocumentRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(self.id.as_str()),
            "title" => FieldValue::Text(&self.title),
            "category" => FieldValue::Text(self.category),
            "file_type" => FieldValue::Text(self.file_type),
            "owner" => FieldValue::Text(self.owner),
            "size_kb" => FieldValue::Number(f64::from(self.size_kb)),
            "version" => FieldValue::Number(f64::from(self.version)),
            "visibility" => FieldValue::Text(self.visibility.as_str()),
            "updated" => FieldValue::Date(self.updated),
            _ => return None,
        };
        Some(value)
    }
}

impl Generate for DocumentRecord {
    fn generate_one(index: usize) -> roster_model::Result<Self> {
        let edition = 2023 + cycle(index, 1, 0, 3);
        Ok(Self {
            id: record_id("DOC", index)?,
            title: format!("{} {edition}", TOPICS.pick(index, 3, 0)),
            category: CATEGORIES.pick(index, 1, 2),
            file_type: FILE_TYPES.pick(index, 5, 0),
            owner: OWNERS.pick(index, 3, 1),
            size_kb: u32::try_from(ranged(index, 389, 17, 24, 4096)).unwrap_or(LARGE_FILE_KB),
            version: u32::try_from(ranged(index, 2, 0, 1, 6)).unwrap_or(1),
            visibility: *VISIBILITIES.pick(index, 1, 0),
            updated: date_offset(archive_start(), index, 29, 300),
        })
    }
}

impl ScreenDef for DocumentRecord {
    const SCREEN: Screen = Screen::Documents;

    fn schema() -> Result<Schema> {
        Ok(Schema::new(vec![
            FieldDef::text("id").with_label("Document ID").searchable(),
            FieldDef::text("title").with_label("Title").searchable(),
            FieldDef::text("category").with_label("Category"),
            FieldDef::text("file_type").with_label("Type"),
            FieldDef::text("owner").with_label("Owner").searchable(),
            FieldDef::number("size_kb").with_label("Size (KB)"),
            FieldDef::number("version").with_label("Version"),
            FieldDef::text("visibility").with_label("Visibility"),
            FieldDef::date("updated").with_label("Updated"),
        ])?)
    }

    fn engine(collection: Collection<Self>) -> Result<ListEngine<Self>> {
        Ok(ListEngine::builder(Self::schema()?, collection)
            .field_filter("category")?
            .field_filter("file_type")?
            .field_filter("visibility")?
            .filter(
                "size",
                Predicate::new(|document: &DocumentRecord, selected: &str| match selected {
                    "large" => document.size_kb > LARGE_FILE_KB,
                    "small" => document.size_kb <= LARGE_FILE_KB,
                    _ => false,
                }),
            )?
            .default_sort(SortState::new("updated").with_direction(SortDirection::Desc))?
            .page_size(20)?
            .build()?)
    }

    fn export_layout(schema: &Schema) -> Result<ExportLayout<Self>> {
        Ok(ExportLayout::all_fields(schema))
    }
}
