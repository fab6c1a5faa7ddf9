//! User account screen.

use chrono::{Days, NaiveDate};
use roster_core::{ListEngine, Predicate, SortDirection, SortState};
use roster_model::{Collection, FieldDef, FieldValue, Record, RecordId, Schema};
use roster_output::{ExportColumn, ExportLayout};
use roster_seed::{Generate, SeedTable, date_offset, ranged, record_id, sparse};

use crate::error::Result;
use crate::screen::{Screen, ScreenDef};

pub const FAMILY_NAMES: SeedTable<&str> = SeedTable::new(
    "family_names",
    &["Nguyen", "Tran", "Le", "Pham", "Hoang", "Vu", "Dang", "Bui", "Do"],
);

pub const GIVEN_NAMES: SeedTable<&str> = SeedTable::new(
    "given_names",
    &[
        "An", "Binh", "Chi", "Dung", "Giang", "Hai", "Khanh", "Linh", "Nam", "Phuong", "Quan",
    ],
);

pub const ROLES: SeedTable<UserRole> = SeedTable::new(
    "user_roles",
    &[
        UserRole::Student,
        UserRole::Student,
        UserRole::Teacher,
        UserRole::Student,
        UserRole::Parent,
        UserRole::Admin,
    ],
);

pub const DEPARTMENTS: SeedTable<&str> = SeedTable::new(
    "departments",
    &["Sciences", "Humanities", "Languages", "Administration"],
);

/// Days without a login after which an account counts as dormant.
pub const DORMANT_AFTER_DAYS: i64 = 30;

fn registry_opened() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, 15).unwrap_or(NaiveDate::MIN)
}

fn reporting_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub department: &'static str,
    pub active: bool,
    pub created: NaiveDate,
    /// Never set for accounts that have not logged in yet.
    pub last_login: Option<NaiveDate>,
}

impl UserRecord {
    /// Whether the account has not logged in within [`DORMANT_AFTER_DAYS`] of `today`.
    pub fn is_dormant(&self, today: NaiveDate) -> bool {
        self.last_login
            .is_none_or(|login| (today - login).num_days() > DORMANT_AFTER_DAYS)
    }
}

impl Record for UserRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "full_name" => Some(FieldValue::Text(&self.full_name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "role" => Some(FieldValue::Text(self.role.as_str())),
            "department" => Some(FieldValue::Text(self.department)),
            "active" => Some(FieldValue::Flag(self.active)),
            "created" => Some(FieldValue::Date(self.created)),
            "last_login" => self.last_login.map(FieldValue::Date),
            _ => None,
        }
    }
}

impl Generate for UserRecord {
    fn generate_one(index: usize) -> roster_model::Result<Self> {
        let family = FAMILY_NAMES.pick(index, 1, 0);
        let given = GIVEN_NAMES.pick(index, 4, 3);
        let created = date_offset(registry_opened(), index, 13, 365);
        let idle_days = ranged(index, 5, 2, 0, 60).unsigned_abs();
        let last_login = sparse(index, 7, idle_days)
            .and_then(|days| reporting_day().checked_sub_days(Days::new(days)))
            .filter(|login| *login >= created);
        Ok(Self {
            id: record_id("USR", index)?,
            full_name: format!("{family} {given}"),
            email: format!(
                "{}.{}{}@school.example",
                given.to_lowercase(),
                family.to_lowercase(),
                index + 1
            ),
            role: *ROLES.pick(index, 1, 0),
            department: DEPARTMENTS.pick(index, 3, 1),
            active: index % 9 != 4,
            created,
            last_login,
        })
    }
}

impl ScreenDef for UserRecord {
    const SCREEN: Screen = Screen::Users;

    fn schema() -> Result<Schema> {
        Ok(Schema::new(vec![
            FieldDef::text("id").with_label("User ID"),
            FieldDef::text("full_name").with_label("Full Name").searchable(),
            FieldDef::text("email").with_label("Email").searchable(),
            FieldDef::text("role").with_label("Role"),
            FieldDef::text("department").with_label("Department"),
            FieldDef::flag("active").with_label("Active"),
            FieldDef::date("created").with_label("Created"),
            FieldDef::date("last_login").with_label("Last Login"),
        ])?)
    }

    fn engine(collection: Collection<Self>) -> Result<ListEngine<Self>> {
        let today = reporting_day();
        Ok(ListEngine::builder(Self::schema()?, collection)
            .field_filter("role")?
            .field_filter("department")?
            .filter(
                "status",
                Predicate::new(|user: &UserRecord, selected: &str| match selected {
                    "active" => user.active,
                    "locked" => !user.active,
                    _ => false,
                }),
            )?
            .filter(
                "activity",
                Predicate::new(move |user: &UserRecord, selected: &str| match selected {
                    "dormant" => user.is_dormant(today),
                    "recent" => !user.is_dormant(today),
                    "never" => user.last_login.is_none(),
                    _ => false,
                }),
            )?
            .default_sort(SortState::new("created").with_direction(SortDirection::Desc))?
            .build()?)
    }

    fn export_layout(schema: &Schema) -> Result<ExportLayout<Self>> {
        let layout = ExportLayout::from_schema(
            schema,
            ["id", "full_name", "email", "role", "department"],
        )?;
        Ok(layout
            .column(ExportColumn::new("Status", |user: &UserRecord| {
                if user.active { "Active" } else { "Locked" }.to_string()
            }))
            .column(ExportColumn::field(schema.require("last_login")?)))
    }
}
