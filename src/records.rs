use crate::api::{DnsRecord, RecordBody};
use crate::error::{Error, Result};

/// Record types that carry a priority.
pub const PRIORITY_TYPES: [&str; 3] = ["MX", "SRV", "URI"];

pub fn requires_priority(record_type: &str) -> bool {
    PRIORITY_TYPES.contains(&record_type)
}

/// Raw values of the create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    /// Set when editing an existing record.
    pub id: Option<String>,
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: String,
    pub priority: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::create()
    }
}

impl RecordForm {
    pub fn create() -> Self {
        Self {
            id: None,
            r#type: "A".to_string(),
            name: String::new(),
            content: String::new(),
            ttl: "1".to_string(),
            priority: String::new(),
        }
    }

    pub fn edit(record: &DnsRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            r#type: record.r#type.clone(),
            name: record.name.clone(),
            content: record.content.clone(),
            ttl: record.ttl.to_string(),
            priority: record.priority.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// The provider does not allow changing the type of an existing record.
    pub fn type_locked(&self) -> bool {
        self.is_edit()
    }

    pub fn shows_priority(&self) -> bool {
        requires_priority(&self.r#type)
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Record"
        } else {
            "Add Record"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }

    /// Builds the request body. Priority is only sent for types that take
    /// one and only when a value was entered.
    pub fn to_body(&self) -> Result<RecordBody> {
        let r#type = required("Type", &self.r#type)?;
        let name = required("Name", &self.name)?;
        let content = required("Content", &self.content)?;
        let ttl = parse_number::<u32>("TTL", required("TTL", &self.ttl)?)?;

        let priority = match self.priority.trim() {
            value if requires_priority(r#type) && !value.is_empty() => {
                Some(parse_number::<u16>("Priority", value)?)
            }
            _ => None,
        };

        Ok(RecordBody {
            r#type: r#type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl,
            priority,
            proxied: false,
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(value)
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Validation(format!("{} must be a whole number: {}", field, value)))
}
