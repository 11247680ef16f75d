//! The candidate record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::traits::Seekable;
use crate::value::Value;

/// One candidate as supplied by the record source.
///
/// `application_type` and `source` default to the empty string when absent
/// and `job_id` stays `None`. Fields the pipeline does not know about are
/// kept in `extra` and serialized back unchanged, so responses carry the
/// source file's full record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub application_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub last_activity: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Candidate {
    pub const NAME: &'static str = "name";
    pub const POSITION: &'static str = "position";
    pub const COMPANY: &'static str = "company";
    pub const APPLICATION_TYPE: &'static str = "application_type";
    pub const SOURCE: &'static str = "source";
    pub const JOB_ID: &'static str = "job_id";
    pub const LAST_ACTIVITY: &'static str = "last_activity";

    /// Creates a candidate with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        company: impl Into<String>,
        last_activity: impl Into<String>,
    ) -> Self {
        Candidate {
            name: name.into(),
            position: position.into(),
            company: company.into(),
            application_type: String::new(),
            source: String::new(),
            job_id: None,
            last_activity: last_activity.into(),
            extra: Map::new(),
        }
    }

    pub fn with_application_type(mut self, application_type: impl Into<String>) -> Self {
        self.application_type = application_type.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    /// Adds a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl Seekable for Candidate {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Self::NAME => Value::String(&self.name),
            Self::POSITION => Value::String(&self.position),
            Self::COMPANY => Value::String(&self.company),
            Self::APPLICATION_TYPE => Value::String(&self.application_type),
            Self::SOURCE => Value::String(&self.source),
            Self::JOB_ID => Value::from(self.job_id.as_deref()),
            Self::LAST_ACTIVITY => Value::String(&self.last_activity),
            _ => Value::None,
        }
    }
}
