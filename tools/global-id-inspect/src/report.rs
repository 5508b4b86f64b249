//! Per-identifier inspection results.

use global_id::GlobalId;
use serde::Serialize;
use tabled::Tabled;

/// One row of output.
#[derive(Debug, Clone, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[tabled(rename = "Input")]
    pub input: String,

    #[tabled(rename = "Scheme")]
    pub scheme_code: String,

    #[tabled(rename = "Name")]
    pub scheme_name: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,

    #[tabled(rename = "Qualified")]
    pub qualified: String,

    /// `None` when validation was not requested.
    #[tabled(rename = "Valid", display = "display_valid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Builds a report for `id`, running validation when `validate` is set.
    pub fn build(input: &str, id: &GlobalId, validate: bool) -> Self {
        let (valid, error) = if validate {
            match id.validate() {
                Ok(()) => (Some(true), None),
                Err(err) => (Some(false), Some(err.to_string())),
            }
        } else {
            (None, None)
        };

        Self {
            input: input.to_string(),
            scheme_code: id.scheme_code().to_string(),
            scheme_name: id.scheme().name(),
            value: id.to_string(),
            qualified: id.to_qualified(),
            valid,
            error,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.valid == Some(false)
    }
}

fn display_valid(valid: &Option<bool>) -> String {
    match valid {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}
