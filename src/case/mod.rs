pub mod formatters;
pub mod tokenizer;

use crate::error::CaseError;
use crate::input::{validate, validate_text, Input};
use formatters::{camel_case, dot_case, to_kebab_case};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Kebab,
    #[default]
    Camel,
    Dot,
}

impl Case {
    /// Convert `text` to this case.
    ///
    /// kebab-case never fails; camelCase and dot.case reject blank input and
    /// input made only of separators.
    pub fn apply(&self, text: &str) -> Result<String, CaseError> {
        match self {
            Case::Kebab => Ok(to_kebab_case(text)),
            Case::Camel => camel_case(text),
            Case::Dot => dot_case(text),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "camel" | "camelcase" => Ok(Case::Camel),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Camel => write!(f, "camel"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

/// Outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The input as the caller supplied it (JSON text for JSON values).
    pub input: String,
    pub result: Result<String, CaseError>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    pub case: Case,
    /// Validate kebab-case input the same way as the other cases.
    pub strict_kebab: bool,
}

impl Converter {
    pub fn new(case: Case) -> Self {
        Self {
            case,
            strict_kebab: false,
        }
    }

    pub fn with_strict_kebab(mut self, strict: bool) -> Self {
        self.strict_kebab = strict;
        self
    }

    pub fn convert(&self, text: &str) -> Result<String, CaseError> {
        match self.case {
            Case::Kebab if self.strict_kebab => {
                let kebab = to_kebab_case(validate_text(text)?);
                if kebab.is_empty() {
                    return Err(CaseError::NoValidWords);
                }
                Ok(kebab)
            }
            case => case.apply(text),
        }
    }

    /// Convert a value from a dynamically typed source.
    ///
    /// Absent, null and non-string values are always rejected, kebab-case
    /// included.
    pub fn convert_value(&self, value: Option<&Value>) -> Result<String, CaseError> {
        let input = Input::from_json(value);
        match self.case {
            Case::Kebab if !self.strict_kebab => Ok(to_kebab_case(input.into_text()?)),
            _ => self.convert(validate(input)?),
        }
    }

    /// Convert many strings in parallel. Results keep the input order.
    pub fn convert_batch<S>(&self, inputs: &[S]) -> Vec<Conversion>
    where
        S: AsRef<str> + Sync,
    {
        debug!(case = %self.case, count = inputs.len(), "converting batch");
        inputs
            .par_iter()
            .map(|input| {
                let input = input.as_ref();
                Conversion {
                    input: input.to_string(),
                    result: self.convert(input),
                }
            })
            .collect()
    }

    /// Like [`Converter::convert_batch`], for JSON values. `None` entries are
    /// absent values and are reported as `undefined`.
    pub fn convert_value_batch(&self, values: &[Option<Value>]) -> Vec<Conversion> {
        debug!(case = %self.case, count = values.len(), "converting value batch");
        values
            .par_iter()
            .map(|value| Conversion {
                input: value
                    .as_ref()
                    .map_or_else(|| "undefined".to_string(), Value::to_string),
                result: self.convert_value(value.as_ref()),
            })
            .collect()
    }
}
