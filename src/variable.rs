//! Variables
//!
//! A variable of substantive interest paired with the vertex that indicates whether it
//! was observed. Fully observed variables carry no indicator.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// Vertex name of the variable.
    pub name: String,
    /// Vertex name of its missingness indicator, if the variable is partially observed.
    #[serde(default)]
    pub indicator: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, indicator: Option<String>) -> Self {
        Variable {
            name: name.into(),
            indicator,
        }
    }

    /// A variable observed in every record.
    pub fn observed(name: impl Into<String>) -> Self {
        Variable::new(name, None)
    }

    /// A variable whose missingness is recorded by `indicator`.
    pub fn partially_observed(name: impl Into<String>, indicator: impl Into<String>) -> Self {
        Variable::new(name, Some(indicator.into()))
    }

    pub fn is_partially_observed(&self) -> bool {
        self.indicator.is_some()
    }
}

impl<S: Into<String>> From<(S, Option<S>)> for Variable {
    fn from((name, indicator): (S, Option<S>)) -> Self {
        Variable::new(name, indicator.map(Into::into))
    }
}
