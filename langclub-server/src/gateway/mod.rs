//! Read access to the hosted data gateway
//!
//! The gateway exposes every table as a REST resource that understands `select` and `order`.
//! Everything above this module only sees [`Gateway::select`] and typed rows.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

mod rest;
pub use rest::RestGateway;

#[cfg(test)]
pub(crate) mod memory;

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}
impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A read query against one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    columns: String,
    order: Vec<(String, Direction)>,
}
impl Query {
    /// All columns of `table`, in whatever order the gateway likes
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            order: Vec::new(),
        }
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Order by `column`. Calling this again adds a tie-breaker.
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order.push((column.into(), direction));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &str {
        &self.columns
    }

    pub fn orders(&self) -> &[(String, Direction)] {
        &self.order
    }

    /// The url query parameters for this query
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", self.columns.clone())];
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| format!("{column}.{}", direction.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order", order));
        }
        pairs
    }
}

#[derive(Debug)]
pub enum GatewayError {
    /// Reqwest had problems making the request itself
    Reqwest(reqwest::Error),
    /// The gateway answered, but not with success. Carries its message if it sent one.
    BadStatusCode(StatusCode, Option<String>),
    /// A row did not have the shape we expect for this table
    Decode(String, serde_json::Error),
}
impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Reqwest(value)
    }
}
impl core::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Reqwest(e) => {
                write!(f, "Unable to complete HTTP request to the gateway: {e}")
            }
            Self::BadStatusCode(code, Some(msg)) => {
                write!(f, "Got status code {code} from the gateway: {msg}")
            }
            Self::BadStatusCode(code, None) => {
                write!(f, "Got status code {code} from the gateway.")
            }
            Self::Decode(table, e) => {
                write!(f, "Unable to decode a row of table {table}: {e}")
            }
        }
    }
}
impl core::error::Error for GatewayError {}

/// Something that can answer read queries
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Run `query` and return the raw rows
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, GatewayError>;
}

/// Run `query` and decode every row as `T`
pub async fn fetch<T: DeserializeOwned>(
    gateway: &dyn Gateway,
    query: &Query,
) -> Result<Vec<T>, GatewayError> {
    let rows = gateway.select(query).await?;
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| GatewayError::Decode(query.table().to_string(), e))
        })
        .collect()
}
