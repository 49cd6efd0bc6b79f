//! A gateway holding its tables in memory, for tests

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use reqwest::StatusCode;
use serde_json::Value;

use super::{Direction, Gateway, GatewayError, Query};

#[derive(Default)]
pub(crate) struct MemoryGateway {
    tables: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
}
impl MemoryGateway {
    pub(crate) fn with_table(mut self, name: &str, rows: Vec<Value>) -> Self {
        self.tables.insert(name.to_string(), rows);
        self
    }

    /// Queries on `name` fail as if the gateway were down
    pub(crate) fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

/// Numbers and strings compare naturally, nulls go last
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait::async_trait]
impl Gateway for MemoryGateway {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, GatewayError> {
        if self.failing.contains(query.table()) {
            return Err(GatewayError::BadStatusCode(
                StatusCode::SERVICE_UNAVAILABLE,
                Some("gateway unavailable".to_string()),
            ));
        }
        let Some(rows) = self.tables.get(query.table()) else {
            return Err(GatewayError::BadStatusCode(
                StatusCode::NOT_FOUND,
                Some(format!("relation \"{}\" does not exist", query.table())),
            ));
        };
        let mut rows = rows.clone();
        rows.sort_by(|a, b| {
            query
                .orders()
                .iter()
                .map(|(column, direction)| {
                    let ord = compare(a.get(column), b.get(column));
                    match direction {
                        Direction::Ascending => ord,
                        Direction::Descending => ord.reverse(),
                    }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        Ok(rows)
    }
}
