use serde_json::json;

use super::error::FilterError;
use super::types::{
    ListParams, OrderInfo, SortDirection, SqlResult, WhereInfo, WhereOp, STATUS_ALL,
};

/// Sort key that targets the joined status name rather than a client column.
const SORT_KEY_STATUS: &str = "status";

const SELECT_CLAUSE: &str =
    "SELECT c.id, c.full_name, c.phone_number, c.status_id, s.name AS status_name";
const FROM_CLAUSE: &str = "FROM clients c LEFT JOIN client_statuses s ON s.id = c.status_id";

/// Composed read over the client records collection: a conjunctive constraint
/// list plus a single sort spec, rendered to parameterized SQL in one place.
#[derive(Debug)]
pub struct ClientFilter {
    conditions: Vec<WhereInfo>,
    order: OrderInfo,
}

impl ClientFilter {
    /// Translate the optional listing parameters into query constraints.
    ///
    /// Blank search/phone text and the `"all"` status sentinel impose no
    /// constraint; a supplied status selector must be a numeric status id.
    pub fn from_params(params: &ListParams) -> Result<Self, FilterError> {
        let mut conditions = Vec::new();

        if let Some(search) = non_blank(params.search.as_deref()) {
            conditions.push(WhereInfo {
                column: "c.full_name",
                operator: WhereOp::ILike,
                value: json!(format!("%{}%", search)),
            });
        }

        if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty() && *s != STATUS_ALL) {
            let status_id: i64 = status
                .parse()
                .map_err(|_| FilterError::InvalidStatusSelector(status.to_string()))?;
            conditions.push(WhereInfo {
                column: "c.status_id",
                operator: WhereOp::Eq,
                value: json!(status_id),
            });
        }

        if let Some(phone) = non_blank(params.phone.as_deref()) {
            conditions.push(WhereInfo {
                column: "c.phone_number",
                operator: WhereOp::ILike,
                value: json!(format!("%{}%", phone)),
            });
        }

        let direction = match params.sort_order.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        let order = match non_blank(params.sort_by.as_deref()) {
            // Sorting by status means the joined status name, not the raw
            // foreign key column.
            Some(SORT_KEY_STATUS) => OrderInfo {
                expr: "s.name".to_string(),
                direction,
            },
            Some(column) => {
                Self::validate_sort_column(column)?;
                OrderInfo {
                    expr: format!("c.\"{}\"", column),
                    direction,
                }
            }
            // Deterministic order for requests with no sort specified.
            None => OrderInfo {
                expr: "c.id".to_string(),
                direction: SortDirection::Asc,
            },
        };

        Ok(Self { conditions, order })
    }

    pub fn to_sql(&self) -> SqlResult {
        let mut params = Vec::with_capacity(self.conditions.len());
        let mut where_parts = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            params.push(condition.value.clone());
            let placeholder = format!("${}", params.len());
            let fragment = match condition.operator {
                WhereOp::Eq => format!("{} = {}", condition.column, placeholder),
                WhereOp::ILike => format!("{} ILIKE {}", condition.column, placeholder),
            };
            where_parts.push(fragment);
        }

        let query = [
            SELECT_CLAUSE.to_string(),
            FROM_CLAUSE.to_string(),
            if where_parts.is_empty() {
                String::new()
            } else {
                format!("WHERE {}", where_parts.join(" AND "))
            },
            format!("ORDER BY {} {}", self.order.expr, self.order.direction.to_sql()),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        SqlResult { query, params }
    }

    /// Identifier charset check; a well-formed but unknown column still fails
    /// at the store and surfaces as that request's failure.
    fn validate_sort_column(column: &str) -> Result<(), FilterError> {
        let mut chars = column.chars();
        let first_ok = chars
            .next()
            .map(|c| c.is_alphabetic() || c == '_')
            .unwrap_or(false);
        if !first_ok || !column.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(FilterError::InvalidSortKey(column.to_string()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
