use serde::{Deserialize, Serialize};

/// Status selector value meaning "no constraint".
pub const STATUS_ALL: &str = "all";

/// Optional filter/sort parameters accepted by the client listing endpoint.
/// Lives for the duration of one list request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub phone: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WhereOp {
    Eq,
    ILike,
}

/// One conjunctive constraint on the listing query.
#[derive(Debug, Clone)]
pub struct WhereInfo {
    pub column: &'static str,
    pub operator: WhereOp,
    pub value: serde_json::Value,
}

/// The single sort spec applied to the listing query.
#[derive(Debug, Clone)]
pub struct OrderInfo {
    pub expr: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<serde_json::Value>,
}
