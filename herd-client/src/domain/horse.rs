use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Horse {
    pub horse_id: String,
    pub name: String,
    pub stall: String,
}
