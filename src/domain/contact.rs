#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub contact_id: i64,
    pub name: String,
    pub avatar: String,
    pub blocked: bool,
}
