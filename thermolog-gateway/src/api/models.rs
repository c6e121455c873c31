use serde::Deserialize;

/// Body of `PUT /hubs/{id}` and `PUT /sensors/{id}`.
///
/// Clients usually send back the whole object they fetched; only `id` and
/// `name` are looked at, everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RenameRequest {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl RenameRequest {
    /// An absent `id` never conflicts with the path.
    pub fn id_matches(&self, path_id: &str) -> bool {
        self.id.as_deref().is_none_or(|id| id == path_id)
    }
}
