use serde::Serialize;

/// Trait for rows that can be written to the backend.
///
/// The JSON serialization of the row is the request body, so implementors
/// must serialize to the backend's column names.
pub trait UpsertRow: Serialize + Send + Sync {
    /// Short human-readable key of the row, used in outcome logs.
    fn label(&self) -> String;

    /// Line logged when the row is created.
    fn details(&self) -> String {
        self.label()
    }
}
