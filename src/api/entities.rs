use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::percentage::Percentage;

/// Usage of a single language over the stats window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    /// Human readable duration, for example `3 hrs 12 mins`.
    pub text: String,
    pub percent: Percentage,
}

/// The `data` object of the stats response. Languages come ranked by the server, most used first,
/// and that order is kept as is.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Stats {
    pub languages: Vec<LanguageStat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub data: Stats,
}

/// Only the name is read. Content, size and the rest of the file fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasteFile {
    pub filename: String,
}

/// Metadata of an existing paste. Files keep the order the remote listed them in, which is what
/// "the first file" refers to. The remote does not promise that order to be stable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasteMetadata {
    pub files: IndexMap<String, PasteFile>,
}

impl PasteMetadata {
    pub fn first_file(&self) -> Option<&PasteFile> {
        self.files.values().next()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasteFileUpdate {
    pub content: String,
}

/// Body of the paste write. Only the rewritten file is listed, the rest of the paste stays as it
/// was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasteUpdate {
    pub description: String,
    pub files: IndexMap<String, PasteFileUpdate>,
}

impl PasteUpdate {
    pub fn single_file(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let mut files = IndexMap::new();
        files.insert(
            filename.into(),
            PasteFileUpdate {
                content: content.into(),
            },
        );
        Self {
            description: String::new(),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use super::{PasteMetadata, PasteUpdate, StatsResponse};

    #[test]
    fn test_stats_response_keeps_server_order() -> Result<()> {
        let response: StatsResponse = serde_json::from_value(json!({
            "data": {
                "username": "someone",
                "languages": [
                    {"name": "Rust", "text": "10 hrs", "percent": 60.5, "total_seconds": 36000},
                    {"name": "Go", "text": "2 hrs", "percent": 30.0},
                    {"name": "Bash", "text": "5 mins", "percent": 9.5},
                ]
            }
        }))?;
        let names = response
            .data
            .languages
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Rust", "Go", "Bash"]);
        assert_eq!(*response.data.languages[0].percent, 60.5);
        Ok(())
    }

    #[test]
    fn test_stats_response_without_data_fails() {
        let result = serde_json::from_value::<StatsResponse>(json!({"error": "Unauthorized"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_first_file_follows_listed_order() -> Result<()> {
        let metadata: PasteMetadata = serde_json::from_str(
            r#"{
                "id": "abc",
                "files": {
                    "zeta.txt": {"filename": "zeta.txt", "content": "z", "size": 1},
                    "alpha.txt": {"filename": "alpha.txt", "content": "a"}
                }
            }"#,
        )?;
        assert_eq!(metadata.first_file().unwrap().filename, "zeta.txt");
        Ok(())
    }

    #[test]
    fn test_metadata_needs_only_file_names() -> Result<()> {
        let metadata: PasteMetadata = serde_json::from_str(
            r#"{"files": {"stats.txt": {"filename": "stats.txt", "truncated": true}}}"#,
        )?;
        assert_eq!(metadata.first_file().unwrap().filename, "stats.txt");
        Ok(())
    }

    #[test]
    fn test_first_file_of_empty_paste() -> Result<()> {
        let metadata: PasteMetadata = serde_json::from_str(r#"{"files": {}}"#)?;
        assert!(metadata.first_file().is_none());
        Ok(())
    }

    #[test]
    fn test_update_body_shape() -> Result<()> {
        let update = PasteUpdate::single_file("stats.txt", "Go  ...");
        assert_eq!(
            serde_json::to_value(&update)?,
            json!({"description": "", "files": {"stats.txt": {"content": "Go  ..."}}})
        );
        Ok(())
    }
}
