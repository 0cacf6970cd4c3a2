//! Reply DTOs for front-end communication.
//!
//! Every boundary operation answers with one of these. Field names are
//! camelCase on the wire and optional fields are omitted when absent, except
//! `PickReply::path` which is an explicit `null` on cancel.

use lycaddy_core::{DirEntry, ServerConfig, WriteSummary};
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

/// Reply to `read_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<ServerConfig, GuiError>> for ConfigReply {
    fn from(result: Result<ServerConfig, GuiError>) -> Self {
        match result {
            Ok(config) => Self {
                ok: true,
                root_path: Some(config.root_path),
                port: Some(config.port),
                error: None,
            },
            Err(e) => Self {
                ok: false,
                root_path: None,
                port: None,
                error: Some(e.message().to_string()),
            },
        }
    }
}

/// Reply carrying only success or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), GuiError>> for OkReply {
    fn from(result: Result<(), GuiError>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                error: None,
            },
            Err(e) => Self {
                ok: false,
                error: Some(e.message().to_string()),
            },
        }
    }
}

/// Reply to start, stop and restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServerReply {
    /// Successful transition into `running`.
    pub const fn running(running: bool) -> Self {
        Self {
            ok: true,
            running: Some(running),
            error: None,
        }
    }
}

impl From<Result<bool, GuiError>> for ServerReply {
    fn from(result: Result<bool, GuiError>) -> Self {
        match result {
            Ok(running) => Self::running(running),
            Err(e) => Self {
                ok: false,
                running: None,
                error: Some(e.message().to_string()),
            },
        }
    }
}

/// Reply to `get_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub running: bool,
}

/// Reply to the directory pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickReply {
    pub ok: bool,
    pub path: Option<String>,
}

impl From<Option<String>> for PickReply {
    fn from(path: Option<String>) -> Self {
        Self {
            ok: path.is_some(),
            path,
        }
    }
}

/// Reply to `list_files`. `files` is always present, empty on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListReply {
    pub ok: bool,
    pub files: Vec<DirEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Vec<DirEntry>, GuiError>> for ListReply {
    fn from(result: Result<Vec<DirEntry>, GuiError>) -> Self {
        match result {
            Ok(files) => Self {
                ok: true,
                files,
                error: None,
            },
            Err(e) => Self {
                ok: false,
                files: Vec::new(),
                error: Some(e.message().to_string()),
            },
        }
    }
}

/// Reply to `write_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<WriteSummary, GuiError>> for WriteReply {
    fn from(result: Result<WriteSummary, GuiError>) -> Self {
        match result {
            Ok(summary) => Self {
                ok: true,
                written: Some(summary.written),
                count: Some(summary.count),
                error: None,
            },
            Err(e) => Self {
                ok: false,
                written: None,
                count: None,
                error: Some(e.message().to_string()),
            },
        }
    }
}
