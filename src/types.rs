//! Shared boundary types.
//!
//! The compile report is what callers receive after a module has been
//! compiled and persisted: the file it was written to and the code itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const COMPILE_SUCCESS: &str = "Scene compiled successfully!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileReport {
    pub message: String,
    pub file_path: PathBuf,
    pub code: String,
}

impl CompileReport {
    pub fn success(file_path: PathBuf, code: String) -> Self {
        CompileReport {
            message: COMPILE_SUCCESS.to_string(),
            file_path,
            code,
        }
    }
}
