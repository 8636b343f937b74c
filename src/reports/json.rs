//! JSON format report generation

use serde_json::{Value, json};

use super::ReportGenerator;
use crate::error::VersyncError;
use crate::installations::{DependencyBucket, InstallationIndex};

pub struct JsonReportGenerator {
    mismatches_only: bool,
}

impl JsonReportGenerator {
    pub fn new(mismatches_only: bool) -> Self {
        Self { mismatches_only }
    }

    fn bucket_json(bucket: &DependencyBucket) -> Value {
        let expected = bucket.expected();
        let expected = if expected.is_empty() {
            Value::Null
        } else {
            Value::String(expected)
        };

        let installations: Vec<Value> = bucket
            .installations()
            .iter()
            .map(|installation| {
                json!({
                    "specifier": installation.specifier,
                    "dependency_type": installation.dependency_type.property_name(),
                    "path": installation.file_path.display().to_string(),
                })
            })
            .collect();

        json!({
            "name": bucket.name(),
            "group": bucket.group_index(),
            "specifiers": bucket.specifiers(),
            "is_mismatched": bucket.is_mismatched(),
            "expected": expected,
            "installations": installations,
        })
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, index: &InstallationIndex) -> Result<String, VersyncError> {
        let dependencies: Vec<Value> = if self.mismatches_only {
            index.mismatched().into_iter().map(Self::bucket_json).collect()
        } else {
            index.buckets().iter().map(Self::bucket_json).collect()
        };

        let report = json!({
            "has_mismatches": index.has_mismatches(),
            "mismatch_count": index.mismatch_count(),
            "dependencies": dependencies,
        });

        serde_json::to_string_pretty(&report).map_err(VersyncError::Json)
    }
}
