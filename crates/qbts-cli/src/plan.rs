use serde::Serialize;

use qbts_core::fingerprint::manifest_fingerprint;
use qbts_core::{Manifest, Variant};

/// Read-only view of a manifest, printed by `plan`.
#[derive(Debug, Serialize)]
pub struct Plan<'a> {
    pub variant: Variant,
    pub output: String,
    pub fingerprint: String,
    pub directories: &'a [String],
    pub batches: Vec<PlanBatch<'a>>,
    pub total_files: usize,
    pub total_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct PlanBatch<'a> {
    pub name: &'a str,
    pub files: Vec<PlanFile<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PlanFile<'a> {
    pub path: &'a str,
    pub bytes: usize,
}

impl<'a> Plan<'a> {
    pub fn new(variant: Variant, output: String, manifest: &'a Manifest) -> Self {
        let batches = manifest
            .batches
            .iter()
            .map(|b| PlanBatch {
                name: &b.name,
                files: b
                    .files
                    .iter()
                    .map(|f| PlanFile {
                        path: &f.path,
                        bytes: f.content.len(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        let total_bytes = manifest.files().map(|(_, f)| f.content.len()).sum();

        Self {
            variant,
            output,
            fingerprint: manifest_fingerprint(manifest),
            directories: &manifest.directories,
            batches,
            total_files: manifest.file_count(),
            total_bytes,
        }
    }

    /// Human-readable listing, one line per file.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "plan:{} -> {} ({} files, {} bytes)\n",
            self.variant, self.output, self.total_files, self.total_bytes
        );
        for batch in &self.batches {
            out.push_str(&format!("{} ({})\n", batch.name, batch.files.len()));
            for file in &batch.files {
                out.push_str(&format!(" - {} [{} bytes]\n", file.path, file.bytes));
            }
        }
        out.push_str(&format!("fingerprint={}\n", self.fingerprint));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbts_core::Batch;

    fn fixture() -> Manifest {
        Manifest::new(
            vec!["docs".to_string()],
            vec![
                Batch::new("Database Files").with_file("database/schema.sql", "USE db;\n"),
                Batch::new("Documentation").with_file("README.md", "# QBTS\n"),
            ],
        )
    }

    #[test]
    fn totals_match_manifest() {
        let manifest = fixture();
        let plan = Plan::new(Variant::Simple, "out".to_string(), &manifest);
        assert_eq!(plan.total_files, 2);
        assert_eq!(plan.total_bytes, 15);
        assert_eq!(plan.fingerprint.len(), 64);
    }

    #[test]
    fn text_lists_every_file() {
        let manifest = fixture();
        let text = Plan::new(Variant::Simple, "out".to_string(), &manifest).render_text();
        assert!(text.starts_with("plan:simple -> out (2 files, 15 bytes)\n"));
        assert!(text.contains("Database Files (1)\n - database/schema.sql [8 bytes]\n"));
        assert!(text.contains(" - README.md [7 bytes]\n"));
    }

    #[test]
    fn json_omits_file_contents() {
        let manifest = fixture();
        let plan = Plan::new(Variant::Full, "out".to_string(), &manifest);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["variant"], "full");
        assert_eq!(json["batches"][1]["files"][0]["path"], "README.md");
        assert!(!json.to_string().contains("# QBTS"));
    }
}
