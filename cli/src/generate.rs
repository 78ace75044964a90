#![deny(missing_docs)]

//! # Generate Command
//!
//! The end-to-end action: load a snapshot, resolve a flag-driven selection
//! against the selector's candidates, plan the annotation insertions, and
//! emit the plan. With `--commit` the plan is also applied in memory and
//! the updated snapshot written back out.

use crate::candidates::policy_for;
use crate::error::{CliError, CliResult};
use crate::snapshot_io::{load_entity, render_entity, render_plan, Format};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use swaggen_core::snapshot::validate;
use swaggen_core::{
    plan, select_candidates_with, Member, NodeId, PlanApplier, SelectionUi, SnapshotApplier,
};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the snapshot file (.json, .yaml or .yml).
    pub snapshot: PathBuf,

    /// Select a candidate by name. Repeatable.
    #[clap(long = "member")]
    pub members: Vec<String>,

    /// Select every candidate whose name matches a regex.
    #[clap(long)]
    pub matching: Option<String>,

    /// Select every candidate.
    #[clap(long)]
    pub all: bool,

    /// Offer every controller method, not only mapping-annotated ones.
    #[clap(long, env = "SWAGGEN_ALL_METHODS")]
    pub all_methods: bool,

    /// Output format for the plan document.
    #[clap(long, value_enum, default_value = "json")]
    pub format: Format,

    /// Write the plan to a file instead of stdout.
    #[clap(long)]
    pub out: Option<PathBuf>,

    /// Apply the plan and write the updated snapshot to this path.
    #[clap(long)]
    pub commit: Option<PathBuf>,
}

/// Selection driven by command-line flags instead of a dialog.
///
/// No flags at all is treated like a cancelled dialog: `choose` answers
/// `None` and the command fails before planning.
struct FlagSelection {
    names: Vec<String>,
    pattern: Option<Regex>,
    all: bool,
}

impl FlagSelection {
    fn from_args(args: &GenerateArgs) -> CliResult<Self> {
        let pattern = match &args.matching {
            Some(raw) => Some(Regex::new(raw).map_err(|e| {
                CliError::General(format!("Invalid --matching pattern: {}", e))
            })?),
            None => None,
        };
        Ok(FlagSelection {
            names: args.members.clone(),
            pattern,
            all: args.all,
        })
    }

    fn is_blank(&self) -> bool {
        self.names.is_empty() && self.pattern.is_none() && !self.all
    }

    fn matches(&self, member: &Member) -> bool {
        self.all
            || self.names.iter().any(|n| n == member.name())
            || self
                .pattern
                .as_ref()
                .is_some_and(|p| p.is_match(member.name()))
    }
}

impl SelectionUi for FlagSelection {
    fn choose(&self, candidates: &[&Member]) -> Option<Vec<NodeId>> {
        if self.is_blank() {
            return None;
        }
        Some(
            candidates
                .iter()
                .filter(|member| self.matches(member))
                .map(|member| member.id())
                .collect(),
        )
    }
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let entity = load_entity(&args.snapshot)?;
    validate(&entity)?;

    // 1. Offer candidates under the requested method policy.
    let candidates = select_candidates_with(&entity, policy_for(args.all_methods));

    // 2. Resolve the flag-driven selection.
    let ui = FlagSelection::from_args(args)?;
    warn_unmatched_names(&ui.names, &candidates);
    let selection = match ui.choose(&candidates) {
        Some(selection) => selection,
        None => {
            return Err(CliError::General(
                "no selection; pass --member, --matching or --all".to_string(),
            ))
        }
    };
    if selection.is_empty() {
        return Err(CliError::General(
            "selection matched no candidates".to_string(),
        ));
    }

    // 3. Plan. An empty plan is the idempotent no-op, not a failure.
    let result = plan(&entity, &selection)?;
    println!("{}", result);

    // 4. Emit the plan document.
    let rendered = render_plan(&result, args.format)?;
    match &args.out {
        Some(out_path) => {
            write_output(out_path, &rendered)?;
            println!("Plan written to {:?}", out_path);
        }
        None => println!("{}", rendered),
    }

    // 5. Apply and write the updated snapshot when committing.
    if let Some(commit_path) = &args.commit {
        let mut applier = SnapshotApplier::new(entity);
        applier.apply(&result)?;
        let updated = render_entity(applier.entity(), Format::for_path(commit_path))?;
        write_output(commit_path, &updated)?;
        println!("Updated snapshot written to {:?}", commit_path);
    }

    Ok(())
}

fn warn_unmatched_names(names: &[String], candidates: &[&Member]) {
    for name in names {
        if !candidates.iter().any(|m| m.name() == name.as_str()) {
            eprintln!("Warning: no candidate named '{}'", name);
        }
    }
}

fn write_output(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::General(format!("Failed to create output directory: {}", e))
            })?;
        }
    }
    fs::write(path, content)
        .map_err(|e| CliError::General(format!("Failed to write {:?}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use swaggen_core::Entity;
    use tempfile::tempdir;

    const DTO_SNAPSHOT: &str = r#"{
        "id": 1,
        "name": "UserDto",
        "children": [{"id": 3, "kind": "code"}],
        "members": [
            {"kind": "field", "id": 10, "name": "name", "ty": "String",
             "children": [{"id": 20, "kind": "code"}]},
            {"kind": "field", "id": 11, "name": "age", "ty": "Integer",
             "children": [{"id": 21, "kind": "code"}]}
        ]
    }"#;

    const CONTROLLER_SNAPSHOT: &str = r#"{
        "id": 1,
        "name": "UserController",
        "members": [
            {"kind": "method", "id": 10, "name": "getUser",
             "annotations": ["org.springframework.web.bind.annotation.GetMapping"],
             "params": [{"id": 11, "name": "id", "ty": "Long"}]},
            {"kind": "method", "id": 12, "name": "helper"}
        ]
    }"#;

    fn write_snapshot(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        path
    }

    fn base_args(snapshot: PathBuf) -> GenerateArgs {
        GenerateArgs {
            snapshot,
            members: Vec::new(),
            matching: None,
            all: false,
            all_methods: false,
            format: Format::Json,
            out: None,
            commit: None,
        }
    }

    #[test]
    fn test_generate_writes_plan_and_commits() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);
        let out = dir.path().join("plan.json");
        let commit = dir.path().join("updated.json");

        let args = GenerateArgs {
            all: true,
            out: Some(out.clone()),
            commit: Some(commit.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();

        let plan_doc = fs::read_to_string(&out).unwrap();
        assert!(plan_doc.contains("@ApiModel(value = \\\"\\\", description = \\\"\\\")"));
        assert!(plan_doc.contains("io.swagger.annotations"));

        let updated: Entity =
            serde_json::from_str(&fs::read_to_string(&commit).unwrap()).unwrap();
        assert!(updated
            .annotations
            .contains("io.swagger.annotations.ApiModel"));
        assert!(updated.imports.contains("io.swagger.annotations"));
    }

    #[test]
    fn test_generate_is_idempotent_across_runs() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);
        let first_commit = dir.path().join("first.json");

        let args = GenerateArgs {
            all: true,
            commit: Some(first_commit.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();

        // Second run over the committed snapshot plans nothing.
        let out = dir.path().join("second-plan.json");
        let args = GenerateArgs {
            all: true,
            out: Some(out.clone()),
            ..base_args(first_commit)
        };
        execute(&args).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "{}");
    }

    #[test]
    fn test_generate_member_flag_selects_by_name() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);
        let out = dir.path().join("plan.json");

        let args = GenerateArgs {
            members: vec!["age".to_string()],
            out: Some(out.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();

        let plan_doc = fs::read_to_string(&out).unwrap();
        // Only the `age` field op, anchored at its first child.
        assert!(plan_doc.contains("\"target\": 11"));
        assert!(!plan_doc.contains("\"target\": 10"));
    }

    #[test]
    fn test_generate_matching_selects_by_pattern() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "controller.json", CONTROLLER_SNAPSHOT);
        let out = dir.path().join("plan.json");

        let args = GenerateArgs {
            matching: Some("^get".to_string()),
            out: Some(out.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();

        let plan_doc = fs::read_to_string(&out).unwrap();
        assert!(plan_doc.contains("ApiOperation"));
        assert!(plan_doc.contains("ApiParam"));
    }

    #[test]
    fn test_generate_without_flags_is_cancelled() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);

        let err = execute(&base_args(snapshot)).unwrap_err();
        assert!(format!("{}", err).contains("no selection"));
    }

    #[test]
    fn test_generate_unknown_member_matches_nothing() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);

        let args = GenerateArgs {
            members: vec!["salary".to_string()],
            ..base_args(snapshot)
        };
        let err = execute(&args).unwrap_err();
        assert!(format!("{}", err).contains("selection matched no candidates"));
    }

    #[test]
    fn test_generate_rejects_bad_pattern() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);

        let args = GenerateArgs {
            matching: Some("(".to_string()),
            ..base_args(snapshot)
        };
        let err = execute(&args).unwrap_err();
        assert!(format!("{}", err).contains("Invalid --matching pattern"));
    }

    #[test]
    fn test_generate_all_methods_reaches_unmapped_methods() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "controller.json", CONTROLLER_SNAPSHOT);

        // `helper` has no mapping annotation, so the default policy never
        // offers it.
        let args = GenerateArgs {
            members: vec!["helper".to_string()],
            ..base_args(snapshot.clone())
        };
        assert!(execute(&args).is_err());

        let out = dir.path().join("plan.json");
        let args = GenerateArgs {
            members: vec!["helper".to_string()],
            all_methods: true,
            out: Some(out.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("\"target\": 12"));
    }

    #[test]
    fn test_generate_yaml_output() {
        let dir = tempdir().unwrap();
        let snapshot = write_snapshot(dir.path(), "dto.json", DTO_SNAPSHOT);
        let out = dir.path().join("plan.yaml");
        let commit = dir.path().join("updated.yaml");

        let args = GenerateArgs {
            all: true,
            format: Format::Yaml,
            out: Some(out.clone()),
            commit: Some(commit.clone()),
            ..base_args(snapshot)
        };
        execute(&args).unwrap();

        let plan_doc = fs::read_to_string(&out).unwrap();
        assert!(plan_doc.contains("member_ops:"));

        // Commit format follows the commit path's extension.
        let updated: Entity =
            serde_yaml::from_str(&fs::read_to_string(&commit).unwrap()).unwrap();
        assert!(updated.imports.contains("io.swagger.annotations"));
    }
}
