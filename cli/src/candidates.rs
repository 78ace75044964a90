#![deny(missing_docs)]

//! # Candidates Command
//!
//! Prints the members the selector would offer in a selection dialog, one
//! per line. Useful for checking what `generate` will operate on before
//! committing anything.

use crate::error::CliResult;
use crate::snapshot_io::load_entity;
use std::path::PathBuf;
use swaggen_core::snapshot::validate;
use swaggen_core::{select_candidates_with, MethodPolicy};

/// Arguments for the candidates command.
#[derive(clap::Args, Debug, Clone)]
pub struct CandidatesArgs {
    /// Path to the snapshot file (.json, .yaml or .yml).
    pub snapshot: PathBuf,

    /// Offer every controller method, not only mapping-annotated ones.
    #[clap(long, env = "SWAGGEN_ALL_METHODS")]
    pub all_methods: bool,
}

/// Selector policy implied by the shared `--all-methods` flag.
pub fn policy_for(all_methods: bool) -> MethodPolicy {
    if all_methods {
        MethodPolicy::AllMethods
    } else {
        MethodPolicy::RequireMapping
    }
}

/// Executes the candidates command.
pub fn execute(args: &CandidatesArgs) -> CliResult<()> {
    let entity = load_entity(&args.snapshot)?;
    validate(&entity)?;

    let candidates = select_candidates_with(&entity, policy_for(args.all_methods));

    println!("Candidates for '{}':", entity.name);
    if candidates.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for member in candidates {
        println!("  {} {} ({})", member.kind_label(), member.name(), member.id());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_candidates_on_valid_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("controller.json");
        let snapshot = r#"{
            "id": 1,
            "name": "UserController",
            "members": [
                {"kind": "method", "id": 10, "name": "getUser",
                 "annotations": ["org.springframework.web.bind.annotation.GetMapping"]},
                {"kind": "method", "id": 11, "name": "helper"}
            ]
        }"#;
        fs::File::create(&path)
            .unwrap()
            .write_all(snapshot.as_bytes())
            .unwrap();

        let args = CandidatesArgs {
            snapshot: path,
            all_methods: false,
        };
        execute(&args).unwrap();
    }

    #[test]
    fn test_candidates_rejects_invalid_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        // Member id collides with the entity id.
        let snapshot = r#"{
            "id": 1,
            "name": "UserDto",
            "members": [{"kind": "field", "id": 1, "name": "name"}]
        }"#;
        fs::File::create(&path)
            .unwrap()
            .write_all(snapshot.as_bytes())
            .unwrap();

        let args = CandidatesArgs {
            snapshot: path,
            all_methods: false,
        };
        match execute(&args).unwrap_err() {
            CliError::Core(err) => {
                assert!(format!("{}", err).contains("duplicate node id #1"))
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_policy_for() {
        assert_eq!(policy_for(false), MethodPolicy::RequireMapping);
        assert_eq!(policy_for(true), MethodPolicy::AllMethods);
    }
}
