//! Tests for the diagnet error handling system.

use diagnet_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let codes = [
        ModelError::DataUnavailable {
            reason: "no facts".into(),
        }
        .error_code(),
        ModelError::Validation {
            node: "fever".into(),
            reason: "row 0 sums to 1.2".into(),
        }
        .error_code(),
        ModelError::MissingParent {
            effect: "fever".into(),
            parent: "flu".into(),
        }
        .error_code(),
        ModelError::CycleDetected {
            path: vec!["a".into(), "b".into()],
        }
        .error_code(),
        QueryError::UnknownEvidence {
            names: vec!["q".into()],
        }
        .error_code(),
        QueryError::ImpossibleEvidence.error_code(),
        StorageError::LockPoisoned.error_code(),
        CorpusError::Empty {
            path: "knowledge.txt".into(),
        }
        .error_code(),
        ConfigError::FileNotFound {
            path: "/tmp".into(),
        }
        .error_code(),
    ];
    for code in codes {
        assert!(!code.is_empty());
    }
}

#[test]
fn unknown_evidence_lists_every_name() {
    let err = QueryError::UnknownEvidence {
        names: vec!["q".into(), "zz".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("q"));
    assert!(msg.contains("zz"));
    assert_eq!(err.error_code(), error_code::QUERY_UNKNOWN_EVIDENCE);
}

#[test]
fn validation_error_carries_node_name() {
    let err = ModelError::Validation {
        node: "cough".into(),
        reason: "row 3 sums to 0.9".into(),
    };
    assert!(err.to_string().contains("cough"));
}

#[test]
fn cycle_path_is_joined_with_arrows() {
    let err = ModelError::CycleDetected {
        path: vec!["a".into(), "b".into(), "a".into()],
    };
    assert!(err.to_string().contains("a -> b -> a"));
}

#[test]
fn diagnostic_format_is_code_then_message() {
    let err = QueryError::ImpossibleEvidence;
    assert_eq!(
        err.diagnostic(),
        "[QUERY_IMPOSSIBLE_EVIDENCE] Evidence has zero probability under the model"
    );
}

#[test]
fn subsystem_errors_convert_to_top_level() {
    let err: DiagnetError = ModelError::DataUnavailable {
        reason: "empty".into(),
    }
    .into();
    assert!(matches!(err, DiagnetError::Model(_)));
    assert_eq!(err.error_code(), error_code::MODEL_DATA_UNAVAILABLE);

    let err: DiagnetError = StorageError::MigrationFailed {
        version: 1,
        message: "bad".into(),
    }
    .into();
    assert!(matches!(err, DiagnetError::Storage(_)));
    assert_eq!(err.error_code(), error_code::MIGRATION_FAILED);

    let err: DiagnetError = ConfigError::InvalidValue {
        field: "model.max_parents".into(),
        message: "too big".into(),
    }
    .into();
    assert!(matches!(err, DiagnetError::Config(_)));
    // transparent: message passes through unchanged
    assert!(err.to_string().contains("model.max_parents"));
}
