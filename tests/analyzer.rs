use evmsift::analysis::{analyze, AnalysisOptions, Error};
use evmsift::report;
use evmsift::util::FromHexString;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_01() {
    let analysis = analyze(&[], &AnalysisOptions::default()).unwrap();
    assert!(analysis.is_empty());
    assert_eq!(analysis.code().len(), 0);
    assert_eq!(analysis.segments().len(), 0);
    assert_eq!(analysis.contract_starts().len(), 0);
}

#[test]
fn test_lone_stop_01() {
    // No JUMPDEST at all, hence no segment is ever entered.
    check("00", "D");
}

#[test]
fn test_minimal_segment_01() {
    check("5b00", "CC");
}

#[test]
fn test_push_shadowing_01() {
    // The 0x5b at position 2 is a push operand, not a JUMPDEST.
    check("5b605b00", "CCCC");
}

#[test]
fn test_out_of_range_01() {
    // PUSH2 0xffff / JUMP targets far beyond the sequence.
    check("5b61ffff5600", "DDDDDD");
}

#[test]
fn test_out_of_range_02() {
    // A target equal to the length is still in range.
    // PUSH1 0x06 / JUMP in a six byte sequence.
    check("5b6006560000", "CCCCDD");
}

#[test]
fn test_invalid_mnemonic_01() {
    // 0x0c decodes to nothing and poisons its segment.
    check("5b0c00", "DDD");
}

#[test]
fn test_mixed_segments_01() {
    // A clean first segment followed by a poisoned one.
    check("5b005b0c00", "CCDDD");
}

#[test]
fn test_pre_entry_01() {
    // The dispatch prologue sits before the first JUMPDEST.
    check("6003565b00", "DDDCC");
}

#[test]
fn test_truncated_push_01() {
    // PUSH2 with a single remaining operand byte.
    check("5b6101", "CCC");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_mask_lengths_01() {
    for hex in ["", "00", "5b00", "5b605b00", "5b61ffff5600"] {
        let bytes = hex.from_hex_string().unwrap();
        let analysis = analyze(&bytes, &AnalysisOptions::default()).unwrap();
        assert_eq!(analysis.code().len(), bytes.len());
        assert_eq!(analysis.push_data().len(), bytes.len());
        assert_eq!(analysis.segments().len(), bytes.len());
        assert_eq!(analysis.contract_starts().len(), bytes.len());
        assert_eq!(analysis.mnemonic_check().len(), bytes.len());
        assert_eq!(analysis.jump_check().len(), bytes.len());
        assert_eq!(analysis.jumpdest_check().len(), bytes.len());
    }
}

#[test]
fn test_segment_monotonic_01() {
    let bytes = "5b005b0c005b61ffff5600".from_hex_string().unwrap();
    let analysis = analyze(&bytes, &AnalysisOptions::default()).unwrap();
    let segments = analysis.segments();
    for i in 1..segments.len() {
        assert!(segments[i - 1] <= segments[i]);
    }
}

#[test]
fn test_deterministic_01() {
    let bytes = "5b6006560000600456005b0c".from_hex_string().unwrap();
    let a1 = analyze(&bytes, &AnalysisOptions::default()).unwrap();
    let a2 = analyze(&bytes, &AnalysisOptions::default()).unwrap();
    assert_eq!(a1.code(), a2.code());
    assert_eq!(a1.segments(), a2.segments());
    assert_eq!(a1.contract_starts(), a2.contract_starts());
    assert_eq!(report::report_to_string(&a1), report::report_to_string(&a2));
}

#[test]
fn test_truncation_01() {
    // Truncating at a terminator boundary preserves the verdict of
    // the prefix.
    let long = "5b005b0c00".from_hex_string().unwrap();
    let short = "5b00".from_hex_string().unwrap();
    let a1 = analyze(&long, &AnalysisOptions::default()).unwrap();
    let a2 = analyze(&short, &AnalysisOptions::default()).unwrap();
    for i in 0..short.len() {
        assert_eq!(a1.is_code(i), a2.is_code(i));
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_report_io_01() {
    let options = AnalysisOptions {
        report_path: Some("/hopefully/not/a/real/directory/report.txt".into()),
        ..AnalysisOptions::default()
    };
    match analyze(&[0x5b, 0x00], &options) {
        Err(Error::ReportIo(_)) => {}
        _ => panic!("expected a report I/O error"),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Check that analyzing a given hex string produces a given
/// classification, rendered as one `C` or `D` per byte position.
fn check(hex: &str, expected: &str) {
    // Parse hex string into bytes
    let bytes = hex.from_hex_string().unwrap();
    // Run the analysis
    let analysis = analyze(&bytes, &AnalysisOptions::default()).unwrap();
    // Render the verdict
    let verdict: String = (0..analysis.len())
        .map(|i| if analysis.is_code(i) { 'C' } else { 'D' })
        .collect();
    // Check against the expected classification
    assert_eq!(expected, verdict);
}
