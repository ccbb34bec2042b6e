// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fs;
use std::path::PathBuf;

use crate::analysis::{
    search_contract_starts, segment_code, tag_entered_segments, tag_invalid_mnemonics, tag_mnemonic,
    tag_push_data, validate_segment_jumpdests, validate_segment_jumps, validate_segment_mnemonics,
    Error,
};
use crate::report;
use crate::util::Mask;

// ============================================================================
// Options
// ============================================================================

/// Options controlling an analysis.
pub struct AnalysisOptions {
    /// Share of `JUMPDEST`s the entrance search must reach before it
    /// stops proposing further contract starting points.
    pub stop_threshold: f64,
    /// Destination for the textual classification report.  With no
    /// destination, no report is written.
    pub report_path: Option<PathBuf>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions { stop_threshold: 0.98, report_path: None }
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// The outcome of classifying a bytecode sequence.  This owns the
/// input bytes along with everything derived from them; nothing is
/// mutated once the analysis has been constructed.
pub struct Analysis {
    bytes: Vec<u8>,
    push_data: Mask,
    segments: Vec<usize>,
    contract_starts: Mask,
    mnemonic_check: Mask,
    jump_check: Mask,
    jumpdest_check: Mask,
    code: Mask,
}

impl Analysis {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The final verdict: a set position is code (an instruction or
    /// one of its operand bytes), a clear position is data.
    pub fn code(&self) -> &Mask {
        &self.code
    }

    /// Check whether a given position was classified as code.
    pub fn is_code(&self, index: usize) -> bool {
        self.code[index]
    }

    /// Positions holding inline push operand bytes.
    pub fn push_data(&self) -> &Mask {
        &self.push_data
    }

    /// The segment id assigned to every position.
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Offsets proposed as contract starting points.
    pub fn contract_starts(&self) -> &Mask {
        &self.contract_starts
    }

    /// Positions whose segment contains no invalid mnemonic.
    pub fn mnemonic_check(&self) -> &Mask {
        &self.mnemonic_check
    }

    /// Positions whose segment contains no out-of-range push/jump.
    pub fn jump_check(&self) -> &Mask {
        &self.jump_check
    }

    /// Positions whose segment contains no unreachable `JUMPDEST`.
    pub fn jumpdest_check(&self) -> &Mask {
        &self.jumpdest_check
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Classify every byte of a legacy contract as either code or data.
/// The classification is a pure function of the input bytes (and the
/// stop threshold): masks for push operands, invalid bytes and the
/// segment-relevant instructions are built first; the sequence is
/// then split into straight-line segments between `JUMPDEST`s and
/// terminators; finally three independent segment-level checks run
/// and their conjunction, restricted to segments actually opened by a
/// `JUMPDEST`, yields the verdict.
///
/// When a report path was configured, the textual report is written
/// before returning.
pub fn analyze(bytes: &[u8], options: &AnalysisOptions) -> Result<Analysis, Error> {
    let push_data = tag_push_data(bytes);
    let not_push = !&push_data;
    // Ignore findings within push operands.
    let invalid_mnemonics = &tag_invalid_mnemonics(bytes) & &not_push;
    let jumpdests = &tag_mnemonic(bytes, "JUMPDEST")? & &not_push;
    let jumps = &tag_mnemonic(bytes, "JUMP")? & &not_push;
    let stops = &tag_mnemonic(bytes, "STOP")? & &not_push;
    let returns = &tag_mnemonic(bytes, "RETURN")? & &not_push;
    let selfdestructs = &tag_mnemonic(bytes, "SELFDESTRUCT")? & &not_push;
    // Split the sequence into segments.  A `JUMPDEST` opens a block
    // at its own address; any terminator closes the block including
    // itself.
    let terminators = &(&jumps | &stops) | (&(&returns | &selfdestructs));
    let segments = segment_code(&jumpdests, &terminators);
    // Propose contract starting points.
    let contract_starts = search_contract_starts(bytes, &push_data, &jumpdests, options.stop_threshold);
    // Check the segments.
    let mnemonic_check = validate_segment_mnemonics(&segments, &invalid_mnemonics);
    let jump_check = validate_segment_jumps(bytes, &segments, &push_data, &jumps);
    let jumpdest_check = validate_segment_jumpdests(bytes, &segments, &push_data, &jumpdests, &contract_starts);
    // Segments never opened by a `JUMPDEST` are data, however clean.
    let entered = tag_entered_segments(&segments, &jumpdests);
    // Combine findings.
    let code = &(&mnemonic_check & &jump_check) & &(&jumpdest_check & &entered);
    //
    log::info!(
        "classified {} of {} byte(s) as code, {} contract entrance(s)",
        code.count(),
        bytes.len(),
        contract_starts.count()
    );
    let analysis = Analysis {
        bytes: bytes.to_vec(),
        push_data,
        segments,
        contract_starts,
        mnemonic_check,
        jump_check,
        jumpdest_check,
        code,
    };
    // Save results (if requested).
    if let Some(path) = &options.report_path {
        let mut file = fs::File::create(path)?;
        report::write_report(&mut file, &analysis)?;
    }
    //
    Ok(analysis)
}
