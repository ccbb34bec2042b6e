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
use std::io;
use std::io::Write;

use crate::analysis::Analysis;
use crate::bytecode::Opcode;

/// Width every report field is padded to.
const COLUMN_WIDTH: usize = 30;

/// Write the classification report for a given analysis.  The report
/// has one header row followed by one row per byte position.  Every
/// field is right-padded to a fixed width, so the columns line up for
/// a human reader:
///
/// - `Address`: the position itself.
/// - `Contract Address`: the position relative to the most recent
///   contract entrance, or `x` before the first one.
/// - `Instruction`: the mnemonic where the byte is code (and not a
///   push operand); otherwise the raw byte in hex.
/// - `Code/Data`: the verdict.
/// - `Segment`: the segment id.
/// - `Finding`: the first failed check for this segment, if any.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    write_row(out, ["Address", "Contract Address", "Instruction", "Code/Data", "Segment", "Finding"])?;
    // Offset relative to the current entrance (if one was seen).
    let mut offset = None;
    //
    for i in 0..analysis.len() {
        if analysis.contract_starts()[i] {
            offset = Some(0);
        }
        let byte = analysis.bytes()[i];
        let contract_address = match offset {
            Some(k) => format!("{k}"),
            None => "x".to_string(),
        };
        let instruction = if analysis.is_code(i) && !analysis.push_data()[i] {
            match Opcode::from_byte(byte).name() {
                Some(n) => n.to_string(),
                None => format!("{byte:#x}"),
            }
        } else {
            format!("{byte:#x}")
        };
        let verdict = if analysis.is_code(i) { "CODE" } else { "DATA" };
        let segment = format!("segment {}", analysis.segments()[i]);
        let finding = if !analysis.jumpdest_check()[i] {
            "JUMPDEST NEVER REACHED"
        } else if !analysis.mnemonic_check()[i] {
            "INVALID MNEMONIC OCCURS"
        } else if !analysis.jump_check()[i] {
            "JUMP OUT OF RANGE"
        } else {
            " "
        };
        write_row(out, [&format!("{i}"), &contract_address, &instruction, verdict, &segment, finding])?;
        // Advance the per-contract offset.
        if let Some(k) = offset.as_mut() {
            *k += 1;
        }
    }
    //
    Ok(())
}

/// Render the classification report as a string.
pub fn report_to_string(analysis: &Analysis) -> String {
    let mut buffer = Vec::new();
    // Writing into a buffer cannot fail.
    write_report(&mut buffer, analysis).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn write_row<W: Write>(out: &mut W, fields: [&str; 6]) -> io::Result<()> {
    let padded: Vec<String> = fields.iter().map(|f| format!("{f:<COLUMN_WIDTH$}")).collect();
    writeln!(out, "{}", padded.join(" "))
}
