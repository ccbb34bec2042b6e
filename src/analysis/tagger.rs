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
use std::cmp;

use crate::bytecode::opcode::{self, Opcode, UnknownMnemonic};
use crate::util::Mask;

/// Tag every position whose byte decodes to a known instruction of
/// the legacy instruction set.
pub fn tag_valid_mnemonics(bytes: &[u8]) -> Mask {
    Mask::from_fn(bytes.len(), |i| Opcode::from_byte(bytes[i]) != Opcode::Unknown)
}

/// Tag every position whose byte decodes to no known instruction.
pub fn tag_invalid_mnemonics(bytes: &[u8]) -> Mask {
    !&tag_valid_mnemonics(bytes)
}

/// Tag every position holding a given byte.
pub fn tag_byte(bytes: &[u8], opcode: u8) -> Mask {
    Mask::from_fn(bytes.len(), |i| bytes[i] == opcode)
}

/// Tag every position holding the instruction with a given mnemonic.
/// This fails when the mnemonic does not exist.  Observe that the
/// resulting mask makes no judgement about push shadowing: a byte
/// inside a push operand which happens to equal the instruction is
/// still tagged, and must be masked out against [`tag_push_data`] by
/// the caller.
pub fn tag_mnemonic(bytes: &[u8], mnemonic: &str) -> Result<Mask, UnknownMnemonic> {
    let opcode = opcode::from_name(mnemonic)?;
    Ok(tag_byte(bytes, opcode))
}

/// Tag every position holding an inline push operand byte.  Scanning
/// proceeds left to right: a `PUSHk` instruction shadows the `k`
/// positions which follow it, and scanning resumes after the operand
/// block.  A push whose operand block is cut short by the end of the
/// sequence still shadows whatever operand bytes remain.
pub fn tag_push_data(bytes: &[u8]) -> Mask {
    let mut tags = Mask::new(bytes.len());
    let mut i = 0;
    //
    while i < bytes.len() {
        if let Opcode::Push(k) = Opcode::from_byte(bytes[i]) {
            let end = cmp::min(i + (k as usize), bytes.len() - 1);
            for j in (i + 1)..=end {
                tags.set(j, true);
            }
            // Skip over the operand block.
            i += k as usize;
        }
        i += 1;
    }
    //
    tags
}
