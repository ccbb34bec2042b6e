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
use ruint::aliases::U256;

use crate::util::{fold_be_bytes, Mask};

/// Fold every maximal push-operand run into the big-endian integer it
/// places on the stack, in order of occurrence.  Each value is an
/// _address candidate_: push operands frequently carry the absolute
/// (per-contract) offset of a jump destination.
pub fn push_values(bytes: &[u8], push_data: &Mask) -> Vec<U256> {
    push_data.runs().into_iter().map(|r| fold_be_bytes(&bytes[r])).collect()
}

/// Determine every pushed value whose operand block is immediately
/// followed by a `JUMP`, pairing the folded value with the address of
/// that jump.  Such a value is not merely a candidate: it _is_ the
/// target of the jump at the returned address.
pub fn push_jump_targets(bytes: &[u8], push_data: &Mask, jumps: &Mask) -> Vec<(usize, U256)> {
    let mut targets = Vec::new();
    //
    for r in push_data.runs() {
        // The position following the operand block, if any.
        if r.end < bytes.len() && jumps[r.end] {
            targets.push((r.end, fold_be_bytes(&bytes[r])));
        }
    }
    //
    targets
}
