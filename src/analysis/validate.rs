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
use std::collections::HashSet;

use ruint::aliases::U256;

use crate::analysis::{push_jump_targets, push_values};
use crate::util::Mask;

/// Mark every position belonging to a segment which contains no
/// invalid mnemonic.  A single undecodable byte poisons its whole
/// segment: straight-line execution entering the segment would
/// eventually trap on it.
pub fn validate_segment_mnemonics(segments: &[usize], invalid_mnemonics: &Mask) -> Mask {
    valid_segments(segments, invalid_mnemonics)
}

/// Mark every position belonging to a segment in which no push/jump
/// pair targets an address beyond the end of the sequence.  Only
/// pushes immediately followed by a `JUMP` are considered, since for
/// those the pushed value is known to be the jump target.
pub fn validate_segment_jumps(bytes: &[u8], segments: &[usize], push_data: &Mask, jumps: &Mask) -> Mask {
    let limit = U256::from(bytes.len());
    let mut hits = Mask::new(bytes.len());
    // Flag every jump whose target lies out of range.
    for (address, target) in push_jump_targets(bytes, push_data, jumps) {
        if target > limit {
            hits.set(address, true);
        }
    }
    //
    valid_segments(segments, &hits)
}

/// Mark every position belonging to a segment in which every
/// `JUMPDEST` is reachable from some contract entrance.  A declared
/// jump destination which no pushed address ever reaches is a strong
/// sign that the surrounding bytes only masquerade as code.
pub fn validate_segment_jumpdests(
    bytes: &[u8],
    segments: &[usize],
    push_data: &Mask,
    jumpdests: &Mask,
    entrances: &Mask,
) -> Mask {
    let reachable = tag_reachable_jumpdests(bytes, push_data, jumpdests, entrances);
    // Declared but unreached destinations are the violations.
    let hits = jumpdests ^ &reachable;
    //
    valid_segments(segments, &hits)
}

/// Tag every `JUMPDEST` which is reachable from one of the given
/// entrance offsets.  A destination is reachable when some pushed
/// value, read as an address relative to an entrance, lands on it.
/// A destination sitting exactly on an entrance is also reachable,
/// since execution enters there without any push at all.
pub fn tag_reachable_jumpdests(bytes: &[u8], push_data: &Mask, jumpdests: &Mask, entrances: &Mask) -> Mask {
    // Pushed values wider than the address space cannot land anywhere.
    let values: HashSet<usize> = push_values(bytes, push_data)
        .into_iter()
        .filter_map(|v| usize::try_from(v).ok())
        .collect();
    let mut reachable = Mask::new(bytes.len());
    //
    for e in entrances.ones() {
        if jumpdests[e] {
            reachable.set(e, true);
        }
        for j in jumpdests.ones() {
            if j >= e && values.contains(&(j - e)) {
                reachable.set(j, true);
            }
        }
    }
    //
    reachable
}

/// Mark every position belonging to a segment which was opened by a
/// start flag.  The pre-entry segment, and any segment formed after a
/// terminator without an intervening `JUMPDEST`, has no such flag and
/// is never marked.
pub fn tag_entered_segments(segments: &[usize], starts: &Mask) -> Mask {
    let entered = segments_with_hit(segments, starts);
    Mask::from_fn(segments.len(), |i| entered.contains(&segments[i]))
}

/// Mark every position whose segment contains no hit.  This is how a
/// single local violation propagates to its whole segment.
fn valid_segments(segments: &[usize], hits: &Mask) -> Mask {
    let poisoned = segments_with_hit(segments, hits);
    Mask::from_fn(segments.len(), |i| !poisoned.contains(&segments[i]))
}

/// Collect the distinct ids of all segments containing at least one
/// hit.
fn segments_with_hit(segments: &[usize], hits: &Mask) -> HashSet<usize> {
    assert_eq!(segments.len(), hits.len());
    hits.ones().map(|i| segments[i]).collect()
}
