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
use crate::util::Mask;

/// Assign a segment id to every position, such that positions sharing
/// an id form one contiguous straight-line block.  A set start flag
/// opens a fresh segment _at_ its own position; a set end flag closes
/// the current segment _including_ its own position, so the next
/// position begins a fresh id even when it carries no flag at all.
/// When both flags are set at one position, the start flag wins and a
/// one-instruction segment is opened.  Positions before the first
/// start flag form segment `0`.
///
/// The ids produced are non-decreasing from left to right.  The
/// segmenter attaches no meaning to the flags themselves; for
/// bytecode, starts are the `JUMPDEST` positions and ends are the
/// terminator instructions (`JUMP`, `STOP`, `RETURN`,
/// `SELFDESTRUCT`).
pub fn segment_code(starts: &Mask, ends: &Mask) -> Vec<usize> {
    assert_eq!(starts.len(), ends.len());
    let mut segments = Vec::with_capacity(starts.len());
    let mut counter = 0;
    //
    for i in 0..starts.len() {
        if starts[i] {
            counter += 1;
            segments.push(counter);
        } else if ends[i] {
            segments.push(counter);
            counter += 1;
        } else {
            segments.push(counter);
        }
    }
    //
    segments
}
