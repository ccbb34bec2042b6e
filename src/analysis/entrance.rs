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

use crate::analysis::push_values;
use crate::util::Mask;

/// Search for the offsets at which the constituent contracts of a
/// sequence begin.  Deployed legacy contracts are frequently a
/// concatenation (runtime code, constructor code, metadata), each
/// part addressing its own `JUMPDEST`s relative to its own base; no
/// single base can reconcile all pushed addresses at once.
///
/// Each round scores every candidate offset by the number of not yet
/// reached `JUMPDEST`s which some pushed value lands on when read
/// relative to that offset, and greedily keeps the best one (on a tie,
/// the lowest offset).  The search stops once the chosen offsets
/// together reach the given share of all `JUMPDEST`s, or a round
/// makes no progress at all.  The result marks each chosen offset;
/// with no `JUMPDEST`s to reach it is all-false.
pub fn search_contract_starts(bytes: &[u8], push_data: &Mask, jumpdests: &Mask, stop_threshold: f64) -> Mask {
    let mut starts = Mask::new(bytes.len());
    // Distinct pushed values small enough to be addresses.
    let values: HashSet<usize> = push_values(bytes, push_data)
        .into_iter()
        .filter_map(|v| usize::try_from(v).ok())
        .collect();
    let mut remaining: HashSet<usize> = jumpdests.ones().collect();
    let total = remaining.len();
    //
    if total == 0 {
        return starts;
    }
    let mut hits_total = 0;
    //
    while ((hits_total as f64) / (total as f64)) < stop_threshold && !remaining.is_empty() {
        // Score every candidate offset against the remaining
        // destinations; ties resolve to the lowest offset.
        let mut best = 0;
        let mut best_score = 0;
        for offset in 0..bytes.len() {
            let score = remaining.iter().filter(|&&j| j >= offset && values.contains(&(j - offset))).count();
            if score > best_score {
                best = offset;
                best_score = score;
            }
        }
        starts.set(best, true);
        hits_total += best_score;
        log::debug!(
            "entrance {:#x} reaches {} further jump destination(s), {} of {} total",
            best,
            best_score,
            hits_total,
            total
        );
        // A barren round cannot be improved upon by iterating.
        if best_score == 0 {
            break;
        }
        remaining.retain(|&j| !(j >= best && values.contains(&(j - best))));
    }
    //
    starts
}
