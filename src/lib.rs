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

/// Functionality related to classifying the bytes of a legacy
/// (i.e. pre-EOF) contract as either _code_ or _data_.  This includes
/// the per-position taggers, the segmentation of a bytecode sequence
/// into straight-line blocks, the segment-level validity checks and
/// the search for contract entrance points.
pub mod analysis;
/// Functionality related to the legacy EVM instruction set, such as
/// resolving a byte to its mnemonic (and back again) and identifying
/// push instructions along with their operand widths.
pub mod bytecode;
/// Functionality for rendering the outcome of an analysis as a
/// human-readable, column-aligned report.
pub mod report;
/// Various utilities, including boolean position masks, big-endian
/// folding of operand bytes and hex / bit string decoding.
pub mod util;
