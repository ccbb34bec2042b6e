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
use std::fmt;
use std::io;

use crate::bytecode::opcode::UnknownMnemonic;

mod analyzer;
mod entrance;
mod operands;
mod segment;
mod tagger;
mod validate;

pub use analyzer::*;
pub use entrance::*;
pub use operands::*;
pub use segment::*;
pub use tagger::*;
pub use validate::*;

// ============================================================================
// Errors
// ============================================================================

/// Errors which can arise when analyzing a bytecode sequence.  The
/// analysis itself never fails: these originate from its edges, namely
/// the opcode table and the report writer.
pub enum Error {
    /// A mnemonic was requested from the opcode table which does not
    /// exist in the legacy instruction set.
    UnknownMnemonic(String),
    /// The classification report could not be written.
    ReportIo(io::Error),
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownMnemonic(n) => write!(f, "unknown mnemonic ({n})"),
            Error::ReportIo(e) => write!(f, "cannot write report ({e})"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Just reuse debug formatting.
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<UnknownMnemonic> for Error {
    fn from(e: UnknownMnemonic) -> Error {
        Error::UnknownMnemonic(e.0)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::ReportIo(e)
    }
}
