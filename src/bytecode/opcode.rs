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

/// First push instruction (one operand byte).
pub const PUSH1: u8 = 0x60;
/// Last push instruction (thirty-two operand bytes).
pub const PUSH32: u8 = 0x7f;

// =====================================================================
// Opcode
// =====================================================================

/// The decoded identity of a single byte under the legacy EVM
/// instruction set.  Push instructions are singled out since their
/// operand width drives the shadowing of the bytes which follow them;
/// every other instruction is just its mnemonic.  A byte which does
/// not decode at all is `Unknown`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Opcode {
    /// A push instruction carrying `1..=32` inline operand bytes.
    Push(u8),
    /// Any other instruction of the legacy instruction set.
    Known(&'static str),
    /// A byte with no assigned instruction.
    Unknown,
}

impl Opcode {
    /// Decode a given byte.  This is total: every byte decodes to
    /// something, if only to `Unknown`.
    pub fn from_byte(opcode: u8) -> Opcode {
        match opcode {
            PUSH1..=PUSH32 => Opcode::Push(opcode - PUSH1 + 1),
            _ => match name(opcode) {
                Some(n) => Opcode::Known(n),
                None => Opcode::Unknown,
            },
        }
    }

    /// Determine whether this is a push instruction.
    pub fn is_push(&self) -> bool {
        matches!(self, Opcode::Push(_))
    }

    /// Determine the number of inline operand bytes following this
    /// instruction (zero for everything which is not a push).
    pub fn push_len(&self) -> usize {
        match self {
            Opcode::Push(k) => *k as usize,
            _ => 0,
        }
    }

    /// Determine the mnemonic for this instruction (`None` for an
    /// unknown byte).
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Opcode::Push(k) => Some(PUSH_NAMES[(k - 1) as usize]),
            Opcode::Known(n) => Some(n),
            Opcode::Unknown => None,
        }
    }
}

// =====================================================================
// Lookup
// =====================================================================

static PUSH_NAMES: [&str; 32] = [
    "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8", "PUSH9", "PUSH10",
    "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16", "PUSH17", "PUSH18", "PUSH19",
    "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24", "PUSH25", "PUSH26", "PUSH27", "PUSH28",
    "PUSH29", "PUSH30", "PUSH31", "PUSH32",
];

static DUP_NAMES: [&str; 16] = [
    "DUP1", "DUP2", "DUP3", "DUP4", "DUP5", "DUP6", "DUP7", "DUP8", "DUP9", "DUP10", "DUP11",
    "DUP12", "DUP13", "DUP14", "DUP15", "DUP16",
];

static SWAP_NAMES: [&str; 16] = [
    "SWAP1", "SWAP2", "SWAP3", "SWAP4", "SWAP5", "SWAP6", "SWAP7", "SWAP8", "SWAP9", "SWAP10",
    "SWAP11", "SWAP12", "SWAP13", "SWAP14", "SWAP15", "SWAP16",
];

static LOG_NAMES: [&str; 5] = ["LOG0", "LOG1", "LOG2", "LOG3", "LOG4"];

/// Determine the mnemonic assigned to a given byte, or `None` when
/// the byte carries no instruction at all.  This is total over all
/// 256 byte values.
pub fn name(opcode: u8) -> Option<&'static str> {
    let n = match opcode {
        // 0s: Stop and Arithmetic Operations
        0x00 => "STOP",
        0x01 => "ADD",
        0x02 => "MUL",
        0x03 => "SUB",
        0x04 => "DIV",
        0x05 => "SDIV",
        0x06 => "MOD",
        0x07 => "SMOD",
        0x08 => "ADDMOD",
        0x09 => "MULMOD",
        0x0a => "EXP",
        0x0b => "SIGNEXTEND",
        // 10s: Comparison & Bitwise Logic Operations
        0x10 => "LT",
        0x11 => "GT",
        0x12 => "SLT",
        0x13 => "SGT",
        0x14 => "EQ",
        0x15 => "ISZERO",
        0x16 => "AND",
        0x17 => "OR",
        0x18 => "XOR",
        0x19 => "NOT",
        0x1a => "BYTE",
        0x1b => "SHL",
        0x1c => "SHR",
        0x1d => "SAR",
        // 20s: Keccak256
        0x20 => "KECCAK256",
        // 30s: Environment Information
        0x30 => "ADDRESS",
        0x31 => "BALANCE",
        0x32 => "ORIGIN",
        0x33 => "CALLER",
        0x34 => "CALLVALUE",
        0x35 => "CALLDATALOAD",
        0x36 => "CALLDATASIZE",
        0x37 => "CALLDATACOPY",
        0x38 => "CODESIZE",
        0x39 => "CODECOPY",
        0x3a => "GASPRICE",
        0x3b => "EXTCODESIZE",
        0x3c => "EXTCODECOPY",
        0x3d => "RETURNDATASIZE",
        0x3e => "RETURNDATACOPY",
        0x3f => "EXTCODEHASH",
        // 40s: Block Information
        0x40 => "BLOCKHASH",
        0x41 => "COINBASE",
        0x42 => "TIMESTAMP",
        0x43 => "NUMBER",
        0x44 => "DIFFICULTY",
        0x45 => "GASLIMIT",
        0x46 => "CHAINID",
        0x47 => "SELFBALANCE",
        // 50s: Stack, Memory, Storage and Flow Operations
        0x50 => "POP",
        0x51 => "MLOAD",
        0x52 => "MSTORE",
        0x53 => "MSTORE8",
        0x54 => "SLOAD",
        0x55 => "SSTORE",
        0x56 => "JUMP",
        0x57 => "JUMPI",
        0x58 => "PC",
        0x59 => "MSIZE",
        0x5a => "GAS",
        0x5b => "JUMPDEST",
        // 60s & 70s: Push Operations
        PUSH1..=PUSH32 => PUSH_NAMES[(opcode - PUSH1) as usize],
        // 80s: Duplication Operations
        0x80..=0x8f => DUP_NAMES[(opcode - 0x80) as usize],
        // 90s: Exchange Operations
        0x90..=0x9f => SWAP_NAMES[(opcode - 0x90) as usize],
        // a0s: Logging Operations
        0xa0..=0xa4 => LOG_NAMES[(opcode - 0xa0) as usize],
        // f0s: System Operations
        0xf0 => "CREATE",
        0xf1 => "CALL",
        0xf2 => "CALLCODE",
        0xf3 => "RETURN",
        0xf4 => "DELEGATECALL",
        0xf5 => "CREATE2",
        0xfa => "STATICCALL",
        0xfd => "REVERT",
        0xfe => "INVALID",
        0xff => "SELFDESTRUCT",
        //
        _ => return None,
    };
    Some(n)
}

/// Determine the byte assigned to a given mnemonic.  Unlike byte
/// decoding this can fail, since a requested mnemonic may simply not
/// exist.
pub fn from_name(mnemonic: &str) -> Result<u8, UnknownMnemonic> {
    for opcode in 0..=u8::MAX {
        if name(opcode) == Some(mnemonic) {
            return Ok(opcode);
        }
    }
    Err(UnknownMnemonic(mnemonic.to_string()))
}

// =====================================================================
// Errors
// =====================================================================

/// An error which arises when a mnemonic unknown to the instruction
/// set is requested from the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown mnemonic ({})", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}
