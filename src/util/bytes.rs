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

/// Fold a sequence of bytes in big-endian order into its unsigned
/// integer value.  The empty sequence folds to zero.  At most 32
/// bytes are accepted, since that is the widest operand a push
/// instruction can carry.
pub fn fold_be_bytes(bytes: &[u8]) -> U256 {
    assert!(bytes.len() <= 32);
    let mut value = U256::ZERO;
    //
    for b in bytes {
        value = (value << 8) | U256::from(*b);
    }
    //
    value
}

#[cfg(test)]
mod tests {
    use super::fold_be_bytes;
    use ruint::aliases::U256;

    #[test]
    fn test_fold_01() {
        assert_eq!(fold_be_bytes(&[]), U256::ZERO);
    }

    #[test]
    fn test_fold_02() {
        assert_eq!(fold_be_bytes(&[0x7f]), U256::from(0x7fu64));
    }

    #[test]
    fn test_fold_03() {
        assert_eq!(fold_be_bytes(&[0x01, 0x00]), U256::from(256u64));
    }

    #[test]
    fn test_fold_04() {
        assert_eq!(fold_be_bytes(&[0xde, 0xad, 0xbe, 0xef]), U256::from(0xdeadbeefu64));
    }

    #[test]
    fn test_fold_05() {
        assert_eq!(fold_be_bytes(&[0xff; 32]), U256::MAX);
    }

    #[test]
    fn test_fold_06() {
        // leading zeroes do not change the value
        assert_eq!(fold_be_bytes(&[0x00, 0x00, 0x42]), U256::from(0x42u64));
    }
}
