//! IPFS identifier helpers

use crate::errors::{ContentHashError, Result};
use cid::{Cid, Version};
use contenthash_multicodec::varint;
use multibase::Base;
use tracing::debug;

/// Take any IPFS identifier and convert it to a CID v1 encoded in base32.
///
/// `identifier` may be a CID v0 (`Qm...`) or a multibase CID v1. A v1 input is
/// re-encoded as lower case base32, so a base32 v1 input is returned unchanged.
pub fn cid_v0_to_v1_base32(identifier: &str) -> Result<String> {
    let cid = Cid::try_from(identifier)?;

    match cid.version() {
        Version::V0 => {
            debug!("({identifier}) is a CID v0, upgrading to v1");
            let multihash = bs58::decode(identifier).into_vec().map_err(|e| {
                ContentHashError::MalformedCidStructure(format!(
                    "({identifier}) is not base58: {e}"
                ))
            })?;

            let mut bytes = vec![0x01];
            bytes.extend(varint::encode(cid.codec()));
            bytes.extend(multihash);
            Ok(multibase::encode(Base::Base32Lower, bytes))
        }
        Version::V1 => Ok(multibase::encode(Base::Base32Lower, cid.to_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v0_to_v1() {
        assert_eq!(
            cid_v0_to_v1_base32("QmbRtS9dp2zqARv7v7ak2reJp3zE5NRkvEpHsc48Hjo9MF").unwrap(),
            "bafybeigcp5nfj7x4o77rwkmaiyjimyuhg3z7iehx4rdnumtgzx77hucjyy"
        );
    }

    #[test]
    fn test_v1_base32_is_unchanged() {
        let v1 = "bafybeigcp5nfj7x4o77rwkmaiyjimyuhg3z7iehx4rdnumtgzx77hucjyy";
        assert_eq!(cid_v0_to_v1_base32(v1).unwrap(), v1);
    }

    #[test]
    fn test_v1_base58_to_base32() {
        assert_eq!(
            cid_v0_to_v1_base32("zdj7WiX8oahfWUS39E3erYMuEUsSGBfnuqtnZDpYQSo7BN3XB").unwrap(),
            "bafybeigcp5nfj7x4o77rwkmaiyjimyuhg3z7iehx4rdnumtgzx77hucjyy"
        );
        assert_eq!(
            cid_v0_to_v1_base32("zb2rhjjWvCr3tFr7cmfuDM2im2maKhinrkVq1cNBGwi41mKYy").unwrap(),
            "bafkreigcp5nfj7x4o77rwkmaiyjimyuhg3z7iehx4rdnumtgzx77hucjyy"
        );
    }

    #[test]
    fn test_not_a_cid() {
        assert!(matches!(
            cid_v0_to_v1_base32("not a cid").unwrap_err(),
            ContentHashError::MalformedCidStructure(_)
        ));
    }
}
