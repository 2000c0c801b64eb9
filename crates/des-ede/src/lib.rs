//! Three-key Triple-DES in EDE (Encrypt-Decrypt-Encrypt) composition.
//!
//! The composer owns three independently keyed [`Des`] engines and exposes
//! the same single-block contract. EDE is chosen over EEE so that equal keys
//! degrade to plain single DES, the standard backward-compatibility
//! property.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use des_core::{Block, Des, DesKey};

/// Triple-DES cipher over three exclusively owned DES engines.
///
/// Construction derives all three key schedules eagerly; afterwards the
/// composer is immutable and safe to share across threads. Each block
/// operation makes exactly three inner-engine calls in a fixed order and
/// carries no state between blocks.
#[derive(Clone, Copy, Debug)]
pub struct TripleDes {
    des1: Des,
    des2: Des,
    des3: Des,
}

impl TripleDes {
    /// Builds a composer from three independent keys.
    pub fn new<K: Into<DesKey>>(key1: K, key2: K, key3: K) -> Self {
        Self {
            des1: Des::new(key1),
            des2: Des::new(key2),
            des3: Des::new(key3),
        }
    }

    /// Encrypts one 64-bit block: encrypt under key 1, decrypt under key 2,
    /// encrypt under key 3.
    #[inline]
    pub fn encrypt(&self, block: Block) -> Block {
        self.des3.encrypt(self.des2.decrypt(self.des1.encrypt(block)))
    }

    /// Decrypts one 64-bit block, mirroring `encrypt` exactly: decrypt under
    /// key 3, encrypt under key 2, decrypt under key 1.
    #[inline]
    pub fn decrypt(&self, block: Block) -> Block {
        self.des1.decrypt(self.des2.encrypt(self.des3.decrypt(block)))
    }
}
