use crate::tree::traits::{Hashable, Hasher, MerkleTree};
use crate::tree::Tree;

/// A [`Hasher`] backed by BLAKE3.
pub struct Blake3Hash {
    hasher: blake3::Hasher,
}

impl Blake3Hash {
    /// Creates an empty BLAKE3 hasher.
    pub fn new() -> Self {
        Blake3Hash {
            hasher: blake3::Hasher::new(),
        }
    }
}

impl Default for Blake3Hash {
    fn default() -> Self {
        Blake3Hash::new()
    }
}

impl Hasher for Blake3Hash {
    fn new(&self) -> Box<dyn Hasher> {
        Box::new(Self::new())
    }

    fn update(&mut self, value: &[u8]) {
        self.hasher.update(value);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let hash: [u8; 32] = self.hasher.finalize().into();
        Vec::from(hash)
    }
}

/// Constructor for a boxed [`Blake3Hash`], usable as a `fn` pointer.
pub fn new_blake3() -> Box<dyn Hasher> {
    Box::new(Blake3Hash::new())
}

/// Captures the root digest written by a [`MerkleTree`].
pub struct HashRoot {
    /// Creates the hashers used for every node below the root.
    pub new_hash: fn() -> Box<dyn Hasher>,
    /// The last digest written into this root.
    pub result: Vec<u8>,
}

impl HashRoot {
    /// Creates a root that hashes nodes with `new_hash`.
    pub fn new(new_hash: fn() -> Box<dyn Hasher>) -> Self {
        HashRoot {
            new_hash,
            result: vec![],
        }
    }
}

impl Hasher for HashRoot {
    fn new(&self) -> Box<dyn Hasher> {
        (self.new_hash)()
    }

    fn update(&mut self, value: &[u8]) {
        self.result = Vec::from(value);
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.result.clone()
    }
}

impl<T: Hashable> MerkleTree for Tree<T> {
    fn merkle_hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        // The payload gets its own digest so its bytes can never be confused
        // with the child digests that follow.
        let mut datum_digest = digest.new();
        self.root.datum.hash(&mut *datum_digest)?;

        let mut node_digest = digest.new();
        node_digest.update(&datum_digest.finalize());
        node_digest.update(&(self.children.len() as u64).to_be_bytes());
        for child in &self.children {
            child.merkle_hash(&mut *node_digest)?;
        }
        let hash = node_digest.finalize();
        digest.update(&hash);
        Ok(())
    }
}

impl<T: Hashable> Tree<T> {
    /// The BLAKE3 merkle digest of the payloads and the shape of the tree.
    ///
    /// Two trees share a fingerprint exactly when they hold equal payloads
    /// in the same positions; node identifiers do not contribute.
    pub fn fingerprint(&self) -> anyhow::Result<Vec<u8>> {
        let mut root = HashRoot::new(new_blake3);
        self.merkle_hash(&mut root)?;
        Ok(root.result)
    }
}
