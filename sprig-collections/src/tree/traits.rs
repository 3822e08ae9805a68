/// A streaming digest.
pub trait Hasher {
    /// Creates a fresh, empty hasher of the same algorithm.
    fn new(&self) -> Box<dyn Hasher>;

    /// Feeds bytes into the digest.
    fn update(&mut self, value: &[u8]);

    /// Produces the digest of everything fed so far.
    fn finalize(&mut self) -> Vec<u8>;
}

/// A payload that can feed itself into a [`Hasher`].
pub trait Hashable {
    /// Writes a canonical byte encoding of `self` into `digest`.
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()>;
}

/// A structure with a merkle digest over its contents and shape.
pub trait MerkleTree {
    /// Writes the root digest of `self` into `digest`.
    fn merkle_hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()>;
}
