use crate::tree::traits::{Hashable, Hasher};

macro_rules! hashable_int {
    ($($ty:ty),*) => {
        $(
            impl Hashable for $ty {
                fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
                    digest.update(&self.to_be_bytes());
                    Ok(())
                }
            }
        )*
    };
}

hashable_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Hashable for usize {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        (*self as u64).hash(digest)
    }
}

impl Hashable for isize {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        (*self as i64).hash(digest)
    }
}

impl Hashable for bool {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        digest.update(&[u8::from(*self)]);
        Ok(())
    }
}

impl Hashable for char {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        (*self as u32).hash(digest)
    }
}

impl Hashable for str {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        digest.update(self.as_bytes());
        Ok(())
    }
}

impl Hashable for String {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        self.as_str().hash(digest)
    }
}

impl Hashable for [u8] {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        digest.update(self);
        Ok(())
    }
}

impl Hashable for Vec<u8> {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        self.as_slice().hash(digest)
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash(&self, digest: &mut dyn Hasher) -> anyhow::Result<()> {
        (**self).hash(digest)
    }
}
